use anchor_lang::prelude::*;

#[error_code]
pub enum RbacError {
    #[msg("Only the program upgrade authority can initialize")]
    UnauthorizedDeployer,

    #[msg("Program already initialized")]
    AlreadyInitialized,

    #[msg("Role account not initialized for this user")]
    AccountNotInitialized,

    #[msg("Unauthorized: caller lacks required role")]
    Unauthorized,

    #[msg("Role account is not derived from the caller's identity")]
    AddressMismatch,

    #[msg("Unknown role kind")]
    InvalidRole,

    #[msg("Invalid address: cannot be the zero address")]
    InvalidAddress,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,
}
