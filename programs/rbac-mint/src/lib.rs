pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod guard;
pub mod instructions;
pub mod pda;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::*;
pub use enums::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("9ftLECMyJfEk27kjxyrs3cPh8h6EtKET7gpj8v2RqN1e");

/// Returns the program version string
pub fn get_version() -> String {
    VERSION.to_string()
}


#[program]
pub mod rbac_mint {
    use super::*;

    /// Seeds the first Owner. Callable once, by the upgrade authority only.
    pub fn initialize(ctx: Context<Initialize>, owner_address: Pubkey) -> Result<()> {
        ctx.accounts.initialize(owner_address, ctx.bumps)
    }

    /// Seeds the first Owner and Operator.
    pub fn initialize_with_operator(
        ctx: Context<InitializeWithOperator>,
        owner_address: Pubkey,
        operator_address: Pubkey,
    ) -> Result<()> {
        ctx.accounts
            .initialize_with_operator(owner_address, operator_address, ctx.bumps)
    }

    /// `role` is the `Role` discriminant byte.
    pub fn add_role(ctx: Context<AddRole>, user: Pubkey, role: u8) -> Result<()> {
        ctx.accounts.add_role(user, role, ctx.bumps)
    }

    pub fn remove_role(ctx: Context<RemoveRole>, user: Pubkey) -> Result<()> {
        ctx.accounts.remove_role(user)
    }

    pub fn has_role(ctx: Context<HasRole>, user: Pubkey, role: u8) -> Result<bool> {
        ctx.accounts.has_role(user, role)
    }

    pub fn mint_by_operator(ctx: Context<DelegatedMint>, amount: u64) -> Result<()> {
        ctx.accounts
            .mint_tokens(amount, MintSource::Operator, ctx.bumps.mint_authority)
    }

    pub fn mint_by_contract(ctx: Context<DelegatedMint>, amount: u64) -> Result<()> {
        ctx.accounts.mint_tokens(
            amount,
            MintSource::AuthorizedContract,
            ctx.bumps.mint_authority,
        )
    }

    pub fn transfer_minting_authority_to_program(
        ctx: Context<TransferMintAuthority>,
    ) -> Result<()> {
        ctx.accounts.transfer_mint_authority()
    }
}
