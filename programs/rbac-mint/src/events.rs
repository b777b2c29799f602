use anchor_lang::prelude::*;

use crate::{MintSource, Role};

#[event]
pub struct ProgramInitialized {
    pub owner: Pubkey,
    pub operator: Option<Pubkey>,
    pub deployer: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct RoleGranted {
    pub user: Pubkey,
    pub role: Role,
    /// True when an existing record was overwritten in place
    pub reassigned: bool,
    pub granted_by: Pubkey,
    pub activated_at: i64,
}

#[event]
pub struct RoleRevoked {
    pub user: Pubkey,
    pub role: Role,
    pub revoked_by: Pubkey,
    pub refunded_lamports: u64,
    pub timestamp: i64,
}

#[event]
pub struct TokensMinted {
    pub source: MintSource,
    pub minter: Pubkey,
    pub mint: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct MintAuthorityTransferred {
    pub mint: Pubkey,
    pub previous_authority: Pubkey,
    pub new_authority: Pubkey,
    pub transferred_by: Pubkey,
    pub timestamp: i64,
}
