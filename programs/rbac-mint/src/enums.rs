use anchor_lang::prelude::*;

use crate::error::RbacError;

/// Role kinds stored in a `UserRole` record.
/// Discriminants are part of the on-ledger layout: append only.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    Owner,
    AuthorizedContract,
    Operator,
}

impl Role {
    pub const LEN: usize = 1;

    pub fn discriminant(&self) -> u8 {
        match self {
            Role::Owner => 0,
            Role::AuthorizedContract => 1,
            Role::Operator => 2,
        }
    }
}

impl TryFrom<u8> for Role {
    type Error = anchor_lang::error::Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Role::Owner),
            1 => Ok(Role::AuthorizedContract),
            2 => Ok(Role::Operator),
            _ => Err(RbacError::InvalidRole.into()),
        }
    }
}

/// Audit label for the two delegated minting entry points.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum MintSource {
    Operator,
    AuthorizedContract,
}

impl MintSource {
    /// Role the caller must hold to mint through this entry point.
    pub fn required_role(&self) -> Role {
        match self {
            MintSource::Operator => Role::Operator,
            MintSource::AuthorizedContract => Role::AuthorizedContract,
        }
    }
}
