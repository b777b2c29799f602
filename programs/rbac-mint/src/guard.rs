use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::RbacError;
use crate::pda::user_role_address;
use crate::{Role, UserRole};

/// Reads a role record. Unallocated or foreign-owned accounts read as absent.
pub fn load_role_record(info: &AccountInfo, program_id: &Pubkey) -> Result<Option<UserRole>> {
    if info.owner != program_id || info.data_is_empty() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    UserRole::try_deserialize(&mut &data[..]).map(Some)
}

/// Checks that `provided` is the record derived from `subject` and that it
/// exists. `load` only runs once the address matches.
pub fn resolve_role_record<F>(
    subject: &Pubkey,
    provided: &Pubkey,
    program_id: &Pubkey,
    load: F,
) -> Result<UserRole>
where
    F: FnOnce() -> Result<Option<UserRole>>,
{
    let (expected, _) = user_role_address(subject, program_id);
    require_keys_eq!(*provided, expected, RbacError::AddressMismatch);

    load()?.ok_or_else(|| error!(RbacError::AccountNotInitialized))
}

/// Ordered role check: address, existence, subject, kind.
pub fn require_role_with<F>(
    caller: &Pubkey,
    provided: &Pubkey,
    required: Role,
    program_id: &Pubkey,
    load: F,
) -> Result<UserRole>
where
    F: FnOnce() -> Result<Option<UserRole>>,
{
    let record = resolve_role_record(caller, provided, program_id, load)?;
    require_keys_eq!(record.user, *caller, RbacError::Unauthorized);
    require!(record.role == required, RbacError::Unauthorized);
    Ok(record)
}

/// `require_role_with` against a live account owned by this program.
pub fn require_role(caller: &Pubkey, role_account: &AccountInfo, required: Role) -> Result<UserRole> {
    require_role_with(caller, role_account.key, required, &crate::ID, || {
        load_role_record(role_account, &crate::ID)
    })
}

/// Upgrade authority recorded in an upgradeable loader ProgramData account.
/// `None` for malformed data or a program made immutable.
pub fn upgrade_authority(program_data: &[u8]) -> Option<Pubkey> {
    if program_data.len() < PROGRAM_DATA_MIN_LEN {
        return None;
    }
    let tag = u32::from_le_bytes(program_data[..PROGRAM_DATA_TAG_SIZE].try_into().ok()?);
    if tag != PROGRAM_DATA_TAG || program_data[PROGRAM_DATA_AUTHORITY_OPTION_OFFSET] != 1 {
        return None;
    }
    Pubkey::try_from(&program_data[PROGRAM_DATA_AUTHORITY_OFFSET..PROGRAM_DATA_MIN_LEN]).ok()
}

pub fn require_deployer(program_data: &[u8], caller: &Pubkey) -> Result<()> {
    match upgrade_authority(program_data) {
        Some(authority) if authority == *caller => Ok(()),
        _ => Err(RbacError::UnauthorizedDeployer.into()),
    }
}

pub fn require_valid_address(address: &Pubkey) -> Result<()> {
    require_keys_neq!(*address, Pubkey::default(), RbacError::InvalidAddress);
    Ok(())
}
