use anchor_lang::prelude::*;

use crate::guard::{load_role_record, resolve_role_record};
use crate::Role;

#[derive(Accounts)]
pub struct HasRole<'info> {
    /// CHECK: Resolved against `user` in the handler
    pub user_role: UncheckedAccount<'info>,
}

impl<'info> HasRole<'info> {
    /// Fails with `AccountNotInitialized` when `user` holds no role at all,
    /// so a revoked user is distinguishable from one holding another role.
    pub fn has_role(&self, user: Pubkey, role: u8) -> Result<bool> {
        let role = Role::try_from(role)?;
        let record = resolve_role_record(&user, &self.user_role.key(), &crate::ID, || {
            load_role_record(&self.user_role, &crate::ID)
        })?;

        let has_role = record.role == role;
        msg!("Checking role {:?} for {}: {}", role, user, has_role);

        Ok(has_role)
    }
}
