use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_error::ProgramError;
use anchor_lang::system_program;

use crate::events::RoleRevoked;
use crate::guard::{load_role_record, require_role, resolve_role_record};
use crate::Role;

#[derive(Accounts)]
pub struct RemoveRole<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: Validated by `guard::require_role`
    pub owner_role: UncheckedAccount<'info>,

    /// CHECK: Resolved against `user` in the handler, then closed
    #[account(mut)]
    pub user_role: UncheckedAccount<'info>,
}

impl<'info> RemoveRole<'info> {
    /// Closes `user`'s role record and refunds its rent to the owner.
    pub fn remove_role(&mut self, user: Pubkey) -> Result<()> {
        require_role(&self.owner.key(), &self.owner_role, Role::Owner)?;
        let record = resolve_role_record(&user, &self.user_role.key(), &crate::ID, || {
            load_role_record(&self.user_role, &crate::ID)
        })?;

        let refunded = close_account(&self.user_role, &self.owner)?;

        msg!(
            "Removed role {:?} for {}, refunded {} lamports",
            record.role,
            user,
            refunded
        );

        emit!(RoleRevoked {
            user,
            role: record.role,
            revoked_by: self.owner.key(),
            refunded_lamports: refunded,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}

/// Moves all lamports to `destination` and hands the account back to the
/// system program with no data.
pub fn close_account<'info>(
    account: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
) -> Result<u64> {
    let refund = account.lamports();
    let credited = destination
        .lamports()
        .checked_add(refund)
        .ok_or(ProgramError::ArithmeticOverflow)?;

    **destination.try_borrow_mut_lamports()? = credited;
    **account.try_borrow_mut_lamports()? = 0;

    account.assign(&system_program::ID);
    account.realloc(0, false)?;

    Ok(refund)
}
