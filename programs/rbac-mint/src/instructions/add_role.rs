use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::RoleGranted;
use crate::guard::{require_role, require_valid_address};
use crate::state::*;
use crate::Role;

#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct AddRole<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: Validated by `guard::require_role`
    pub owner_role: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = owner,
        space = UserRole::LEN,
        seeds = [USER_ROLE_SEED, user.as_ref()],
        bump,
    )]
    pub user_role: Account<'info, UserRole>,

    pub system_program: Program<'info, System>,
}

impl<'info> AddRole<'info> {
    /// Grants `role` to `user`, overwriting any role the user already holds.
    pub fn add_role(&mut self, user: Pubkey, role: u8, bumps: AddRoleBumps) -> Result<()> {
        require_role(&self.owner.key(), &self.owner_role, Role::Owner)?;
        let role = Role::try_from(role)?;
        require_valid_address(&user)?;

        let previous = self.user_role.is_assigned().then_some(self.user_role.role);
        let now = Clock::get()?.unix_timestamp;
        let reassigned = self.user_role.grant(user, role, bumps.user_role, now);

        match previous {
            Some(previous) => msg!("Reassigned {} from {:?} to {:?}", user, previous, role),
            None => msg!("Granted {:?} to {}", role, user),
        }

        emit!(RoleGranted {
            user,
            role,
            reassigned,
            granted_by: self.owner.key(),
            activated_at: now,
        });

        Ok(())
    }
}
