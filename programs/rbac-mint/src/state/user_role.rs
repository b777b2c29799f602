use anchor_lang::prelude::*;

use crate::Role;

/// Seeds: [b"user_role", user.as_ref()]
///
/// One record per user. Re-granting overwrites `role` in place.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct UserRole {
    pub user: Pubkey,
    pub role: Role,
    /// Unix timestamp of the latest grant
    pub activated_at: i64,
    pub bump: u8,
}

impl UserRole {
    pub const LEN: usize = 8   // discriminator
        + 32                    // user
        + Role::LEN             // role
        + 8                     // activated_at
        + 1;                    // bump

    /// Writes a grant into this record and reports whether an existing
    /// grant was overwritten.
    pub fn grant(&mut self, user: Pubkey, role: Role, bump: u8, now: i64) -> bool {
        let reassigned = self.is_assigned();
        self.user = user;
        self.role = role;
        self.activated_at = now;
        self.bump = bump;
        reassigned
    }

    /// A freshly allocated record is all zeroes, so its user is the default key.
    pub fn is_assigned(&self) -> bool {
        self.user != Pubkey::default()
    }
}
