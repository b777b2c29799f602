use anchor_lang::prelude::*;

/// Seeds: [b"program_state"]
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ProgramState {
    pub initialized: bool,
    pub bump: u8,
}

impl ProgramState {
    pub const LEN: usize = 8 // discriminator
        + 1                  // initialized
        + 1;                 // bump

    /// Terminal transition; callers check `initialized` first.
    pub fn mark_initialized(&mut self, bump: u8) {
        self.initialized = true;
        self.bump = bump;
    }
}
