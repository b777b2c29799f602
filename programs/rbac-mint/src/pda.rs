use anchor_lang::prelude::*;

use crate::constants::*;

pub fn user_role_address(user: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[USER_ROLE_SEED, user.as_ref()], program_id)
}

pub fn program_state_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PROGRAM_STATE_SEED], program_id)
}

pub fn mint_authority_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MINT_AUTHORITY_SEED], program_id)
}
