/// PDA seeds
pub const USER_ROLE_SEED: &[u8] = b"user_role";
pub const PROGRAM_STATE_SEED: &[u8] = b"program_state";
pub const MINT_AUTHORITY_SEED: &[u8] = b"mint_authority";

pub const VERSION: &str = "1.0.0";

/// Upgradeable loader ProgramData layout (bincode):
/// tag (u32) | slot (u64) | Option<Pubkey> upgrade authority
pub const PROGRAM_DATA_TAG: u32 = 3;
pub const PROGRAM_DATA_TAG_SIZE: usize = 4;
pub const PROGRAM_DATA_AUTHORITY_OPTION_OFFSET: usize = PROGRAM_DATA_TAG_SIZE + 8;
pub const PROGRAM_DATA_AUTHORITY_OFFSET: usize = PROGRAM_DATA_AUTHORITY_OPTION_OFFSET + 1;
pub const PROGRAM_DATA_MIN_LEN: usize = PROGRAM_DATA_AUTHORITY_OFFSET + 32;
