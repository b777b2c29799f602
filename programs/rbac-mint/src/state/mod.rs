pub mod program_state;
pub use program_state::*;

pub mod user_role;
pub use user_role::*;
