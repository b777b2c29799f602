pub mod initialize;
pub use initialize::*;

pub mod add_role;
pub use add_role::*;

pub mod remove_role;
pub use remove_role::*;

pub mod has_role;
pub use has_role::*;

pub mod mint;
pub use mint::*;

pub mod transfer_mint_authority;
pub use transfer_mint_authority::*;
