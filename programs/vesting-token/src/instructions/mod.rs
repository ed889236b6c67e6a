pub mod initialize;
pub mod set_schedule;
pub mod grant_tokens;
pub mod claim;
pub mod claim_and_transfer;
pub mod burn_tokens;
pub mod grant_role;
pub mod revoke_role;
pub mod emit_claim_quote;

pub use initialize::*;
pub use set_schedule::*;
pub use grant_tokens::*;
pub use claim::*;
pub use claim_and_transfer::*;
pub use burn_tokens::*;
pub use grant_role::*;
pub use revoke_role::*;
pub use emit_claim_quote::*;
