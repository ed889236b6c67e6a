use anchor_lang::prelude::*;

/// Singleton program config PDA.
#[account]
pub struct Config {
    /// Vested token mint (mint authority is this PDA).
    pub mint: Pubkey,
    /// Admin authority.
    pub admin: Pubkey,
}

impl Config {
    pub const SIZE: usize =
        32 + // mint
        32;  // admin
}
