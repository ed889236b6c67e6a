use anchor_lang::prelude::*;

/// Custom error codes for the vesting token program.
#[error_code]
pub enum VestingError {
    #[msg("Caller lacks the required role")]
    NotAuthorized,

    #[msg("Grant would exceed the category allocation cap")]
    CapExceeded,

    #[msg("Insufficient spendable balance")]
    InsufficientBalance,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Invalid duration (must be >= 0)")]
    InvalidDuration,

    #[msg("Public sale schedule is fixed to immediate unlock")]
    ScheduleImmutable,

    #[msg("Role already granted to member")]
    RoleAlreadyGranted,

    #[msg("Role not granted to member")]
    RoleNotGranted,

    #[msg("Role member list is full")]
    RoleListFull,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Math overflow")]
    MathOverflow,
}
