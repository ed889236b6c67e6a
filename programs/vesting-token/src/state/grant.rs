use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::Category;

/// Per-(beneficiary, category) grant record PDA. Created on the first
/// grant to the pair and never deleted.
#[account]
pub struct GrantState {
    pub beneficiary: Pubkey,
    pub category: Category,
    /// Cumulative amount ever granted (base units).
    pub amount_granted: u64,
    /// Reference point for the unlock computation (Unix seconds).
    pub grant_ts: i64,
    /// Cumulative amount moved to the spendable balance (base units).
    /// Monotonically non-decreasing; never exceeds `amount_granted`.
    pub amount_claimed: u64,
}

impl GrantState {
    pub const SIZE: usize =
        32 + // beneficiary
        1 +  // category
        8 +  // amount_granted
        8 +  // grant_ts
        8;   // amount_claimed

    /// Record a grant: amounts accumulate, and the reference timestamp
    /// is replaced for the whole position, restarting its schedule.
    pub fn record(&mut self, amount: u64, now: i64) -> core::result::Result<(), VestingError> {
        self.amount_granted = self
            .amount_granted
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        self.grant_ts = now;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regrant_accumulates_and_restarts_schedule() {
        let mut g = GrantState {
            beneficiary: Pubkey::new_unique(),
            category: Category::PrivateSale,
            amount_granted: 0,
            grant_ts: 0,
            amount_claimed: 0,
        };
        g.record(100, 1_000).unwrap();
        assert_eq!(g.amount_granted, 100);
        assert_eq!(g.grant_ts, 1_000);

        g.amount_claimed = 40;
        g.record(50, 2_000).unwrap();
        assert_eq!(g.amount_granted, 150);
        assert_eq!(g.grant_ts, 2_000);
        // Claim accounting survives a re-grant.
        assert_eq!(g.amount_claimed, 40);
    }

    #[test]
    fn record_overflow_is_math_error() {
        let mut g = GrantState {
            beneficiary: Pubkey::new_unique(),
            category: Category::AngelInvestor,
            amount_granted: u64::MAX,
            grant_ts: 5,
            amount_claimed: 0,
        };
        let err = g.record(1, 10).unwrap_err();
        assert!(matches!(err, VestingError::MathOverflow));
        assert_eq!(g.grant_ts, 5);
    }
}
