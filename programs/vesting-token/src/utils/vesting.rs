//! Linear unlock math over (schedule, grant) pairs.
//!
//! All amounts are integer base units; intermediates widen to u128 and
//! division truncates toward zero. The fractional remainder is never
//! unlocked early — the jump to the full granted amount at vesting end
//! absorbs it, so cumulative claims equal `amount_granted` exactly once
//! the schedule has run out.

use crate::error::VestingError;
use crate::state::Schedule;

/// Cumulative amount eligible for claim at `now`.
///
/// ```text
/// cliff_end = grant_ts + cliff_duration
/// vest_end  = cliff_end + vesting_duration
/// now <  cliff_end  ->  0
/// now >= vest_end   ->  amount_granted
/// else              ->  amount_granted * (now - cliff_end) / vesting_duration
/// ```
pub fn unlocked_amount(
    schedule: &Schedule,
    grant_ts: i64,
    amount_granted: u64,
    now: i64,
) -> Result<u64, VestingError> {
    let cliff_end = grant_ts
        .checked_add(schedule.cliff_duration)
        .ok_or(VestingError::MathOverflow)?;
    let vest_end = cliff_end
        .checked_add(schedule.vesting_duration)
        .ok_or(VestingError::MathOverflow)?;

    if now < cliff_end {
        return Ok(0);
    }
    if now >= vest_end {
        return Ok(amount_granted);
    }

    // Here cliff_end <= now < vest_end, so vesting_duration > 0.
    let elapsed = (now - cliff_end) as u128;
    let unlocked = (amount_granted as u128)
        .checked_mul(elapsed)
        .ok_or(VestingError::MathOverflow)?
        / (schedule.vesting_duration as u128);
    u64::try_from(unlocked).map_err(|_| VestingError::MathOverflow)
}

/// Amount still held by the schedule at `now`.
pub fn locked_amount(
    schedule: &Schedule,
    grant_ts: i64,
    amount_granted: u64,
    now: i64,
) -> Result<u64, VestingError> {
    let unlocked = unlocked_amount(schedule, grant_ts, amount_granted, now)?;
    amount_granted
        .checked_sub(unlocked)
        .ok_or(VestingError::MathOverflow)
}

/// Unlocked amount not yet moved to the spendable balance.
///
/// Clamped to zero: a schedule mutated after claims occurred can leave
/// `unlocked < amount_claimed`, which must not underflow.
pub fn pending_to_claim(unlocked: u64, amount_claimed: u64) -> u64 {
    unlocked.saturating_sub(amount_claimed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BASE_UNITS_PER_TOKEN;

    fn schedule(cliff: i64, vesting: i64) -> Schedule {
        Schedule {
            cliff_duration: cliff,
            vesting_duration: vesting,
            cap: u64::MAX,
            total_granted: 0,
        }
    }

    #[test]
    fn zero_before_and_at_cliff_end() {
        // 100 tokens granted at t=0, cliff 15s, vesting 86400s.
        let s = schedule(15, 86_400);
        let granted = 100 * BASE_UNITS_PER_TOKEN;
        assert_eq!(unlocked_amount(&s, 0, granted, 0).unwrap(), 0);
        assert_eq!(unlocked_amount(&s, 0, granted, 14).unwrap(), 0);
        // Elapsed time past the cliff is zero exactly at its end.
        assert_eq!(unlocked_amount(&s, 0, granted, 15).unwrap(), 0);
    }

    #[test]
    fn partial_unlock_truncates_toward_zero() {
        // One hour into an 86400s vesting span:
        // floor(100e9 * 3600 / 86400) = 4_166_666_666 base units.
        let s = schedule(15, 86_400);
        let granted = 100 * BASE_UNITS_PER_TOKEN;
        assert_eq!(
            unlocked_amount(&s, 0, granted, 15 + 3_600).unwrap(),
            4_166_666_666
        );
        // One second later, strictly more is unlocked.
        assert_eq!(
            unlocked_amount(&s, 0, granted, 15 + 3_601).unwrap(),
            4_167_824_074
        );
    }

    #[test]
    fn full_unlock_at_vest_end_exactly() {
        let s = schedule(15, 86_400);
        let granted = 100 * BASE_UNITS_PER_TOKEN;
        // One second before vest end the truncated value is short of full.
        let near = unlocked_amount(&s, 0, granted, 15 + 86_399).unwrap();
        assert!(near < granted);
        // The jump at vest end absorbs the truncation residue.
        assert_eq!(unlocked_amount(&s, 0, granted, 15 + 86_400).unwrap(), granted);
        assert_eq!(unlocked_amount(&s, 0, granted, i64::MAX / 2).unwrap(), granted);
    }

    #[test]
    fn unlock_is_monotonic_over_time() {
        let s = schedule(100, 10_000);
        let granted = 999_999_999_999;
        let mut last = 0;
        for now in (0..=10_200).step_by(97) {
            let u = unlocked_amount(&s, 0, granted, now).unwrap();
            assert!(u >= last);
            last = u;
        }
    }

    #[test]
    fn amount_indivisible_by_duration_loses_nothing_at_end() {
        // 7 base units over 3 seconds: floor steps 0,2,4 then full 7.
        let s = schedule(0, 3);
        assert_eq!(unlocked_amount(&s, 0, 7, 0).unwrap(), 0);
        assert_eq!(unlocked_amount(&s, 0, 7, 1).unwrap(), 2);
        assert_eq!(unlocked_amount(&s, 0, 7, 2).unwrap(), 4);
        assert_eq!(unlocked_amount(&s, 0, 7, 3).unwrap(), 7);
    }

    #[test]
    fn zero_schedule_unlocks_in_full_immediately() {
        // Public sale: zero cliff, zero duration, same formula.
        let s = schedule(0, 0);
        let granted = 100 * BASE_UNITS_PER_TOKEN;
        assert_eq!(unlocked_amount(&s, 1_000, granted, 1_000).unwrap(), granted);
        assert_eq!(locked_amount(&s, 1_000, granted, 1_000).unwrap(), 0);
    }

    #[test]
    fn locked_is_complement_of_unlocked() {
        let s = schedule(15, 86_400);
        let granted = 100 * BASE_UNITS_PER_TOKEN;
        let now = 15 + 3_600;
        let unlocked = unlocked_amount(&s, 0, granted, now).unwrap();
        let locked = locked_amount(&s, 0, granted, now).unwrap();
        assert_eq!(unlocked + locked, granted);
    }

    #[test]
    fn pending_subtracts_claimed() {
        assert_eq!(pending_to_claim(100, 40), 60);
        assert_eq!(pending_to_claim(100, 100), 0);
    }

    #[test]
    fn pending_clamps_when_claimed_exceeds_unlocked() {
        // A schedule lengthened after claims can shrink the unlocked
        // amount below what was already paid out.
        assert_eq!(pending_to_claim(30, 100), 0);
    }

    #[test]
    fn schedule_mutation_changes_existing_grant_trajectory() {
        // Registry is consulted live: the same grant under a longer
        // schedule reports a smaller unlocked amount.
        let granted = 100 * BASE_UNITS_PER_TOKEN;
        let before = unlocked_amount(&schedule(15, 86_400), 0, granted, 15 + 3_600).unwrap();
        let after = unlocked_amount(&schedule(15, 172_800), 0, granted, 15 + 3_600).unwrap();
        assert!(after < before);
    }

    #[test]
    fn large_amounts_do_not_overflow_intermediates() {
        // u64::MAX granted over a year, sampled mid-way.
        let s = schedule(0, 31_536_000);
        let u = unlocked_amount(&s, 0, u64::MAX, 15_768_000).unwrap();
        assert_eq!(u, u64::MAX / 2);
    }

    #[test]
    fn timestamp_overflow_is_math_error() {
        let s = schedule(i64::MAX, 1);
        let err = unlocked_amount(&s, 1, 100, 0).unwrap_err();
        assert!(matches!(err, VestingError::MathOverflow));
    }
}
