use anchor_lang::prelude::*;

use crate::constants::{
    ANGEL_INVESTOR_CAP, DEFAULT_ANGEL_CLIFF, DEFAULT_ANGEL_VESTING, DEFAULT_PRIVATE_CLIFF,
    DEFAULT_PRIVATE_VESTING, PRIVATE_SALE_CAP, PUBLIC_SALE_CAP,
};
use crate::error::VestingError;

/// Distribution category. Fixed set; not user-extensible.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Category {
    AngelInvestor,
    PrivateSale,
    PublicSale,
}

impl Category {
    pub const COUNT: usize = 3;

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Per-category vesting schedule and cap accounting.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schedule {
    /// Span after the grant timestamp with zero unlock (seconds).
    pub cliff_duration: i64,
    /// Span after the cliff over which the amount unlocks linearly (seconds).
    pub vesting_duration: i64,
    /// Max cumulative amount ever grantable in this category (base units).
    pub cap: u64,
    /// Cumulative amount granted across all beneficiaries (base units).
    pub total_granted: u64,
}

impl Schedule {
    pub const SIZE: usize =
        8 + // cliff_duration
        8 + // vesting_duration
        8 + // cap
        8;  // total_granted

    /// Reserve `amount` against the cap, advancing `total_granted`.
    /// Leaves the schedule untouched on failure.
    pub fn reserve(&mut self, amount: u64) -> core::result::Result<(), VestingError> {
        let new_total = self
            .total_granted
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        if new_total > self.cap {
            return Err(VestingError::CapExceeded);
        }
        self.total_granted = new_total;
        Ok(())
    }
}

/// Singleton registry PDA holding one schedule per category.
///
/// Looked up live at every unlock computation: mutating a schedule
/// changes the trajectory of grants already made in that category.
#[account]
pub struct ScheduleRegistry {
    pub schedules: [Schedule; Category::COUNT],
}

impl ScheduleRegistry {
    pub const SIZE: usize = Category::COUNT * Schedule::SIZE;

    /// Default registry installed at initialization. Public sale is a
    /// zero-cliff, zero-duration schedule: grants unlock in full
    /// immediately through the same formula as the other categories.
    pub fn defaults() -> [Schedule; Category::COUNT] {
        [
            Schedule {
                cliff_duration: DEFAULT_ANGEL_CLIFF,
                vesting_duration: DEFAULT_ANGEL_VESTING,
                cap: ANGEL_INVESTOR_CAP,
                total_granted: 0,
            },
            Schedule {
                cliff_duration: DEFAULT_PRIVATE_CLIFF,
                vesting_duration: DEFAULT_PRIVATE_VESTING,
                cap: PRIVATE_SALE_CAP,
                total_granted: 0,
            },
            Schedule {
                cliff_duration: 0,
                vesting_duration: 0,
                cap: PUBLIC_SALE_CAP,
                total_granted: 0,
            },
        ]
    }

    pub fn schedule(&self, category: Category) -> &Schedule {
        &self.schedules[category.index()]
    }

    pub fn schedule_mut(&mut self, category: Category) -> &mut Schedule {
        &mut self.schedules[category.index()]
    }
}
