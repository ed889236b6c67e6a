use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{Category, Config, ScheduleRegistry};

pub fn set_schedule(
    ctx: Context<SetSchedule>,
    category: Category,
    cliff_duration: i64,
    vesting_duration: i64,
) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.admin.key(),
        ctx.accounts.config.admin,
        VestingError::NotAuthorized
    );
    // Public sale stays a zero-cliff, zero-duration schedule.
    require!(
        category != Category::PublicSale,
        VestingError::ScheduleImmutable
    );
    require!(cliff_duration >= 0, VestingError::InvalidDuration);
    require!(vesting_duration >= 0, VestingError::InvalidDuration);

    // Replaced in place: every later unlock computation reads the new
    // durations, including for grants made under the old schedule.
    let sched = ctx.accounts.schedules.schedule_mut(category);
    sched.cliff_duration = cliff_duration;
    sched.vesting_duration = vesting_duration;

    emit!(ScheduleChanged {
        category,
        cliff_duration,
        vesting_duration,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetSchedule<'info> {
    #[account(seeds = [b"config"], bump)]
    pub config: Account<'info, Config>,

    #[account(mut, seeds = [b"schedules"], bump)]
    pub schedules: Account<'info, ScheduleRegistry>,

    pub admin: Signer<'info>,
}

#[event]
pub struct ScheduleChanged {
    pub category: Category,
    pub cliff_duration: i64,
    pub vesting_duration: i64,
}
