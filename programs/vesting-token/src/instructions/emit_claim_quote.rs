use anchor_lang::prelude::*;

use crate::state::{Category, GrantState, ScheduleRegistry};
use crate::utils::vesting;

/// Pure read: emits the granted/unlocked/locked/pending amounts for a
/// (beneficiary, category) grant at the current time. No access
/// restriction.
pub fn emit_claim_quote(
    ctx: Context<EmitClaimQuote>,
    beneficiary: Pubkey,
    category: Category,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let sched = ctx.accounts.schedules.schedule(category);
    let grant = &ctx.accounts.grant;

    let unlocked = vesting::unlocked_amount(sched, grant.grant_ts, grant.amount_granted, now)?;
    let locked = vesting::locked_amount(sched, grant.grant_ts, grant.amount_granted, now)?;
    let pending = vesting::pending_to_claim(unlocked, grant.amount_claimed);

    emit!(ClaimQuote {
        beneficiary,
        category,
        granted: grant.amount_granted,
        unlocked,
        locked,
        pending,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey, category: Category)]
pub struct EmitClaimQuote<'info> {
    #[account(seeds = [b"schedules"], bump)]
    pub schedules: Account<'info, ScheduleRegistry>,

    #[account(
        seeds = [b"grant", beneficiary.as_ref(), &[category as u8]],
        bump
    )]
    pub grant: Account<'info, GrantState>,
}

#[event]
pub struct ClaimQuote {
    pub beneficiary: Pubkey,
    pub category: Category,
    pub granted: u64,
    pub unlocked: u64,
    pub locked: u64,
    pub pending: u64,
}
