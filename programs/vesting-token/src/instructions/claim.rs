use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::{Category, Config, GrantState, ScheduleRegistry};
use crate::utils::vesting;

pub fn claim(ctx: Context<Claim>, category: Category) -> Result<()> {
    // Capture AccountInfo before taking mutable borrows.
    let config_ai = ctx.accounts.config.to_account_info();
    let config_bump = ctx.bumps.config;

    let now = Clock::get()?.unix_timestamp;
    let sched = *ctx.accounts.schedules.schedule(category);

    let grant = &ctx.accounts.grant;
    let unlocked = vesting::unlocked_amount(&sched, grant.grant_ts, grant.amount_granted, now)?;
    let pending = vesting::pending_to_claim(unlocked, grant.amount_claimed);

    // Nothing newly unlocked yet: succeed with zero effect.
    if pending == 0 {
        return Ok(());
    }

    require!(
        ctx.accounts.vault.amount >= pending,
        VestingError::InsufficientBalance
    );

    // Transfer first; the claimed counter must only ever reflect
    // amounts actually moved out of escrow.
    let signer_seeds: &[&[&[u8]]] = &[&[b"config", &[config_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: config_ai,
            },
            signer_seeds,
        ),
        pending,
    )?;

    let grant = &mut ctx.accounts.grant;
    grant.amount_claimed = grant
        .amount_claimed
        .checked_add(pending)
        .ok_or(VestingError::MathOverflow)?;

    emit!(TokensClaimed {
        beneficiary: ctx.accounts.beneficiary.key(),
        category,
        amount: pending,
        claimed_total: grant.amount_claimed,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(category: Category)]
pub struct Claim<'info> {
    #[account(seeds = [b"config"], bump)]
    pub config: Account<'info, Config>,

    #[account(seeds = [b"schedules"], bump)]
    pub schedules: Account<'info, ScheduleRegistry>,

    #[account(
        mut,
        seeds = [b"grant", beneficiary.key().as_ref(), &[category as u8]],
        bump
    )]
    pub grant: Account<'info, GrantState>,

    #[account(
        mut,
        seeds = [b"vault", config.key().as_ref()],
        bump,
        constraint = vault.mint == config.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = beneficiary_token_account.mint == config.mint @ VestingError::InvalidTokenMint,
        constraint = beneficiary_token_account.owner == beneficiary.key() @ VestingError::InvalidTokenAccount,
    )]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensClaimed {
    pub beneficiary: Pubkey,
    pub category: Category,
    pub amount: u64,
    pub claimed_total: u64,
}
