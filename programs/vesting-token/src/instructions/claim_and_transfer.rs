use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::{Category, Config, GrantState, ScheduleRegistry};
use crate::utils::vesting;

/// Claim all pending amount, then forward `amount` out of the
/// beneficiary's spendable balance in the same instruction. `amount`
/// may exceed the pre-claim balance as long as the claim step covers
/// the difference.
pub fn claim_and_transfer(
    ctx: Context<ClaimAndTransfer>,
    category: Category,
    recipient: Pubkey,
    amount: u64,
) -> Result<()> {
    require!(amount > 0, VestingError::InvalidAmount);

    let config_ai = ctx.accounts.config.to_account_info();
    let config_bump = ctx.bumps.config;

    let now = Clock::get()?.unix_timestamp;
    let sched = *ctx.accounts.schedules.schedule(category);

    let grant = &ctx.accounts.grant;
    let unlocked = vesting::unlocked_amount(&sched, grant.grant_ts, grant.amount_granted, now)?;
    let pending = vesting::pending_to_claim(unlocked, grant.amount_claimed);

    if pending > 0 {
        require!(
            ctx.accounts.vault.amount >= pending,
            VestingError::InsufficientBalance
        );

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
    }

    // Forward step: an ordinary transfer out of the post-claim balance.
    ctx.accounts.beneficiary_token_account.reload()?;
    require!(
        ctx.accounts.beneficiary_token_account.amount >= amount,
        VestingError::InsufficientBalance
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.beneficiary_token_account.to_account_info(),
                to: ctx.accounts.recipient_token_account.to_account_info(),
                authority: ctx.accounts.beneficiary.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(TokensClaimedAndTransferred {
        beneficiary: ctx.accounts.beneficiary.key(),
        recipient,
        category,
        claimed: pending,
        transferred: amount,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(category: Category, recipient: Pubkey)]
pub struct ClaimAndTransfer<'info> {
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

    #[account(
        mut,
        constraint = recipient_token_account.mint == config.mint @ VestingError::InvalidTokenMint,
        constraint = recipient_token_account.owner == recipient @ VestingError::InvalidTokenAccount,
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensClaimedAndTransferred {
    pub beneficiary: Pubkey,
    pub recipient: Pubkey,
    pub category: Category,
    pub claimed: u64,
    pub transferred: u64,
}
