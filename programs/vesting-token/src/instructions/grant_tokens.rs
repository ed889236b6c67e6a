use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

use crate::constants::ROLE_GRANTER;
use crate::error::VestingError;
use crate::state::{Category, Config, GrantState, Roles, ScheduleRegistry};

pub fn grant_tokens(
    ctx: Context<GrantTokens>,
    beneficiary: Pubkey,
    category: Category,
    amount: u64,
) -> Result<()> {
    require!(amount > 0, VestingError::InvalidAmount);

    let caller = ctx.accounts.authority.key();
    require!(
        caller == ctx.accounts.config.admin || ctx.accounts.roles.holds(ROLE_GRANTER, &caller),
        VestingError::NotAuthorized
    );

    // Reserve against the category cap; fails before any ledger effect.
    ctx.accounts
        .schedules
        .schedule_mut(category)
        .reserve(amount)?;

    // Mint into program escrow: total supply reflects the allocation
    // immediately, while the beneficiary cannot spend it yet.
    let signer_seeds: &[&[&[u8]]] = &[&[b"config", &[ctx.bumps.config]]];
    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.config.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    let now = Clock::get()?.unix_timestamp;
    let grant = &mut ctx.accounts.grant;
    grant.beneficiary = beneficiary;
    grant.category = category;
    grant.record(amount, now)?;

    emit!(TokensGranted {
        beneficiary,
        category,
        amount,
        grant_total: grant.amount_granted,
        category_total: ctx.accounts.schedules.schedule(category).total_granted,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey, category: Category)]
pub struct GrantTokens<'info> {
    #[account(seeds = [b"config"], bump)]
    pub config: Account<'info, Config>,

    #[account(seeds = [b"roles"], bump)]
    pub roles: Account<'info, Roles>,

    #[account(mut, seeds = [b"schedules"], bump)]
    pub schedules: Account<'info, ScheduleRegistry>,

    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + GrantState::SIZE,
        seeds = [b"grant", beneficiary.as_ref(), &[category as u8]],
        bump
    )]
    pub grant: Account<'info, GrantState>,

    #[account(
        mut,
        seeds = [b"mint"],
        bump,
        constraint = mint.key() == config.mint @ VestingError::InvalidTokenMint,
    )]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [b"vault", config.key().as_ref()],
        bump,
        constraint = vault.mint == config.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokensGranted {
    pub beneficiary: Pubkey,
    pub category: Category,
    pub amount: u64,
    pub grant_total: u64,
    pub category_total: u64,
}
