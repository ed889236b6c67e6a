use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount};

use crate::constants::ROLE_BURNER;
use crate::error::VestingError;
use crate::state::{Config, Roles};

pub fn burn_tokens(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidAmount);

    let caller = ctx.accounts.owner.key();
    require!(
        caller == ctx.accounts.config.admin || ctx.accounts.roles.holds(ROLE_BURNER, &caller),
        VestingError::NotAuthorized
    );

    require!(
        ctx.accounts.owner_token_account.amount >= amount,
        VestingError::InsufficientBalance
    );

    token::burn(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.mint.to_account_info(),
                from: ctx.accounts.owner_token_account.to_account_info(),
                authority: ctx.accounts.owner.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(TokensBurned {
        owner: caller,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct BurnTokens<'info> {
    #[account(seeds = [b"config"], bump)]
    pub config: Account<'info, Config>,

    #[account(seeds = [b"roles"], bump)]
    pub roles: Account<'info, Roles>,

    #[account(
        mut,
        seeds = [b"mint"],
        bump,
        constraint = mint.key() == config.mint @ VestingError::InvalidTokenMint,
    )]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = owner_token_account.mint == config.mint @ VestingError::InvalidTokenMint,
        constraint = owner_token_account.owner == owner.key() @ VestingError::InvalidTokenAccount,
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensBurned {
    pub owner: Pubkey,
    pub amount: u64,
}
