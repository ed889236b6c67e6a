use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

use crate::constants::TOKEN_DECIMALS;
use crate::state::{Config, Roles, ScheduleRegistry};

pub fn initialize(ctx: Context<Initialize>, initial_supply: u64) -> Result<()> {
    // Capture AccountInfo before taking mutable borrows.
    let config_ai = ctx.accounts.config.to_account_info();
    let config_bump = ctx.bumps.config;

    let cfg = &mut ctx.accounts.config;
    cfg.mint = ctx.accounts.mint.key();
    cfg.admin = ctx.accounts.admin.key();

    ctx.accounts.schedules.schedules = ScheduleRegistry::defaults();
    ctx.accounts.roles.entries = Vec::new();

    // Initial float goes to the admin's spendable balance; granted
    // allocations are minted into escrow later, per grant.
    if initial_supply > 0 {
        let signer_seeds: &[&[&[u8]]] = &[&[b"config", &[config_bump]]];
        token::mint_to(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                MintTo {
                    mint: ctx.accounts.mint.to_account_info(),
                    to: ctx.accounts.admin_token_account.to_account_info(),
                    authority: config_ai,
                },
                signer_seeds,
            ),
            initial_supply,
        )?;
    }

    emit!(Initialized {
        mint: ctx.accounts.mint.key(),
        admin: ctx.accounts.admin.key(),
        initial_supply,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + Config::SIZE,
        seeds = [b"config"],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = admin,
        space = 8 + ScheduleRegistry::SIZE,
        seeds = [b"schedules"],
        bump
    )]
    pub schedules: Account<'info, ScheduleRegistry>,

    #[account(
        init,
        payer = admin,
        space = Roles::space(),
        seeds = [b"roles"],
        bump
    )]
    pub roles: Account<'info, Roles>,

    #[account(
        init,
        payer = admin,
        seeds = [b"mint"],
        bump,
        mint::decimals = TOKEN_DECIMALS,
        mint::authority = config
    )]
    pub mint: Account<'info, Mint>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = config,
        seeds = [b"vault", config.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        init,
        payer = admin,
        associated_token::mint = mint,
        associated_token::authority = admin
    )]
    pub admin_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct Initialized {
    pub mint: Pubkey,
    pub admin: Pubkey,
    pub initial_supply: u64,
}
