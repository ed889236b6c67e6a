use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::Category;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod vesting_token {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, initial_supply: u64) -> Result<()> {
        instructions::initialize::initialize(ctx, initial_supply)
    }

    pub fn set_schedule(
        ctx: Context<SetSchedule>,
        category: Category,
        cliff_duration: i64,
        vesting_duration: i64,
    ) -> Result<()> {
        instructions::set_schedule::set_schedule(ctx, category, cliff_duration, vesting_duration)
    }

    pub fn grant_tokens(
        ctx: Context<GrantTokens>,
        beneficiary: Pubkey,
        category: Category,
        amount: u64,
    ) -> Result<()> {
        instructions::grant_tokens::grant_tokens(ctx, beneficiary, category, amount)
    }

    pub fn claim(ctx: Context<Claim>, category: Category) -> Result<()> {
        instructions::claim::claim(ctx, category)
    }

    pub fn claim_and_transfer(
        ctx: Context<ClaimAndTransfer>,
        category: Category,
        recipient: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::claim_and_transfer::claim_and_transfer(ctx, category, recipient, amount)
    }

    pub fn burn_tokens(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
        instructions::burn_tokens::burn_tokens(ctx, amount)
    }

    pub fn grant_role(ctx: Context<GrantRole>, role: u8, member: Pubkey) -> Result<()> {
        instructions::grant_role::grant_role(ctx, role, member)
    }

    pub fn revoke_role(ctx: Context<RevokeRole>, role: u8, member: Pubkey) -> Result<()> {
        instructions::revoke_role::revoke_role(ctx, role, member)
    }

    pub fn emit_claim_quote(
        ctx: Context<EmitClaimQuote>,
        beneficiary: Pubkey,
        category: Category,
    ) -> Result<()> {
        instructions::emit_claim_quote::emit_claim_quote(ctx, beneficiary, category)
    }
}
