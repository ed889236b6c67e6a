use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{Config, Roles};

pub fn grant_role(ctx: Context<GrantRole>, role: u8, member: Pubkey) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.admin.key(),
        ctx.accounts.config.admin,
        VestingError::NotAuthorized
    );
    require!(member != Pubkey::default(), VestingError::InvalidPubkey);

    ctx.accounts.roles.grant(role, member)?;

    emit!(RoleGranted { role, member });

    Ok(())
}

#[derive(Accounts)]
pub struct GrantRole<'info> {
    #[account(seeds = [b"config"], bump)]
    pub config: Account<'info, Config>,

    #[account(mut, seeds = [b"roles"], bump)]
    pub roles: Account<'info, Roles>,

    pub admin: Signer<'info>,
}

#[event]
pub struct RoleGranted {
    pub role: u8,
    pub member: Pubkey,
}
