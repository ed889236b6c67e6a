use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{Config, Roles};

pub fn revoke_role(ctx: Context<RevokeRole>, role: u8, member: Pubkey) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.admin.key(),
        ctx.accounts.config.admin,
        VestingError::NotAuthorized
    );

    ctx.accounts.roles.revoke(role, &member)?;

    emit!(RoleRevoked { role, member });

    Ok(())
}

#[derive(Accounts)]
pub struct RevokeRole<'info> {
    #[account(seeds = [b"config"], bump)]
    pub config: Account<'info, Config>,

    #[account(mut, seeds = [b"roles"], bump)]
    pub roles: Account<'info, Roles>,

    pub admin: Signer<'info>,
}

#[event]
pub struct RoleRevoked {
    pub role: u8,
    pub member: Pubkey,
}
