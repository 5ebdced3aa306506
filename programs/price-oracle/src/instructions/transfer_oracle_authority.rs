use crate::events::OracleAuthorityTransferred;
use crate::state::Oracle;
use anchor_lang::prelude::*;

pub fn transfer_oracle_authority(
    ctx: Context<TransferOracleAuthority>,
    new_authority: Pubkey,
) -> Result<()> {
    let clock = Clock::get()?;
    let authority = ctx.accounts.authority.key();

    let oracle = &mut ctx.accounts.oracle;
    let previous_authority = oracle.transfer_authority(&authority, new_authority)?;

    msg!("Oracle authority transferred to {}", new_authority);

    emit!(OracleAuthorityTransferred {
        oracle: oracle.key(),
        previous_authority,
        new_authority,
        transferred_at: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TransferOracleAuthority<'info> {
    #[account(
        mut,
        seeds = [Oracle::SEED_PREFIX],
        bump = oracle.bump
    )]
    pub oracle: Account<'info, Oracle>,
    pub authority: Signer<'info>,
}
