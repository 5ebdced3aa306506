use crate::events::OracleInitialized;
use crate::state::Oracle;
use anchor_lang::prelude::*;

pub fn initialize_oracle(ctx: Context<InitializeOracle>) -> Result<()> {
    let clock = Clock::get()?;
    let authority = ctx.accounts.authority.key();

    let oracle = &mut ctx.accounts.oracle;
    oracle.initialize(authority, ctx.bumps.oracle)?;

    msg!("Oracle initialized by: {}", authority);

    emit!(OracleInitialized {
        oracle: ctx.accounts.oracle.key(),
        authority,
        initialized_at: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeOracle<'info> {
    // init_if_needed so a second call reaches the handler and fails with
    // AlreadyInitialized instead of a system program error.
    #[account(
        init_if_needed,
        payer = authority,
        space = Oracle::SPACE,
        seeds = [Oracle::SEED_PREFIX],
        bump
    )]
    pub oracle: Account<'info, Oracle>,
    #[account(mut)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
}
