use crate::state::{Oracle, OracleInfo};
use anchor_lang::prelude::*;

pub fn get_oracle_info(ctx: Context<GetOracleInfo>) -> Result<OracleInfo> {
    Ok(ctx.accounts.oracle.info())
}

#[derive(Accounts)]
pub struct GetOracleInfo<'info> {
    #[account(
        seeds = [Oracle::SEED_PREFIX],
        bump = oracle.bump
    )]
    pub oracle: Account<'info, Oracle>,
}
