use crate::state::PriceFeed;
use anchor_lang::prelude::*;

pub fn get_feed_value(ctx: Context<GetFeedValue>) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    ctx.accounts.price_feed.read_value(now)
}

/// Read-only view of a single feed.
#[derive(Accounts)]
pub struct GetFeedValue<'info> {
    #[account(
        seeds = [
            PriceFeed::SEED_PREFIX,
            price_feed.oracle.as_ref(),
            price_feed.feed_id.to_le_bytes().as_ref(),
        ],
        bump = price_feed.bump
    )]
    pub price_feed: Account<'info, PriceFeed>,
}
