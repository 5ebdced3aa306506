use crate::events::FeedUpdated;
use crate::state::PriceFeed;
use anchor_lang::prelude::*;

pub fn update_feed(ctx: Context<UpdateFeed>, new_value: u64) -> Result<()> {
    let clock = Clock::get()?;
    let authority = ctx.accounts.authority.key();

    let price_feed = &mut ctx.accounts.price_feed;
    price_feed.record_update(&authority, new_value, clock.unix_timestamp)?;

    msg!("Updated feed '{}' to value: {}", price_feed.name, new_value);

    emit!(FeedUpdated {
        feed: price_feed.key(),
        feed_id: price_feed.feed_id,
        value: new_value,
        update_count: price_feed.update_count,
        updated_at: clock.unix_timestamp,
    });

    Ok(())
}

/// Accounts for every authority-gated feed mutation. The authority itself
/// is compared in the handler so a mismatch surfaces as `Unauthorized`.
#[derive(Accounts)]
pub struct UpdateFeed<'info> {
    #[account(
        mut,
        seeds = [
            PriceFeed::SEED_PREFIX,
            price_feed.oracle.as_ref(),
            price_feed.feed_id.to_le_bytes().as_ref(),
        ],
        bump = price_feed.bump
    )]
    pub price_feed: Account<'info, PriceFeed>,
    pub authority: Signer<'info>,
}
