use crate::events::FeedAuthorityTransferred;
use anchor_lang::prelude::*;

use super::UpdateFeed;

pub fn transfer_feed_authority(ctx: Context<UpdateFeed>, new_authority: Pubkey) -> Result<()> {
    let clock = Clock::get()?;
    let authority = ctx.accounts.authority.key();

    let price_feed = &mut ctx.accounts.price_feed;
    let previous_authority = price_feed.transfer_authority(&authority, new_authority)?;

    msg!(
        "Feed '{}' authority transferred to {}",
        price_feed.name,
        new_authority
    );

    emit!(FeedAuthorityTransferred {
        feed: price_feed.key(),
        feed_id: price_feed.feed_id,
        previous_authority,
        new_authority,
        transferred_at: clock.unix_timestamp,
    });

    Ok(())
}
