use crate::events::FeedMetadataUpdated;
use anchor_lang::prelude::*;

use super::UpdateFeed;

pub fn update_feed_metadata(
    ctx: Context<UpdateFeed>,
    new_description: Option<String>,
) -> Result<()> {
    let clock = Clock::get()?;
    let authority = ctx.accounts.authority.key();

    let price_feed = &mut ctx.accounts.price_feed;
    let description_changed = price_feed.update_metadata(&authority, new_description)?;

    msg!("Updated metadata for feed '{}'", price_feed.name);

    emit!(FeedMetadataUpdated {
        feed: price_feed.key(),
        feed_id: price_feed.feed_id,
        authority,
        description_changed,
        updated_at: clock.unix_timestamp,
    });

    Ok(())
}
