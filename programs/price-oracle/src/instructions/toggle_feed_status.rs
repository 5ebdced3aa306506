use crate::events::FeedStatusToggled;
use anchor_lang::prelude::*;

use super::UpdateFeed;

pub fn toggle_feed_status(ctx: Context<UpdateFeed>) -> Result<()> {
    let clock = Clock::get()?;
    let authority = ctx.accounts.authority.key();

    let price_feed = &mut ctx.accounts.price_feed;
    let is_active = price_feed.toggle_status(&authority)?;

    msg!(
        "Feed '{}' status changed to: {}",
        price_feed.name,
        price_feed.status_label()
    );

    emit!(FeedStatusToggled {
        feed: price_feed.key(),
        feed_id: price_feed.feed_id,
        is_active,
        toggled_at: clock.unix_timestamp,
    });

    Ok(())
}
