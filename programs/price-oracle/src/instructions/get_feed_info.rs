use crate::state::FeedInfo;
use anchor_lang::prelude::*;

use super::GetFeedValue;

// Diagnostic view: no active or staleness gate, unlike get_feed_value.
pub fn get_feed_info(ctx: Context<GetFeedValue>) -> Result<FeedInfo> {
    Ok(ctx.accounts.price_feed.info())
}
