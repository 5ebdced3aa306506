use crate::constants::STALENESS_THRESHOLD_SECONDS;
use crate::error::OracleError;
use anchor_lang::prelude::*;

/// Seconds elapsed between `last_updated` and `now`. Negative when the
/// stored timestamp is ahead of the clock.
pub fn age(last_updated: i64, now: i64) -> i64 {
    now.saturating_sub(last_updated)
}

/// A value is fresh while its age does not exceed the threshold.
///
/// A feed that was never updated has `last_updated == 0`, so its age is the
/// whole unix epoch and it reads as stale.
pub fn is_fresh(last_updated: i64, now: i64) -> bool {
    age(last_updated, now) <= STALENESS_THRESHOLD_SECONDS
}

pub fn require_fresh(last_updated: i64, now: i64) -> Result<()> {
    require!(is_fresh(last_updated, now), OracleError::StaleData);
    Ok(())
}
