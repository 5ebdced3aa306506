use anchor_lang::prelude::*;

use crate::constants::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN};
use crate::error::OracleError;
use crate::utils::authority::require_authority;
use crate::utils::staleness::require_fresh;

/// One named data feed. Created by the registry authority, then controlled
/// solely by its own `authority`.
#[account]
#[derive(Default, Debug, PartialEq, InitSpace)]
pub struct PriceFeed {
    pub oracle: Pubkey,    // Parent registry
    pub authority: Pubkey, // Feed authority (can be different from oracle)
    pub feed_id: u32,
    #[max_len(MAX_NAME_LEN)]
    pub name: String, // e.g. "BTC_USD"
    #[max_len(MAX_DESCRIPTION_LEN)]
    pub description: String,
    pub value: u64,
    pub last_updated: i64, // 0 until the first update
    pub update_count: u64,
    pub is_active: bool,
    pub bump: u8,
}

impl PriceFeed {
    pub const SEED_PREFIX: &'static [u8] = b"feed";
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    /// Address of feed `feed_id` under the registry at `oracle`.
    pub fn find_address(oracle: &Pubkey, feed_id: u32) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[Self::SEED_PREFIX, oracle.as_ref(), &feed_id.to_le_bytes()],
            &crate::ID,
        )
    }

    pub fn new(
        oracle: Pubkey,
        authority: Pubkey,
        feed_id: u32,
        name: String,
        description: String,
        bump: u8,
    ) -> Self {
        Self {
            oracle,
            authority,
            feed_id,
            name,
            description,
            value: 0,
            last_updated: 0,
            update_count: 0,
            is_active: true,
            bump,
        }
    }

    /// Writes a new value. Allowed whether or not the feed is active.
    pub fn record_update(&mut self, caller: &Pubkey, new_value: u64, now: i64) -> Result<()> {
        require_authority(&self.authority, caller)?;

        self.update_count = self
            .update_count
            .checked_add(1)
            .ok_or(OracleError::ArithmeticOverflow)?;
        self.value = new_value;
        self.last_updated = now;
        Ok(())
    }

    /// The consumer read path: inactive feeds are refused first, then values
    /// older than the staleness threshold.
    pub fn read_value(&self, now: i64) -> Result<u64> {
        require!(self.is_active, OracleError::FeedInactive);
        require_fresh(self.last_updated, now)?;
        Ok(self.value)
    }

    /// Full projection of the record, without the active or freshness gates
    /// of `read_value`.
    pub fn info(&self) -> FeedInfo {
        FeedInfo {
            feed_id: self.feed_id,
            name: self.name.clone(),
            description: self.description.clone(),
            value: self.value,
            last_updated: self.last_updated,
            update_count: self.update_count,
            is_active: self.is_active,
        }
    }

    /// Flips the lifecycle gate and returns the new state.
    pub fn toggle_status(&mut self, caller: &Pubkey) -> Result<bool> {
        require_authority(&self.authority, caller)?;

        self.is_active = !self.is_active;
        Ok(self.is_active)
    }

    /// Returns the previous authority, which loses control immediately.
    pub fn transfer_authority(&mut self, caller: &Pubkey, new_authority: Pubkey) -> Result<Pubkey> {
        require_authority(&self.authority, caller)?;

        Ok(std::mem::replace(&mut self.authority, new_authority))
    }

    /// Replaces the description when one is given. Returns whether anything
    /// changed; `None` is accepted as a no-op.
    pub fn update_metadata(&mut self, caller: &Pubkey, new_description: Option<String>) -> Result<bool> {
        require_authority(&self.authority, caller)?;

        match new_description {
            Some(description) => {
                validate_description(&description)?;
                self.description = description;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "active"
        } else {
            "inactive"
        }
    }
}

/// Lengths are measured in bytes, which is what the account space reserves.
pub fn validate_name(name: &str) -> Result<()> {
    require!(name.len() <= MAX_NAME_LEN, OracleError::NameTooLong);
    Ok(())
}

pub fn validate_description(description: &str) -> Result<()> {
    require!(
        description.len() <= MAX_DESCRIPTION_LEN,
        OracleError::DescriptionTooLong
    );
    Ok(())
}

/// Return data of `get_feed_info`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct FeedInfo {
    pub feed_id: u32,
    pub name: String,
    pub description: String,
    pub value: u64,
    pub last_updated: i64,
    pub update_count: u64,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::STALENESS_THRESHOLD_SECONDS;

    const NOW: i64 = 1_735_689_600;

    fn feed(authority: Pubkey) -> PriceFeed {
        PriceFeed::new(
            Pubkey::new_unique(),
            authority,
            0,
            "BTC_USD".to_string(),
            "Bitcoin price in USD".to_string(),
            254,
        )
    }

    #[test]
    fn space_reserves_maximum_lengths() {
        let expected = 8 + 32 + 32 + 4 + (4 + 32) + (4 + 100) + 8 + 8 + 8 + 1 + 1;
        assert_eq!(PriceFeed::SPACE, expected);
    }

    #[test]
    fn new_feed_starts_active_and_empty() {
        let authority = Pubkey::new_unique();
        let feed = feed(authority);
        assert_eq!(feed.authority, authority);
        assert_eq!(feed.value, 0);
        assert_eq!(feed.last_updated, 0);
        assert_eq!(feed.update_count, 0);
        assert!(feed.is_active);
    }

    #[test]
    fn never_updated_feed_reads_as_stale() {
        let feed = feed(Pubkey::new_unique());
        assert_eq!(feed.read_value(NOW).unwrap_err(), OracleError::StaleData.into());
    }

    #[test]
    fn update_sets_value_time_and_count() {
        let authority = Pubkey::new_unique();
        let mut feed = feed(authority);
        feed.record_update(&authority, 95_000, NOW).unwrap();
        assert_eq!(feed.value, 95_000);
        assert_eq!(feed.last_updated, NOW);
        assert_eq!(feed.update_count, 1);
        assert_eq!(feed.read_value(NOW + 10).unwrap(), 95_000);
    }

    #[test]
    fn update_is_allowed_while_inactive() {
        let authority = Pubkey::new_unique();
        let mut feed = feed(authority);
        feed.toggle_status(&authority).unwrap();
        feed.record_update(&authority, 3_500, NOW).unwrap();
        assert_eq!(feed.value, 3_500);
        assert_eq!(feed.update_count, 1);
    }

    #[test]
    fn inactive_wins_over_stale() {
        let authority = Pubkey::new_unique();
        let mut feed = feed(authority);
        feed.toggle_status(&authority).unwrap();
        assert_eq!(feed.read_value(NOW).unwrap_err(), OracleError::FeedInactive.into());

        feed.record_update(&authority, 1, NOW).unwrap();
        assert_eq!(feed.read_value(NOW).unwrap_err(), OracleError::FeedInactive.into());
    }

    #[test]
    fn value_goes_stale_after_threshold() {
        let authority = Pubkey::new_unique();
        let mut feed = feed(authority);
        feed.record_update(&authority, 240, NOW).unwrap();
        assert_eq!(feed.read_value(NOW + STALENESS_THRESHOLD_SECONDS).unwrap(), 240);
        assert_eq!(
            feed.read_value(NOW + STALENESS_THRESHOLD_SECONDS + 1).unwrap_err(),
            OracleError::StaleData.into()
        );
    }

    #[test]
    fn info_ignores_read_gates() {
        let authority = Pubkey::new_unique();
        let mut feed = feed(authority);
        feed.toggle_status(&authority).unwrap();

        let info = feed.info();
        assert_eq!(info.feed_id, 0);
        assert_eq!(info.name, "BTC_USD");
        assert_eq!(info.description, "Bitcoin price in USD");
        assert_eq!(info.last_updated, 0);
        assert!(!info.is_active);
    }

    #[test]
    fn toggle_twice_restores_state() {
        let authority = Pubkey::new_unique();
        let mut feed = feed(authority);
        assert!(!feed.toggle_status(&authority).unwrap());
        assert_eq!(feed.status_label(), "inactive");
        assert!(feed.toggle_status(&authority).unwrap());
        assert_eq!(feed.status_label(), "active");
    }

    #[test]
    fn metadata_update_replaces_or_skips() {
        let authority = Pubkey::new_unique();
        let mut feed = feed(authority);

        assert!(!feed.update_metadata(&authority, None).unwrap());
        assert_eq!(feed.description, "Bitcoin price in USD");

        assert!(feed
            .update_metadata(&authority, Some("Spot BTC/USD".to_string()))
            .unwrap());
        assert_eq!(feed.description, "Spot BTC/USD");

        let err = feed
            .update_metadata(&authority, Some("d".repeat(101)))
            .unwrap_err();
        assert_eq!(err, OracleError::DescriptionTooLong.into());
        assert_eq!(feed.description, "Spot BTC/USD");
    }

    #[test]
    fn metadata_accepts_exact_limit() {
        let authority = Pubkey::new_unique();
        let mut feed = feed(authority);
        let description = "d".repeat(MAX_DESCRIPTION_LEN);
        assert!(feed.update_metadata(&authority, Some(description.clone())).unwrap());
        assert_eq!(feed.description, description);
    }

    #[test]
    fn transfer_hands_over_control() {
        let authority = Pubkey::new_unique();
        let successor = Pubkey::new_unique();
        let mut feed = feed(authority);

        assert_eq!(feed.transfer_authority(&authority, successor).unwrap(), authority);
        assert_eq!(
            feed.record_update(&authority, 1, NOW).unwrap_err(),
            OracleError::Unauthorized.into()
        );
        feed.record_update(&successor, 1, NOW).unwrap();
    }

    #[test]
    fn transfer_accepts_any_new_authority() {
        let authority = Pubkey::new_unique();
        let mut feed = feed(authority);

        assert_eq!(
            feed.transfer_authority(&authority, Pubkey::default()).unwrap(),
            authority
        );
        assert_eq!(feed.authority, Pubkey::default());
        assert_eq!(
            feed.toggle_status(&authority).unwrap_err(),
            OracleError::Unauthorized.into()
        );
    }

    #[test]
    fn unauthorized_calls_leave_feed_unchanged() {
        let authority = Pubkey::new_unique();
        let intruder = Pubkey::new_unique();
        let mut feed = feed(authority);
        feed.record_update(&authority, 95_000, NOW).unwrap();
        let before = feed.clone();

        let unauthorized: anchor_lang::error::Error = OracleError::Unauthorized.into();
        assert_eq!(feed.record_update(&intruder, 1, NOW + 1).unwrap_err(), unauthorized);
        assert_eq!(feed.toggle_status(&intruder).unwrap_err(), unauthorized);
        assert_eq!(
            feed.transfer_authority(&intruder, intruder).unwrap_err(),
            unauthorized
        );
        assert_eq!(
            feed.update_metadata(&intruder, Some("hijacked".to_string()))
                .unwrap_err(),
            unauthorized
        );
        assert_eq!(feed, before);
    }

    #[test]
    fn name_limit_is_inclusive() {
        assert!(validate_name(&"A".repeat(MAX_NAME_LEN)).is_ok());
        assert_eq!(
            validate_name(&"A".repeat(MAX_NAME_LEN + 1)).unwrap_err(),
            OracleError::NameTooLong.into()
        );
    }

    #[test]
    fn feed_addresses_depend_on_registry_and_id() {
        let oracle = Pubkey::new_unique();
        let (first, _) = PriceFeed::find_address(&oracle, 0);
        let (second, _) = PriceFeed::find_address(&oracle, 1);
        let (other_registry, _) = PriceFeed::find_address(&Pubkey::new_unique(), 0);

        assert_eq!(PriceFeed::find_address(&oracle, 0).0, first);
        assert_ne!(first, second);
        assert_ne!(first, other_registry);
    }
}
