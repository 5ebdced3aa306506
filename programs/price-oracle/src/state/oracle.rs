use anchor_lang::prelude::*;

use super::price_feed::{validate_description, validate_name, PriceFeed};
use crate::error::OracleError;
use crate::utils::authority::require_authority;

/// Registry master account: holds the feed-creation authority and the
/// counter that numbers every feed created under it.
#[account]
#[derive(Default, Debug, PartialEq, InitSpace)]
pub struct Oracle {
    pub authority: Pubkey, // Allowed to create feeds and hand this role over
    pub feed_count: u32,   // Feeds ever created; next feed_id
    pub bump: u8,
    pub is_initialized: bool, // Guards re-initialization through init_if_needed
}

impl Oracle {
    pub const SEED_PREFIX: &'static [u8] = b"oracle";
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    pub fn find_address() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[Self::SEED_PREFIX], &crate::ID)
    }

    pub fn initialize(&mut self, authority: Pubkey, bump: u8) -> Result<()> {
        require!(!self.is_initialized, OracleError::AlreadyInitialized);

        self.authority = authority;
        self.feed_count = 0;
        self.bump = bump;
        self.is_initialized = true;
        Ok(())
    }

    /// Returns the current counter value as the new feed id and advances it.
    pub fn next_feed_id(&mut self) -> Result<u32> {
        let feed_id = self.feed_count;
        self.feed_count = feed_id
            .checked_add(1)
            .ok_or(OracleError::ArithmeticOverflow)?;
        Ok(feed_id)
    }

    /// Validates a creation request and builds the feed record that goes to
    /// the address derived from `(oracle_key, feed_id)`.
    ///
    /// The counter only moves once every check has passed, so a rejected
    /// request leaves the registry as it was.
    pub fn create_feed(
        &mut self,
        oracle_key: Pubkey,
        caller: &Pubkey,
        name: String,
        description: String,
        bump: u8,
    ) -> Result<PriceFeed> {
        require_authority(&self.authority, caller)?;
        validate_name(&name)?;
        validate_description(&description)?;

        let feed_id = self.next_feed_id()?;
        Ok(PriceFeed::new(oracle_key, *caller, feed_id, name, description, bump))
    }

    /// Hands registry authority to `new_authority`, returning the previous
    /// holder. Feeds already created keep their own authorities.
    pub fn transfer_authority(&mut self, caller: &Pubkey, new_authority: Pubkey) -> Result<Pubkey> {
        require_authority(&self.authority, caller)?;

        Ok(std::mem::replace(&mut self.authority, new_authority))
    }

    pub fn info(&self) -> OracleInfo {
        OracleInfo {
            authority: self.authority,
            feed_count: self.feed_count,
        }
    }
}

/// Return data of `get_oracle_info`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct OracleInfo {
    pub authority: Pubkey,
    pub feed_count: u32,
}
