use anchor_lang::prelude::*;

#[event]
pub struct OracleInitialized {
    pub oracle: Pubkey,
    pub authority: Pubkey,
    pub initialized_at: i64,
}

#[event]
pub struct FeedCreated {
    pub oracle: Pubkey,
    pub feed: Pubkey,
    pub feed_id: u32,
    pub name: String,
    pub authority: Pubkey,
    pub created_at: i64,
}

#[event]
pub struct FeedUpdated {
    pub feed: Pubkey,
    pub feed_id: u32,
    pub value: u64,
    pub update_count: u64,
    pub updated_at: i64,
}

#[event]
pub struct FeedStatusToggled {
    pub feed: Pubkey,
    pub feed_id: u32,
    pub is_active: bool,
    pub toggled_at: i64,
}

#[event]
pub struct FeedAuthorityTransferred {
    pub feed: Pubkey,
    pub feed_id: u32,
    pub previous_authority: Pubkey,
    pub new_authority: Pubkey,
    pub transferred_at: i64,
}

#[event]
pub struct OracleAuthorityTransferred {
    pub oracle: Pubkey,
    pub previous_authority: Pubkey,
    pub new_authority: Pubkey,
    pub transferred_at: i64,
}

#[event]
pub struct FeedMetadataUpdated {
    pub feed: Pubkey,
    pub feed_id: u32,
    pub authority: Pubkey,
    pub description_changed: bool,
    pub updated_at: i64,
}
