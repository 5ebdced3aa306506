use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("6jpWtuCiZUoRCeFACgPAifZQiqrZSfMW4Z871YgogMZA");

#[program]
pub mod price_oracle {
    use super::*;

    // Registry management
    pub fn initialize_oracle(ctx: Context<InitializeOracle>) -> Result<()> {
        instructions::initialize_oracle(ctx)
    }

    pub fn create_feed(
        ctx: Context<CreateFeed>,
        name: String,
        description: String,
    ) -> Result<()> {
        instructions::create_feed(ctx, name, description)
    }

    pub fn transfer_oracle_authority(
        ctx: Context<TransferOracleAuthority>,
        new_authority: Pubkey,
    ) -> Result<()> {
        instructions::transfer_oracle_authority(ctx, new_authority)
    }

    pub fn get_oracle_info(ctx: Context<GetOracleInfo>) -> Result<OracleInfo> {
        instructions::get_oracle_info(ctx)
    }

    // Feed management
    pub fn update_feed(ctx: Context<UpdateFeed>, new_value: u64) -> Result<()> {
        instructions::update_feed(ctx, new_value)
    }

    pub fn toggle_feed_status(ctx: Context<UpdateFeed>) -> Result<()> {
        instructions::toggle_feed_status(ctx)
    }

    pub fn transfer_feed_authority(ctx: Context<UpdateFeed>, new_authority: Pubkey) -> Result<()> {
        instructions::transfer_feed_authority(ctx, new_authority)
    }

    pub fn update_feed_metadata(
        ctx: Context<UpdateFeed>,
        new_description: Option<String>,
    ) -> Result<()> {
        instructions::update_feed_metadata(ctx, new_description)
    }

    // Consumer reads
    pub fn get_feed_value(ctx: Context<GetFeedValue>) -> Result<u64> {
        instructions::get_feed_value(ctx)
    }

    pub fn get_feed_info(ctx: Context<GetFeedValue>) -> Result<FeedInfo> {
        instructions::get_feed_info(ctx)
    }
}
