// Registry-level instructions
pub mod create_feed;
pub mod get_oracle_info;
pub mod initialize_oracle;
pub mod transfer_oracle_authority;

// Feed-level instructions
pub mod get_feed_info;
pub mod get_feed_value;
pub mod toggle_feed_status;
pub mod transfer_feed_authority;
pub mod update_feed;
pub mod update_feed_metadata;

pub use create_feed::*;
pub use get_feed_info::*;
pub use get_feed_value::*;
pub use get_oracle_info::*;
pub use initialize_oracle::*;
pub use toggle_feed_status::*;
pub use transfer_feed_authority::*;
pub use transfer_oracle_authority::*;
pub use update_feed::*;
pub use update_feed_metadata::*;
