/// Longest feed name accepted by `create_feed`, in bytes.
pub const MAX_NAME_LEN: usize = 32;

/// Longest feed description accepted by `create_feed` and `update_feed_metadata`, in bytes.
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// Maximum age of a feed value before `get_feed_value` refuses it (48 hours).
pub const STALENESS_THRESHOLD_SECONDS: i64 = 172_800;
