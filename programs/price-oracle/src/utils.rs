pub mod authority;
pub mod staleness;
