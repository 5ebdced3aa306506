pub mod oracle;
pub mod price_feed;

pub use oracle::*;
pub use price_feed::*;
