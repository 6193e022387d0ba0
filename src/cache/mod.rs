//! Persistent caching for the banner viewer.

pub mod feed_cache;

// Re-export commonly used types
pub use feed_cache::{unix_now, TtlCache};
