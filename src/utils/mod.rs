//! Utility modules for the banner viewer.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_duration, format_memory_mb, format_page, get_current_memory_mb};
