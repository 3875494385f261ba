//! Utility modules for the world clock viewer.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_last_refresh, get_current_memory_mb, format_memory_mb};
