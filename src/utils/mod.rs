pub mod address;
pub mod time_utils;

// Re-export commonly used functions
pub use address::{explorer_url, normalize_address};
pub use time_utils::*;
