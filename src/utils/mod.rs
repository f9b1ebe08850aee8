//! Utility modules for the seat map.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_duration, format_id_list, format_window};
