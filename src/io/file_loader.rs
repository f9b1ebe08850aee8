//! Asynchronous file loading state management.

use std::sync::{Mutex, PoisonError};

/// Holds the state of an async file loading operation.
///
/// Only the in_progress flag is shared; results come through a channel.
/// This struct is wrapped in an `Arc<Mutex<>>` to allow safe sharing between
/// the main thread and background loading thread.
#[derive(Debug, Default)]
pub struct LoadingState {
    /// True if a file loading operation is currently in progress
    pub in_progress: bool,
}

impl LoadingState {
    /// Creates a new loading state that is not in progress.
    pub fn new() -> Self {
        Self { in_progress: false }
    }
}

/// Reads the flag. A loader thread that panicked mid-update leaves the flag
/// readable, so poisoning is not treated as an error.
pub fn is_in_progress(state: &Mutex<LoadingState>) -> bool {
    state.lock().unwrap_or_else(PoisonError::into_inner).in_progress
}

pub fn set_in_progress(state: &Mutex<LoadingState>, in_progress: bool) {
    state.lock().unwrap_or_else(PoisonError::into_inner).in_progress = in_progress;
}
