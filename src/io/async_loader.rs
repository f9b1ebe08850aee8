//! Asynchronous venue file loading.
//!
//! This module reads and validates venue files in background threads,
//! keeping the GUI responsive during file I/O.

use crate::io::file_loader::{is_in_progress, set_in_progress};
use crate::io::LoadingState;
use seatmap::{DataError, VenueSnapshot};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;
use tracing::{debug, info};

/// Result of a completed venue loading operation.
pub enum LoadResult {
    /// Loading completed successfully
    Success {
        /// The decoded and validated venue
        venue: VenueSnapshot,
        /// Path to the file that was loaded
        path: PathBuf,
    },
    /// Loading failed with an error
    Error(String),
    /// No loading operation finished since the last check
    None,
}

/// Manages asynchronous loading of venue files.
///
/// Coordinates a background reader thread with the GUI thread. Results are
/// polled once per frame with [`AsyncLoader::check_completion`].
pub struct AsyncLoader {
    /// Shared loading state flag
    loading_state: Arc<Mutex<LoadingState>>,

    /// Channel receiver for loading results
    loading_receiver: Option<Receiver<Result<VenueSnapshot, DataError>>>,

    /// Path of the file currently being loaded
    pending_load_path: Option<PathBuf>,
}

impl AsyncLoader {
    /// Creates a new async loader with no active loading operation.
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            loading_receiver: None,
            pending_load_path: None,
        }
    }

    /// Checks if a loading operation is currently in progress.
    pub fn is_loading(&self) -> bool {
        is_in_progress(&self.loading_state)
    }

    /// Path of the file being loaded, if any.
    pub fn pending_path(&self) -> Option<&PathBuf> {
        self.pending_load_path.as_ref()
    }

    /// Starts loading a venue file in the background.
    ///
    /// # Arguments
    /// * `path` - Path to the venue JSON file
    /// * `ctx` - egui context, repainted when loading completes
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let ctx_handle = ctx.clone();
        self.start_with_notify(path, move || ctx_handle.request_repaint());
    }

    /// Starts loading and calls `notify` from the loader thread once the
    /// result has been sent.
    fn start_with_notify(&mut self, path: PathBuf, notify: impl FnOnce() + Send + 'static) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);
        set_in_progress(&self.loading_state, true);
        self.pending_load_path = Some(path.clone());

        let loading_state = Arc::clone(&self.loading_state);
        debug!(path = %path.display(), "venue load started");

        thread::spawn(move || {
            let result = VenueSnapshot::from_path(&path);

            // The receiver is gone if another load replaced this one.
            let _ = sender.send(result);
            set_in_progress(&loading_state, false);
            notify();
        });
    }

    /// Returns the result of the background load once it is available.
    ///
    /// Call once per frame from the update loop.
    pub fn check_completion(&mut self) -> LoadResult {
        let Some(receiver) = &self.loading_receiver else {
            return LoadResult::None;
        };
        let Ok(result) = receiver.try_recv() else {
            return LoadResult::None;
        };
        self.loading_receiver = None;
        let path = self.pending_load_path.take().unwrap_or_default();

        match result {
            Ok(venue) => {
                info!(path = %path.display(), seats = venue.seats.len(), bookings = venue.bookings.len(), "venue loaded");
                LoadResult::Success { venue, path }
            }
            Err(e) => LoadResult::Error(e.to_string()),
        }
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}
