//! Centralized application state for the seat map viewer.
//!
//! This module implements the State pattern by composing focused state components
//! that each manage a specific aspect of the application's state. This approach:
//! - Keeps invariants local within each component
//! - Allows borrow-checker friendly access to different state aspects
//! - Provides intent-revealing methods for state mutations

use crate::state::{BookingState, ThemeState, VenueState};
use seatmap::theme::DEFAULT_THEME;
use seatmap::MapConfig;

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Venue data, its source and the map view
    pub venue: VenueState,

    /// Detail seat, selection copy and booking form
    pub booking: BookingState,

    /// Theme and styling state
    pub theme: ThemeState,

    // ===== Top-Level State =====
    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self::with_settings(DEFAULT_THEME, MapConfig::default())
    }

    /// Creates application state from persisted settings.
    pub fn with_settings(theme_name: &str, map_config: MapConfig) -> Self {
        Self {
            venue: VenueState::new(map_config),
            booking: BookingState::new(),
            theme: ThemeState::with_theme(theme_name),
            error_message: None,
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Resets venue-related state before loading a new venue.
    ///
    /// This clears venue data, the detail view, the selection and errors.
    pub fn reset_venue_state(&mut self) {
        self.venue.clear();
        if let Some(view) = self.venue.map_view_mut() {
            view.clear_selection();
        }
        self.booking.reset();
        self.error_message = None;
    }
}
