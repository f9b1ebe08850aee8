//! Seat Map Viewer GUI Application
//!
//! This module provides an interactive seat map for venues using the egui framework.
//! The viewer features:
//! - A grid of seat cells coloured by live status (occupied, booked, available)
//! - Hover tooltips, click for details, Ctrl/Cmd+click multi-selection
//! - Asynchronous venue file loading with loading indicators
//! - A booking form for the selected seats
//! - Multiple theme support with persistent preferences
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `presentation/` - Legend styling (separated from domain logic)
//! - `io/` - Venue file loading
//! - `ui/` - UI panel rendering, interaction, and input handling
//! - `state/` - State components for venue, booking form and theme
//!
//! Layout, status resolution, scheduling and painting live in the `seatmap` library.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use seatmap::{MapConfig, MapViewError};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod app;
mod io;
mod presentation;
mod state;
mod ui;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use io::AsyncLoader;
use ui::panel_manager::{PanelInteraction, PanelManager};

const MAP_CONFIG_KEY: &str = "map_config";

/// Main application entry point that initializes and launches the seat map GUI.
fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("seatmap=info")),
        )
        .init();

    // Parse command-line arguments to check for initial file to load
    let initial_file = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Seat Map"),
        ..Default::default()
    };

    eframe::run_native(
        "Seat Map",
        options,
        Box::new(move |cc| Ok(Box::new(SeatMapApp::new(cc, initial_file)?))),
    )
}

/// The main seat map application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles loading, map intents and the booking flow
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct SeatMapApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous file loader
    loader: AsyncLoader,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl SeatMapApp {
    /// Creates a new viewer instance with theme and map settings loaded from persistent storage.
    ///
    /// Fails if the window has no painting surface, rather than showing a map
    /// that can never draw.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Result<Self, MapViewError> {
        if cc.gl.is_none() {
            return Err(MapViewError::SurfaceUnavailable(
                "no OpenGL context was created for the window".to_string(),
            ));
        }

        let current_theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let map_config: MapConfig =
            SettingsCoordinator::load_setting_or(cc.storage, MAP_CONFIG_KEY, MapConfig::default());
        tracing::info!(theme = %current_theme_name, ?map_config, "starting seat map viewer");

        Ok(Self {
            state: AppState::with_settings(&current_theme_name, map_config),
            loader: AsyncLoader::new(),
            pending_file_load: initial_file,
        })
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            PanelInteraction::OpenDemoRequested { seed } => {
                ApplicationCoordinator::open_demo_venue(&mut self.state, seed, chrono::Utc::now());
            }
            PanelInteraction::Map(intent) => {
                ApplicationCoordinator::handle_map_intent(&mut self.state, intent);
            }
            PanelInteraction::CompleteBooking => {
                ApplicationCoordinator::complete_booking(&mut self.state, chrono::Utc::now());
            }
            PanelInteraction::ClearSelection => {
                ApplicationCoordinator::clear_selection(&mut self.state);
            }
            PanelInteraction::CloseDetails => {
                self.state.booking.close_details();
            }
        }
        ctx.request_repaint();
    }
}

impl eframe::App for SeatMapApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(storage, MAP_CONFIG_KEY, self.state.venue.config());
    }

    /// Main update loop:
    /// 1. Check for async loading completion
    /// 2. Apply theme
    /// 3. Load initial file if specified via command line
    /// 4. Render all panels via PanelManager
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader) {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
