//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, map, details, selection, status) and
//! manages their layout and interaction coordination.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::ui::details_panel::{self, DetailsInteraction};
use crate::ui::header::{self, HeaderInteraction};
use crate::ui::selection_panel::{self, SelectionInteraction};
use crate::ui::{map_panel, status_bar};
use seatmap::MapIntent;
use std::path::PathBuf;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open a file
    OpenFileRequested(PathBuf),
    /// User requested a generated demo venue
    OpenDemoRequested { seed: u64 },
    /// The map emitted an intent
    Map(MapIntent),
    /// User submitted the booking form
    CompleteBooking,
    /// User cleared the selection from the side panel
    ClearSelection,
    /// User closed the details panel
    CloseDetails,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let theme_colors = state.theme.colors().clone();

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    HeaderInteraction::OpenFileRequested(path) => PanelInteraction::OpenFileRequested(path),
                    HeaderInteraction::OpenDemoRequested { seed } => PanelInteraction::OpenDemoRequested { seed },
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let side_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.panel_fill);

        // Right panel: details above selection
        egui::SidePanel::right("side_panel")
            .default_width(ctx.content_rect().width() * 0.25)
            .resizable(true)
            .frame(side_frame)
            .show(ctx, |ui| {
                if let Some(DetailsInteraction::CloseRequested) =
                    details_panel::render_details_panel(ui, state, &theme_colors)
                {
                    interaction = Some(PanelInteraction::CloseDetails);
                }

                ui.add_space(12.0);

                if let Some(selection_interaction) = selection_panel::render_selection_panel(ui, state, &theme_colors) {
                    interaction = Some(match selection_interaction {
                        SelectionInteraction::CompleteBooking => PanelInteraction::CompleteBooking,
                        SelectionInteraction::ClearSelection => PanelInteraction::ClearSelection,
                    });
                }
            });

        // Central panel: the seat map
        let map_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(theme_colors.extreme_background);

        egui::CentralPanel::default().frame(map_frame).show(ctx, |ui| {
            if let Some(intent) = map_panel::render_map_panel(ui, state, loader, &theme_colors) {
                interaction = Some(PanelInteraction::Map(intent));
            }
        });

        interaction
    }
}
