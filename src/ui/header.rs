//! Header panel UI rendering
//!
//! Handles the top bar with venue controls, the status legend and the
//! theme selector.

use crate::app::AppState;
use crate::presentation::color_mapping;
use egui::RichText;
use std::path::PathBuf;

/// Seed used by the "Demo Venue" button; bumped on each press so repeated
/// presses show different venues.
const FIRST_DEMO_SEED: u64 = 42;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a venue file
    OpenFileRequested(PathBuf),
    /// User asked for a generated venue
    OpenDemoRequested { seed: u64 },
}

/// Renders the application header.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Venue").clicked() {
            let mut dialog = rfd::FileDialog::new().add_filter("Venue Files", &["json"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("🎲 Demo Venue").clicked() {
            let seed = match state.venue.source() {
                crate::state::VenueSource::Demo { seed } => seed + 1,
                _ => FIRST_DEMO_SEED,
            };
            interaction = Some(HeaderInteraction::OpenDemoRequested { seed });
        }

        ui.separator();

        // Legend with live counts from the last painted frame
        let counts = state
            .venue
            .map_view()
            .and_then(|v| v.frame())
            .map(|f| f.statuses.counts())
            .unwrap_or_default();
        for entry in color_mapping::legend_entries(&counts, state.theme.colors()) {
            ui.label(RichText::new(entry.text()).color(entry.color));
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });

            if old_theme != current_theme {
                state.theme.set_theme(&current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(state.theme.colors().error, err);
    }

    interaction
}
