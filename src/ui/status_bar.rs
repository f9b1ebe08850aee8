//! Status bar UI rendering
//!
//! Handles the bottom status bar showing the venue source and seat counts.

use crate::app::AppState;
use egui::RichText;

/// Renders the status panel at the bottom of the window.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(state.venue.source().describe()).strong());

        let Some(frame) = state.venue.map_view().and_then(|v| v.frame()) else {
            return;
        };

        let counts = frame.statuses.counts();
        ui.label(RichText::new("|").strong());
        ui.label(RichText::new(format!(
            "Seats: {} | Placed: {} | Available: {} | Bookings: {}",
            counts.total(),
            frame.cells.len(),
            counts.available,
            frame.bookings.len(),
        )).strong());

        let selected = state.booking.selected().len();
        if selected > 0 {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(format!("Selected: {}", selected)).strong().color(state.theme.colors().warning));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format!(
                    "Scale: {:.0}px | Frame #{}",
                    frame.layout.transform.scale, frame.frame_number
                ))
                .color(state.theme.colors().text_dim),
            );
        });
    });
}
