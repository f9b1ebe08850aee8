//! Selection panel UI rendering
//!
//! Lists the seats selected on the map and holds the booking form.

use crate::app::AppState;
use egui::RichText;
use seatmap::utils::format_id_list;
use seatmap::ThemeColors;

const MAX_IDS_SHOWN: usize = 12;

/// Result of user interaction with the selection panel
pub enum SelectionInteraction {
    CompleteBooking,
    ClearSelection,
}

/// Renders the selection list and booking form.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state (form fields are edited in place)
/// * `theme_colors` - Color palette for the current theme
pub fn render_selection_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    theme_colors: &ThemeColors,
) -> Option<SelectionInteraction> {
    let mut interaction = None;

    ui.label(RichText::new("Selection").strong());
    ui.separator();

    if let Some(notice) = state.booking.notice() {
        ui.colored_label(theme_colors.available, notice);
    }

    let selected = state.booking.selected();
    if selected.is_empty() {
        ui.colored_label(theme_colors.text_dim, "Ctrl+click seats to select them");
        return None;
    }

    ui.label(format!("{} seat(s): {}", selected.len(), format_id_list(selected, MAX_IDS_SHOWN)));
    ui.add_space(6.0);

    egui::Grid::new("booking_form").num_columns(2).show(ui, |ui| {
        ui.label("Client:");
        ui.text_edit_singleline(&mut state.booking.client_name);
        ui.end_row();

        ui.label("Minutes:");
        ui.add(egui::DragValue::new(&mut state.booking.duration_minutes).range(5..=24 * 60).speed(5));
        ui.end_row();
    });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.button("Complete booking").clicked() {
            interaction = Some(SelectionInteraction::CompleteBooking);
        }
        if ui.button("Clear selection").clicked() {
            interaction = Some(SelectionInteraction::ClearSelection);
        }
    });

    interaction
}
