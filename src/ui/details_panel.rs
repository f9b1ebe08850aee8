//! Details panel UI rendering
//!
//! Shows the seat the map asked to detail: its status at the last paint,
//! the running session and every booking that covers it.

use crate::app::AppState;
use egui::{RichText, ScrollArea};
use seatmap::domain::remaining_time;
use seatmap::utils::{format_duration, format_window};
use seatmap::ThemeColors;

/// Result of user interaction with the details panel
pub enum DetailsInteraction {
    CloseRequested,
}

/// Renders the details panel for the seat in `state.booking.detail_seat()`.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `theme_colors` - Color palette for the current theme
pub fn render_details_panel(
    ui: &mut egui::Ui,
    state: &AppState,
    theme_colors: &ThemeColors,
) -> Option<DetailsInteraction> {
    let seat = state.booking.detail_seat()?;
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("Seat {}", seat.display_label())).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("✖ Close").clicked() {
                interaction = Some(DetailsInteraction::CloseRequested);
            }
        });
    });
    ui.separator();

    let frame = state.venue.map_view().and_then(|v| v.frame());
    // Same instant the map resolved its colours against
    let now = frame.map_or_else(chrono::Utc::now, |f| f.statuses.now());

    ui.label(format!("Id: {}", seat.id));
    if let Some(group) = &seat.group {
        ui.label(format!("Group: {}", group));
    }
    if seat.grid_pos().is_none() {
        ui.colored_label(theme_colors.warning, "Not placed on the map");
    }

    if let Some(status) = frame.and_then(|f| f.statuses.get(seat.id)) {
        ui.horizontal(|ui| {
            ui.label("Status:");
            ui.colored_label(theme_colors.status_fill(status), format!("{} {}", status.glyph(), status.label()));
        });
    }

    if let Some(session) = &seat.session {
        ui.add_space(6.0);
        ui.label(RichText::new("Session").strong());
        ui.label(format!("Occupant: {}", session.occupant));
        let remaining = remaining_time(session, now).map_or_else(|| "unknown".to_string(), format_duration);
        ui.label(format!("Remaining: {}", remaining));
    }

    ui.add_space(6.0);
    ui.label(RichText::new("Bookings").strong());

    let store = state.venue.store();
    let bookings = store.bookings();
    let mut covering: Vec<_> = bookings.iter().filter(|b| b.covers(seat.id)).collect();
    covering.sort_by_key(|b| b.start);

    if covering.is_empty() {
        ui.colored_label(theme_colors.text_dim, "(no bookings)");
        return interaction;
    }

    ScrollArea::vertical()
        .id_salt("details_bookings_scroll")
        .max_height(160.0)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for booking in covering {
                let color = if booking.is_active_at(now) {
                    theme_colors.booked_active
                } else if booking.end <= now {
                    theme_colors.text_dim
                } else {
                    theme_colors.text
                };
                let client = booking.client.as_deref().unwrap_or("-");
                ui.colored_label(
                    color,
                    format!("#{} {} ({})", booking.id, format_window(booking.start, booking.end, now), client),
                );
            }
        });

    interaction
}
