//! Forwards egui pointer and keyboard input to the map view.
//!
//! Positions are converted from screen space to canvas space by subtracting
//! the canvas origin; the map view never sees screen coordinates.

use egui::{Key, Response, Ui, Vec2};
use seatmap::{MapIntent, MapKey, MapView};

/// Feeds this frame's input on the map canvas into `view`.
///
/// # Arguments
/// * `ui` - The egui UI, for modifier and key state
/// * `response` - Response of the allocated canvas
/// * `origin` - Screen position of the canvas top-left
/// * `view` - The map view to drive
///
/// # Returns
/// * The intent produced by a click or key press, if any
pub fn handle_map_input(ui: &Ui, response: &Response, origin: Vec2, view: &mut MapView) -> Option<MapIntent> {
    match response.hover_pos() {
        Some(pos) => view.pointer_moved(pos - origin),
        None => view.pointer_left(),
    }

    let mut intent = None;
    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let modifiers = ui.input(|i| i.modifiers);
            intent = view.pointer_clicked(pos - origin, modifiers.into());
        }
    }

    // Escape only counts while no text field has focus.
    let escape = ui.ctx().memory(|m| m.focused().is_none()) && ui.input(|i| i.key_pressed(Key::Escape));
    if escape {
        intent = view.key_pressed(MapKey::Escape).or(intent);
    }

    intent
}
