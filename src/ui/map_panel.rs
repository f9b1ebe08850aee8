//! Map panel UI rendering
//!
//! Hosts the seat map view: reports the canvas size, pumps the view once per
//! egui frame, replays the painted frame and forwards input.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::ui::input::map_input_handler;
use chrono::Utc;
use egui::{LayerId, Order, Pos2, Rect, ScrollArea, Sense};
use seatmap::rendering::{seat_renderer, tooltip_renderer};
use seatmap::{MapIntent, ThemeColors};
use std::time::Instant;

/// Renders the map panel.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Application state owning the map view
/// * `loader` - Async loader, for the loading indicator
/// * `theme_colors` - Color palette for the current theme
///
/// # Returns
/// * The intent the map emitted this frame, if any
pub fn render_map_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    loader: &AsyncLoader,
    theme_colors: &ThemeColors,
) -> Option<MapIntent> {
    if loader.is_loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            let name = loader
                .pending_path()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            ui.label(format!("Loading {}...", name));
        });
        return None;
    }

    if !state.venue.has_venue() {
        ui.label("No venue loaded - open a venue file or generate a demo venue");
        return None;
    }

    let viewport = ui.available_size();
    let now = Instant::now();
    let view = match state.venue.ensure_map_view(viewport, now) {
        Ok(view) => view,
        Err(e) => {
            ui.colored_label(theme_colors.error, e.to_string());
            return None;
        }
    };

    view.resized(viewport, now);
    view.pump(now, Utc::now());

    // Canvas coordinates of the content's top-left corner; negative when an
    // overflowing grid is centred on the viewport.
    let canvas = view
        .frame()
        .map_or(Rect::from_min_size(Pos2::ZERO, viewport), |f| f.canvas_rect());
    let tooltip_style = view.config().tooltip_style();

    let intent = ScrollArea::both()
        .id_salt("seat_map_scroll")
        .auto_shrink([false, false])
        .show_viewport(ui, |ui, visible| {
            view.scrolled(visible.min.to_vec2() + canvas.min.to_vec2());

            let (rect, response) = ui.allocate_exact_size(canvas.size(), Sense::click());
            let origin = rect.min - canvas.min;

            if let Some(frame) = view.frame() {
                seat_renderer::paint_frame(&ui.painter_at(rect), origin, frame, theme_colors);
            }

            let intent = map_input_handler::handle_map_input(ui, &response, origin, view);

            if let Some(tooltip) = view.tooltip() {
                let overlay = ui
                    .ctx()
                    .layer_painter(LayerId::new(Order::Tooltip, ui.id().with("seat_tooltip")))
                    .with_clip_rect(ui.clip_rect());
                tooltip_renderer::paint_tooltip(Some(&overlay), origin, tooltip, &tooltip_style, theme_colors);
            }
            intent
        })
        .inner;

    // Input above may have scheduled a frame; make sure egui comes back for it.
    if let Some(wakeup) = view.next_wakeup() {
        ui.ctx()
            .request_repaint_after(wakeup.saturating_duration_since(Instant::now()));
    }

    intent
}
