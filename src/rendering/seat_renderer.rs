//! Seat cell painting.

use crate::map_view::{CellModel, FrameModel};
use crate::rendering::text_utils::fit_label;
use crate::theme::{adjust_brightness, ThemeColors};
use egui::{Align2, FontId, Painter, Stroke, StrokeKind, Vec2};

const CORNER_RADIUS: f32 = 6.0;
const LABEL_INSET: f32 = 4.0;

/// Paints every cell of `frame`, offset by `origin` (the canvas top-left in
/// screen space). Cells outside the painter's clip rect are skipped.
///
/// # Returns
/// * Number of cells painted
pub fn paint_frame(painter: &Painter, origin: Vec2, frame: &FrameModel, colors: &ThemeColors) -> usize {
    let clip = painter.clip_rect();
    let font_id = label_font(frame.layout.transform.scale);
    let mut painted = 0;

    for cell in &frame.cells {
        let rect = cell.rect.translate(origin);
        if !clip.intersects(rect) {
            continue;
        }
        paint_cell(painter, rect, cell, &font_id, colors);
        painted += 1;
    }
    painted
}

fn paint_cell(painter: &Painter, rect: egui::Rect, cell: &CellModel, font_id: &FontId, colors: &ThemeColors) {
    let base = colors.status_fill(cell.status);
    let fill = if cell.hovered {
        adjust_brightness(base, 1.25)
    } else {
        base
    };
    painter.rect_filled(rect, CORNER_RADIUS, fill);

    if cell.selected {
        painter.rect_stroke(
            rect,
            CORNER_RADIUS,
            Stroke::new(3.0, colors.selection_outline),
            StrokeKind::Outside,
        );
    } else if cell.hovered {
        painter.rect_stroke(rect, CORNER_RADIUS, Stroke::new(1.5, colors.border), StrokeKind::Inside);
    }

    let label = fit_label(&cell.label, rect.width() - 2.0 * LABEL_INSET, font_id, painter);
    if !label.is_empty() {
        painter.text(rect.center(), Align2::CENTER_CENTER, label, font_id.clone(), colors.cell_text);
    }
}

/// Label size grows with the cell pitch, within readable limits.
fn label_font(scale: f32) -> FontId {
    FontId::proportional((scale * 0.3).clamp(11.0, 18.0))
}
