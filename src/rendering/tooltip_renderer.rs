//! Tooltip overlay painting.

use crate::interaction::{Tooltip, TooltipStyle};
use crate::theme::ThemeColors;
use egui::{Align2, FontId, Painter, Pos2, Rect, Stroke, StrokeKind, Vec2};
use tracing::trace;

/// Paints `tooltip` on `overlay`, offset by `origin`.
///
/// The overlay is the tooltip layer of the hosting window. When the host has
/// none to offer, the tooltip is skipped and the rest of the frame is
/// unaffected.
///
/// # Returns
/// * `true` if the tooltip was painted
pub fn paint_tooltip(
    overlay: Option<&Painter>,
    origin: Vec2,
    tooltip: &Tooltip,
    style: &TooltipStyle,
    colors: &ThemeColors,
) -> bool {
    let Some(painter) = overlay else {
        trace!(seat = %tooltip.seat_id, "no tooltip layer, skipping");
        return false;
    };

    let rect = Rect::from_min_size(tooltip.pos + origin, tooltip.size);
    painter.rect_filled(rect, 4.0, colors.tooltip_background);
    painter.rect_stroke(rect, 4.0, Stroke::new(1.0, colors.border), StrokeKind::Inside);

    let content = &tooltip.content;
    let mut cursor = rect.min + Vec2::splat(style.padding);
    let mut line = |text: &str, font: FontId, color| {
        painter.text(cursor, Align2::LEFT_TOP, text, font, color);
        cursor = Pos2::new(cursor.x, cursor.y + style.line_height);
    };

    line(&content.title, FontId::proportional(14.0), colors.tooltip_text);
    if let Some(group) = &content.group {
        line(group, FontId::proportional(12.0), colors.text_dim);
    }
    for text in &content.lines {
        line(text, FontId::proportional(12.0), colors.tooltip_text);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::status::SeatStatus;
    use crate::interaction::TooltipContent;
    use crate::model::SeatId;
    use crate::theme::ThemeManager;

    fn tooltip() -> Tooltip {
        let content = TooltipContent {
            status: SeatStatus::Available,
            title: "○ A1".to_string(),
            group: Some("Row A".to_string()),
            lines: vec!["Available".to_string()],
        };
        let size = content.size(&TooltipStyle::default());
        Tooltip {
            seat_id: SeatId(1),
            content,
            pos: Pos2::new(10.0, 10.0),
            size,
        }
    }

    #[test]
    fn test_missing_layer_is_skipped() {
        let manager = ThemeManager::new();
        let colors = &manager.current_theme().colors;
        assert!(!paint_tooltip(None, Vec2::ZERO, &tooltip(), &TooltipStyle::default(), colors));
    }

    #[test]
    fn test_paints_on_overlay() {
        let manager = ThemeManager::new();
        let colors = &manager.current_theme().colors;
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            let painter = ctx.layer_painter(egui::LayerId::new(egui::Order::Tooltip, egui::Id::new("seat_tooltip")));
            assert!(paint_tooltip(Some(&painter), Vec2::ZERO, &tooltip(), &TooltipStyle::default(), colors));
        });
    }
}
