//! Label fitting for seat cells.

use egui::{Color32, FontId, Painter};

const ELLIPSIS: &str = "…";

/// Shortens `text` so it fits in `max_width` pixels, ending with an ellipsis
/// when characters had to be dropped.
///
/// # Arguments
/// * `text` - Label to fit
/// * `max_width` - Space available inside the cell
/// * `font_id` - Font the label will be painted with
/// * `painter` - Used for text measurement only
///
/// # Returns
/// * The fitted label, or an empty string when not even the ellipsis fits
pub fn fit_label(text: &str, max_width: f32, font_id: &FontId, painter: &Painter) -> String {
    let width_of = |s: &str| {
        painter
            .layout_no_wrap(s.to_string(), font_id.clone(), Color32::WHITE)
            .size()
            .x
    };

    if max_width <= 0.0 {
        return String::new();
    }
    if width_of(text) <= max_width {
        return text.to_string();
    }

    let budget = max_width - width_of(ELLIPSIS);
    if budget <= 0.0 {
        return String::new();
    }

    // Largest prefix that fits, by binary search over char counts.
    let chars: Vec<char> = text.chars().collect();
    let (mut low, mut high) = (0usize, chars.len());
    while low < high {
        let mid = (low + high + 1) / 2;
        let prefix: String = chars[..mid].iter().collect();
        if width_of(&prefix) <= budget {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    let mut fitted: String = chars[..low].iter().collect();
    fitted.push_str(ELLIPSIS);
    fitted
}
