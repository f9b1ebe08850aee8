//! Colour mapping for the status legend and status bar.

use egui::Color32;
use seatmap::{SeatStatus, StatusCounts, ThemeColors};

/// One legend row: status, its fill colour and how many seats have it.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub status: SeatStatus,
    pub color: Color32,
    pub count: usize,
}

impl LegendEntry {
    /// `"● Occupied: 3"`
    pub fn text(&self) -> String {
        format!("{} {}: {}", self.status.glyph(), self.status.label(), self.count)
    }
}

/// Legend entries in status precedence order.
///
/// # Arguments
/// * `counts` - Per-status counts from the last painted frame
/// * `colors` - The current theme's color palette
pub fn legend_entries(counts: &StatusCounts, colors: &ThemeColors) -> Vec<LegendEntry> {
    SeatStatus::ALL
        .iter()
        .map(|&status| LegendEntry {
            status,
            color: colors.status_fill(status),
            count: counts.get(status),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatmap::ThemeManager;

    #[test]
    fn test_legend_follows_precedence_and_counts() {
        let manager = ThemeManager::new();
        let colors = &manager.current_theme().colors;
        let counts = StatusCounts {
            occupied: 2,
            booked_active: 0,
            booked_future: 1,
            available: 7,
        };

        let entries = legend_entries(&counts, colors);
        let statuses: Vec<_> = entries.iter().map(|e| e.status).collect();
        assert_eq!(statuses, SeatStatus::ALL.to_vec());
        assert_eq!(entries[0].text(), "● Occupied: 2");
        assert_eq!(entries[3].color, colors.available);
    }
}
