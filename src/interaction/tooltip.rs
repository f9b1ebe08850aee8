//! Tooltip content and placement for the hovered seat.

use crate::domain::status::{relevant_booking, remaining_time, SeatStatus};
use crate::model::{Booking, Seat, SeatId};
use crate::utils::{format_duration, format_window};
use chrono::{DateTime, Utc};
use egui::{Pos2, Rect, Vec2};

/// Sizing of the tooltip box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipStyle {
    pub width: f32,
    pub line_height: f32,
    pub padding: f32,
    /// Distance between the pointer and the nearest tooltip corner.
    pub offset: f32,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            width: 240.0,
            line_height: 18.0,
            padding: 8.0,
            offset: 14.0,
        }
    }
}

/// Text shown for one seat.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub status: SeatStatus,
    /// `"<glyph> <label>"`
    pub title: String,
    pub group: Option<String>,
    /// Status-specific detail lines.
    pub lines: Vec<String>,
}

impl TooltipContent {
    /// Builds the tooltip for `seat` in `status`, resolved at `now`.
    pub fn for_seat(seat: &Seat, status: SeatStatus, bookings: &[Booking], now: DateTime<Utc>) -> Self {
        let mut lines = vec![status.label().to_string()];

        match status {
            SeatStatus::Occupied => {
                if let Some(session) = &seat.session {
                    lines.push(format!("Occupant: {}", session.occupant));
                    let remaining = remaining_time(session, now)
                        .map_or_else(|| "unknown".to_string(), format_duration);
                    lines.push(format!("Remaining: {}", remaining));
                }
            }
            SeatStatus::BookedActive | SeatStatus::BookedFuture => {
                if let Some(booking) = relevant_booking(seat.id, bookings, now) {
                    lines.push(format!("Booked {}", format_window(booking.start, booking.end, now)));
                    if let Some(client) = &booking.client {
                        lines.push(format!("Client: {}", client));
                    }
                }
            }
            SeatStatus::Available => {
                lines.push("Ctrl+click to select".to_string());
            }
        }

        Self {
            status,
            title: format!("{} {}", status.glyph(), seat.display_label()),
            group: seat.group.clone(),
            lines,
        }
    }

    pub fn line_count(&self) -> usize {
        1 + usize::from(self.group.is_some()) + self.lines.len()
    }

    pub fn size(&self, style: &TooltipStyle) -> Vec2 {
        Vec2::new(
            style.width,
            self.line_count() as f32 * style.line_height + 2.0 * style.padding,
        )
    }
}

/// A positioned tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub seat_id: SeatId,
    pub content: TooltipContent,
    /// Top-left corner in canvas coordinates.
    pub pos: Pos2,
    pub size: Vec2,
}

/// Places a box of `size` next to `pointer`, below and to the right by
/// default.
///
/// `visible` is the part of the canvas currently on screen, in canvas
/// coordinates; it moves with the scroll position when the grid overflows the
/// view. A box that would cross its right or bottom edge is anchored on the
/// opposite side of the pointer on that axis, and the result is clamped so
/// the box stays inside `visible` wherever it fits.
pub fn place_tooltip(pointer: Pos2, size: Vec2, visible: Rect, offset: f32) -> Pos2 {
    let mut x = pointer.x + offset;
    if x + size.x > visible.max.x {
        x = pointer.x - offset - size.x;
    }

    let mut y = pointer.y + offset;
    if y + size.y > visible.max.y {
        y = pointer.y - offset - size.y;
    }

    // min before max: a box larger than the view sticks to its top-left corner
    Pos2::new(
        x.min(visible.max.x - size.x).max(visible.min.x),
        y.min(visible.max.y - size.y).max(visible.min.y),
    )
}
