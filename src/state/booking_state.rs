//! Detail view and booking form state.

use seatmap::{Seat, SeatId};
use std::collections::BTreeSet;

/// Default booking length offered by the form.
pub const DEFAULT_BOOKING_MINUTES: u32 = 60;

/// State behind the details and selection panels.
///
/// The map owns the authoritative selection; this is the copy carried by
/// the last selection-changed notification, used to build a booking.
#[derive(Debug, Clone)]
pub struct BookingState {
    detail_seat: Option<Seat>,
    selected: BTreeSet<SeatId>,
    /// Client name typed into the booking form.
    pub client_name: String,
    pub duration_minutes: u32,
    notice: Option<String>,
}

impl Default for BookingState {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingState {
    pub fn new() -> Self {
        Self {
            detail_seat: None,
            selected: BTreeSet::new(),
            client_name: String::new(),
            duration_minutes: DEFAULT_BOOKING_MINUTES,
            notice: None,
        }
    }

    // ===== Queries =====

    pub fn detail_seat(&self) -> Option<&Seat> {
        self.detail_seat.as_ref()
    }

    pub fn selected(&self) -> &BTreeSet<SeatId> {
        &self.selected
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    // ===== Mutations =====

    pub fn show_details(&mut self, seat: Seat) {
        self.detail_seat = Some(seat);
    }

    pub fn close_details(&mut self) {
        self.detail_seat = None;
    }

    pub fn set_selected(&mut self, selected: BTreeSet<SeatId>) {
        self.selected = selected;
        self.notice = None;
    }

    /// Clears the selection and form after a completed booking.
    pub fn booking_completed(&mut self, notice: String) {
        self.selected.clear();
        self.client_name.clear();
        self.notice = Some(notice);
    }

    /// Drops everything tied to the previous venue.
    pub fn reset(&mut self) {
        self.detail_seat = None;
        self.selected.clear();
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_completed_clears_selection_and_form() {
        let mut state = BookingState::new();
        state.set_selected(BTreeSet::from([SeatId(1), SeatId(2)]));
        state.client_name = "Night Owls".to_string();

        state.booking_completed("Booked 2 seats".to_string());
        assert!(state.selected().is_empty());
        assert!(state.client_name.is_empty());
        assert_eq!(state.notice(), Some("Booked 2 seats"));
        assert_eq!(state.duration_minutes, DEFAULT_BOOKING_MINUTES);
    }

    #[test]
    fn test_reset_drops_details() {
        let mut state = BookingState::new();
        state.show_details(Seat::new(4, 0.0, 0.0));
        assert!(state.detail_seat().is_some());
        state.reset();
        assert!(state.detail_seat().is_none());
    }
}
