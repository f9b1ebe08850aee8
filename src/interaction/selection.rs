//! Selection and hover state management.
//!
//! This module encapsulates the multi-select set and the single hovered seat.

use crate::model::SeatId;
use std::collections::BTreeSet;

/// State related to user selection and hover.
///
/// Responsibilities:
/// - Tracking the set of seats picked for booking
/// - Tracking the seat under the pointer
/// - Providing intent-revealing selection queries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Seats picked for booking, ordered by id
    selected: BTreeSet<SeatId>,
    /// Seat currently under the pointer
    hovered: Option<SeatId>,
}

impl SelectionState {
    /// Creates a new selection state with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Selection Queries =====

    pub fn selected(&self) -> &BTreeSet<SeatId> {
        &self.selected
    }

    pub fn is_selected(&self, seat_id: SeatId) -> bool {
        self.selected.contains(&seat_id)
    }

    // ===== Hover Queries =====

    pub fn hovered(&self) -> Option<SeatId> {
        self.hovered
    }

    pub fn is_hovered(&self, seat_id: SeatId) -> bool {
        self.hovered == Some(seat_id)
    }

    // ===== Mutations =====

    /// Adds `seat_id` to the selection, or removes it if present.
    ///
    /// # Returns
    /// `true` if the seat is selected afterwards.
    pub fn toggle(&mut self, seat_id: SeatId) -> bool {
        if self.selected.remove(&seat_id) {
            false
        } else {
            self.selected.insert(seat_id);
            true
        }
    }

    /// Empties the selection. Returns `true` if anything was selected.
    pub fn clear_selection(&mut self) -> bool {
        let had_any = !self.selected.is_empty();
        self.selected.clear();
        had_any
    }

    /// Sets the hovered seat. Returns `true` if it changed.
    pub fn set_hover(&mut self, seat_id: Option<SeatId>) -> bool {
        if self.hovered == seat_id {
            return false;
        }
        self.hovered = seat_id;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut state = SelectionState::new();
        assert!(state.toggle(SeatId(1)));
        assert!(state.is_selected(SeatId(1)));
        assert!(!state.toggle(SeatId(1)));
        assert!(state.selected().is_empty());
    }

    #[test]
    fn test_set_hover_reports_changes_only() {
        let mut state = SelectionState::new();
        assert!(state.set_hover(Some(SeatId(4))));
        assert!(!state.set_hover(Some(SeatId(4))));
        assert!(state.is_hovered(SeatId(4)));
        assert!(state.set_hover(None));
        assert!(!state.set_hover(None));
    }

    #[test]
    fn test_clear_selection_keeps_hover() {
        let mut state = SelectionState::new();
        state.toggle(SeatId(1));
        state.set_hover(Some(SeatId(2)));
        assert!(state.clear_selection());
        assert!(!state.clear_selection());
        assert_eq!(state.hovered(), Some(SeatId(2)));
    }
}
