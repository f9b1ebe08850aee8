//! Application-level coordination and workflow management.
//!
//! Handles high-level application operations like venue loading, map
//! intents, the booking flow and error handling.

use crate::app::AppState;
use crate::io::{AsyncLoader, LoadResult};
use crate::state::VenueSource;
use chrono::{DateTime, Duration, Utc};
use seatmap::utils::format_id_list;
use seatmap::{Booking, DemoVenue, MapIntent};
use std::path::PathBuf;
use tracing::{info, warn};

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Managing venue loading workflows
/// - Routing map intents to the detail view and booking form
/// - Completing bookings against the data store
/// - Managing error states
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Initiates asynchronous venue loading.
    ///
    /// Immediately clears the previous venue so the map shows the loading state.
    pub fn open_file(state: &mut AppState, loader: &mut AsyncLoader, path: PathBuf, ctx: &egui::Context) {
        state.reset_venue_state();
        loader.start_file_load(path, ctx);
    }

    /// Checks for loading completion and applies results to application state.
    ///
    /// Called once per frame in the update loop.
    /// Returns true if a load operation completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success { venue, path } => {
                if let Err(e) = state.venue.load_venue(venue, VenueSource::File(path)) {
                    state.error_message = Some(format!("Error loading venue: {}", e));
                }
                true
            }
            LoadResult::Error(error_msg) => {
                warn!(error = %error_msg, "venue load failed");
                state.error_message = Some(format!("Error loading venue: {}", error_msg));
                true
            }
            LoadResult::None => false,
        }
    }

    /// Generates a demo venue around `now` and loads it.
    pub fn open_demo_venue(state: &mut AppState, seed: u64, now: DateTime<Utc>) {
        state.reset_venue_state();
        let demo = DemoVenue {
            seed,
            ..DemoVenue::default()
        };
        if let Err(e) = state.venue.load_venue(demo.generate(now), VenueSource::Demo { seed }) {
            state.error_message = Some(format!("Error generating demo venue: {}", e));
        }
    }

    /// Routes an intent emitted by the map.
    pub fn handle_map_intent(state: &mut AppState, intent: MapIntent) {
        match intent {
            MapIntent::SelectionChanged(selected) => state.booking.set_selected(selected),
            MapIntent::DetailRequested(seat) => state.booking.show_details(seat),
        }
    }

    /// Books the selected seats from `now` for the form's duration, then
    /// clears the selection on the map.
    pub fn complete_booking(state: &mut AppState, now: DateTime<Utc>) {
        let selected = state.booking.selected().clone();
        if selected.is_empty() {
            return;
        }

        let store = state.venue.store();
        let end = now + Duration::minutes(i64::from(state.booking.duration_minutes.max(1)));
        let mut booking = Booking::new(store.next_booking_id(), &[], now, end);
        booking.seat_ids = selected.iter().copied().collect();
        let client = state.booking.client_name.trim();
        if !client.is_empty() {
            booking = booking.with_client(client);
        }
        let booking_id = booking.id;

        match store.add_booking(booking) {
            Ok(()) => {
                info!(booking = %booking_id, seats = selected.len(), "booking completed");
                if let Some(view) = state.venue.map_view_mut() {
                    view.clear_selection();
                }
                state
                    .booking
                    .booking_completed(format!("Booking {} created for seats {}", booking_id, format_id_list(&selected, 8)));
            }
            Err(e) => state.error_message = Some(format!("Booking failed: {}", e)),
        }
    }

    /// Clears the selection on the map and in the booking form.
    pub fn clear_selection(state: &mut AppState) {
        if let Some(view) = state.venue.map_view_mut() {
            view.clear_selection();
        }
        state.booking.set_selected(Default::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use egui::{Pos2, Vec2};
    use seatmap::{Modifiers, Seat, SeatId, SeatStatus, VenueSnapshot};
    use std::collections::BTreeSet;
    use std::time::Instant;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    fn state_with_venue() -> AppState {
        let mut state = AppState::new();
        let venue = VenueSnapshot {
            seats: vec![Seat::new(1, 0.0, 0.0), Seat::new(2, 1.0, 0.0)],
            bookings: vec![],
        };
        state.venue.load_venue(venue, VenueSource::Demo { seed: 0 }).unwrap();
        state
    }

    fn centre_of(state: &AppState, seat: SeatId) -> Pos2 {
        let frame = state.venue.map_view().unwrap().frame().unwrap();
        frame.cell(seat).unwrap().rect.center()
    }

    #[test]
    fn test_intents_route_to_booking_state() {
        let mut state = AppState::new();
        ApplicationCoordinator::handle_map_intent(&mut state, MapIntent::DetailRequested(Seat::new(5, 0.0, 0.0)));
        assert_eq!(state.booking.detail_seat().map(|s| s.id), Some(SeatId(5)));

        let selected = BTreeSet::from([SeatId(1)]);
        ApplicationCoordinator::handle_map_intent(&mut state, MapIntent::SelectionChanged(selected.clone()));
        assert_eq!(state.booking.selected(), &selected);
    }

    #[test]
    fn test_complete_booking_books_and_clears_selection() {
        let mut state = state_with_venue();
        let t0 = Instant::now();
        let view = state.venue.ensure_map_view(Vec2::new(400.0, 300.0), t0).unwrap();
        view.pump(t0, now());

        let pos = centre_of(&state, SeatId(2));
        let view = state.venue.map_view_mut().unwrap();
        let intent = view.pointer_clicked(pos, Modifiers::CTRL).unwrap();
        ApplicationCoordinator::handle_map_intent(&mut state, intent);
        state.booking.client_name = "  Night Owls ".to_string();

        ApplicationCoordinator::complete_booking(&mut state, now());

        let bookings = state.venue.store().bookings();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].seat_ids, vec![SeatId(2)]);
        assert_eq!(bookings[0].client.as_deref(), Some("Night Owls"));
        assert_eq!(bookings[0].end - bookings[0].start, Duration::minutes(60));
        assert!(state.booking.selected().is_empty());
        assert!(state.booking.notice().is_some());

        let view = state.venue.map_view_mut().unwrap();
        assert!(view.selection().selected().is_empty());
        view.pump(t0, now());
        let cell = view.frame().unwrap().cell(SeatId(2)).unwrap();
        assert_eq!(cell.status, SeatStatus::BookedActive);
        assert!(!cell.selected);
    }

    #[test]
    fn test_complete_booking_without_selection_is_noop() {
        let mut state = state_with_venue();
        ApplicationCoordinator::complete_booking(&mut state, now());
        assert!(state.venue.store().bookings().is_empty());
    }

    #[test]
    fn test_demo_venue_replaces_data() {
        let mut state = state_with_venue();
        state.booking.show_details(Seat::new(1, 0.0, 0.0));
        ApplicationCoordinator::open_demo_venue(&mut state, 9, now());

        assert_eq!(state.venue.store().seats().len(), 60);
        assert_eq!(state.venue.source(), &VenueSource::Demo { seed: 9 });
        assert!(state.booking.detail_seat().is_none());
    }
}
