//! State management modules for the seat map viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Venue state (data store, venue source, map view)
//! - Booking state (detail seat, selected seats, booking form)
//! - Theme state (theme manager, current theme)

mod booking_state;
mod theme_state;
mod venue_state;

pub use booking_state::BookingState;
pub use theme_state::ThemeState;
pub use venue_state::{VenueSource, VenueState};
