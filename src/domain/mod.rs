//! Pure spatial and temporal logic for the seat map.
//!
//! This module contains the parts of the map that need no rendering surface:
//! - Layout: grid bounds, fit-to-viewport transform, cell rectangles
//! - Status: per-seat status from sessions and bookings at a given instant
//! - Hit testing: pointer position to seat
//!
//! Everything here is a function of a snapshot and can be tested directly.

pub mod hit_test;
pub mod layout;
pub mod status;

pub use hit_test::hit_test;
pub use layout::{
    cell_rect, compute_bounds, fit_to_view, GridBounds, GridLayout, ViewportTransform,
    MIN_CELL_SCALE,
};
pub use status::{
    relevant_booking, remaining_time, resolve_status, BookingIndex, SeatStatus, StatusCounts,
    StatusMap,
};
