//! Error types for the seat map library.
//!
//! Data anomalies inside a well-formed snapshot (unplaced seats, duplicate
//! coordinates, bookings for unknown seats) are not errors; they are filtered
//! out where they would matter. The types here cover the remaining cases: a
//! venue payload that cannot be decoded at the store boundary, and a map view
//! that cannot be constructed.

use crate::model::{BookingId, SeatId};
use std::path::PathBuf;
use thiserror::Error;

/// Failure to construct a [`crate::MapView`].
///
/// Construction errors are fatal for the view: there is no partially working
/// map without a surface to draw on.
#[derive(Debug, Error, PartialEq)]
pub enum MapViewError {
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("invalid viewport size {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}

/// Failure to accept a venue snapshot at the data-store boundary.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("malformed venue json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read venue file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("booking {0} ends before it starts")]
    InvalidBooking(BookingId),

    #[error("seat id {0} appears more than once")]
    DuplicateSeatId(SeatId),
}
