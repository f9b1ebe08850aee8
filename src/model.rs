//! Typed venue records: seats, their embedded sessions, and bookings.
//!
//! Records are decoded with serde at the store boundary and are read-only to
//! the map view. The JSON shape of a venue file is:
//!
//! ```json
//! {
//!   "seats": [
//!     { "id": 1, "label": "A1", "group": "Row A", "x": 0, "y": 0,
//!       "session": { "occupant": "alice", "remaining_secs": 1800 } }
//!   ],
//!   "bookings": [
//!     { "id": 7, "seat_ids": [2], "start": "2026-10-16T10:00:00Z",
//!       "end": "2026-10-16T12:00:00Z", "client": "bob" }
//!   ]
//! }
//! ```

use crate::error::DataError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// Stable seat identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatId(pub u64);

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable booking identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(pub u64);

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bookable unit placed on the venue lattice.
///
/// `x`/`y` are lattice coordinates. A seat missing either coordinate, or
/// carrying a non-finite one, is unplaced and takes no part in layout or
/// hit testing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: SeatId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default)]
    pub x: Option<f32>,
    #[serde(default)]
    pub y: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
}

impl Seat {
    pub fn new(id: u64, x: f32, y: f32) -> Self {
        Self {
            id: SeatId(id),
            label: None,
            group: None,
            x: Some(x),
            y: Some(y),
            session: None,
        }
    }

    /// A seat without a grid position.
    pub fn unplaced(id: u64) -> Self {
        Self {
            id: SeatId(id),
            label: None,
            group: None,
            x: None,
            y: None,
            session: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Returns the lattice position if both coordinates are present and finite.
    pub fn grid_pos(&self) -> Option<(f32, f32)> {
        match (self.x, self.y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some((x, y)),
            _ => None,
        }
    }

    /// Label to paint on the cell; falls back to the numeric id.
    pub fn display_label(&self) -> String {
        match &self.label {
            Some(label) if !label.is_empty() => label.clone(),
            _ => self.id.to_string(),
        }
    }
}

/// How long a session runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SessionTiming {
    /// Remaining time reported directly by the upstream store.
    Remaining { remaining_secs: i64 },
    /// Start time plus total length; remaining time is derived.
    Started {
        started_at: DateTime<Utc>,
        duration_secs: i64,
    },
}

/// A live occupation of a seat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub occupant: String,
    #[serde(flatten)]
    pub timing: SessionTiming,
}

impl Session {
    pub fn with_remaining(occupant: impl Into<String>, remaining: Duration) -> Self {
        Self {
            occupant: occupant.into(),
            timing: SessionTiming::Remaining {
                remaining_secs: remaining.num_seconds(),
            },
        }
    }

    pub fn started(occupant: impl Into<String>, started_at: DateTime<Utc>, duration: Duration) -> Self {
        Self {
            occupant: occupant.into(),
            timing: SessionTiming::Started {
                started_at,
                duration_secs: duration.num_seconds(),
            },
        }
    }
}

/// A reserved, time-windowed claim on one or more seats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub seat_ids: Vec<SeatId>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Booking {
    pub fn new(id: u64, seat_ids: &[u64], start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            id: BookingId(id),
            seat_ids: seat_ids.iter().copied().map(SeatId).collect(),
            start,
            end,
            client: None,
            notes: None,
        }
    }

    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }

    pub fn covers(&self, seat_id: SeatId) -> bool {
        self.seat_ids.contains(&seat_id)
    }

    /// `start <= now < end`.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.start <= now && now < self.end
    }

    pub fn is_future_at(&self, now: DateTime<Utc>) -> bool {
        self.start > now
    }
}

/// A complete venue payload as exchanged with the data store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VenueSnapshot {
    pub seats: Vec<Seat>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

impl VenueSnapshot {
    /// Decodes and validates a venue from JSON text.
    pub fn from_json(text: &str) -> Result<Self, DataError> {
        let snapshot: VenueSnapshot = serde_json::from_str(text)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Reads, decodes and validates a venue file.
    pub fn from_path(path: &Path) -> Result<Self, DataError> {
        let text = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> Result<String, DataError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects payloads the store cannot accept: duplicate seat ids and
    /// bookings whose window is inverted.
    pub fn validate(&self) -> Result<(), DataError> {
        let mut seen = HashSet::with_capacity(self.seats.len());
        for seat in &self.seats {
            if !seen.insert(seat.id) {
                return Err(DataError::DuplicateSeatId(seat.id));
            }
        }
        validate_bookings(&self.bookings)
    }
}

pub(crate) fn validate_bookings(bookings: &[Booking]) -> Result<(), DataError> {
    match bookings.iter().find(|b| b.end < b.start) {
        Some(bad) => Err(DataError::InvalidBooking(bad.id)),
        None => Ok(()),
    }
}
