//! Status resolution: what state a seat is in at a given instant.
//!
//! A seat's status is derived from two independent sources, the session
//! embedded in the seat snapshot and the booking list. Precedence is strict:
//!
//! 1. `Occupied` if the seat carries a session, whatever the bookings say
//! 2. `BookedActive` if a covering booking has `start <= now < end`
//! 3. `BookedFuture` if a covering booking has `start > now`
//! 4. `Available` otherwise
//!
//! Bookings that have already ended are ignored.

use crate::model::{Booking, Seat, SeatId, Session, SessionTiming};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// Display status of a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatStatus {
    Occupied,
    BookedActive,
    BookedFuture,
    Available,
}

impl SeatStatus {
    /// All statuses in precedence order.
    pub const ALL: [SeatStatus; 4] = [
        SeatStatus::Occupied,
        SeatStatus::BookedActive,
        SeatStatus::BookedFuture,
        SeatStatus::Available,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            SeatStatus::Occupied => "●",
            SeatStatus::BookedActive => "◆",
            SeatStatus::BookedFuture => "◇",
            SeatStatus::Available => "○",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeatStatus::Occupied => "Occupied",
            SeatStatus::BookedActive => "Booked now",
            SeatStatus::BookedFuture => "Booked later",
            SeatStatus::Available => "Available",
        }
    }

    pub fn is_available(self) -> bool {
        self == SeatStatus::Available
    }
}

/// Resolves the status of `seat` at `now`.
///
/// `bookings` may contain bookings for other seats; only those covering
/// `seat` are considered.
pub fn resolve_status<'a>(
    seat: &Seat,
    bookings: impl IntoIterator<Item = &'a Booking>,
    now: DateTime<Utc>,
) -> SeatStatus {
    if seat.session.is_some() {
        return SeatStatus::Occupied;
    }

    let mut has_future = false;
    for booking in bookings.into_iter().filter(|b| b.covers(seat.id)) {
        if booking.is_active_at(now) {
            return SeatStatus::BookedActive;
        }
        has_future |= booking.is_future_at(now);
    }

    if has_future {
        SeatStatus::BookedFuture
    } else {
        SeatStatus::Available
    }
}

/// The booking that explains a booked status: the active one if any,
/// otherwise the next one to start.
pub fn relevant_booking<'a>(
    seat_id: SeatId,
    bookings: impl IntoIterator<Item = &'a Booking>,
    now: DateTime<Utc>,
) -> Option<&'a Booking> {
    let mut next: Option<&Booking> = None;
    for booking in bookings.into_iter().filter(|b| b.covers(seat_id)) {
        if booking.is_active_at(now) {
            return Some(booking);
        }
        if booking.is_future_at(now) && next.map_or(true, |n| booking.start < n.start) {
            next = Some(booking);
        }
    }
    next
}

/// Time left on a session.
///
/// An explicit remaining duration is used as given; otherwise the end is
/// derived from start plus length and the result clamps at zero. Returns
/// `None` when the stored seconds do not fit a duration or push the end past
/// the representable calendar.
pub fn remaining_time(session: &Session, now: DateTime<Utc>) -> Option<Duration> {
    match session.timing {
        SessionTiming::Remaining { remaining_secs } => Duration::try_seconds(remaining_secs),
        SessionTiming::Started {
            started_at,
            duration_secs,
        } => {
            let end = started_at.checked_add_signed(Duration::try_seconds(duration_secs)?)?;
            Some((end - now).max(Duration::zero()))
        }
    }
}

/// Bookings grouped by the seats they cover.
///
/// Bookings naming seat ids that are not in the current seat list simply
/// never get looked up.
#[derive(Debug, Default)]
pub struct BookingIndex<'a> {
    by_seat: HashMap<SeatId, Vec<&'a Booking>>,
}

impl<'a> BookingIndex<'a> {
    pub fn new(bookings: &'a [Booking]) -> Self {
        let mut by_seat: HashMap<SeatId, Vec<&'a Booking>> = HashMap::new();
        for booking in bookings {
            for seat_id in &booking.seat_ids {
                by_seat.entry(*seat_id).or_default().push(booking);
            }
        }
        Self { by_seat }
    }

    pub fn for_seat(&self, seat_id: SeatId) -> &[&'a Booking] {
        self.by_seat.get(&seat_id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Per-status seat counts, for the legend and the status bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub occupied: usize,
    pub booked_active: usize,
    pub booked_future: usize,
    pub available: usize,
}

impl StatusCounts {
    pub fn get(&self, status: SeatStatus) -> usize {
        match status {
            SeatStatus::Occupied => self.occupied,
            SeatStatus::BookedActive => self.booked_active,
            SeatStatus::BookedFuture => self.booked_future,
            SeatStatus::Available => self.available,
        }
    }

    pub fn total(&self) -> usize {
        self.occupied + self.booked_active + self.booked_future + self.available
    }

    fn add(&mut self, status: SeatStatus) {
        match status {
            SeatStatus::Occupied => self.occupied += 1,
            SeatStatus::BookedActive => self.booked_active += 1,
            SeatStatus::BookedFuture => self.booked_future += 1,
            SeatStatus::Available => self.available += 1,
        }
    }
}

/// Statuses of every seat, resolved against a single `now`.
#[derive(Debug, Clone)]
pub struct StatusMap {
    statuses: HashMap<SeatId, SeatStatus>,
    counts: StatusCounts,
    now: DateTime<Utc>,
}

impl StatusMap {
    /// Resolves all seats at once so the whole map shares one snapshot time.
    pub fn resolve(seats: &[Seat], bookings: &[Booking], now: DateTime<Utc>) -> Self {
        let index = BookingIndex::new(bookings);
        let mut statuses = HashMap::with_capacity(seats.len());
        let mut counts = StatusCounts::default();

        for seat in seats {
            let status = resolve_status(seat, index.for_seat(seat.id).iter().copied(), now);
            statuses.insert(seat.id, status);
            counts.add(status);
        }

        Self { statuses, counts, now }
    }

    pub fn get(&self, seat_id: SeatId) -> Option<SeatStatus> {
        self.statuses.get(&seat_id).copied()
    }

    pub fn counts(&self) -> StatusCounts {
        self.counts
    }

    /// The instant every status in this map was resolved against.
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_no_data_is_available() {
        let seat = Seat::new(1, 0.0, 0.0);
        assert_eq!(resolve_status(&seat, std::iter::empty(), noon()), SeatStatus::Available);
    }

    #[test]
    fn test_session_beats_active_booking() {
        let now = noon();
        let seat = Seat::new(1, 0.0, 0.0).with_session(Session::with_remaining("alice", Duration::minutes(30)));
        let bookings = vec![Booking::new(1, &[1], now - Duration::hours(1), now + Duration::hours(1))];
        assert_eq!(resolve_status(&seat, &bookings, now), SeatStatus::Occupied);
    }

    #[test]
    fn test_active_beats_future() {
        let now = noon();
        let seat = Seat::new(2, 0.0, 0.0);
        let bookings = vec![
            Booking::new(1, &[2], now + Duration::hours(2), now + Duration::hours(3)),
            Booking::new(2, &[2], now - Duration::hours(1), now + Duration::hours(1)),
        ];
        assert_eq!(resolve_status(&seat, &bookings, now), SeatStatus::BookedActive);
    }

    #[test]
    fn test_window_edges() {
        let now = noon();
        let seat = Seat::new(2, 0.0, 0.0);

        let starts_now = vec![Booking::new(1, &[2], now, now + Duration::hours(1))];
        assert_eq!(resolve_status(&seat, &starts_now, now), SeatStatus::BookedActive);

        let ends_now = vec![Booking::new(1, &[2], now - Duration::hours(1), now)];
        assert_eq!(resolve_status(&seat, &ends_now, now), SeatStatus::Available);

        let later = vec![Booking::new(1, &[2], now + Duration::seconds(1), now + Duration::hours(1))];
        assert_eq!(resolve_status(&seat, &later, now), SeatStatus::BookedFuture);
    }

    #[test]
    fn test_bookings_for_other_seats_are_ignored() {
        let now = noon();
        let seat = Seat::new(2, 0.0, 0.0);
        let bookings = vec![Booking::new(1, &[3, 99], now - Duration::hours(1), now + Duration::hours(1))];
        assert_eq!(resolve_status(&seat, &bookings, now), SeatStatus::Available);
    }

    #[test]
    fn test_relevant_booking_prefers_active_then_earliest_future() {
        let now = noon();
        let bookings = vec![
            Booking::new(1, &[2], now + Duration::hours(5), now + Duration::hours(6)),
            Booking::new(2, &[2], now + Duration::hours(2), now + Duration::hours(3)),
            Booking::new(3, &[2], now - Duration::hours(3), now - Duration::hours(2)),
        ];
        let found = relevant_booking(SeatId(2), &bookings, now).unwrap();
        assert_eq!(found.id.0, 2);

        let mut with_active = bookings.clone();
        with_active.push(Booking::new(4, &[2], now - Duration::minutes(5), now + Duration::minutes(5)));
        assert_eq!(relevant_booking(SeatId(2), &with_active, now).unwrap().id.0, 4);

        assert!(relevant_booking(SeatId(7), &bookings, now).is_none());
    }

    #[test]
    fn test_remaining_time_explicit_and_derived() {
        let now = noon();
        let explicit = Session::with_remaining("alice", Duration::minutes(42));
        assert_eq!(remaining_time(&explicit, now), Some(Duration::minutes(42)));

        let derived = Session::started("bob", now - Duration::minutes(20), Duration::hours(1));
        assert_eq!(remaining_time(&derived, now), Some(Duration::minutes(40)));

        let overrun = Session::started("carol", now - Duration::hours(2), Duration::hours(1));
        assert_eq!(remaining_time(&overrun, now), Some(Duration::zero()));
    }

    #[test]
    fn test_remaining_time_out_of_range_is_unknown() {
        let now = noon();
        let huge_length = Session {
            occupant: "mallory".to_string(),
            timing: SessionTiming::Started {
                started_at: now,
                duration_secs: i64::MAX,
            },
        };
        assert_eq!(remaining_time(&huge_length, now), None);

        let huge_remaining = Session {
            occupant: "mallory".to_string(),
            timing: SessionTiming::Remaining {
                remaining_secs: i64::MIN,
            },
        };
        assert_eq!(remaining_time(&huge_remaining, now), None);

        // Fits a duration but not the calendar
        let past_the_end = Session {
            occupant: "mallory".to_string(),
            timing: SessionTiming::Started {
                started_at: now,
                duration_secs: i64::MAX / 1000,
            },
        };
        assert_eq!(remaining_time(&past_the_end, now), None);
    }

    #[test]
    fn test_status_map_counts() {
        let now = noon();
        let seats = vec![
            Seat::new(1, 0.0, 0.0).with_session(Session::with_remaining("alice", Duration::minutes(5))),
            Seat::new(2, 1.0, 0.0),
            Seat::new(3, 2.0, 0.0),
            Seat::new(4, 3.0, 0.0),
            Seat::unplaced(5),
        ];
        let bookings = vec![
            Booking::new(1, &[2], now - Duration::hours(1), now + Duration::hours(1)),
            Booking::new(2, &[3, 42], now + Duration::hours(1), now + Duration::hours(2)),
        ];
        let map = StatusMap::resolve(&seats, &bookings, now);

        assert_eq!(map.get(SeatId(1)), Some(SeatStatus::Occupied));
        assert_eq!(map.get(SeatId(2)), Some(SeatStatus::BookedActive));
        assert_eq!(map.get(SeatId(3)), Some(SeatStatus::BookedFuture));
        assert_eq!(map.get(SeatId(4)), Some(SeatStatus::Available));
        assert_eq!(map.get(SeatId(42)), None);
        assert_eq!(map.now(), now);

        let counts = map.counts();
        assert_eq!(counts.occupied, 1);
        assert_eq!(counts.booked_active, 1);
        assert_eq!(counts.booked_future, 1);
        assert_eq!(counts.available, 2);
        assert_eq!(counts.total(), seats.len());
    }
}
