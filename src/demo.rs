//! Seeded demo venues.
//!
//! Generates a rectangular hall with an aisle every few columns, live
//! sessions and bookings scattered around a reference time. The same seed
//! and reference time always give the same venue.

use crate::model::{Booking, Seat, Session, VenueSnapshot};
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const OCCUPANTS: &[&str] = &["alice", "bob", "carol", "dave", "erin", "frank", "grace", "heidi"];
const CLIENTS: &[&str] = &["Acme Esports", "Night Owls", "Team Falcon", "Walk-in", "Birthday party"];

/// Parameters for a generated venue.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoVenue {
    pub rows: u32,
    pub cols: u32,
    /// A one-column aisle is left after every `aisle_every` seats; 0 for none.
    pub aisle_every: u32,
    /// Probability that a seat has a live session.
    pub occupancy: f64,
    /// Probability that a free seat gets a booking.
    pub booking_rate: f64,
    pub seed: u64,
}

impl Default for DemoVenue {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 10,
            aisle_every: 5,
            occupancy: 0.3,
            booking_rate: 0.35,
            seed: 42,
        }
    }
}

impl DemoVenue {
    /// Builds the venue around `now`.
    pub fn generate(&self, now: DateTime<Utc>) -> VenueSnapshot {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut seats = Vec::with_capacity((self.rows * self.cols) as usize);
        let mut bookings = Vec::new();

        for row in 0..self.rows {
            let row_name = row_name(row);
            for col in 0..self.cols {
                let id = u64::from(row * self.cols + col + 1);
                let aisles = if self.aisle_every > 0 { col / self.aisle_every } else { 0 };
                let x = (col + aisles) as f32;

                let mut seat = Seat::new(id, x, row as f32)
                    .with_label(format!("{}{}", row_name, col + 1))
                    .with_group(format!("Row {}", row_name));

                if rng.gen_bool(self.occupancy.clamp(0.0, 1.0)) {
                    seat = seat.with_session(random_session(&mut rng, now));
                } else if rng.gen_bool(self.booking_rate.clamp(0.0, 1.0)) {
                    bookings.push(random_booking(&mut rng, bookings.len() as u64 + 1, id, now));
                }
                seats.push(seat);
            }
        }

        VenueSnapshot { seats, bookings }
    }
}

/// "A".."Z", then "AA", "AB", ...
fn row_name(row: u32) -> String {
    let mut n = row;
    let mut name = Vec::new();
    loop {
        name.push(b'A' + (n % 26) as u8);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    name.reverse();
    String::from_utf8_lossy(&name).into_owned()
}

fn random_session(rng: &mut StdRng, now: DateTime<Utc>) -> Session {
    let occupant = OCCUPANTS[rng.gen_range(0..OCCUPANTS.len())];
    if rng.gen_bool(0.5) {
        Session::with_remaining(occupant, Duration::minutes(rng.gen_range(5..180)))
    } else {
        let length = Duration::hours(rng.gen_range(1..4));
        let elapsed = Duration::minutes(rng.gen_range(0..60));
        Session::started(occupant, now - elapsed, length)
    }
}

fn random_booking(rng: &mut StdRng, booking_id: u64, seat_id: u64, now: DateTime<Utc>) -> Booking {
    // Roughly a third are running right now, the rest start later today.
    let start = if rng.gen_bool(0.33) {
        now - Duration::minutes(rng.gen_range(1..90))
    } else {
        now + Duration::minutes(rng.gen_range(15..480))
    };
    let end = start + Duration::hours(rng.gen_range(1..4));
    let mut booking = Booking::new(booking_id, &[seat_id], start, end);
    if rng.gen_bool(0.8) {
        booking = booking.with_client(CLIENTS[rng.gen_range(0..CLIENTS.len())]);
    }
    booking
}
