//! Venue data store.
//!
//! The store owns the current seat and booking snapshots and pushes change
//! notifications to subscribers. It is constructed explicitly and shared by
//! handle; cloning a [`SeatStore`] yields another handle to the same data.
//!
//! Snapshots are held as `Arc<[T]>` so a reader can keep the slice it was
//! given for a whole paint pass while newer data is published.

use crate::error::DataError;
use crate::model::{validate_bookings, Booking, Seat, VenueSnapshot};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use tracing::{debug, warn};

/// Which slice of the store changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreUpdate {
    Seats,
    Bookings,
}

#[derive(Debug)]
struct StoreInner {
    seats: Arc<[Seat]>,
    bookings: Arc<[Booking]>,
    subscribers: Vec<(u64, Sender<StoreUpdate>)>,
    next_subscriber: u64,
}

impl StoreInner {
    fn publish(&mut self, update: StoreUpdate) {
        // A send only fails once the receiver is gone.
        self.subscribers.retain(|(id, tx)| {
            let alive = tx.send(update).is_ok();
            if !alive {
                debug!(subscriber = id, "dropping disconnected subscriber");
            }
            alive
        });
    }
}

/// Shared handle to the seat and booking snapshots.
#[derive(Debug, Clone)]
pub struct SeatStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl Default for SeatStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SeatStore {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                seats: Arc::from(Vec::new()),
                bookings: Arc::from(Vec::new()),
                subscribers: Vec::new(),
                next_subscriber: 0,
            })),
        }
    }

    /// Creates a store already holding `snapshot`.
    pub fn with_snapshot(snapshot: VenueSnapshot) -> Result<Self, DataError> {
        let store = Self::new();
        store.load_snapshot(snapshot)?;
        Ok(store)
    }

    // ===== Snapshots =====

    pub fn seats(&self) -> Arc<[Seat]> {
        Arc::clone(&self.inner.borrow().seats)
    }

    pub fn bookings(&self) -> Arc<[Booking]> {
        Arc::clone(&self.inner.borrow().bookings)
    }

    // ===== Mutations =====

    /// Replaces the seat list wholesale.
    ///
    /// A seat whose id already appeared earlier in `seats` is dropped with a
    /// warning; the first occurrence is kept.
    pub fn replace_seats(&self, seats: Vec<Seat>) {
        let mut seen = std::collections::HashSet::with_capacity(seats.len());
        let mut kept = Vec::with_capacity(seats.len());
        for seat in seats {
            if seen.insert(seat.id) {
                kept.push(seat);
            } else {
                warn!(seat = %seat.id, "duplicate seat id ignored");
            }
        }

        let mut inner = self.inner.borrow_mut();
        debug!(count = kept.len(), "seats replaced");
        inner.seats = Arc::from(kept);
        inner.publish(StoreUpdate::Seats);
    }

    /// Replaces the booking list wholesale.
    pub fn replace_bookings(&self, bookings: Vec<Booking>) -> Result<(), DataError> {
        validate_bookings(&bookings)?;
        let mut inner = self.inner.borrow_mut();
        debug!(count = bookings.len(), "bookings replaced");
        inner.bookings = Arc::from(bookings);
        inner.publish(StoreUpdate::Bookings);
        Ok(())
    }

    /// Appends one booking, as the booking flow does on completion.
    pub fn add_booking(&self, booking: Booking) -> Result<(), DataError> {
        validate_bookings(std::slice::from_ref(&booking))?;
        let mut inner = self.inner.borrow_mut();
        let mut bookings = inner.bookings.to_vec();
        debug!(booking = %booking.id, seats = booking.seat_ids.len(), "booking added");
        bookings.push(booking);
        inner.bookings = Arc::from(bookings);
        inner.publish(StoreUpdate::Bookings);
        Ok(())
    }

    /// Replaces both slices from a validated venue payload.
    pub fn load_snapshot(&self, snapshot: VenueSnapshot) -> Result<(), DataError> {
        snapshot.validate()?;
        let VenueSnapshot { seats, bookings } = snapshot;
        let mut inner = self.inner.borrow_mut();
        debug!(seats = seats.len(), bookings = bookings.len(), "venue snapshot loaded");
        inner.seats = Arc::from(seats);
        inner.bookings = Arc::from(bookings);
        inner.publish(StoreUpdate::Seats);
        inner.publish(StoreUpdate::Bookings);
        Ok(())
    }

    /// Next booking id not used by any booking in the store.
    pub fn next_booking_id(&self) -> u64 {
        self.inner
            .borrow()
            .bookings
            .iter()
            .map(|b| b.id.0)
            .max()
            .map_or(1, |max| max + 1)
    }

    // ===== Subscriptions =====

    /// Registers a subscriber.
    ///
    /// Updates are queued on the returned receiver and never delivered
    /// re-entrantly. Dropping or disposing the [`Subscription`] unregisters.
    pub fn subscribe(&self) -> (Receiver<StoreUpdate>, Subscription) {
        let (tx, rx) = channel();
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_subscriber;
        inner.next_subscriber += 1;
        inner.subscribers.push((id, tx));

        let subscription = Subscription {
            store: Rc::downgrade(&self.inner),
            id,
            active: true,
        };
        (rx, subscription)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

/// Disposal handle for a store subscription.
#[derive(Debug)]
pub struct Subscription {
    store: Weak<RefCell<StoreInner>>,
    id: u64,
    active: bool,
}

impl Subscription {
    /// Unregisters the subscriber. Calling it again does nothing.
    pub fn dispose(&mut self) {
        if !std::mem::take(&mut self.active) {
            return;
        }
        if let Some(store) = self.store.upgrade() {
            store.borrow_mut().subscribers.retain(|(id, _)| *id != self.id);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn test_replace_notifies_subscribers() {
        let store = SeatStore::new();
        let (rx, _sub) = store.subscribe();

        store.replace_seats(vec![Seat::new(1, 0.0, 0.0)]);
        assert_eq!(rx.try_recv(), Ok(StoreUpdate::Seats));
        assert!(rx.try_recv().is_err());
        assert_eq!(store.seats().len(), 1);
    }

    #[test]
    fn test_duplicate_seat_ids_keep_first() {
        let store = SeatStore::new();
        store.replace_seats(vec![
            Seat::new(1, 0.0, 0.0).with_label("first"),
            Seat::new(1, 5.0, 5.0).with_label("second"),
            Seat::new(2, 1.0, 0.0),
        ]);
        let seats = store.seats();
        assert_eq!(seats.len(), 2);
        assert_eq!(seats[0].label.as_deref(), Some("first"));
    }

    #[test]
    fn test_snapshot_outlives_replacement() {
        let store = SeatStore::new();
        store.replace_seats(vec![Seat::new(1, 0.0, 0.0)]);
        let held = store.seats();
        store.replace_seats(vec![Seat::new(2, 0.0, 0.0), Seat::new(3, 1.0, 0.0)]);
        assert_eq!(held.len(), 1);
        assert_eq!(store.seats().len(), 2);
    }

    #[test]
    fn test_add_booking_rejects_inverted_window() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        let store = SeatStore::new();
        let (rx, _sub) = store.subscribe();

        assert!(store
            .add_booking(Booking::new(1, &[1], now, now - Duration::hours(1)))
            .is_err());
        assert!(rx.try_recv().is_err());

        store
            .add_booking(Booking::new(1, &[1], now, now + Duration::hours(1)))
            .unwrap();
        assert_eq!(rx.try_recv(), Ok(StoreUpdate::Bookings));
        assert_eq!(store.next_booking_id(), 2);
    }

    #[test]
    fn test_dispose_unregisters() {
        let store = SeatStore::new();
        let (_rx, mut sub) = store.subscribe();
        let (_rx2, sub2) = store.subscribe();
        assert_eq!(store.subscriber_count(), 2);

        sub.dispose();
        sub.dispose();
        assert!(!sub.is_active());
        assert_eq!(store.subscriber_count(), 1);

        drop(sub2);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_dropped_receiver_is_pruned_on_publish() {
        let store = SeatStore::new();
        let (rx, _sub) = store.subscribe();
        drop(rx);
        store.replace_seats(vec![]);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_load_snapshot_publishes_both_slices() {
        let store = SeatStore::new();
        let (rx, _sub) = store.subscribe();
        store
            .load_snapshot(VenueSnapshot {
                seats: vec![Seat::new(1, 0.0, 0.0)],
                bookings: vec![],
            })
            .unwrap();
        let updates: Vec<_> = rx.try_iter().collect();
        assert_eq!(updates, vec![StoreUpdate::Seats, StoreUpdate::Bookings]);
    }
}
