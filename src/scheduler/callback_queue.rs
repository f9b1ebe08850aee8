//! Cooperative callback host for the render scheduler.
//!
//! The scheduler never sleeps or spawns; it asks a [`FrameHost`] for a
//! next-frame callback or a one-shot timer and is told later that one fired.
//! [`CallbackQueue`] is the host used by the map view: a manual clock that the
//! embedding event loop advances once per UI frame.

use std::time::{Duration, Instant};

/// Handle to a scheduled callback, used for cancellation and to recognise
/// stale firings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CallbackId(u64);

/// Source of next-frame callbacks and one-shot timers.
pub trait FrameHost {
    /// Schedules a callback for the next frame.
    fn request_frame(&mut self) -> CallbackId;

    /// Cancels a frame callback. Unknown or already fired ids are ignored.
    fn cancel_frame(&mut self, id: CallbackId);

    /// Schedules a callback `delay` from now.
    fn start_timer(&mut self, delay: Duration) -> CallbackId;

    /// Cancels a timer. Unknown or already fired ids are ignored.
    fn cancel_timer(&mut self, id: CallbackId);
}

/// Manual-clock callback host.
///
/// Timers become due once the clock passes their deadline; frame callbacks
/// are due on the next [`CallbackQueue::take_frames`].
#[derive(Debug)]
pub struct CallbackQueue {
    now: Instant,
    next_id: u64,
    frames: Vec<CallbackId>,
    timers: Vec<(Instant, CallbackId)>,
}

impl CallbackQueue {
    pub fn new(now: Instant) -> Self {
        Self {
            now,
            next_id: 0,
            frames: Vec::new(),
            timers: Vec::new(),
        }
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    /// Moves the clock forward. Earlier instants are ignored.
    pub fn advance_to(&mut self, now: Instant) {
        if now > self.now {
            self.now = now;
        }
    }

    /// Removes and returns every timer whose deadline has passed, earliest first.
    pub fn take_due_timers(&mut self) -> Vec<CallbackId> {
        let now = self.now;
        let mut due: Vec<(Instant, CallbackId)> = Vec::new();
        self.timers.retain(|&(deadline, id)| {
            if deadline <= now {
                due.push((deadline, id));
                false
            } else {
                true
            }
        });
        due.sort();
        due.into_iter().map(|(_, id)| id).collect()
    }

    /// Removes and returns every pending frame callback.
    pub fn take_frames(&mut self) -> Vec<CallbackId> {
        std::mem::take(&mut self.frames)
    }

    /// When the host loop should wake up next: now if a frame is pending,
    /// otherwise the earliest timer deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        if !self.frames.is_empty() {
            return Some(self.now);
        }
        self.timers.iter().map(|&(deadline, _)| deadline).min()
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn is_idle(&self) -> bool {
        self.frames.is_empty() && self.timers.is_empty()
    }

    fn next_id(&mut self) -> CallbackId {
        self.next_id += 1;
        CallbackId(self.next_id)
    }
}

impl FrameHost for CallbackQueue {
    fn request_frame(&mut self) -> CallbackId {
        let id = self.next_id();
        self.frames.push(id);
        id
    }

    fn cancel_frame(&mut self, id: CallbackId) {
        self.frames.retain(|&f| f != id);
    }

    fn start_timer(&mut self, delay: Duration) -> CallbackId {
        let id = self.next_id();
        self.timers.push((self.now + delay, id));
        id
    }

    fn cancel_timer(&mut self, id: CallbackId) {
        self.timers.retain(|&(_, t)| t != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_fires_only_after_deadline() {
        let t0 = Instant::now();
        let mut queue = CallbackQueue::new(t0);
        let id = queue.start_timer(Duration::from_millis(100));

        queue.advance_to(t0 + Duration::from_millis(99));
        assert!(queue.take_due_timers().is_empty());

        queue.advance_to(t0 + Duration::from_millis(100));
        assert_eq!(queue.take_due_timers(), vec![id]);
        assert!(queue.is_idle());
    }

    #[test]
    fn test_cancelled_callbacks_never_fire() {
        let t0 = Instant::now();
        let mut queue = CallbackQueue::new(t0);
        let frame = queue.request_frame();
        let timer = queue.start_timer(Duration::from_millis(10));
        queue.cancel_frame(frame);
        queue.cancel_timer(timer);

        queue.advance_to(t0 + Duration::from_secs(1));
        assert!(queue.take_due_timers().is_empty());
        assert!(queue.take_frames().is_empty());
    }

    #[test]
    fn test_next_deadline() {
        let t0 = Instant::now();
        let mut queue = CallbackQueue::new(t0);
        assert_eq!(queue.next_deadline(), None);

        queue.start_timer(Duration::from_millis(50));
        queue.start_timer(Duration::from_millis(20));
        assert_eq!(queue.next_deadline(), Some(t0 + Duration::from_millis(20)));

        queue.request_frame();
        assert_eq!(queue.next_deadline(), Some(t0));
    }

    #[test]
    fn test_clock_never_moves_backwards() {
        let t0 = Instant::now();
        let mut queue = CallbackQueue::new(t0 + Duration::from_secs(1));
        queue.advance_to(t0);
        assert_eq!(queue.now(), t0 + Duration::from_secs(1));
    }
}
