//! Redraw coalescing and resize debouncing.
//!
//! State machine:
//!
//! ```text
//!            invalidate                  frame fires
//!   Idle ───────────────▶ FramePending ───────────────▶ Drawing
//!    ▲                     │  invalidate: absorbed         │
//!    └─────────────────────┴───────── finish_frame ◀───────┘
//! ```
//!
//! A resize never draws by itself. It records the new size and restarts the
//! debounce timer; only when the timer survives its full delay is the size
//! applied, and the next frame recomputes layout with it.

use crate::scheduler::callback_queue::{CallbackId, FrameHost};
use egui::Vec2;
use std::time::Duration;
use tracing::{debug, trace};

/// Scheduler lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    /// Exactly one frame callback is outstanding.
    FramePending(CallbackId),
    Drawing,
    /// After teardown nothing is ever scheduled again.
    TornDown,
}

/// Whether a paint pass must refit the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutRequest {
    /// Reuse the current transform.
    Keep,
    /// Recompute bounds and transform for this viewport size.
    Recompute(Vec2),
}

/// What the scheduler hands to a paint pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePass {
    pub layout: LayoutRequest,
    /// Zero-based count of frames drawn before this one.
    pub frame_number: u64,
}

/// Coalesces redraw requests into at most one pending frame and owns the
/// resize debounce timer.
#[derive(Debug)]
pub struct RenderScheduler {
    state: SchedulerState,
    debounce: Duration,
    viewport: Vec2,
    resize_timer: Option<CallbackId>,
    pending_resize: Option<Vec2>,
    resize_ready: bool,
    first_paint_done: bool,
    dirty_while_drawing: bool,
    frames_drawn: u64,
}

impl RenderScheduler {
    /// Creates an idle scheduler for a view of size `viewport`.
    pub fn new(viewport: Vec2, debounce: Duration) -> Self {
        Self {
            state: SchedulerState::Idle,
            debounce,
            viewport,
            resize_timer: None,
            pending_resize: None,
            resize_ready: false,
            first_paint_done: false,
            dirty_while_drawing: false,
            frames_drawn: 0,
        }
    }

    // ===== Queries =====

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// The viewport size layout is (or will next be) computed for.
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }


    // ===== Requests =====

    /// Records that something visible changed.
    ///
    /// Returns `true` if this call scheduled a new frame callback. While a
    /// frame is already pending the request is absorbed; while drawing it is
    /// held until the current frame finishes.
    pub fn invalidate(&mut self, host: &mut impl FrameHost) -> bool {
        match self.state {
            SchedulerState::Idle => {
                let id = host.request_frame();
                trace!(?id, "frame scheduled");
                self.state = SchedulerState::FramePending(id);
                true
            }
            SchedulerState::Drawing => {
                self.dirty_while_drawing = true;
                false
            }
            SchedulerState::FramePending(_) | SchedulerState::TornDown => false,
        }
    }

    /// Records a viewport resize and restarts the debounce timer.
    ///
    /// Before the first paint there is no layout to protect, so the size is
    /// adopted immediately and the first frame fits to it.
    pub fn notify_resize(&mut self, size: Vec2, host: &mut impl FrameHost) {
        if self.state == SchedulerState::TornDown {
            return;
        }

        if !self.first_paint_done {
            self.viewport = size;
            self.invalidate(host);
            return;
        }

        if let Some(previous) = self.resize_timer.take() {
            host.cancel_timer(previous);
        }
        self.pending_resize = Some(size);
        self.resize_timer = Some(host.start_timer(self.debounce));
        trace!(width = size.x, height = size.y, "resize debounce restarted");
    }

    /// Handles a fired timer. Returns `false` for ids this scheduler does not own.
    pub fn on_timer(&mut self, id: CallbackId, host: &mut impl FrameHost) -> bool {
        if self.resize_timer != Some(id) {
            return false;
        }
        self.resize_timer = None;

        if let Some(size) = self.pending_resize.take() {
            debug!(width = size.x, height = size.y, "resize settled");
            self.viewport = size;
            self.resize_ready = true;
            self.invalidate(host);
        }
        true
    }

    /// Makes the next frame refit the grid at the current viewport size.
    ///
    /// Data refreshes never move the layout on their own; this is for the
    /// case where a different venue replaced the seat list entirely.
    pub fn request_layout(&mut self, host: &mut impl FrameHost) {
        if self.state == SchedulerState::TornDown {
            return;
        }
        self.resize_ready = true;
        self.invalidate(host);
    }

    // ===== Frame Lifecycle =====

    /// Enters the drawing state for frame callback `id`.
    ///
    /// Returns `None` if `id` is not the outstanding frame (stale or
    /// cancelled), in which case nothing must be painted.
    pub fn begin_frame(&mut self, id: CallbackId) -> Option<FramePass> {
        if self.state != SchedulerState::FramePending(id) {
            return None;
        }
        self.state = SchedulerState::Drawing;

        let layout = if !self.first_paint_done || self.resize_ready {
            LayoutRequest::Recompute(self.viewport)
        } else {
            LayoutRequest::Keep
        };

        Some(FramePass {
            layout,
            frame_number: self.frames_drawn,
        })
    }

    /// Leaves the drawing state. Requests that arrived mid-frame schedule the
    /// next frame now.
    pub fn finish_frame(&mut self, host: &mut impl FrameHost) {
        if self.state != SchedulerState::Drawing {
            return;
        }
        self.state = SchedulerState::Idle;
        self.first_paint_done = true;
        self.resize_ready = false;
        self.frames_drawn += 1;

        if std::mem::take(&mut self.dirty_while_drawing) {
            self.invalidate(host);
        }
    }

    /// Cancels the outstanding frame callback and debounce timer.
    pub fn teardown(&mut self, host: &mut impl FrameHost) {
        if let SchedulerState::FramePending(id) = self.state {
            host.cancel_frame(id);
        }
        if let Some(timer) = self.resize_timer.take() {
            host.cancel_timer(timer);
        }
        self.pending_resize = None;
        self.dirty_while_drawing = false;
        self.state = SchedulerState::TornDown;
        debug!(frames_drawn = self.frames_drawn, "render scheduler torn down");
    }
}
