//! The seat map view: composes layout, status resolution, hit testing,
//! scheduling and interaction over a [`SeatStore`].
//!
//! A paint pass does not touch pixels. It produces a [`FrameModel`], an
//! immutable description of every cell for the renderer to replay, and the
//! same model answers pointer queries until the next pass. Store updates,
//! hover and selection changes only mark the view dirty; [`MapView::pump`]
//! turns due callbacks into at most one pass.

use crate::domain::layout::GridLayout;
use crate::domain::status::{SeatStatus, StatusMap};
use crate::error::MapViewError;
use crate::interaction::{HitContext, InteractionController, MapIntent, MapKey, Modifiers, SelectionState, Tooltip, TooltipStyle};
use crate::model::{Booking, Seat, SeatId};
use crate::scheduler::{CallbackQueue, FramePass, LayoutRequest, RenderScheduler, SchedulerState};
use crate::store::{SeatStore, StoreUpdate, Subscription};
use chrono::{DateTime, Utc};
use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Tunable map parameters, persisted with the application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Margin around the grid in pixels.
    pub padding: f32,
    pub resize_debounce_ms: u64,
    pub tooltip_width: f32,
    pub tooltip_line_height: f32,
    /// Gap between pointer and tooltip.
    pub tooltip_offset: f32,
    /// How often statuses are re-resolved against the wall clock.
    pub clock_refresh_ms: u64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            padding: 24.0,
            resize_debounce_ms: 100,
            tooltip_width: 240.0,
            tooltip_line_height: 18.0,
            tooltip_offset: 14.0,
            clock_refresh_ms: 1000,
        }
    }
}

impl MapConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn clock_refresh(&self) -> Duration {
        Duration::from_millis(self.clock_refresh_ms.max(1))
    }

    pub fn tooltip_style(&self) -> TooltipStyle {
        TooltipStyle {
            width: self.tooltip_width,
            line_height: self.tooltip_line_height,
            offset: self.tooltip_offset,
            ..TooltipStyle::default()
        }
    }
}

/// One painted seat.
#[derive(Debug, Clone, PartialEq)]
pub struct CellModel {
    pub seat_id: SeatId,
    pub rect: Rect,
    pub status: SeatStatus,
    pub label: String,
    pub selected: bool,
    pub hovered: bool,
}

/// Output of one paint pass.
#[derive(Debug, Clone)]
pub struct FrameModel {
    pub seats: Arc<[Seat]>,
    pub bookings: Arc<[Booking]>,
    pub layout: GridLayout,
    pub statuses: StatusMap,
    /// Placed seats in paint order.
    pub cells: Vec<CellModel>,
    pub frame_number: u64,
    pub viewport: Vec2,
}

impl FrameModel {
    /// Pointer queries against this frame. `visible` is the on-screen part
    /// of the canvas, used to keep the tooltip in view.
    pub fn hit_context(&self, visible: Rect) -> HitContext<'_> {
        HitContext {
            seats: &self.seats,
            bookings: &self.bookings,
            layout: &self.layout,
            statuses: &self.statuses,
            visible,
        }
    }

    /// Canvas area holding every cell plus padding, never smaller than the
    /// viewport. A grid that overflows is still centred on the viewport, so
    /// the area then starts left of or above the canvas origin.
    pub fn canvas_rect(&self) -> Rect {
        let t = &self.layout.transform;
        let grid_min = Pos2::new(t.offset_x - t.padding, t.offset_y - t.padding);
        let grid_max = Pos2::new(
            t.offset_x + self.layout.bounds.cols() * t.scale + t.padding,
            t.offset_y + self.layout.bounds.rows() * t.scale + t.padding,
        );
        Rect::from_min_max(grid_min.min(Pos2::ZERO), grid_max.max(self.viewport.to_pos2()))
    }

    pub fn cell(&self, seat_id: SeatId) -> Option<&CellModel> {
        self.cells.iter().find(|c| c.seat_id == seat_id)
    }
}

/// Interactive seat map over a [`SeatStore`].
pub struct MapView {
    store: SeatStore,
    updates: Receiver<StoreUpdate>,
    subscription: Subscription,
    config: MapConfig,
    host: CallbackQueue,
    scheduler: RenderScheduler,
    controller: InteractionController,
    frame: Option<FrameModel>,
    reported_size: Vec2,
    scroll_offset: Vec2,
    last_clock_refresh: Instant,
    layouts_computed: u64,
}

impl MapView {
    /// Creates a view of size `viewport` and schedules its first paint.
    ///
    /// # Arguments
    /// * `store` - Data store to subscribe to; the view keeps its own handle
    /// * `config` - Layout and timing parameters
    /// * `viewport` - Initial canvas size in pixels
    /// * `now` - Monotonic time the view's clock starts at
    pub fn new(store: &SeatStore, config: MapConfig, viewport: Vec2, now: Instant) -> Result<Self, MapViewError> {
        if !is_valid_viewport(viewport) {
            return Err(MapViewError::InvalidViewport {
                width: viewport.x,
                height: viewport.y,
            });
        }

        let (updates, subscription) = store.subscribe();
        let mut host = CallbackQueue::new(now);
        let mut scheduler = RenderScheduler::new(viewport, config.debounce());
        scheduler.invalidate(&mut host);
        let controller = InteractionController::new(config.tooltip_style());

        debug!(width = viewport.x, height = viewport.y, "map view created");
        Ok(Self {
            store: store.clone(),
            updates,
            subscription,
            config,
            host,
            scheduler,
            controller,
            frame: None,
            reported_size: viewport,
            scroll_offset: Vec2::ZERO,
            last_clock_refresh: now,
            layouts_computed: 0,
        })
    }

    // ===== Queries =====

    /// The most recently painted frame.
    pub fn frame(&self) -> Option<&FrameModel> {
        self.frame.as_ref()
    }

    pub fn selection(&self) -> &SelectionState {
        self.controller.selection()
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.controller.tooltip()
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn layouts_computed(&self) -> u64 {
        self.layouts_computed
    }

    pub fn frames_drawn(&self) -> u64 {
        self.scheduler.frames_drawn()
    }

    /// The on-screen part of the canvas in canvas coordinates: the last
    /// reported size at the last reported scroll offset.
    pub fn visible_rect(&self) -> Rect {
        Rect::from_min_size(self.scroll_offset.to_pos2(), self.reported_size)
    }

    pub fn scheduler_state(&self) -> SchedulerState {
        self.scheduler.state()
    }

    /// When [`MapView::pump`] next has work: a pending frame, the debounce
    /// deadline, or the next clock refresh. `None` once torn down.
    pub fn next_wakeup(&self) -> Option<Instant> {
        if self.scheduler.state() == SchedulerState::TornDown {
            return None;
        }
        let clock = self.last_clock_refresh + self.config.clock_refresh();
        Some(self.host.next_deadline().map_or(clock, |d| d.min(clock)))
    }

    // ===== Event Loop =====

    /// Advances the view's clock and runs whatever became due.
    ///
    /// Store updates are drained first, then expired timers, then the pending
    /// frame, so a frame requested by a settled resize paints in the same
    /// call. `wall_now` is the single instant every status in the pass is
    /// resolved against.
    ///
    /// # Returns
    /// `true` if a paint pass ran.
    pub fn pump(&mut self, now: Instant, wall_now: DateTime<Utc>) -> bool {
        self.host.advance_to(now);

        let mut dirty = false;
        for update in self.updates.try_iter() {
            debug!(?update, "store update");
            dirty = true;
        }
        if now.duration_since(self.last_clock_refresh) >= self.config.clock_refresh() {
            self.last_clock_refresh = now;
            dirty = true;
        }
        if dirty {
            self.scheduler.invalidate(&mut self.host);
        }

        for timer in self.host.take_due_timers() {
            self.scheduler.on_timer(timer, &mut self.host);
        }

        let mut painted = false;
        for id in self.host.take_frames() {
            if let Some(pass) = self.scheduler.begin_frame(id) {
                self.paint(pass, wall_now);
                self.scheduler.finish_frame(&mut self.host);
                painted = true;
            }
        }
        painted
    }

    fn paint(&mut self, pass: FramePass, wall_now: DateTime<Utc>) {
        let seats = self.store.seats();
        let bookings = self.store.bookings();

        let previous = self.frame.as_ref().map(|f| f.layout);
        let layout = match (pass.layout, previous) {
            (LayoutRequest::Keep, Some(previous)) => previous,
            (LayoutRequest::Keep, None) => self.compute_layout(&seats, self.scheduler.viewport()),
            (LayoutRequest::Recompute(size), _) => self.compute_layout(&seats, size),
        };

        let statuses = StatusMap::resolve(&seats, &bookings, wall_now);
        let selection = self.controller.selection();
        let cells = seats
            .iter()
            .filter_map(|seat| {
                let rect = layout.cell_rect(seat)?;
                Some(CellModel {
                    seat_id: seat.id,
                    rect,
                    status: statuses.get(seat.id).unwrap_or(SeatStatus::Available),
                    label: seat.display_label(),
                    selected: selection.is_selected(seat.id),
                    hovered: selection.is_hovered(seat.id),
                })
            })
            .collect();

        let frame = FrameModel {
            seats,
            bookings,
            layout,
            statuses,
            cells,
            frame_number: pass.frame_number,
            viewport: self.scheduler.viewport(),
        };
        self.controller.refresh_tooltip(&frame.hit_context(self.visible_rect()));
        self.frame = Some(frame);
    }

    fn compute_layout(&mut self, seats: &[Seat], viewport: Vec2) -> GridLayout {
        self.layouts_computed += 1;
        let layout = GridLayout::compute(seats, viewport, self.config.padding);
        debug!(
            scale = layout.transform.scale,
            width = viewport.x,
            height = viewport.y,
            "layout computed"
        );
        layout
    }

    // ===== Host Events =====

    /// Reports the canvas size observed at `now`. Repeats of the last
    /// reported size and non-finite or negative sizes are ignored.
    ///
    /// The debounce delay runs from `now`, so a resize that follows an idle
    /// stretch still waits the full quiet period.
    pub fn resized(&mut self, size: Vec2, now: Instant) {
        self.host.advance_to(now);
        if !is_valid_viewport(size) {
            warn!(width = size.x, height = size.y, "ignoring invalid viewport size");
            return;
        }
        if size == self.reported_size {
            return;
        }
        self.reported_size = size;
        self.scheduler.notify_resize(size, &mut self.host);
    }

    /// Reports how far the canvas is scrolled. Only tooltip placement
    /// depends on it, so nothing is repainted.
    pub fn scrolled(&mut self, offset: Vec2) {
        if offset.x.is_finite() && offset.y.is_finite() {
            self.scroll_offset = offset;
        }
    }

    /// Marks the view dirty without any state change, e.g. for a theme switch.
    pub fn invalidate(&mut self) {
        self.scheduler.invalidate(&mut self.host);
    }

    /// Refits the grid on the next frame. Call after loading a different venue.
    pub fn refit(&mut self) {
        self.scheduler.request_layout(&mut self.host);
    }

    // ===== Pointer and Keyboard =====

    pub fn pointer_moved(&mut self, pos: Pos2) {
        let visible = self.visible_rect();
        let Some(frame) = &self.frame else {
            return;
        };
        if self.controller.pointer_moved(pos, &frame.hit_context(visible)) {
            self.scheduler.invalidate(&mut self.host);
        }
    }

    pub fn pointer_left(&mut self) {
        if self.controller.pointer_left() {
            self.scheduler.invalidate(&mut self.host);
        }
    }

    pub fn pointer_clicked(&mut self, pos: Pos2, modifiers: Modifiers) -> Option<MapIntent> {
        let visible = self.visible_rect();
        let frame = self.frame.as_ref()?;
        let intent = self.controller.pointer_clicked(pos, modifiers, &frame.hit_context(visible));
        if matches!(intent, Some(MapIntent::SelectionChanged(_))) {
            self.scheduler.invalidate(&mut self.host);
        }
        intent
    }

    pub fn key_pressed(&mut self, key: MapKey) -> Option<MapIntent> {
        let had_hover = self.controller.selection().hovered().is_some();
        let intent = self.controller.key_pressed(key);
        if intent.is_some() || had_hover {
            self.scheduler.invalidate(&mut self.host);
        }
        intent
    }

    /// Clears the selection from outside, e.g. after a booking completed.
    pub fn clear_selection(&mut self) {
        if self.controller.clear_selection() {
            self.scheduler.invalidate(&mut self.host);
        }
    }

    // ===== Teardown =====

    /// Cancels outstanding callbacks and unsubscribes from the store. The
    /// view never paints again afterwards.
    pub fn teardown(&mut self) {
        if self.scheduler.state() == SchedulerState::TornDown {
            return;
        }
        self.scheduler.teardown(&mut self.host);
        self.subscription.dispose();
    }
}

impl Drop for MapView {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn is_valid_viewport(size: Vec2) -> bool {
    size.x.is_finite() && size.y.is_finite() && size.x >= 0.0 && size.y >= 0.0
}
