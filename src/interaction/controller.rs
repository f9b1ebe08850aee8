//! Pointer and keyboard handling for the seat map.
//!
//! The controller turns raw input into hover changes, selection changes and
//! intents for external collaborators. It owns the selection state and the
//! tooltip; it never schedules redraws itself. Callers learn from the return
//! values whether something visible changed.

use crate::domain::hit_test::hit_test;
use crate::domain::layout::GridLayout;
use crate::domain::status::{resolve_status, SeatStatus, StatusMap};
use crate::interaction::selection::SelectionState;
use crate::interaction::tooltip::{place_tooltip, Tooltip, TooltipContent, TooltipStyle};
use crate::model::{Booking, Seat, SeatId};
use egui::{Pos2, Rect};
use std::collections::BTreeSet;
use tracing::trace;

/// Modifier keys relevant to the map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    /// Cmd on macOS, Super/Windows elsewhere.
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        meta: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        meta: false,
    };

    /// Whether a click should toggle multi-selection.
    pub fn multi_select(&self) -> bool {
        self.ctrl || self.meta
    }
}

impl From<egui::Modifiers> for Modifiers {
    fn from(m: egui::Modifiers) -> Self {
        Self {
            ctrl: m.ctrl,
            meta: m.mac_cmd,
        }
    }
}

/// Keys the map reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapKey {
    Escape,
}

/// Notifications for collaborators outside the map.
#[derive(Debug, Clone, PartialEq)]
pub enum MapIntent {
    /// The multi-select set changed; carries the full current set.
    SelectionChanged(BTreeSet<SeatId>),
    /// Open the detail/booking surface for this seat.
    DetailRequested(Seat),
}

/// Everything pointer queries need from the most recently painted frame.
#[derive(Debug, Clone, Copy)]
pub struct HitContext<'a> {
    pub seats: &'a [Seat],
    pub bookings: &'a [Booking],
    pub layout: &'a GridLayout,
    pub statuses: &'a StatusMap,
    /// On-screen part of the canvas, in canvas coordinates.
    pub visible: Rect,
}

impl HitContext<'_> {
    fn seat_at(&self, pos: Pos2) -> Option<&Seat> {
        hit_test(pos, self.seats, &self.layout.bounds, &self.layout.transform)
    }

    fn status_of(&self, seat: &Seat) -> SeatStatus {
        self.statuses
            .get(seat.id)
            .unwrap_or_else(|| resolve_status(seat, self.bookings, self.statuses.now()))
    }
}

/// Translates input events into state changes and intents.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    selection: SelectionState,
    tooltip: Option<Tooltip>,
    tooltip_style: TooltipStyle,
}

impl InteractionController {
    pub fn new(tooltip_style: TooltipStyle) -> Self {
        Self {
            selection: SelectionState::new(),
            tooltip: None,
            tooltip_style,
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// Handles pointer motion at canvas position `pos`.
    ///
    /// # Returns
    /// `true` if the hovered seat changed, which needs a redraw. Tooltip
    /// movement within the same seat does not.
    pub fn pointer_moved(&mut self, pos: Pos2, ctx: &HitContext<'_>) -> bool {
        let hit = ctx.seat_at(pos);
        let changed = self.selection.set_hover(hit.map(|s| s.id));

        match hit {
            Some(seat) => {
                if changed || self.tooltip.is_none() {
                    trace!(seat = %seat.id, "hover");
                    let content = TooltipContent::for_seat(seat, ctx.status_of(seat), ctx.bookings, ctx.statuses.now());
                    let size = content.size(&self.tooltip_style);
                    self.tooltip = Some(Tooltip {
                        seat_id: seat.id,
                        content,
                        pos: Pos2::ZERO,
                        size,
                    });
                }
                if let Some(tooltip) = &mut self.tooltip {
                    tooltip.pos = place_tooltip(pos, tooltip.size, ctx.visible, self.tooltip_style.offset);
                }
            }
            None => self.tooltip = None,
        }

        changed
    }

    /// Handles the pointer leaving the canvas. Returns `true` if hover changed.
    pub fn pointer_left(&mut self) -> bool {
        self.tooltip = None;
        self.selection.set_hover(None)
    }

    /// Handles a primary click at canvas position `pos`.
    ///
    /// With Ctrl/Meta held on an available seat, toggles it in the selection
    /// and reports the new set. Any other click on a seat requests its detail
    /// view and leaves the selection alone. Clicks on empty space do nothing.
    pub fn pointer_clicked(&mut self, pos: Pos2, modifiers: Modifiers, ctx: &HitContext<'_>) -> Option<MapIntent> {
        let seat = ctx.seat_at(pos)?;

        if modifiers.multi_select() && ctx.status_of(seat).is_available() {
            let now_selected = self.selection.toggle(seat.id);
            trace!(seat = %seat.id, now_selected, "selection toggled");
            Some(MapIntent::SelectionChanged(self.selection.selected().clone()))
        } else {
            Some(MapIntent::DetailRequested(seat.clone()))
        }
    }

    /// Handles a key press. Escape drops hover and clears the selection.
    pub fn key_pressed(&mut self, key: MapKey) -> Option<MapIntent> {
        match key {
            MapKey::Escape => {
                self.pointer_left();
                self.clear_selection()
                    .then(|| MapIntent::SelectionChanged(BTreeSet::new()))
            }
        }
    }

    /// Clears the selection on behalf of an external collaborator, e.g. once
    /// a booking has been completed. Returns `true` if anything was selected.
    pub fn clear_selection(&mut self) -> bool {
        self.selection.clear_selection()
    }

    /// Rebuilds the tooltip text for the hovered seat against a new frame.
    ///
    /// The hover itself is kept even if the seat vanished from the data; the
    /// next pointer move resolves it again.
    pub fn refresh_tooltip(&mut self, ctx: &HitContext<'_>) {
        let Some(tooltip) = &mut self.tooltip else {
            return;
        };
        match ctx.seats.iter().find(|s| s.id == tooltip.seat_id) {
            Some(seat) => {
                tooltip.content = TooltipContent::for_seat(seat, ctx.status_of(seat), ctx.bookings, ctx.statuses.now());
                tooltip.size = tooltip.content.size(&self.tooltip_style);
            }
            None => self.tooltip = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout::cell_rect;
    use crate::model::Session;
    use chrono::{Duration, TimeZone, Utc};
    use egui::Vec2;

    struct Fixture {
        seats: Vec<Seat>,
        bookings: Vec<Booking>,
        layout: GridLayout,
        statuses: StatusMap,
    }

    impl Fixture {
        fn new(seats: Vec<Seat>, bookings: Vec<Booking>) -> Self {
            let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
            let layout = GridLayout::compute(&seats, Vec2::new(400.0, 300.0), 24.0);
            let statuses = StatusMap::resolve(&seats, &bookings, now);
            Self {
                seats,
                bookings,
                layout,
                statuses,
            }
        }

        fn ctx(&self) -> HitContext<'_> {
            HitContext {
                seats: &self.seats,
                bookings: &self.bookings,
                layout: &self.layout,
                statuses: &self.statuses,
                visible: Rect::from_min_size(Pos2::ZERO, Vec2::new(400.0, 300.0)),
            }
        }

        fn centre(&self, index: usize) -> Pos2 {
            cell_rect(&self.seats[index], &self.layout.bounds, &self.layout.transform)
                .unwrap()
                .center()
        }
    }

    fn two_seats() -> Fixture {
        Fixture::new(vec![Seat::new(1, 0.0, 0.0), Seat::new(2, 1.0, 0.0)], vec![])
    }

    #[test]
    fn test_hover_changes_only_when_seat_changes() {
        let fx = two_seats();
        let mut ctl = InteractionController::default();

        assert!(ctl.pointer_moved(fx.centre(0), &fx.ctx()));
        assert!(!ctl.pointer_moved(fx.centre(0) + Vec2::new(1.0, 1.0), &fx.ctx()));
        assert_eq!(ctl.selection().hovered(), Some(SeatId(1)));
        assert_eq!(ctl.tooltip().map(|t| t.seat_id), Some(SeatId(1)));

        assert!(ctl.pointer_moved(fx.centre(1), &fx.ctx()));
        assert_eq!(ctl.tooltip().map(|t| t.seat_id), Some(SeatId(2)));

        assert!(ctl.pointer_moved(Pos2::new(1.0, 1.0), &fx.ctx()));
        assert!(ctl.tooltip().is_none());
    }

    #[test]
    fn test_tooltip_follows_pointer_within_seat() {
        let fx = two_seats();
        let mut ctl = InteractionController::default();
        ctl.pointer_moved(fx.centre(0), &fx.ctx());
        let first = ctl.tooltip().unwrap().pos;
        ctl.pointer_moved(fx.centre(0) + Vec2::new(3.0, 2.0), &fx.ctx());
        assert_eq!(ctl.tooltip().unwrap().pos, first + Vec2::new(3.0, 2.0));
    }

    #[test]
    fn test_ctrl_click_toggles_available_seat() {
        let fx = two_seats();
        let mut ctl = InteractionController::default();

        let intent = ctl.pointer_clicked(fx.centre(0), Modifiers::CTRL, &fx.ctx());
        assert_eq!(intent, Some(MapIntent::SelectionChanged(BTreeSet::from([SeatId(1)]))));

        let meta = Modifiers { ctrl: false, meta: true };
        let intent = ctl.pointer_clicked(fx.centre(0), meta, &fx.ctx());
        assert_eq!(intent, Some(MapIntent::SelectionChanged(BTreeSet::new())));
    }

    #[test]
    fn test_plain_click_requests_detail() {
        let fx = two_seats();
        let mut ctl = InteractionController::default();
        let intent = ctl.pointer_clicked(fx.centre(1), Modifiers::NONE, &fx.ctx());
        assert_eq!(intent, Some(MapIntent::DetailRequested(fx.seats[1].clone())));
        assert!(ctl.selection().selected().is_empty());
    }

    #[test]
    fn test_ctrl_click_on_unavailable_seat_requests_detail() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        let fx = Fixture::new(
            vec![
                Seat::new(1, 0.0, 0.0).with_session(Session::with_remaining("alice", Duration::minutes(5))),
                Seat::new(2, 1.0, 0.0),
            ],
            vec![Booking::new(1, &[2], now + Duration::hours(1), now + Duration::hours(2))],
        );
        let mut ctl = InteractionController::default();

        for i in 0..2 {
            let intent = ctl.pointer_clicked(fx.centre(i), Modifiers::CTRL, &fx.ctx());
            assert!(matches!(intent, Some(MapIntent::DetailRequested(_))));
        }
        assert!(ctl.selection().selected().is_empty());
    }

    #[test]
    fn test_click_on_empty_space_is_noop() {
        let fx = two_seats();
        let mut ctl = InteractionController::default();
        assert_eq!(ctl.pointer_clicked(Pos2::new(1.0, 1.0), Modifiers::CTRL, &fx.ctx()), None);
    }

    #[test]
    fn test_escape_clears_selection_and_hover() {
        let fx = two_seats();
        let mut ctl = InteractionController::default();
        ctl.pointer_clicked(fx.centre(0), Modifiers::CTRL, &fx.ctx());
        ctl.pointer_moved(fx.centre(1), &fx.ctx());

        let intent = ctl.key_pressed(MapKey::Escape);
        assert_eq!(intent, Some(MapIntent::SelectionChanged(BTreeSet::new())));
        assert_eq!(ctl.selection().hovered(), None);
        assert!(ctl.tooltip().is_none());

        assert_eq!(ctl.key_pressed(MapKey::Escape), None);
    }

    #[test]
    fn test_refresh_tooltip_picks_up_new_status() {
        let fx = two_seats();
        let mut ctl = InteractionController::default();
        ctl.pointer_moved(fx.centre(0), &fx.ctx());
        assert_eq!(ctl.tooltip().unwrap().content.status, SeatStatus::Available);

        let occupied = Fixture::new(
            vec![
                Seat::new(1, 0.0, 0.0).with_session(Session::with_remaining("alice", Duration::minutes(5))),
                Seat::new(2, 1.0, 0.0),
            ],
            vec![],
        );
        ctl.refresh_tooltip(&occupied.ctx());
        let tooltip = ctl.tooltip().unwrap();
        assert_eq!(tooltip.content.status, SeatStatus::Occupied);
        assert!(tooltip.content.lines.iter().any(|l| l.contains("alice")));
    }
}
