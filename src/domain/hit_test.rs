//! Pointer-to-seat resolution.

use crate::domain::layout::{cell_rect, GridBounds, ViewportTransform};
use crate::model::Seat;
use egui::Pos2;

/// Returns the first seat, in slice order, whose painted cell contains `point`.
///
/// Seats are painted in slice order too, so with well-formed data at most one
/// cell contains any point. When two seats share a lattice position the one
/// earlier in the slice wins. Unplaced seats are never hit.
pub fn hit_test<'a>(
    point: Pos2,
    seats: &'a [Seat],
    bounds: &GridBounds,
    transform: &ViewportTransform,
) -> Option<&'a Seat> {
    if !point.x.is_finite() || !point.y.is_finite() {
        return None;
    }

    seats.iter().find(|seat| {
        cell_rect(seat, bounds, transform)
            .is_some_and(|rect| rect.contains(point))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout::{compute_bounds, fit_to_view};
    use crate::model::SeatId;
    use egui::Vec2;

    fn setup(seats: &[Seat]) -> (GridBounds, ViewportTransform) {
        let bounds = compute_bounds(seats);
        let transform = fit_to_view(&bounds, Vec2::new(400.0, 300.0), 24.0);
        (bounds, transform)
    }

    #[test]
    fn test_hits_cell_centre() {
        let seats = vec![Seat::new(1, 0.0, 0.0), Seat::new(2, 1.0, 0.0)];
        let (bounds, t) = setup(&seats);

        for seat in &seats {
            let centre = cell_rect(seat, &bounds, &t).unwrap().center();
            assert_eq!(hit_test(centre, &seats, &bounds, &t).map(|s| s.id), Some(seat.id));
        }
    }

    #[test]
    fn test_gap_between_cells_misses() {
        let seats = vec![Seat::new(1, 0.0, 0.0), Seat::new(2, 1.0, 0.0)];
        let (bounds, t) = setup(&seats);
        let left = cell_rect(&seats[0], &bounds, &t).unwrap();
        let right = cell_rect(&seats[1], &bounds, &t).unwrap();
        assert!(left.max.x < right.min.x);

        let gap = Pos2::new((left.max.x + right.min.x) / 2.0, left.center().y);
        assert!(hit_test(gap, &seats, &bounds, &t).is_none());
        assert!(hit_test(Pos2::new(-5.0, -5.0), &seats, &bounds, &t).is_none());
        assert!(hit_test(Pos2::new(f32::NAN, 10.0), &seats, &bounds, &t).is_none());
    }

    #[test]
    fn test_duplicate_position_first_wins() {
        let seats = vec![Seat::new(7, 0.0, 0.0), Seat::new(3, 0.0, 0.0)];
        let (bounds, t) = setup(&seats);
        let centre = cell_rect(&seats[0], &bounds, &t).unwrap().center();
        assert_eq!(hit_test(centre, &seats, &bounds, &t).map(|s| s.id), Some(SeatId(7)));
    }

    #[test]
    fn test_unplaced_seat_is_never_hit() {
        let seats = vec![Seat::unplaced(1), Seat::new(2, 0.0, 0.0)];
        let (bounds, t) = setup(&seats);
        let centre = cell_rect(&seats[1], &bounds, &t).unwrap().center();
        assert_eq!(hit_test(centre, &seats, &bounds, &t).map(|s| s.id), Some(SeatId(2)));
    }
}
