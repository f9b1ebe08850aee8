//! Layout engine: grid bounds, fit-to-viewport transform and cell geometry.
//!
//! These are pure functions over a seat snapshot. The renderer and the hit
//! tester both go through [`cell_rect`], so what is painted and what is
//! clickable are the same rectangle.

use crate::model::Seat;
use egui::{Pos2, Rect, Vec2};

/// Smallest cell pitch in pixels. Applies even when the viewport is too
/// small to hold the grid; the map then overflows instead of shrinking.
pub const MIN_CELL_SCALE: f32 = 28.0;

/// Gap between the cell pitch and the painted cell.
pub const CELL_INSET: f32 = 8.0;

pub const MIN_CELL_WIDTH: f32 = 36.0;
pub const MIN_CELL_HEIGHT: f32 = 38.0;

/// Lattice-space bounding box of all placed seats (inclusive).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridBounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl GridBounds {
    /// Box used when no seat is placed.
    pub const UNIT: GridBounds = GridBounds {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 1.0,
        max_y: 1.0,
    };

    /// Number of lattice columns covered, at least one.
    pub fn cols(&self) -> f32 {
        (self.max_x - self.min_x + 1.0).max(1.0)
    }

    /// Number of lattice rows covered, at least one.
    pub fn rows(&self) -> f32 {
        (self.max_y - self.min_y + 1.0).max(1.0)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.min_x <= x && x <= self.max_x && self.min_y <= y && y <= self.max_y
    }
}

/// Mapping from lattice coordinates to canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    /// Cell pitch in pixels, never below [`MIN_CELL_SCALE`].
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub padding: f32,
}

/// Bounds plus transform: everything needed to place a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub bounds: GridBounds,
    pub transform: ViewportTransform,
}

impl GridLayout {
    /// Computes bounds over `seats` and fits them to `viewport`.
    pub fn compute(seats: &[Seat], viewport: Vec2, padding: f32) -> Self {
        let bounds = compute_bounds(seats);
        let transform = fit_to_view(&bounds, viewport, padding);
        Self { bounds, transform }
    }

    pub fn cell_rect(&self, seat: &Seat) -> Option<Rect> {
        cell_rect(seat, &self.bounds, &self.transform)
    }
}

/// Bounding box of every seat with two finite coordinates.
///
/// Returns [`GridBounds::UNIT`] when no seat qualifies.
pub fn compute_bounds<'a>(seats: impl IntoIterator<Item = &'a Seat>) -> GridBounds {
    let mut placed = seats.into_iter().filter_map(Seat::grid_pos);

    let Some((x0, y0)) = placed.next() else {
        return GridBounds::UNIT;
    };

    placed.fold(
        GridBounds {
            min_x: x0,
            min_y: y0,
            max_x: x0,
            max_y: y0,
        },
        |b, (x, y)| GridBounds {
            min_x: b.min_x.min(x),
            min_y: b.min_y.min(y),
            max_x: b.max_x.max(x),
            max_y: b.max_y.max(y),
        },
    )
}

/// Fits `bounds` into `viewport`, centred, with `padding` on every side.
///
/// # Arguments
/// * `bounds` - Lattice bounds from [`compute_bounds`]
/// * `viewport` - Canvas size in pixels
/// * `padding` - Fixed margin in pixels
pub fn fit_to_view(bounds: &GridBounds, viewport: Vec2, padding: f32) -> ViewportTransform {
    let cols = bounds.cols();
    let rows = bounds.rows();
    let inner_w = viewport.x - 2.0 * padding;
    let inner_h = viewport.y - 2.0 * padding;

    // f32::max drops a NaN operand, so the floor holds for any viewport.
    let scale = (inner_w / cols).min(inner_h / rows).floor().max(MIN_CELL_SCALE);

    ViewportTransform {
        scale,
        offset_x: padding + ((inner_w - cols * scale) / 2.0).floor(),
        offset_y: padding + ((inner_h - rows * scale) / 2.0).floor(),
        padding,
    }
}

/// Canvas-space centre of lattice position (`x`, `y`).
pub fn cell_center(x: f32, y: f32, bounds: &GridBounds, transform: &ViewportTransform) -> Pos2 {
    let s = transform.scale;
    Pos2::new(
        transform.offset_x + (x - bounds.min_x) * s + s / 2.0,
        transform.offset_y + (y - bounds.min_y) * s + s / 2.0,
    )
}

/// Painted rectangle of the cell at lattice position (`x`, `y`).
pub fn cell_rect_at(x: f32, y: f32, bounds: &GridBounds, transform: &ViewportTransform) -> Rect {
    let size = Vec2::new(
        (transform.scale - CELL_INSET).max(MIN_CELL_WIDTH),
        (transform.scale - CELL_INSET).max(MIN_CELL_HEIGHT),
    );
    Rect::from_center_size(cell_center(x, y, bounds, transform), size)
}

/// Painted rectangle of `seat`, or `None` for an unplaced seat.
pub fn cell_rect(seat: &Seat, bounds: &GridBounds, transform: &ViewportTransform) -> Option<Rect> {
    seat.grid_pos()
        .map(|(x, y)| cell_rect_at(x, y, bounds, transform))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_two_seats_in_a_row() {
        let seats = vec![Seat::new(1, 0.0, 0.0), Seat::new(2, 1.0, 0.0)];
        let b = compute_bounds(&seats);
        assert_eq!(
            b,
            GridBounds {
                min_x: 0.0,
                min_y: 0.0,
                max_x: 1.0,
                max_y: 0.0
            }
        );
        assert_eq!(b.cols(), 2.0);
        assert_eq!(b.rows(), 1.0);
    }

    #[test]
    fn test_bounds_skip_unplaced_seats() {
        let seats = vec![
            Seat::unplaced(1),
            Seat::new(2, 3.0, 4.0),
            Seat::new(3, f32::NAN, 100.0),
            Seat::new(4, 5.0, 2.0),
        ];
        assert_eq!(
            compute_bounds(&seats),
            GridBounds {
                min_x: 3.0,
                min_y: 2.0,
                max_x: 5.0,
                max_y: 4.0
            }
        );
    }

    #[test]
    fn test_bounds_empty_is_unit_box() {
        assert_eq!(compute_bounds(std::iter::empty()), GridBounds::UNIT);
        assert_eq!(compute_bounds(&[Seat::unplaced(1)]), GridBounds::UNIT);
    }

    #[test]
    fn test_fit_centres_grid() {
        let bounds = GridBounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 4.0,
            max_y: 2.0,
        };
        let t = fit_to_view(&bounds, Vec2::new(400.0, 300.0), 24.0);
        // min(352 / 5, 252 / 3) = 70.4
        assert_eq!(t.scale, 70.0);
        assert_eq!(t.offset_x, 25.0);
        assert_eq!(t.offset_y, 45.0);
        assert_eq!(t.padding, 24.0);
    }

    #[test]
    fn test_fit_never_goes_below_minimum_scale() {
        let bounds = GridBounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 40.0,
            max_y: 40.0,
        };
        for size in [Vec2::ZERO, Vec2::new(1.0, 1.0), Vec2::new(200.0, 50.0), Vec2::splat(f32::NAN)] {
            assert_eq!(fit_to_view(&bounds, size, 24.0).scale, MIN_CELL_SCALE);
        }
    }

    #[test]
    fn test_cell_rect_geometry() {
        let bounds = GridBounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 4.0,
            max_y: 2.0,
        };
        let t = fit_to_view(&bounds, Vec2::new(400.0, 300.0), 24.0);
        let rect = cell_rect(&Seat::new(1, 0.0, 0.0), &bounds, &t).unwrap();
        assert_eq!(rect.center(), Pos2::new(60.0, 80.0));
        assert_eq!(rect.width(), 62.0);
        assert_eq!(rect.height(), 62.0);

        let next = cell_rect(&Seat::new(2, 1.0, 0.0), &bounds, &t).unwrap();
        assert_eq!(next.center().x - rect.center().x, t.scale);
    }

    #[test]
    fn test_cell_rect_minimum_extents() {
        let t = ViewportTransform {
            scale: MIN_CELL_SCALE,
            offset_x: 0.0,
            offset_y: 0.0,
            padding: 0.0,
        };
        let rect = cell_rect_at(0.0, 0.0, &GridBounds::UNIT, &t);
        assert_eq!(rect.width(), MIN_CELL_WIDTH);
        assert_eq!(rect.height(), MIN_CELL_HEIGHT);
    }

    #[test]
    fn test_cell_rect_unplaced_is_none() {
        let t = fit_to_view(&GridBounds::UNIT, Vec2::new(100.0, 100.0), 0.0);
        assert!(cell_rect(&Seat::unplaced(1), &GridBounds::UNIT, &t).is_none());
    }
}
