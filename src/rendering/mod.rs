//! Painting the seat map with egui.
//!
//! Renderers consume a [`crate::FrameModel`] and never compute geometry or
//! status themselves:
//! - Seat cells (fill, selection outline, hover highlight, label)
//! - Tooltip overlay on a separate layer
//! - Text utilities (label fitting)

pub mod seat_renderer;
pub mod text_utils;
pub mod tooltip_renderer;
