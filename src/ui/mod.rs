//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the seat map viewer:
//! - Header panel (venue controls, legend, theme selector)
//! - Map panel (hosts the seat map view)
//! - Details panel (seat detail requested from the map)
//! - Selection panel (selected seats and the booking form)
//! - Status bar (venue source and status counts)
//! - Panel manager (panel orchestration and layout)
//! - Input handling (pointer and keyboard forwarding to the map)

pub mod details_panel;
pub mod header;
pub mod input;
pub mod map_panel;
pub mod panel_manager;
pub mod selection_panel;
pub mod status_bar;
