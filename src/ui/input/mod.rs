//! Input handling for the map canvas.

pub mod map_input_handler;
