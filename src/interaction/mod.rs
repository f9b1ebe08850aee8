//! Interaction subsystem for the seat map.
//!
//! - Selection state (multi-select set, hovered seat)
//! - Pointer and keyboard handling, producing intents
//! - Tooltip content and edge-aware placement

mod controller;
mod selection;
mod tooltip;

pub use controller::{HitContext, InteractionController, MapIntent, MapKey, Modifiers};
pub use selection::SelectionState;
pub use tooltip::{place_tooltip, Tooltip, TooltipContent, TooltipStyle};
