//! Frame scheduling for the seat map.
//!
//! - `callback_queue`: the [`FrameHost`] seam and a manual-clock host
//! - `render_scheduler`: redraw coalescing and resize debouncing

mod callback_queue;
mod render_scheduler;

pub use callback_queue::{CallbackId, CallbackQueue, FrameHost};
pub use render_scheduler::{FramePass, LayoutRequest, RenderScheduler, SchedulerState};
