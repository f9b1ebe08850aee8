//! Seat map core: lays out bookable seats on a grid, resolves their live
//! status from sessions and bookings, and turns pointer input into hover,
//! selection and detail requests.
//!
//! The pure pieces (`domain`) have no notion of time beyond the `now` they
//! are given. [`MapView`] composes them with the render scheduler and the
//! interaction controller over a [`SeatStore`].

pub mod demo;
pub mod domain;
pub mod error;
pub mod interaction;
pub mod map_view;
pub mod model;
pub mod rendering;
pub mod scheduler;
pub mod store;
pub mod theme;
pub mod utils;

// Export data model and errors
pub use error::{DataError, MapViewError};
pub use model::{Booking, BookingId, Seat, SeatId, Session, SessionTiming, VenueSnapshot};

// Export the pure core
pub use domain::{
    cell_rect, compute_bounds, fit_to_view, hit_test, remaining_time, resolve_status, GridBounds, GridLayout,
    SeatStatus, StatusCounts, StatusMap, ViewportTransform,
};

// Export the view and its collaborators
pub use interaction::{MapIntent, MapKey, Modifiers, SelectionState, Tooltip, TooltipContent, TooltipStyle};
pub use map_view::{CellModel, FrameModel, MapConfig, MapView};
pub use scheduler::{CallbackQueue, FrameHost, RenderScheduler, SchedulerState};
pub use store::{SeatStore, StoreUpdate, Subscription};

// Export theme support
pub use theme::{adjust_brightness, hex_to_color32, Theme, ThemeColors, ThemeManager};

pub use demo::DemoVenue;
