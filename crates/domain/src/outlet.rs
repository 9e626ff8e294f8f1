//! Outlet — a single controllable power socket exposed by the server.
//!
//! The server owns the state; the panel only keeps a display copy for the
//! duration of one refresh cycle.

mod display;
mod index;

pub use display::OutletDisplay;
pub use index::OutletIndex;

/// CSS class carried by an outlet element whose state is `on`.
pub const ON_CLASS: &str = "on";
