//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the controller and the outside world:
//! the HTTP API, the page markup and the clock.

pub mod outlet_api;
pub mod panel_view;
pub mod timer;

pub use outlet_api::OutletApi;
pub use panel_view::{OutletWidget, PanelView, ToggleHandler};
pub use timer::Timer;
