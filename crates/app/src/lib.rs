//! # powerstrip-app
//!
//! Application layer — the panel controller and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `OutletApi` — read and command outlets over HTTP
//!   - `PanelView` / `OutletWidget` — the outlet widgets on the page
//!   - `Timer` — sleep between polling cycles
//! - Provide the `PanelController` use-cases: fetch, command, refresh,
//!   toggle handling, button wiring and initialisation
//! - Provide the stoppable `PollingTask` that re-renders the panel on a
//!   fixed interval
//!
//! ## Dependency rule
//! Depends on `powerstrip-domain` only (plus `tokio::sync` for the polling
//! stop signal and refresh serialization). No runtime, no browser APIs.
//! Adapters depend on *this* crate, not the reverse.

pub mod panel_controller;
pub mod polling;
pub mod ports;

#[cfg(test)]
mod testing;

pub use panel_controller::{PanelController, RefreshSummary};
pub use polling::{PollHandle, PollingTask};
