//! Outlet API port — the HTTP endpoints under `/api/powerstrip`.

use std::future::Future;

use powerstrip_domain::command::OutletAction;
use powerstrip_domain::error::PanelError;
use powerstrip_domain::outlet::OutletIndex;
use powerstrip_domain::reading::OutletReading;

/// Reads and commands outlets.
///
/// Futures are not `Send`: the browser adapter runs on a single-threaded
/// event loop.
pub trait OutletApi {
    /// `GET /api/powerstrip/{index}`.
    ///
    /// Fails with [`PanelError::Http`] when the status is not 2xx.
    fn fetch_state(
        &self,
        index: OutletIndex,
    ) -> impl Future<Output = Result<OutletReading, PanelError>>;

    /// `POST /api/powerstrip/{index}` with `{"action": ...}`.
    ///
    /// Fails with [`PanelError::Http`] when the status is not 2xx.
    fn send_command(
        &self,
        index: OutletIndex,
        action: OutletAction,
    ) -> impl Future<Output = Result<OutletReading, PanelError>>;
}
