//! Panel controller — use-cases for polling and toggling outlets.

use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::time::Duration;

use tokio::sync::Mutex;

use powerstrip_domain::command::OutletAction;
use powerstrip_domain::error::PanelError;
use powerstrip_domain::outlet::{OutletDisplay, OutletIndex};
use powerstrip_domain::reading::OutletReading;

use crate::polling::{self, PollHandle, PollingTask};
use crate::ports::{OutletApi, OutletWidget, PanelView, ToggleHandler, Timer};

/// Outcome of one refresh cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshSummary {
    /// Outlets whose state was read and rendered.
    pub updated: usize,
    /// Outlets rendered as `error`.
    pub failed: usize,
}

/// Controller bound to one panel.
///
/// Outlets are refreshed one at a time, in document order. Refresh cycles
/// never overlap: a cycle started while another one runs waits for it to
/// finish, so DOM writes from two cycles cannot interleave.
pub struct PanelController<A, V> {
    api: A,
    view: V,
    refresh_lock: Mutex<()>,
    wired: Cell<bool>,
}

impl<A: OutletApi, V: PanelView> PanelController<A, V> {
    /// Create a controller over the given API client and panel.
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            refresh_lock: Mutex::new(()),
            wired: Cell::new(false),
        }
    }

    #[cfg(test)]
    pub(crate) fn api(&self) -> &A {
        &self.api
    }

    #[cfg(test)]
    pub(crate) fn view(&self) -> &V {
        &self.view
    }

    /// Read the state of a single outlet.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Http`] on a non-2xx status, or a transport or
    /// decode error from the adapter.
    pub async fn fetch_state(&self, index: OutletIndex) -> Result<OutletReading, PanelError> {
        self.api.fetch_state(index).await
    }

    /// Send a command to a single outlet.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Http`] on a non-2xx status, or a transport or
    /// decode error from the adapter.
    pub async fn send_command(
        &self,
        index: OutletIndex,
        action: OutletAction,
    ) -> Result<OutletReading, PanelError> {
        self.api.send_command(index, action).await
    }

    /// Re-read and render every outlet in the panel.
    ///
    /// A failing outlet is rendered as `error` and logged; the remaining
    /// outlets are still processed.
    pub async fn refresh(&self) -> RefreshSummary {
        let _guard = self.refresh_lock.lock().await;
        let mut summary = RefreshSummary::default();

        for outlet in self.view.outlets() {
            match self.refresh_outlet(&outlet).await {
                Ok(shown) => {
                    tracing::trace!(index = ?outlet.raw_index(), state = %shown, "outlet refreshed");
                    summary.updated += 1;
                }
                Err(err) => {
                    tracing::error!(index = ?outlet.raw_index(), error = %err, "failed to refresh outlet");
                    outlet.set_label(OutletDisplay::Error.label());
                    summary.failed += 1;
                }
            }
        }

        tracing::debug!(
            updated = summary.updated,
            failed = summary.failed,
            "panel refreshed"
        );
        summary
    }

    async fn refresh_outlet(&self, outlet: &V::Outlet) -> Result<OutletDisplay, PanelError> {
        outlet.set_label(OutletDisplay::Loading.label());
        let index = OutletIndex::from_attribute(outlet.raw_index().as_deref())?;
        let display = self.fetch_state(index).await?.display();
        outlet.set_label(display.label());
        outlet.set_on(display.is_on());
        Ok(display)
    }

    /// Toggle the clicked outlet, then refresh the whole panel.
    ///
    /// The control is disabled while the command and the refresh run and is
    /// re-enabled afterwards, whatever the outcome. A failure is logged and
    /// shown once through [`PanelView::alert`].
    pub async fn handle_toggle_click(&self, outlet: &V::Outlet) {
        let _disabled = DisabledWhile::new(outlet);

        if let Err(err) = self.toggle(outlet).await {
            tracing::error!(index = ?outlet.raw_index(), error = %err, "failed to toggle outlet");
            self.view.alert(&format!("Failed to toggle outlet: {err}"));
        }
    }

    async fn toggle(&self, outlet: &V::Outlet) -> Result<(), PanelError> {
        let index = OutletIndex::from_attribute(outlet.raw_index().as_deref())?;
        let reading = self.send_command(index, OutletAction::Toggle).await?;
        tracing::debug!(%index, state = ?reading.state, "outlet toggled");
        self.refresh().await;
        Ok(())
    }
}

impl<A, V> PanelController<A, V>
where
    A: OutletApi + 'static,
    V: PanelView + 'static,
{
    /// Attach the toggle handler to every outlet's control.
    ///
    /// Only the first call binds anything. Returns the number of controls
    /// wired by this call.
    pub fn wire_buttons(self: &Rc<Self>) -> usize {
        if self.wired.replace(true) {
            tracing::warn!("toggle controls already wired");
            return 0;
        }
        let controller = Rc::clone(self);
        let handler: ToggleHandler<V::Outlet> =
            Rc::new(move |outlet: V::Outlet| -> Pin<Box<dyn Future<Output = ()>>> {
                let controller = Rc::clone(&controller);
                Box::pin(async move { controller.handle_toggle_click(&outlet).await })
            });

        let outlets = self.view.outlets();
        for outlet in &outlets {
            self.view.bind_toggle(outlet, Rc::clone(&handler));
        }
        outlets.len()
    }

    /// Wire the buttons and build the polling task.
    ///
    /// The returned task performs the initial refresh as soon as it is run,
    /// then refreshes every `interval` until the handle is stopped or dropped.
    /// Returns `None` when the controller was already initialised.
    pub fn init<T: Timer>(
        self: &Rc<Self>,
        timer: T,
        interval: Duration,
    ) -> Option<(PollingTask<A, V, T>, PollHandle)> {
        if self.wired.get() {
            tracing::warn!("powerstrip panel already initialised");
            return None;
        }
        let wired = self.wire_buttons();
        tracing::info!(
            outlets = wired,
            interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX),
            "powerstrip panel initialised"
        );
        Some(polling::channel(Rc::clone(self), timer, interval))
    }
}

/// Disables an outlet's toggle control until dropped.
struct DisabledWhile<'a, W: OutletWidget> {
    outlet: &'a W,
}

impl<'a, W: OutletWidget> DisabledWhile<'a, W> {
    fn new(outlet: &'a W) -> Self {
        outlet.set_toggle_enabled(false);
        Self { outlet }
    }
}

impl<W: OutletWidget> Drop for DisabledWhile<'_, W> {
    fn drop(&mut self) {
        self.outlet.set_toggle_enabled(true);
    }
}
