//! Panel view port — the outlet widgets rendered by the host page.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

/// Click handler attached to an outlet's toggle control.
///
/// The adapter calls it with the clicked outlet and drives the returned
/// future to completion on its own executor.
pub type ToggleHandler<W> = Rc<dyn Fn(W) -> Pin<Box<dyn Future<Output = ()>>>>;

/// One outlet element: a status label, the `on` class and a toggle control.
pub trait OutletWidget: Clone + 'static {
    /// Raw value of the element's index metadata, if present.
    fn raw_index(&self) -> Option<String>;

    /// Replace the status label text.
    fn set_label(&self, label: &str);

    /// Add or remove the `on` visual class.
    fn set_on(&self, on: bool);

    /// Enable or disable the toggle control.
    fn set_toggle_enabled(&self, enabled: bool);
}

/// The panel container.
pub trait PanelView {
    type Outlet: OutletWidget;

    /// Outlet widgets currently in the panel, in document order.
    ///
    /// Empty when the panel or its outlets are absent.
    fn outlets(&self) -> Vec<Self::Outlet>;

    /// Attach `handler` to the toggle control of `outlet`.
    fn bind_toggle(&self, outlet: &Self::Outlet, handler: ToggleHandler<Self::Outlet>);

    /// Show a blocking, user-visible message.
    fn alert(&self, message: &str);
}
