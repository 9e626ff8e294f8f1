//! # powerstrip-adapter-dashboard-web
//!
//! Browser adapter for the powerstrip panel.
//!
//! ## How it works
//!
//! The host page ships the outlet markup (`#powerstrip-panel` with `.outlet`
//! children). Once the DOM is ready this crate reads the panel configuration
//! from the container, installs console logging, wires every `.toggle-btn`
//! and starts the polling task on the browser event loop.
//!
//! | Port | Implementation |
//! |------|----------------|
//! | `OutletApi` | [`api::HttpOutletApi`] (`gloo-net`) |
//! | `PanelView` | [`view::DomPanel`] (`web-sys`) |
//! | `Timer` | [`timer::GlooTimer`] (`gloo-timers`) |
//!
//! ## Dependency rule
//!
//! Depends on `powerstrip-app` and `powerstrip-domain`.

pub mod api;
mod config;
mod error;
mod logging;
pub mod timer;
pub mod view;

pub use config::PanelConfig;
pub use error::DashboardError;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Document;

use powerstrip_app::{PanelController, PollHandle};

use api::HttpOutletApi;
use timer::GlooTimer;
use view::DomPanel;

thread_local! {
    static MOUNTED: RefCell<Option<PowerstripPanel>> = const { RefCell::new(None) };
}

/// A mounted panel. Keeps polling until [`stop`](Self::stop) is called.
///
/// Every copy handed out by [`mount`] refers to the same polling task.
#[wasm_bindgen]
#[derive(Clone)]
pub struct PowerstripPanel {
    handle: Rc<PollHandle>,
}

#[wasm_bindgen]
impl PowerstripPanel {
    /// Stop polling. Toggle buttons keep working.
    pub fn stop(&self) {
        self.handle.stop();
        tracing::info!("powerstrip panel polling stopped");
    }

    #[wasm_bindgen(getter)]
    pub fn stopped(&self) -> bool {
        self.handle.is_stopped()
    }
}

/// Mount the panel found in `document`.
///
/// Returns `Ok(None)` when the page has no panel container. Once a panel is
/// mounted, later calls return it instead of wiring the buttons again.
///
/// # Errors
///
/// Returns [`DashboardError`] when the configuration read from the container
/// is invalid or the page has no window.
pub fn mount(document: &Document) -> Result<Option<PowerstripPanel>, DashboardError> {
    if let Some(panel) = MOUNTED.with(|mounted| mounted.borrow().clone()) {
        tracing::debug!("powerstrip panel already mounted");
        return Ok(Some(panel));
    }

    let mut config = PanelConfig::default();
    let container = document.get_element_by_id(&config.container_id);
    if let Some(container) = &container {
        config.apply_overrides(|name| container.get_attribute(name));
    }
    logging::init(&config.log_filter);

    let Some(container) = container else {
        tracing::debug!(id = %config.container_id, "no powerstrip panel on this page");
        return Ok(None);
    };
    config.validate()?;

    let window = web_sys::window().ok_or(DashboardError::NoWindow)?;
    let controller = Rc::new(PanelController::new(
        HttpOutletApi::new(config.api_base.clone()),
        DomPanel::new(window, container),
    ));
    let Some((task, handle)) = controller.init(GlooTimer, config.poll_interval()) else {
        return Ok(None);
    };
    wasm_bindgen_futures::spawn_local(async move {
        task.run().await;
    });

    let panel = PowerstripPanel {
        handle: Rc::new(handle),
    };
    MOUNTED.with(|mounted| *mounted.borrow_mut() = Some(panel.clone()));
    Ok(Some(panel))
}

/// JavaScript entry point: mount the panel of the current document.
///
/// # Errors
///
/// Rejects with the error message when mounting fails.
#[wasm_bindgen(js_name = mountPowerstripPanel)]
pub fn mount_powerstrip_panel() -> Result<Option<PowerstripPanel>, JsValue> {
    let document = current_document()?;
    Ok(mount(&document)?)
}

fn current_document() -> Result<Document, DashboardError> {
    web_sys::window()
        .ok_or(DashboardError::NoWindow)?
        .document()
        .ok_or(DashboardError::NoDocument)
}

fn mount_and_keep(document: &Document) {
    if let Err(err) = mount(document) {
        tracing::error!(error = %err, "failed to start powerstrip panel");
    }
}

/// Mount the panel once the DOM is ready and keep it for the page lifetime.
pub fn start() {
    let document = match current_document() {
        Ok(document) => document,
        Err(err) => {
            web_sys::console::error_1(&JsValue::from_str(&err.to_string()));
            return;
        }
    };

    if document.ready_state() != "loading" {
        mount_and_keep(&document);
        return;
    }

    let ready = document.clone();
    let on_ready = Closure::<dyn FnMut()>::new(move || mount_and_keep(&ready));
    if let Err(err) = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
    {
        web_sys::console::error_1(&err);
        return;
    }
    on_ready.forget();
}
