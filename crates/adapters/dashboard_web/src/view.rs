//! DOM bindings for the host page's outlet markup.
//!
//! ```html
//! <div id="powerstrip-panel">
//!   <div class="outlet" data-index="1">
//!     <span class="state"></span>
//!     <button class="toggle-btn">Toggle</button>
//!   </div>
//! </div>
//! ```

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlButtonElement, Window};

use powerstrip_app::ports::{OutletWidget, PanelView, ToggleHandler};
use powerstrip_domain::outlet::ON_CLASS;

const OUTLET_SELECTOR: &str = ".outlet";
const STATE_SELECTOR: &str = ".state";
const TOGGLE_SELECTOR: &str = ".toggle-btn";
const INDEX_ATTRIBUTE: &str = "data-index";

/// One `.outlet` element.
#[derive(Debug, Clone)]
pub struct DomOutlet {
    element: Element,
}

impl DomOutlet {
    fn child(&self, selector: &str) -> Option<Element> {
        match self.element.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!(selector, error = ?err, "outlet child lookup failed");
                None
            }
        }
    }

    fn toggle_button(&self) -> Option<Element> {
        self.child(TOGGLE_SELECTOR)
    }
}

impl OutletWidget for DomOutlet {
    fn raw_index(&self) -> Option<String> {
        self.element.get_attribute(INDEX_ATTRIBUTE)
    }

    fn set_label(&self, label: &str) {
        if let Some(state) = self.child(STATE_SELECTOR) {
            state.set_text_content(Some(label));
        }
    }

    fn set_on(&self, on: bool) {
        if let Err(err) = self.element.class_list().toggle_with_force(ON_CLASS, on) {
            tracing::warn!(error = ?err, "failed to update outlet class");
        }
    }

    fn set_toggle_enabled(&self, enabled: bool) {
        let Some(toggle) = self.toggle_button() else {
            return;
        };
        if let Some(button) = toggle.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(!enabled);
            return;
        }
        // Non-button controls only honour the attribute for styling.
        let result = if enabled {
            toggle.remove_attribute("disabled")
        } else {
            toggle.set_attribute("disabled", "")
        };
        if let Err(err) = result {
            tracing::warn!(error = ?err, "failed to update toggle control");
        }
    }
}

/// The `#powerstrip-panel` container.
pub struct DomPanel {
    window: Window,
    container: Element,
}

impl DomPanel {
    #[must_use]
    pub fn new(window: Window, container: Element) -> Self {
        Self { window, container }
    }
}

impl PanelView for DomPanel {
    type Outlet = DomOutlet;

    fn outlets(&self) -> Vec<DomOutlet> {
        let nodes = match self.container.query_selector_all(OUTLET_SELECTOR) {
            Ok(nodes) => nodes,
            Err(err) => {
                tracing::warn!(error = ?err, "failed to list outlets");
                return Vec::new();
            }
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| DomOutlet { element })
            .collect()
    }

    fn bind_toggle(&self, outlet: &DomOutlet, handler: ToggleHandler<DomOutlet>) {
        let Some(toggle) = outlet.toggle_button() else {
            tracing::debug!(index = ?outlet.raw_index(), "outlet has no toggle control");
            return;
        };

        let clicked = outlet.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || {
            wasm_bindgen_futures::spawn_local(handler(clicked.clone()));
        });
        if let Err(err) =
            toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        {
            tracing::warn!(error = ?err, "failed to attach toggle listener");
            return;
        }
        // Listeners live as long as the page.
        on_click.forget();
    }

    fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            tracing::warn!(error = ?err, "failed to show alert");
        }
    }
}
