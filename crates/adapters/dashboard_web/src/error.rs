//! Browser adapter error types.

use wasm_bindgen::JsValue;

/// Errors raised while mounting the panel.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Not running in a browser window.
    #[error("no global window")]
    NoWindow,

    /// The window has no document.
    #[error("window has no document")]
    NoDocument,

    /// Semantic validation failure of the panel configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<DashboardError> for JsValue {
    fn from(err: DashboardError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
