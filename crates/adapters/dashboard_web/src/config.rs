//! Panel configuration — defaults with per-page overrides.
//!
//! Every field has a sensible default so the host page only needs the
//! markup. Attributes on the container element take precedence:
//!
//! | Attribute | Field |
//! |-----------|-------|
//! | `data-api-base` | [`PanelConfig::api_base`] |
//! | `data-poll-interval-ms` | [`PanelConfig::poll_interval_ms`] |
//! | `data-log` | [`PanelConfig::log_filter`] |

use std::time::Duration;

use serde::Deserialize;

use crate::error::DashboardError;

/// Runtime configuration of one panel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// `id` of the panel container element.
    pub container_id: String,
    /// Prefix of the outlet endpoints; the index is appended.
    pub api_base: String,
    /// Delay between two refresh cycles, in milliseconds.
    pub poll_interval_ms: u32,
    /// Filter directive (`RUST_LOG` syntax).
    pub log_filter: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            container_id: "powerstrip-panel".to_string(),
            api_base: "/api/powerstrip".to_string(),
            poll_interval_ms: 10_000,
            log_filter: "info".to_string(),
        }
    }
}

impl PanelConfig {
    /// Apply overrides read from the container's `data-*` attributes.
    ///
    /// Values that do not parse are ignored.
    pub fn apply_overrides(&mut self, attribute: impl Fn(&str) -> Option<String>) {
        if let Some(val) = attribute("data-api-base") {
            self.api_base = val;
        }
        if let Some(val) = attribute("data-poll-interval-ms") {
            if let Ok(ms) = val.trim().parse() {
                self.poll_interval_ms = ms;
            }
        }
        if let Some(val) = attribute("data-log") {
            self.log_filter = val;
        }
    }

    /// Check semantic constraints.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Config`] for a zero poll interval or an
    /// empty API base.
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.poll_interval_ms == 0 {
            return Err(DashboardError::Config(
                "poll interval must be non-zero".to_string(),
            ));
        }
        if self.api_base.trim().is_empty() {
            return Err(DashboardError::Config(
                "api base must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.poll_interval_ms))
    }
}
