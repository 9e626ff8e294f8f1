//! Commands sent to `POST /api/powerstrip/{index}`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Action understood by the outlet endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutletAction {
    On,
    Off,
    Toggle,
}

impl fmt::Display for OutletAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
            Self::Toggle => f.write_str("toggle"),
        }
    }
}

/// JSON body of a command request: `{"action": "toggle"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRequest {
    pub action: OutletAction,
}

impl From<OutletAction> for CommandRequest {
    fn from(action: OutletAction) -> Self {
        Self { action }
    }
}
