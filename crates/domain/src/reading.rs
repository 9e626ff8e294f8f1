//! Outlet readings returned by both `/api/powerstrip/{index}` endpoints.

use serde::{Deserialize, Serialize};

use crate::outlet::{OutletDisplay, OutletIndex};

/// Response body: `{"index": 2, "state": true}`.
///
/// `state` is `null` when the server cannot tell. A missing `state` field is
/// read the same way, and unknown fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutletReading {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<OutletIndex>,
    #[serde(default)]
    pub state: Option<bool>,
}

impl OutletReading {
    #[must_use]
    pub fn display(&self) -> OutletDisplay {
        OutletDisplay::from_state(self.state)
    }
}
