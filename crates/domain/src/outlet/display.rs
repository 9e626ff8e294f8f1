//! Per-outlet display state — what the panel shows for one outlet.

use std::fmt;

/// Display state of an outlet widget.
///
/// Transitions are driven only by fetch outcomes:
/// `Loading` while the request runs, then one of the other variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutletDisplay {
    Loading,
    On,
    Off,
    Unknown,
    Error,
}

impl OutletDisplay {
    /// Map the server-reported state (`true`/`false`/`null`).
    #[must_use]
    pub fn from_state(state: Option<bool>) -> Self {
        match state {
            Some(true) => Self::On,
            Some(false) => Self::Off,
            None => Self::Unknown,
        }
    }

    /// Text written into the outlet's `.state` label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Loading => "loading...",
            Self::On => "on",
            Self::Off => "off",
            Self::Unknown => "unknown",
            Self::Error => "error",
        }
    }

    /// Whether the outlet element should carry the `on` class.
    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl From<Option<bool>> for OutletDisplay {
    fn from(state: Option<bool>) -> Self {
        Self::from_state(state)
    }
}

impl fmt::Display for OutletDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
