//! Outlet identifier as carried by the `data-index` attribute.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PanelError;

/// Integer index of an outlet on the power strip.
///
/// Forwarded verbatim to the server; whether it is zero- or one-based is the
/// server's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutletIndex(i64);

impl OutletIndex {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Parse the raw attribute value of an outlet element.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::InvalidIndex`] when the attribute is missing or
    /// is not an integer.
    pub fn from_attribute(raw: Option<&str>) -> Result<Self, PanelError> {
        match raw {
            Some(value) => value.parse(),
            None => Err(PanelError::InvalidIndex(String::new())),
        }
    }
}

impl From<i64> for OutletIndex {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for OutletIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for OutletIndex {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| PanelError::InvalidIndex(s.to_string()))
    }
}
