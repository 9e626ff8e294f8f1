//! Common error types used across the workspace.
//!
//! Each layer converts its own failures into [`PanelError`] via `#[from]`
//! so the controller only ever deals with one error type.

use std::fmt;

/// Which request produced an [`HttpError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `GET /api/powerstrip/{index}`.
    Fetch,
    /// `POST /api/powerstrip/{index}`.
    Command,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch => f.write_str("fetch state"),
            Self::Command => f.write_str("set state"),
        }
    }
}

/// The server answered with a non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to {operation}: {status}{}", detail_suffix(.detail))]
pub struct HttpError {
    /// Request that failed.
    pub operation: Operation,
    /// HTTP status code returned by the server.
    pub status: u16,
    /// Human readable reason extracted from the error body, if any.
    pub detail: Option<String>,
}

impl HttpError {
    #[must_use]
    pub fn new(operation: Operation, status: u16) -> Self {
        Self {
            operation,
            status,
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

#[allow(clippy::ref_option)]
fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|detail| format!(" ({detail})"))
        .unwrap_or_default()
}

/// Top-level error for every panel operation.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// Non-success HTTP status.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The request never produced a response (network down, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body was not the expected JSON document.
    #[error("failed to decode response body")]
    Decode(#[from] serde_json::Error),

    /// An outlet element carries a missing or non-numeric `data-index`.
    #[error("invalid outlet index {0:?}")]
    InvalidIndex(String),
}
