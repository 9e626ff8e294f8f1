//! HTTP API client wrapping `gloo-net` for calls to `/api/powerstrip/*`.

use gloo_net::http::{Request, Response};
use serde::Deserialize;

use powerstrip_app::ports::OutletApi;
use powerstrip_domain::command::{CommandRequest, OutletAction};
use powerstrip_domain::error::{HttpError, Operation, PanelError};
use powerstrip_domain::outlet::OutletIndex;
use powerstrip_domain::reading::OutletReading;

/// `fetch`-backed implementation of [`OutletApi`].
#[derive(Debug, Clone)]
pub struct HttpOutletApi {
    base: String,
}

impl HttpOutletApi {
    /// Create a client rooted at `base` (e.g. `/api/powerstrip`).
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    #[must_use]
    pub fn url(&self, index: OutletIndex) -> String {
        outlet_url(&self.base, index)
    }
}

fn outlet_url(base: &str, index: OutletIndex) -> String {
    format!("{}/{index}", base.trim_end_matches('/'))
}

fn transport(err: gloo_net::Error) -> PanelError {
    PanelError::Transport(err.to_string())
}

/// JSON error body returned by the server on non-2xx responses.
///
/// The powerstrip server answers `{"detail": "..."}`; `{"error": "..."}` is
/// accepted too. A non-string `detail` (validation errors) is ignored.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

fn error_detail(body: &str) -> Option<String> {
    let body: ErrorBody = serde_json::from_str(body).ok()?;
    match body.detail {
        Some(serde_json::Value::String(detail)) => Some(detail),
        _ => body.error,
    }
}

fn status_error(operation: Operation, status: u16, body: Option<&str>) -> PanelError {
    let err = HttpError::new(operation, status);
    match body.and_then(error_detail) {
        Some(detail) => err.with_detail(detail).into(),
        None => err.into(),
    }
}

fn decode_reading(body: &str) -> Result<OutletReading, PanelError> {
    Ok(serde_json::from_str(body)?)
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response, operation: Operation) -> Result<Response, PanelError> {
    if resp.ok() {
        return Ok(resp);
    }
    let body = resp.text().await.ok();
    Err(status_error(operation, resp.status(), body.as_deref()))
}

async fn read_reading(resp: Response) -> Result<OutletReading, PanelError> {
    let body = resp.text().await.map_err(transport)?;
    decode_reading(&body)
}

impl OutletApi for HttpOutletApi {
    async fn fetch_state(&self, index: OutletIndex) -> Result<OutletReading, PanelError> {
        let url = self.url(index);
        let resp = Request::get(&url).send().await.map_err(transport)?;
        let resp = check_response(resp, Operation::Fetch).await?;
        read_reading(resp).await
    }

    async fn send_command(
        &self,
        index: OutletIndex,
        action: OutletAction,
    ) -> Result<OutletReading, PanelError> {
        let url = self.url(index);
        let resp = Request::post(&url)
            .json(&CommandRequest::from(action))
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let resp = check_response(resp, Operation::Command).await?;
        read_reading(resp).await
    }
}
