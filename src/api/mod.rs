//! HTTP API Bindings
//!
//! Requests to the collection point backend and the IBGE directory
//! service, organized by domain.

mod items;
mod points;
mod localidades;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{AbortController, AbortSignal};

// Re-export all public items
pub use items::*;
pub use points::*;
pub use localidades::*;

/// Errors that can occur while talking to remote services
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx response
    #[error("HTTP error: status {status} {text}")]
    Status { status: u16, text: String },
    /// Body was not the expected JSON
    #[error("Decode error: {0}")]
    Decode(String),
    /// Cancelled through its abort signal
    #[error("Request aborted")]
    Aborted,
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::JsError(js) if js.name == "AbortError" => ApiError::Aborted,
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Abort controller that cancels its request when dropped
pub struct AbortOnDrop(Option<AbortController>);

impl AbortOnDrop {
    pub fn new() -> Self {
        Self(AbortController::new().ok())
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.0.as_ref().map(AbortController::signal)
    }
}

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        if let Some(controller) = &self.0 {
            controller.abort();
        }
    }
}

fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: response.status(),
            text: response.status_text(),
        })
    }
}

async fn get_json<T: DeserializeOwned>(url: &str, abort: Option<&AbortSignal>) -> Result<T, ApiError> {
    log::debug!("[api] GET {}", url);
    let response = Request::get(url).abort_signal(abort).send().await?;
    let response = check_status(response)?;
    Ok(response.json::<T>().await?)
}

async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<Response, ApiError> {
    log::debug!("[api] POST {}", url);
    let response = Request::post(url).json(body)?.send().await?;
    check_status(response)
}

/// Join a base URL and a relative path with exactly one slash
fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
