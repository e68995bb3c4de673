//! REST API helpers for communicating with the verification gateway.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since these requests are only issued from the
//! browser after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Verification never returns `Err`: transport errors, timeouts and server
//! errors are all folded into `VerificationResult::Failure` so the form
//! always has something to render.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use wire::DashboardData;
#[cfg(feature = "hydrate")]
use wire::{FormPart, VerificationRequest, VerificationResult};

/// How long the browser waits for a verdict before giving up. Media
/// transcription on the backend is slow, so this is generous.
pub const VERIFY_TIMEOUT: Duration = Duration::from_secs(120);

pub const TIMEOUT_MESSAGE: &str = "The verification service did not answer in time. Please try again.";

/// Where API requests are sent.
///
/// The base URL is baked in at build time from `VERITAS_API_BASE`; empty
/// means same-origin, i.e. the gateway that served the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("VERITAS_API_BASE").unwrap_or_default())
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn verify_url(&self) -> String {
        wire::endpoint(&self.base_url, wire::VERIFY_PATH)
    }

    pub fn dashboard_url(&self) -> String {
        wire::endpoint(&self.base_url, wire::DASHBOARD_PATH)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn dashboard_failed_message(status: u16) -> String {
    format!("dashboard request failed: {status}")
}

/// Submit a verification request as `multipart/form-data` and decode the
/// reply. Gives up after [`VERIFY_TIMEOUT`], aborting the fetch.
#[cfg(feature = "hydrate")]
pub async fn submit_verification(url: &str, request: VerificationRequest<web_sys::File>) -> VerificationResult {
    use futures::future::{Either, select};

    let controller = web_sys::AbortController::new().ok();
    let signal = controller.as_ref().map(web_sys::AbortController::signal);

    let send = std::pin::pin!(send_verification(url, &request, signal.as_ref()));
    let timeout = std::pin::pin!(gloo_timers::future::sleep(VERIFY_TIMEOUT));
    match select(send, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            if let Some(controller) = controller {
                controller.abort();
            }
            log::warn!("verification request timed out after {}s", VERIFY_TIMEOUT.as_secs());
            VerificationResult::failure(TIMEOUT_MESSAGE)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn send_verification(
    url: &str,
    request: &VerificationRequest<web_sys::File>,
    signal: Option<&web_sys::AbortSignal>,
) -> VerificationResult {
    let form = match build_form_data(request) {
        Ok(form) => form,
        Err(message) => return VerificationResult::transport_failure(&message),
    };
    let outbound = match gloo_net::http::Request::post(url).abort_signal(signal).body(form) {
        Ok(outbound) => outbound,
        Err(e) => return VerificationResult::transport_failure(&e.to_string()),
    };
    let resp = match outbound.send().await {
        Ok(resp) => resp,
        Err(e) => {
            log::warn!("verification request failed: {e}");
            return VerificationResult::transport_failure(&e.to_string());
        }
    };
    let status = resp.status();
    match resp.text().await {
        Ok(body) => wire::decode_response(status, &body),
        Err(e) => VerificationResult::transport_failure(&e.to_string()),
    }
}

/// Fill a browser `FormData` from the request's field plan. The browser
/// picks the multipart boundary, so no content type is set by hand.
#[cfg(feature = "hydrate")]
fn build_form_data(request: &VerificationRequest<web_sys::File>) -> Result<web_sys::FormData, String> {
    let form = web_sys::FormData::new().map_err(js_message)?;
    for part in request.parts() {
        match part {
            FormPart::Text { name, value } => form.append_with_str(name, value),
            FormPart::File { name, file } => form.append_with_blob_and_filename(name, file, &file.name()),
        }
        .map_err(js_message)?;
    }
    Ok(form)
}

#[cfg(feature = "hydrate")]
fn js_message(err: wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Fetch the reporting-view data from `/api/dashboard`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body does not match the report schema.
pub async fn fetch_dashboard(url: &str) -> Result<DashboardData, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url).send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(dashboard_failed_message(resp.status()));
        }
        resp.json::<DashboardData>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err("not available on server".to_owned())
    }
}
