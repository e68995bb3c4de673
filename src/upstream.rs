//! Client for the external verification backend.
//!
//! DESIGN
//! ======
//! The gateway is a relay: it re-sends the request with the shared field
//! plan and hands back whatever JSON the backend answered, status included.
//! Only transport problems and non-JSON bodies become gateway errors.

use serde_json::Value;
use wire::{Attachment, DashboardData, VerificationRequest};

use crate::config::GatewayConfig;

/// Errors produced while talking to the verification backend.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    /// The outbound request could not be assembled.
    #[error("invalid upload: {0}")]
    InvalidRequest(String),

    /// No answer within the configured request timeout.
    #[error("verification service timed out")]
    Timeout,

    /// Connection refused, reset, DNS failure and the like.
    #[error("verification service unreachable: {0}")]
    Unreachable(String),

    /// A non-success status where only success is relayed.
    #[error("verification service returned HTTP {status}")]
    Status { status: u16 },

    /// The body could not be read as the expected JSON.
    #[error("verification service returned an unreadable response: {0}")]
    InvalidBody(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Unreachable(err.to_string()) }
    }
}

/// A backend reply to relay as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayedReply {
    pub status: u16,
    pub body: Value,
}

#[derive(Debug, Clone)]
pub struct Upstream {
    http: reqwest::Client,
    verify_url: String,
    dashboard_url: String,
}

impl Upstream {
    /// Build the backend client from gateway config.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::ClientBuild`] if the TLS backend cannot be
    /// initialised.
    pub fn new(config: &GatewayConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()
            .map_err(|e| UpstreamError::ClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            verify_url: config.backend_endpoint(wire::VERIFY_PATH),
            dashboard_url: config.backend_endpoint(wire::DASHBOARD_PATH),
        })
    }

    /// Forward a verification request and return the backend's JSON reply.
    ///
    /// # Errors
    ///
    /// Invalid upload media types, transport failures, timeouts and non-JSON
    /// bodies.
    pub async fn verify(&self, request: VerificationRequest<Attachment>) -> Result<RelayedReply, UpstreamError> {
        let form = wire::multipart::into_form(request).map_err(|e| UpstreamError::InvalidRequest(e.to_string()))?;
        let response = self.http.post(&self.verify_url).multipart(form).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        let body = serde_json::from_str::<Value>(&text).map_err(|e| {
            tracing::warn!(status, body_len = text.len(), "verification backend sent non-JSON body");
            UpstreamError::InvalidBody(e.to_string())
        })?;
        Ok(RelayedReply { status, body })
    }

    /// Fetch and validate the reporting-view data.
    ///
    /// # Errors
    ///
    /// Transport failures, timeouts, non-success statuses and bodies that do
    /// not match [`DashboardData`].
    pub async fn dashboard(&self) -> Result<DashboardData, UpstreamError> {
        let response = self.http.get(&self.dashboard_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status { status: status.as_u16() });
        }
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| UpstreamError::InvalidBody(e.to_string()))
    }
}

#[cfg(test)]
#[path = "upstream_test.rs"]
mod tests;
