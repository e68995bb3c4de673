//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! is immutable after startup: the parsed config plus one backend client
//! whose connection pool is shared by every request.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::upstream::{Upstream, UpstreamError};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub upstream: Upstream,
}

impl AppState {
    /// # Errors
    ///
    /// Fails if the backend HTTP client cannot be built.
    pub fn new(config: GatewayConfig) -> Result<Self, UpstreamError> {
        let upstream = Upstream::new(&config)?;
        Ok(Self { config: Arc::new(config), upstream })
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::net::SocketAddr;
    use std::time::Duration;

    use axum::extract::Multipart;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{Value, json};

    use super::*;
    use crate::config::UpstreamTimeouts;

    /// Serve `router` on an ephemeral loopback port.
    pub async fn spawn(router: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind loopback listener");
        let addr = listener.local_addr().expect("listener address");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("test server failed");
        });
        addr
    }

    pub fn test_config(backend: SocketAddr) -> GatewayConfig {
        GatewayConfig {
            backend_url: format!("http://{backend}"),
            timeouts: UpstreamTimeouts { request_secs: 1, connect_secs: 1 },
            ..GatewayConfig::default()
        }
    }

    pub fn test_app_state(config: GatewayConfig) -> AppState {
        AppState::new(config).expect("test app state")
    }

    /// An address nothing listens on.
    pub async fn closed_addr() -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind loopback listener");
        listener.local_addr().expect("listener address")
    }

    /// Backend stand-in whose verdict echoes the multipart fields it got,
    /// in arrival order, under `received`.
    pub fn echo_backend() -> Router {
        Router::new()
            .route(wire::VERIFY_PATH, post(echo_verify))
            .route(wire::DASHBOARD_PATH, get(|| async { Json(sample_dashboard()) }))
    }

    /// Backend stand-in with fixed replies for the error paths.
    pub fn scripted_backend(status: StatusCode, body: &'static str) -> Router {
        let reply = move || async move { (status, body) };
        Router::new().route(wire::VERIFY_PATH, post(reply)).route(wire::DASHBOARD_PATH, get(reply))
    }

    /// Backend stand-in that answers after `delay`.
    pub fn slow_backend(delay: Duration) -> Router {
        let reply = move || async move {
            tokio::time::sleep(delay).await;
            Json(json!({ "verdict": "Real", "analysis": "late", "evidence": "late" }))
        };
        Router::new().route(wire::VERIFY_PATH, post(reply)).route(wire::DASHBOARD_PATH, get(reply))
    }

    pub fn sample_dashboard() -> Value {
        json!({
            "pieData": [{ "name": "Real", "value": 55 }, { "name": "Fake", "value": 45 }],
            "barData": [{ "day": "Mon", "count": 20 }],
            "recentResults": [{ "id": 1, "text": "Water is wet", "status": "Real" }],
        })
    }

    async fn echo_verify(mut multipart: Multipart) -> Json<Value> {
        let mut received = Vec::new();
        while let Ok(Some(field)) = multipart.next_field().await {
            let name = field.name().unwrap_or_default().to_owned();
            let file_name = field.file_name().map(str::to_owned);
            let content_type = field.content_type().map(str::to_owned);
            let bytes = field.bytes().await.unwrap_or_default();
            let value = match file_name {
                Some(file_name) => json!({ "file_name": file_name, "content_type": content_type, "len": bytes.len() }),
                None => json!(String::from_utf8_lossy(&bytes)),
            };
            received.push(json!([name, value]));
        }
        Json(json!({
            "verdict": "Real",
            "analysis": "echo",
            "evidence": "echo",
            "original_text": "",
            "received": received,
        }))
    }
}
