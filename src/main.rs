mod config;
mod error;
mod routes;
mod state;
mod upstream;

use tracing_subscriber::EnvFilter;

use crate::config::GatewayConfig;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "veritas gateway stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let config = GatewayConfig::from_env().map_err(|e| e.to_string())?;
    let addr = config.listen_addr();
    tracing::info!(backend = %config.backend_url, timeout_secs = config.timeouts.request_secs, "verification backend configured");

    let state = state::AppState::new(config).map_err(|e| e.to_string())?;
    let app = routes::app(state)?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("failed to bind {addr}: {e}"))?;

    tracing::info!(%addr, "veritas listening");
    axum::serve(listener, app).await.map_err(|e| format!("server failed: {e}"))
}
