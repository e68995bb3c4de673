//! `GET /api/dashboard`: validated pass-through of the reporting data.

use axum::Json;
use axum::extract::State;
use wire::DashboardData;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardData>, ApiError> {
    let data = state.upstream.dashboard().await?;
    tracing::debug!(recent = data.recent_results.len(), "dashboard data relayed");
    Ok(Json(data))
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
