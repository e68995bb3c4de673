//! Reporting-view schema served at `/api/dashboard`.

use serde::{Deserialize, Serialize};

/// Aggregated verification history for the reporting view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub pie_data: Vec<PieSlice>,
    pub bar_data: Vec<DayCount>,
    pub recent_results: Vec<RecentResult>,
}

/// Verdict breakdown entry, e.g. `{ "name": "Real", "value": 55 }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieSlice {
    pub name: String,
    pub value: u64,
}

/// Verifications on one day, e.g. `{ "day": "Mon", "count": 20 }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCount {
    pub day: String,
    pub count: u64,
}

/// A recently verified snippet and its status label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentResult {
    pub id: u64,
    pub text: String,
    pub status: String,
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
