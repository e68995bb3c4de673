//! Reporting-view state and chart math.
//!
//! The report is fetched once per visit and only displayed, so the state
//! is a small load/ready/error holder plus pure helpers that turn counts
//! into percentages for the CSS charts.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use wire::{DashboardData, DayCount, PieSlice};

/// Load status of the reporting view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardState {
    pub loading: bool,
    pub data: Option<DashboardData>,
    pub error: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self { loading: true, data: None, error: None }
    }
}

impl DashboardState {
    /// Settle the state with the fetch outcome.
    pub fn apply(&mut self, outcome: Result<DashboardData, String>) {
        self.loading = false;
        match outcome {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(message) => {
                self.data = None;
                self.error = Some(message);
            }
        }
    }
}

/// A pie slice with its rounded share of the total, in percent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SliceShare {
    pub name: String,
    pub value: u64,
    pub percent: u64,
}

/// Shares of each slice. All shares are 0 when the total is 0.
pub fn slice_shares(slices: &[PieSlice]) -> Vec<SliceShare> {
    let total: u64 = slices.iter().map(|s| s.value).sum();
    slices
        .iter()
        .map(|slice| SliceShare {
            name: slice.name.clone(),
            value: slice.value,
            percent: rounded_percent(slice.value, total),
        })
        .collect()
}

/// Bar heights in percent of the busiest day.
pub fn bar_heights(days: &[DayCount]) -> Vec<(String, u64, u64)> {
    let max = days.iter().map(|d| d.count).max().unwrap_or(0);
    days.iter()
        .map(|day| (day.day.clone(), day.count, rounded_percent(day.count, max)))
        .collect()
}

fn rounded_percent(part: u64, whole: u64) -> u64 {
    if whole == 0 {
        return 0;
    }
    (part * 100 + whole / 2) / whole
}
