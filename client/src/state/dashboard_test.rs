use super::*;

fn slices() -> Vec<PieSlice> {
    vec![
        PieSlice { name: "Real".to_owned(), value: 55 },
        PieSlice { name: "Fake".to_owned(), value: 30 },
        PieSlice { name: "Needs Proof".to_owned(), value: 15 },
    ]
}

#[test]
fn default_state_is_loading() {
    let state = DashboardState::default();
    assert!(state.loading);
    assert!(state.data.is_none());
    assert!(state.error.is_none());
}

#[test]
fn apply_success_stores_data() {
    let mut state = DashboardState::default();
    state.apply(Ok(DashboardData::default()));
    assert!(!state.loading);
    assert_eq!(state.data, Some(DashboardData::default()));
    assert_eq!(state.error, None);
}

#[test]
fn apply_error_stores_message() {
    let mut state = DashboardState::default();
    state.apply(Err("dashboard unavailable".to_owned()));
    assert!(!state.loading);
    assert!(state.data.is_none());
    assert_eq!(state.error.as_deref(), Some("dashboard unavailable"));
}

#[test]
fn slice_shares_are_percentages_of_total() {
    let shares = slice_shares(&slices());
    let percents: Vec<u64> = shares.iter().map(|s| s.percent).collect();
    assert_eq!(percents, vec![55, 30, 15]);
    assert_eq!(shares[0].name, "Real");
}

#[test]
fn slice_shares_round_to_nearest() {
    let shares = slice_shares(&[
        PieSlice { name: "a".to_owned(), value: 1 },
        PieSlice { name: "b".to_owned(), value: 2 },
    ]);
    assert_eq!(shares[0].percent, 33);
    assert_eq!(shares[1].percent, 67);
}

#[test]
fn slice_shares_with_zero_total_are_zero() {
    let shares = slice_shares(&[PieSlice { name: "Real".to_owned(), value: 0 }]);
    assert_eq!(shares[0].percent, 0);
    assert!(slice_shares(&[]).is_empty());
}

#[test]
fn bar_heights_scale_to_busiest_day() {
    let days = vec![
        DayCount { day: "Mon".to_owned(), count: 20 },
        DayCount { day: "Thu".to_owned(), count: 40 },
        DayCount { day: "Sun".to_owned(), count: 0 },
    ];
    let bars = bar_heights(&days);
    assert_eq!(bars[0], ("Mon".to_owned(), 20, 50));
    assert_eq!(bars[1], ("Thu".to_owned(), 40, 100));
    assert_eq!(bars[2], ("Sun".to_owned(), 0, 0));
}
