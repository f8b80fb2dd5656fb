use super::*;

fn summary(id: i64) -> UploadSummary {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "uploaded_at": "2024-01-02T10:00:00Z",
        "total_equipment_count": 5,
        "average_pressure": 2.10,
        "average_temperature": 55.0
    }))
    .unwrap()
}

#[test]
fn begin_fetch_sets_loading_and_issues_increasing_sequences() {
    let mut state = HistoryState::default();
    let first = state.begin_fetch();
    let second = state.begin_fetch();
    assert!(state.loading);
    assert!(second > first);
}

#[test]
fn apply_replaces_the_list_and_clears_loading() {
    let mut state = HistoryState::default();
    let seq = state.begin_fetch();
    assert!(state.apply(seq, vec![summary(1), summary(2)]));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn stale_response_does_not_clobber_a_newer_list() {
    let mut state = HistoryState::default();
    let slow = state.begin_fetch();
    let fast = state.begin_fetch();
    assert!(state.apply(fast, vec![summary(9)]));
    assert!(!state.apply(slow, vec![summary(1)]));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, 9);
}

#[test]
fn out_of_order_completion_keeps_loading_until_the_latest_resolves() {
    let mut state = HistoryState::default();
    let slow = state.begin_fetch();
    let fast = state.begin_fetch();
    state.apply(slow, vec![summary(1)]);
    assert!(state.loading);
    state.apply(fast, vec![summary(2)]);
    assert!(!state.loading);
}

#[test]
fn failure_leaves_the_current_list_untouched() {
    let mut state = HistoryState::default();
    let seq = state.begin_fetch();
    state.apply(seq, vec![summary(3)]);
    let failed = state.begin_fetch();
    state.fail(failed);
    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn apply_truncates_past_the_history_window() {
    let mut state = HistoryState::default();
    let seq = state.begin_fetch();
    let items = (1..=7).map(summary).collect();
    state.apply(seq, items);
    assert_eq!(state.items.len(), HISTORY_LIMIT);
    assert_eq!(state.items[0].id, 1);
}
