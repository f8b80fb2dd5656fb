use super::*;

// =============================================================
// Expiry sequencing
// =============================================================

#[test]
fn scheduled_expiry_clears_the_message_it_was_set_for() {
    let mut state = NotifyState::default();
    state.set_success("CSV file processed successfully!");
    let seq = state.success_seq();
    state.expire_success(seq);
    assert_eq!(state.success, None);
}

#[test]
fn newer_message_cancels_the_older_timer() {
    let mut state = NotifyState::default();
    state.set_success("Generating PDF report...");
    let stale_seq = state.success_seq();
    state.set_success("PDF report downloaded successfully!");
    state.expire_success(stale_seq);
    assert_eq!(state.success.as_deref(), Some("PDF report downloaded successfully!"));
}

#[test]
fn manual_dismissal_invalidates_the_pending_expiry() {
    let mut state = NotifyState::default();
    state.set_error("Missing column: Pressure");
    let seq = state.error_seq();
    state.clear_error();
    state.set_error("second failure");
    state.expire_error(seq);
    assert_eq!(state.error.as_deref(), Some("second failure"));
}

#[test]
fn slots_expire_independently() {
    let mut state = NotifyState::default();
    state.set_success("done");
    state.set_error("broken");
    let success_seq = state.success_seq();
    state.expire_success(success_seq);
    assert_eq!(state.success, None);
    assert_eq!(state.error.as_deref(), Some("broken"));
}

#[test]
fn set_replaces_the_previous_message_in_place() {
    let mut state = NotifyState::default();
    state.set_success("first");
    state.set_success("second");
    assert_eq!(state.success.as_deref(), Some("second"));
}

// =============================================================
// Expiry policy
// =============================================================

#[test]
fn success_lifetimes_sit_inside_the_three_to_five_second_window() {
    for ttl in [UPLOAD_SUCCESS_TTL, HISTORY_LOADED_TTL, REPORT_SUCCESS_TTL] {
        assert!(ttl >= Duration::from_secs(3));
        assert!(ttl <= Duration::from_secs(5));
    }
}

#[test]
fn errors_outlive_successes() {
    assert_eq!(ERROR_TTL, Duration::from_secs(8));
    assert!(ERROR_TTL > UPLOAD_SUCCESS_TTL);
}
