use super::*;

// =============================================================
// Preflight
// =============================================================

#[test]
fn preflight_accepts_lowercase_csv() {
    assert_eq!(preflight("sample.csv", 2048.0), Ok(()));
}

#[test]
fn preflight_accepts_uppercase_extension() {
    assert_eq!(preflight("SAMPLE.CSV", 2048.0), Ok(()));
}

#[test]
fn preflight_rejects_wrong_extension_with_message() {
    assert_eq!(preflight("data.txt", 2048.0), Err(BAD_EXTENSION_MESSAGE.to_owned()));
}

#[test]
fn preflight_checks_extension_before_size() {
    // A 6 MB .txt file reports the extension problem, not the size.
    assert_eq!(
        preflight("big.txt", 6.0 * 1024.0 * 1024.0),
        Err(BAD_EXTENSION_MESSAGE.to_owned())
    );
}

#[test]
fn preflight_rejects_oversized_file_with_message() {
    assert_eq!(
        preflight("big.csv", 6.0 * 1024.0 * 1024.0),
        Err(OVERSIZE_MESSAGE.to_owned())
    );
}

#[test]
fn preflight_rejects_exactly_five_megabytes() {
    assert_eq!(preflight("edge.csv", MAX_FILE_SIZE_BYTES), Err(OVERSIZE_MESSAGE.to_owned()));
}

#[test]
fn preflight_accepts_one_byte_under_the_limit() {
    assert_eq!(preflight("edge.csv", MAX_FILE_SIZE_BYTES - 1.0), Ok(()));
}

// =============================================================
// State machine transitions
// =============================================================

#[test]
fn select_moves_idle_to_selected() {
    let mut state = UploadState::default();
    state.select("sample.csv", 2048.0).unwrap();
    assert_eq!(state.phase, UploadPhase::Selected);
    assert_eq!(state.file_name.as_deref(), Some("sample.csv"));
    assert!(state.can_upload());
}

#[test]
fn failed_preflight_drops_previous_selection() {
    let mut state = UploadState::default();
    state.select("sample.csv", 2048.0).unwrap();
    assert!(state.select("data.txt", 100.0).is_err());
    assert_eq!(state.phase, UploadPhase::Idle);
    assert_eq!(state.file_name, None);
    assert!(!state.can_upload());
}

#[test]
fn begin_upload_requires_a_selection() {
    let mut state = UploadState::default();
    assert!(!state.begin_upload());
    assert_eq!(state.phase, UploadPhase::Idle);
}

#[test]
fn begin_upload_locks_out_a_second_upload() {
    let mut state = UploadState::default();
    state.select("sample.csv", 2048.0).unwrap();
    assert!(state.begin_upload());
    assert!(state.is_uploading());
    assert!(!state.begin_upload());
    assert!(!state.can_upload());
}

#[test]
fn finish_success_returns_to_idle_and_clears_selection() {
    let mut state = UploadState::default();
    state.select("sample.csv", 2048.0).unwrap();
    state.begin_upload();
    state.finish_success();
    assert_eq!(state.phase, UploadPhase::Idle);
    assert_eq!(state.file_name, None);
    assert_eq!(state.file_size_bytes, 0.0);
}

#[test]
fn finish_failure_retains_the_file_for_retry() {
    let mut state = UploadState::default();
    state.select("sample.csv", 2048.0).unwrap();
    state.begin_upload();
    state.finish_failure();
    assert_eq!(state.phase, UploadPhase::Selected);
    assert_eq!(state.file_name.as_deref(), Some("sample.csv"));
    assert!(state.can_upload());
}
