//! Transient success/error notification slots with cancellable expiry.
//!
//! DESIGN
//! ======
//! Each slot carries a sequence number bumped on every set or clear. Expiry
//! callbacks capture the sequence at schedule time and only clear the slot
//! while it is still current, so a newer message cancels any older timer
//! without tracking timer handles.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::time::Duration;

/// Success lifetime after an upload completes.
pub const UPLOAD_SUCCESS_TTL: Duration = Duration::from_secs(5);
/// Success lifetime after loading a historical row.
pub const HISTORY_LOADED_TTL: Duration = Duration::from_secs(3);
/// Success lifetime for report progress and completion messages.
pub const REPORT_SUCCESS_TTL: Duration = Duration::from_secs(5);
/// Error lifetime.
pub const ERROR_TTL: Duration = Duration::from_secs(8);

/// Single-slot success/error mailboxes backing the shell's alert banners.
#[derive(Clone, Debug, Default)]
pub struct NotifyState {
    pub success: Option<String>,
    pub error: Option<String>,
    success_seq: u64,
    error_seq: u64,
}

impl NotifyState {
    pub fn set_success(&mut self, text: impl Into<String>) {
        self.success = Some(text.into());
        self.success_seq += 1;
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.error = Some(text.into());
        self.error_seq += 1;
    }

    /// Manual dismissal; also invalidates any scheduled expiry.
    pub fn clear_success(&mut self) {
        self.success = None;
        self.success_seq += 1;
    }

    /// Manual dismissal; also invalidates any scheduled expiry.
    pub fn clear_error(&mut self) {
        self.error = None;
        self.error_seq += 1;
    }

    /// Sequence to capture when scheduling an expiry for the success slot.
    #[must_use]
    pub fn success_seq(&self) -> u64 {
        self.success_seq
    }

    /// Sequence to capture when scheduling an expiry for the error slot.
    #[must_use]
    pub fn error_seq(&self) -> u64 {
        self.error_seq
    }

    /// Expire the success slot only if `seq` is still current.
    pub fn expire_success(&mut self, seq: u64) {
        if self.success_seq == seq {
            self.success = None;
        }
    }

    /// Expire the error slot only if `seq` is still current.
    pub fn expire_error(&mut self, seq: u64) {
        if self.error_seq == seq {
            self.error = None;
        }
    }
}
