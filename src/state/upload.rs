//! Upload widget state machine.
//!
//! DESIGN
//! ======
//! The Idle → Selected → Uploading transitions are encoded explicitly so the
//! panel cannot start a second upload while one is in flight. A failed upload
//! returns to Selected with the file retained for retry; preflight rejections
//! never leave Idle and never touch the network.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// Maximum accepted file size in bytes (exclusive).
pub const MAX_FILE_SIZE_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

/// Preflight rejection for a non-`.csv` file name.
pub const BAD_EXTENSION_MESSAGE: &str = "Please select a CSV file (.csv extension required)";
/// Preflight rejection for an oversized file.
pub const OVERSIZE_MESSAGE: &str = "File size must be less than 5MB";
/// Upload attempted with no file chosen.
pub const NO_FILE_MESSAGE: &str = "Please select a file first";

/// Lifecycle phase of the upload widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadPhase {
    /// No file selected; upload disabled.
    #[default]
    Idle,
    /// A file passed preflight; upload enabled.
    Selected,
    /// Upload in flight; input and upload action disabled.
    Uploading,
}

/// Upload widget state: the current phase plus the selected file's metadata.
#[derive(Clone, Debug, Default)]
pub struct UploadState {
    pub phase: UploadPhase,
    pub file_name: Option<String>,
    pub file_size_bytes: f64,
}

impl UploadState {
    /// Run preflight on a chosen file and move to Selected when it passes.
    ///
    /// # Errors
    ///
    /// Returns the preflight rejection message; the widget drops the previous
    /// selection and stays Idle.
    pub fn select(&mut self, name: &str, size_bytes: f64) -> Result<(), String> {
        match preflight(name, size_bytes) {
            Ok(()) => {
                self.phase = UploadPhase::Selected;
                self.file_name = Some(name.to_owned());
                self.file_size_bytes = size_bytes;
                Ok(())
            }
            Err(message) => {
                self.clear_selection();
                Err(message)
            }
        }
    }

    /// Move Selected → Uploading. Returns `false` unless a preflighted file
    /// is ready and no upload is already in flight.
    pub fn begin_upload(&mut self) -> bool {
        if self.phase != UploadPhase::Selected {
            return false;
        }
        self.phase = UploadPhase::Uploading;
        true
    }

    /// Successful upload: drop the selection and return to Idle.
    pub fn finish_success(&mut self) {
        self.clear_selection();
    }

    /// Failed upload: return to Selected so the user can retry the same file.
    pub fn finish_failure(&mut self) {
        if self.phase == UploadPhase::Uploading {
            self.phase = UploadPhase::Selected;
        }
    }

    #[must_use]
    pub fn can_upload(&self) -> bool {
        self.phase == UploadPhase::Selected
    }

    #[must_use]
    pub fn is_uploading(&self) -> bool {
        self.phase == UploadPhase::Uploading
    }

    fn clear_selection(&mut self) {
        self.phase = UploadPhase::Idle;
        self.file_name = None;
        self.file_size_bytes = 0.0;
    }
}

/// Client-side preflight: `.csv` extension (case-insensitive) and a size
/// strictly under [`MAX_FILE_SIZE_BYTES`]. No network call either way.
///
/// # Errors
///
/// Returns the user-facing rejection message.
pub fn preflight(name: &str, size_bytes: f64) -> Result<(), String> {
    if !name.to_ascii_lowercase().ends_with(".csv") {
        return Err(BAD_EXTENSION_MESSAGE.to_owned());
    }
    if size_bytes >= MAX_FILE_SIZE_BYTES {
        return Err(OVERSIZE_MESSAGE.to_owned());
    }
    Ok(())
}
