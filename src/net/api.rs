//! REST API client for the equipment backend.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`. Native builds:
//! stubs returning errors, so the shell and the test suite compile
//! off-browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is normalized to [`ApiError`]. A structured `error` field in
//! the server body wins over the per-operation generic text; transport
//! failures fall back to that generic text and never panic.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiError, UploadSummary};
#[cfg(feature = "csr")]
use super::types::{HistoryResponse, UploadResponse};

/// Default backend origin; override at build time with `EQUIPVIZ_API_BASE`.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

#[cfg(any(test, feature = "csr"))]
const API_BASE: &str = match option_env!("EQUIPVIZ_API_BASE") {
    Some(base) => base,
    None => DEFAULT_API_BASE,
};

/// Generic fallback when the upload transport fails without a server body.
pub const UPLOAD_FAILED_MESSAGE: &str = "Network error occurred";
/// Generic fallback for history fetch failures.
pub const HISTORY_FAILED_MESSAGE: &str = "Failed to fetch upload history";
/// Generic fallback for detail fetch failures.
pub const DETAIL_FAILED_MESSAGE: &str = "Failed to fetch upload details";
/// Generic fallback for report download failures.
pub const REPORT_FAILED_MESSAGE: &str = "Failed to download PDF report";
/// Generic fallback when the health probe cannot reach the backend.
pub const HEALTH_FAILED_MESSAGE: &str = "Backend is not reachable";

#[cfg(any(test, feature = "csr"))]
fn upload_endpoint() -> String {
    format!("{API_BASE}/upload/")
}

#[cfg(any(test, feature = "csr"))]
fn history_endpoint() -> String {
    format!("{API_BASE}/history/")
}

#[cfg(any(test, feature = "csr"))]
fn detail_endpoint(upload_id: i64) -> String {
    format!("{API_BASE}/upload/{upload_id}/")
}

#[cfg(any(test, feature = "csr"))]
fn report_endpoint(upload_id: i64) -> String {
    format!("{API_BASE}/report/{upload_id}/")
}

#[cfg(any(test, feature = "csr"))]
fn health_endpoint() -> String {
    format!("{API_BASE}/health/")
}

/// File name for the dispatched PDF download.
#[must_use]
pub fn report_file_name(upload_id: i64) -> String {
    format!("equipment_report_{upload_id}.pdf")
}

/// Normalize a server error body. A JSON object with a string `error` field
/// wins; any other JSON body is forwarded verbatim (compact-serialized);
/// a non-JSON body falls back to `fallback`.
#[cfg(any(test, feature = "csr"))]
fn normalize_error_body(body: &str, fallback: &str) -> ApiError {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => {
            let message = match value.get("error") {
                Some(serde_json::Value::String(text)) => text.clone(),
                Some(other) => other.to_string(),
                None => value.to_string(),
            };
            ApiError::new(message)
        }
        Err(_) => ApiError::new(fallback),
    }
}

/// Upload a CSV file as a multipart POST with a single `csv_file` part and
/// return the processed summary, records included.
///
/// # Errors
///
/// Returns the server error body when one is present, otherwise the generic
/// network-failure message.
#[cfg(feature = "csr")]
pub async fn upload_csv(file: &web_sys::File) -> Result<UploadSummary, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::new(UPLOAD_FAILED_MESSAGE))?;
    form.append_with_blob_and_filename("csv_file", file, &file.name())
        .map_err(|_| ApiError::new(UPLOAD_FAILED_MESSAGE))?;
    let resp = gloo_net::http::Request::post(&upload_endpoint())
        .body(form)
        .map_err(|_| ApiError::new(UPLOAD_FAILED_MESSAGE))?
        .send()
        .await
        .map_err(|_| ApiError::new(UPLOAD_FAILED_MESSAGE))?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(normalize_error_body(&body, UPLOAD_FAILED_MESSAGE));
    }
    let envelope: UploadResponse = resp
        .json()
        .await
        .map_err(|_| ApiError::new(UPLOAD_FAILED_MESSAGE))?;
    Ok(envelope.data)
}

/// Fetch the last five uploads, newest first.
///
/// # Errors
///
/// Returns the server error body or the generic history-failure message.
pub async fn fetch_history() -> Result<Vec<UploadSummary>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&history_endpoint())
            .send()
            .await
            .map_err(|_| ApiError::new(HISTORY_FAILED_MESSAGE))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(normalize_error_body(&body, HISTORY_FAILED_MESSAGE));
        }
        let body: HistoryResponse = resp
            .json()
            .await
            .map_err(|_| ApiError::new(HISTORY_FAILED_MESSAGE))?;
        Ok(body.history)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::new("not available outside the browser"))
    }
}

/// Fetch one upload with its full record set.
///
/// # Errors
///
/// Returns the server error body or the generic detail-failure message.
pub async fn fetch_upload_detail(upload_id: i64) -> Result<UploadSummary, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&detail_endpoint(upload_id))
            .send()
            .await
            .map_err(|_| ApiError::new(DETAIL_FAILED_MESSAGE))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(normalize_error_body(&body, DETAIL_FAILED_MESSAGE));
        }
        resp.json()
            .await
            .map_err(|_| ApiError::new(DETAIL_FAILED_MESSAGE))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = upload_id;
        Err(ApiError::new("not available outside the browser"))
    }
}

/// Download the server-rendered PDF report for `upload_id` and dispatch it to
/// the user agent as `equipment_report_<id>.pdf`.
///
/// # Errors
///
/// Returns the server error body or the generic report-failure message.
pub async fn download_report(upload_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&report_endpoint(upload_id))
            .send()
            .await
            .map_err(|_| ApiError::new(REPORT_FAILED_MESSAGE))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(normalize_error_body(&body, REPORT_FAILED_MESSAGE));
        }
        let bytes = resp
            .binary()
            .await
            .map_err(|_| ApiError::new(REPORT_FAILED_MESSAGE))?;
        crate::util::download::save_blob(&bytes, "application/pdf", &report_file_name(upload_id))
            .map_err(|_| ApiError::new(REPORT_FAILED_MESSAGE))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = upload_id;
        Err(ApiError::new("not available outside the browser"))
    }
}

/// Probe the backend health endpoint. Exposed for diagnostics; the shell
/// itself never calls it.
///
/// # Errors
///
/// Returns the server error body or the generic reachability message.
pub async fn health_check() -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&health_endpoint())
            .send()
            .await
            .map_err(|_| ApiError::new(HEALTH_FAILED_MESSAGE))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(normalize_error_body(&body, HEALTH_FAILED_MESSAGE));
        }
        resp.json()
            .await
            .map_err(|_| ApiError::new(HEALTH_FAILED_MESSAGE))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::new("not available outside the browser"))
    }
}
