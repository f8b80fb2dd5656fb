//! Wire-schema DTOs for the equipment backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's serialized shapes so serde round-trips
//! stay lossless. Summaries are created server-side and treated as immutable
//! here; loading a historical row replaces the current view-model by
//! reference rather than mutating it.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// One parsed row of the uploaded CSV.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    /// Stable identifier when the record came from persisted state.
    #[serde(default)]
    pub id: Option<i64>,
    /// Equipment name or tag, non-empty.
    pub equipment_name: String,
    /// Short categorical type label (e.g. `"Pump"`).
    pub equipment_type: String,
    /// Flowrate in the unit the CSV was authored in.
    pub flowrate: f64,
    /// Operating pressure in bar.
    pub pressure: f64,
    /// Operating temperature in °C.
    pub temperature: f64,
}

/// Server-produced summary of one processed CSV upload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadSummary {
    /// Positive identifier assigned by the server.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Upload timestamp (ISO 8601); rendered in the user's locale.
    pub uploaded_at: String,
    /// Number of equipment rows; equals `equipment_records.len()` when the
    /// records are present.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub total_equipment_count: i64,
    /// Mean pressure across all rows, in bar.
    pub average_pressure: f64,
    /// Mean temperature across all rows, in °C.
    pub average_temperature: f64,
    /// Type label → row count, in the order the server delivered it.
    #[serde(default)]
    pub equipment_type_distribution_json: serde_json::Map<String, serde_json::Value>,
    /// Full record set; present after a fresh upload or detail fetch, absent
    /// in summary-only history rows.
    #[serde(default)]
    pub equipment_records: Option<Vec<EquipmentRecord>>,
}

impl UploadSummary {
    /// Distribution entries in the order the server delivered them.
    #[must_use]
    pub fn type_distribution(&self) -> Vec<(String, i64)> {
        self.equipment_type_distribution_json
            .iter()
            .map(|(label, value)| (label.clone(), count_from(value)))
            .collect()
    }

    /// Sum of the distribution counts; equals `total_equipment_count` for a
    /// consistent summary.
    #[must_use]
    pub fn distribution_total(&self) -> i64 {
        self.type_distribution().iter().map(|(_, count)| count).sum()
    }

    /// Whether the summary carries a non-empty record set.
    #[must_use]
    pub fn has_records(&self) -> bool {
        self.equipment_records
            .as_ref()
            .is_some_and(|records| !records.is_empty())
    }
}

/// Envelope returned by the upload endpoint; the client unwraps `data`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub data: UploadSummary,
}

/// Body of the history endpoint: the last five uploads, newest first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub history: Vec<UploadSummary>,
}

/// Uniform failure shape for every API operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable message shown in the error banner.
    pub error: String,
}

impl ApiError {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { error: text.into() }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn count_from(value: &serde_json::Value) -> i64 {
    if let Some(int) = value.as_i64() {
        return int;
    }
    value
        .as_f64()
        .filter(|float| float.is_finite() && float.fract() == 0.0)
        .map_or(0, |float| float as i64)
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
