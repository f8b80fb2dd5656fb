use super::*;

fn upload_body() -> serde_json::Value {
    serde_json::json!({
        "message": "CSV processed successfully",
        "data": {
            "id": 7,
            "csv_file": "/media/csvs/sample.csv",
            "uploaded_at": "2024-01-02T10:00:00Z",
            "total_equipment_count": 3,
            "average_pressure": 1.25,
            "average_temperature": 30.0,
            "equipment_type_distribution_json": { "Pump": 2, "Valve": 1 },
            "equipment_records": [
                {
                    "id": 21,
                    "equipment_name": "P-101",
                    "equipment_type": "Pump",
                    "flowrate": 120.5,
                    "pressure": 1.2,
                    "temperature": 25.0
                },
                {
                    "id": 22,
                    "equipment_name": "P-102",
                    "equipment_type": "Pump",
                    "flowrate": 98.0,
                    "pressure": 1.4,
                    "temperature": 31.0
                },
                {
                    "id": 23,
                    "equipment_name": "V-201",
                    "equipment_type": "Valve",
                    "flowrate": 60.0,
                    "pressure": 1.15,
                    "temperature": 34.0
                }
            ]
        },
        "statistics": { "total_equipment": 3 }
    })
}

// =============================================================
// UploadSummary deserialization
// =============================================================

#[test]
fn upload_response_unwraps_summary_with_records() {
    let response: UploadResponse = serde_json::from_value(upload_body()).unwrap();
    let summary = response.data;
    assert_eq!(summary.id, 7);
    assert_eq!(summary.total_equipment_count, 3);
    assert!(summary.has_records());
    assert_eq!(summary.equipment_records.unwrap().len(), 3);
}

#[test]
fn history_row_without_records_deserializes_to_none() {
    let row: UploadSummary = serde_json::from_value(serde_json::json!({
        "id": 4,
        "uploaded_at": "2024-01-02T10:00:00Z",
        "total_equipment_count": 5,
        "average_pressure": 2.10,
        "average_temperature": 55.0,
        "equipment_type_distribution_json": { "Reactor": 5 }
    }))
    .unwrap();
    assert!(row.equipment_records.is_none());
    assert!(!row.has_records());
}

#[test]
fn record_id_defaults_to_none() {
    let record: EquipmentRecord = serde_json::from_value(serde_json::json!({
        "equipment_name": "HX-300",
        "equipment_type": "Heat Exchanger",
        "flowrate": 40.0,
        "pressure": 3.2,
        "temperature": 110.0
    }))
    .unwrap();
    assert_eq!(record.id, None);
}

#[test]
fn integer_fields_accept_float_typed_whole_numbers() {
    let row: UploadSummary = serde_json::from_value(serde_json::json!({
        "id": 9.0,
        "uploaded_at": "2024-03-01T08:30:00Z",
        "total_equipment_count": 2.0,
        "average_pressure": 1.0,
        "average_temperature": 20.0
    }))
    .unwrap();
    assert_eq!(row.id, 9);
    assert_eq!(row.total_equipment_count, 2);
}

// =============================================================
// Distribution helpers
// =============================================================

#[test]
fn type_distribution_preserves_delivered_order() {
    let row: UploadSummary = serde_json::from_value(serde_json::json!({
        "id": 1,
        "uploaded_at": "2024-01-01T00:00:00Z",
        "total_equipment_count": 6,
        "average_pressure": 1.0,
        "average_temperature": 20.0,
        "equipment_type_distribution_json": { "Valve": 3, "Pump": 2, "Mixer": 1 }
    }))
    .unwrap();
    let labels: Vec<String> = row.type_distribution().into_iter().map(|(label, _)| label).collect();
    assert_eq!(labels, vec!["Valve", "Pump", "Mixer"]);
}

#[test]
fn distribution_total_matches_declared_count() {
    let response: UploadResponse = serde_json::from_value(upload_body()).unwrap();
    let summary = response.data;
    assert_eq!(summary.distribution_total(), summary.total_equipment_count);
}

#[test]
fn distribution_tolerates_float_typed_counts() {
    let row: UploadSummary = serde_json::from_value(serde_json::json!({
        "id": 2,
        "uploaded_at": "2024-01-01T00:00:00Z",
        "total_equipment_count": 4,
        "average_pressure": 1.0,
        "average_temperature": 20.0,
        "equipment_type_distribution_json": { "Pump": 3.0, "Valve": 1 }
    }))
    .unwrap();
    assert_eq!(row.type_distribution(), vec![("Pump".to_owned(), 3), ("Valve".to_owned(), 1)]);
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn api_error_deserializes_server_body() {
    let err: ApiError = serde_json::from_str(r#"{"error":"Missing column: Pressure"}"#).unwrap();
    assert_eq!(err.error, "Missing column: Pressure");
}
