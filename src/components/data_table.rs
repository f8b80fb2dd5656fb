//! Equipment records table.

#[cfg(test)]
#[path = "data_table_test.rs"]
mod data_table_test;

use leptos::prelude::*;

use crate::net::types::{EquipmentRecord, UploadSummary};
use crate::util::format::two_decimals;

/// Table of the current summary's records, or an empty-state placeholder.
#[component]
pub fn DataTable() -> impl IntoView {
    let current = expect_context::<RwSignal<Option<UploadSummary>>>();

    let records = move || {
        current.with(|data| {
            data.as_ref()
                .and_then(|summary| summary.equipment_records.clone())
                .unwrap_or_default()
        })
    };
    let has_records = move || !records().is_empty();

    view! {
        <div class="card data-table">
            <div class="card__header card__header--secondary">
                <h5 class="card__title">{move || header_label(&records())}</h5>
            </div>
            <div class="card__body">
                <Show
                    when=has_records
                    fallback=|| view! {
                        <p class="data-table__empty">
                            "No equipment data available. Upload a CSV file to see data."
                        </p>
                    }
                >
                    <div class="data-table__scroll">
                        <table class="data-table__table">
                            <thead>
                                <tr>
                                    <th>"Equipment Name"</th>
                                    <th>"Type"</th>
                                    <th>"Flowrate"</th>
                                    <th>"Pressure (bar)"</th>
                                    <th>"Temperature (\u{b0}C)"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    records()
                                        .into_iter()
                                        .map(|record| {
                                            let EquipmentRecord {
                                                equipment_name,
                                                equipment_type,
                                                flowrate,
                                                pressure,
                                                temperature,
                                                ..
                                            } = record;
                                            view! {
                                                <tr>
                                                    <td>{equipment_name}</td>
                                                    <td>
                                                        <span class="badge">{equipment_type}</span>
                                                    </td>
                                                    <td>{two_decimals(flowrate)}</td>
                                                    <td>{two_decimals(pressure)}</td>
                                                    <td>{two_decimals(temperature)}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </tbody>
                        </table>
                    </div>
                </Show>
            </div>
        </div>
    }
}

/// Card title, with the record count once data is loaded.
fn header_label(records: &[EquipmentRecord]) -> String {
    if records.is_empty() {
        "Equipment Data".to_owned()
    } else {
        format!("Equipment Data ({} records)", records.len())
    }
}
