//! Recent uploads card with per-row View and PDF actions.

#[cfg(test)]
#[path = "history_panel_test.rs"]
mod history_panel_test;

use leptos::prelude::*;

use crate::net::types::UploadSummary;
use crate::state::history::HistoryState;
use crate::util::format::{locale_timestamp, two_decimals};

/// Table of the last five uploads; hidden entirely while the list is empty.
#[component]
pub fn HistoryPanel(on_view: Callback<UploadSummary>, on_download: Callback<i64>) -> impl IntoView {
    let history = expect_context::<RwSignal<HistoryState>>();

    view! {
        <Show when=move || history.with(|h| !h.items.is_empty())>
            <div class="card history">
                <div class="card__header card__header--info">
                    <h5 class="card__title">"Recent Uploads"</h5>
                </div>
                <div class="card__body">
                    <div class="history__scroll">
                        <table class="history__table">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Upload Date"</th>
                                    <th>"Equipment Count"</th>
                                    <th>"Avg Pressure"</th>
                                    <th>"Avg Temperature"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    history
                                        .with(|h| h.items.clone())
                                        .into_iter()
                                        .map(|item| {
                                            let upload_id = item.id;
                                            let view_item = item.clone();
                                            view! {
                                                <tr>
                                                    <td>{item.id}</td>
                                                    <td>{locale_timestamp(&item.uploaded_at)}</td>
                                                    <td>{item.total_equipment_count}</td>
                                                    <td>{pressure_label(item.average_pressure)}</td>
                                                    <td>{temperature_label(item.average_temperature)}</td>
                                                    <td>
                                                        <button
                                                            class="btn btn--outline history__action"
                                                            on:click=move |_| on_view.run(view_item.clone())
                                                        >
                                                            "View"
                                                        </button>
                                                        <button
                                                            class="btn btn--outline-danger history__action"
                                                            on:click=move |_| on_download.run(upload_id)
                                                        >
                                                            "PDF"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </Show>
    }
}

fn pressure_label(value: f64) -> String {
    format!("{} bar", two_decimals(value))
}

fn temperature_label(value: f64) -> String {
    format!("{} \u{b0}C", two_decimals(value))
}
