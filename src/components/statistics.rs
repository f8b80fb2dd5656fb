//! Summary statistics tiles and the report action.

use leptos::prelude::*;

use crate::net::types::UploadSummary;
use crate::util::format::two_decimals;

/// Four stat tiles for the current summary; renders nothing without one.
#[component]
pub fn StatisticsPanel(on_download: Callback<i64>) -> impl IntoView {
    let current = expect_context::<RwSignal<Option<UploadSummary>>>();

    view! {
        <Show when=move || current.with(Option::is_some)>
            <div class="card statistics">
                <div class="card__header card__header--success">
                    <h5 class="card__title">"Summary Statistics"</h5>
                </div>
                <div class="card__body statistics__grid">
                    {move || {
                        current.with(|data| {
                            data.as_ref().map(|summary| {
                                let upload_id = summary.id;
                                view! {
                                    <div class="statistics__tile">
                                        <h3 class="statistics__value statistics__value--primary">
                                            {summary.total_equipment_count}
                                        </h3>
                                        <p class="statistics__label">"Total Equipment"</p>
                                    </div>
                                    <div class="statistics__tile">
                                        <h3 class="statistics__value statistics__value--info">
                                            {two_decimals(summary.average_pressure)}
                                        </h3>
                                        <p class="statistics__label">"Avg Pressure (bar)"</p>
                                    </div>
                                    <div class="statistics__tile">
                                        <h3 class="statistics__value statistics__value--warning">
                                            {two_decimals(summary.average_temperature)}
                                        </h3>
                                        <p class="statistics__label">"Avg Temperature (\u{b0}C)"</p>
                                    </div>
                                    <div class="statistics__tile">
                                        <button
                                            class="btn btn--danger"
                                            on:click=move |_| on_download.run(upload_id)
                                        >
                                            "Download PDF"
                                        </button>
                                        <p class="statistics__label">"Generate Report"</p>
                                    </div>
                                }
                            })
                        })
                    }}
                </div>
            </div>
        </Show>
    }
}
