//! CSV upload panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives the Idle → Selected → Uploading machine in [`UploadState`] and
//! reports outcomes to the shell through callbacks. Preflight rejections are
//! emitted as failure events without touching the network.

#[cfg(test)]
#[path = "upload_panel_test.rs"]
mod upload_panel_test;

use leptos::prelude::*;

use crate::net::types::UploadSummary;
use crate::state::upload::UploadState;
use crate::util::format::kilobytes;

/// File picker plus upload action, disabled while an upload is in flight.
#[component]
pub fn UploadPanel(on_success: Callback<UploadSummary>, on_error: Callback<String>) -> impl IntoView {
    let upload = expect_context::<RwSignal<UploadState>>();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    #[cfg(not(feature = "csr"))]
    let _ = (&on_success, &on_error);

    let on_file_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            if upload.with_untracked(UploadState::is_uploading) {
                return;
            }
            let Some(file) = input_ref
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                return;
            };
            let outcome = upload.try_update(|u| u.select(&file.name(), file.size()));
            if let Some(Err(message)) = outcome {
                on_error.run(message);
            }
        }
    };

    let on_upload_click = move |_ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let Some(file) = input_ref
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                on_error.run(crate::state::upload::NO_FILE_MESSAGE.to_owned());
                return;
            };
            if upload.try_update(UploadState::begin_upload) != Some(true) {
                return;
            }
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_csv(&file).await {
                    Ok(summary) => {
                        upload.update(|u| u.finish_success());
                        if let Some(input) = input_ref.get_untracked() {
                            input.set_value("");
                        }
                        on_success.run(summary);
                    }
                    Err(err) => {
                        upload.update(|u| u.finish_failure());
                        on_error.run(err.error);
                    }
                }
            });
        }
    };

    let selected_info = move || {
        upload.with(|u| {
            u.file_name
                .clone()
                .map(|name| selected_file_label(&name, u.file_size_bytes))
        })
    };
    let uploading = move || upload.with(UploadState::is_uploading);
    let can_upload = move || upload.with(UploadState::can_upload);

    view! {
        <div class="card upload-panel">
            <div class="card__header card__header--primary">
                <h5 class="card__title">"Upload Equipment Data"</h5>
            </div>
            <div class="card__body">
                <span class="upload-panel__label">"Select CSV File"</span>
                <input
                    id="csv-file-input"
                    class="upload-panel__input"
                    type="file"
                    accept=".csv"
                    node_ref=input_ref
                    on:change=on_file_change
                    disabled=uploading
                />
                <small class="upload-panel__hint">
                    "CSV should contain columns: Equipment Name, Type, Flowrate, Pressure, Temperature"
                </small>
                <Show when=move || selected_info().is_some()>
                    <div class="alert alert--info upload-panel__selected">
                        <strong>"Selected file: "</strong>
                        {move || selected_info().unwrap_or_default()}
                    </div>
                </Show>
                <button
                    class="btn btn--success upload-panel__submit"
                    on:click=on_upload_click
                    disabled=move || !can_upload()
                >
                    <Show when=uploading fallback=|| "Upload and Process">
                        <span class="spinner" aria-hidden="true"></span>
                        "Uploading..."
                    </Show>
                </button>
            </div>
        </div>
    }
}

/// Info line under the picker: file name plus size in KB.
fn selected_file_label(name: &str, size_bytes: f64) -> String {
    format!("{name} ({})", kilobytes(size_bytes))
}
