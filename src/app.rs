//! Application shell: cross-component state and event wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Child views are pure functions of context signals; the shell translates
//! their events into API calls and transient notifications. Every timer is
//! sequence-guarded and checked against an aliveness flag, so callbacks that
//! land after teardown are no-ops.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::alerts::Alerts;
use crate::components::charts::ChartsView;
use crate::components::data_table::DataTable;
use crate::components::history_panel::HistoryPanel;
use crate::components::statistics::StatisticsPanel;
use crate::components::upload_panel::UploadPanel;
use crate::net::types::UploadSummary;
use crate::state::history::HistoryState;
use crate::state::notify::{self, NotifyState};
use crate::state::upload::UploadState;

/// Banner shown after a successful upload.
pub const UPLOAD_SUCCESS_MESSAGE: &str = "CSV file processed successfully!";
/// Banner shown after loading a history row.
pub const HISTORY_LOADED_MESSAGE: &str = "Historical data loaded successfully";
/// Progress banner while the report endpoint is generating.
pub const REPORT_GENERATING_MESSAGE: &str = "Generating PDF report...";
/// Banner shown once the report download has been dispatched.
pub const REPORT_DONE_MESSAGE: &str = "PDF report downloaded successfully!";

/// Root component: header, alert banners, upload panel, data views, history.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let current_data = RwSignal::new(None::<UploadSummary>);
    let history = RwSignal::new(HistoryState::default());
    let notify_state = RwSignal::new(NotifyState::default());
    let upload = RwSignal::new(UploadState::default());
    provide_context(current_data);
    provide_context(history);
    provide_context(notify_state);
    provide_context(upload);

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    // Initial history load; failures are logged, never surfaced.
    refresh_history(history);

    let success_alive = alive.clone();
    let on_upload_success = Callback::new(move |summary: UploadSummary| {
        current_data.set(Some(summary));
        show_success(
            notify_state,
            &success_alive,
            UPLOAD_SUCCESS_MESSAGE,
            notify::UPLOAD_SUCCESS_TTL,
        );
        notify_state.update(NotifyState::clear_error);
        refresh_history(history);
    });

    let error_alive = alive.clone();
    let on_upload_error = Callback::new(move |message: String| {
        notify_state.update(NotifyState::clear_success);
        show_error(notify_state, &error_alive, &message);
    });

    let view_alive = alive.clone();
    let on_view_history = Callback::new(move |item: UploadSummary| {
        current_data.set(Some(item));
        show_success(
            notify_state,
            &view_alive,
            HISTORY_LOADED_MESSAGE,
            notify::HISTORY_LOADED_TTL,
        );
    });

    let report_alive = alive.clone();
    let on_download_report = Callback::new(move |upload_id: i64| {
        show_success(
            notify_state,
            &report_alive,
            REPORT_GENERATING_MESSAGE,
            notify::REPORT_SUCCESS_TTL,
        );
        #[cfg(feature = "csr")]
        {
            let alive = report_alive.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::download_report(upload_id).await {
                    Ok(()) => show_success(
                        notify_state,
                        &alive,
                        REPORT_DONE_MESSAGE,
                        notify::REPORT_SUCCESS_TTL,
                    ),
                    Err(err) => show_error(notify_state, &alive, &err.error),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = upload_id;
    });

    view! {
        <Title text="Chemical Equipment Parameter Visualizer"/>
        <div class="app">
            <nav class="navbar">
                <span class="navbar__brand">"Chemical Equipment Parameter Visualizer"</span>
                <span class="navbar__badge">"Process Data Explorer"</span>
            </nav>
            <main class="app__content">
                <Alerts/>
                <UploadPanel on_success=on_upload_success on_error=on_upload_error/>
                <StatisticsPanel on_download=on_download_report/>
                <ChartsView/>
                <DataTable/>
                <HistoryPanel on_view=on_view_history on_download=on_download_report/>
            </main>
            <footer class="app__footer">
                <small>"Chemical Equipment Parameter Visualizer"</small>
            </footer>
        </div>
    }
}

/// Kick off a history refresh; the sequence guard in [`HistoryState`]
/// resolves overlapping refreshes last-write-wins.
fn refresh_history(history: RwSignal<HistoryState>) {
    let seq = history.try_update(HistoryState::begin_fetch).unwrap_or_default();
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_history().await {
            Ok(items) => {
                history.update(|h| {
                    h.apply(seq, items);
                });
            }
            Err(err) => {
                log::error!("failed to fetch upload history: {}", err.error);
                history.update(|h| h.fail(seq));
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = seq;
}

/// Set the success slot and schedule its expiry.
fn show_success(notify: RwSignal<NotifyState>, alive: &Arc<AtomicBool>, text: &str, ttl: Duration) {
    notify.update(|n| n.set_success(text));
    let seq = notify.with_untracked(NotifyState::success_seq);
    #[cfg(feature = "csr")]
    {
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(ttl).await;
            if !alive.load(Ordering::Relaxed) {
                return;
            }
            notify.update(|n| n.expire_success(seq));
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = (alive, seq, ttl);
}

/// Set the error slot and schedule its expiry.
fn show_error(notify: RwSignal<NotifyState>, alive: &Arc<AtomicBool>, text: &str) {
    notify.update(|n| n.set_error(text));
    let seq = notify.with_untracked(NotifyState::error_seq);
    #[cfg(feature = "csr")]
    {
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(notify::ERROR_TTL).await;
            if !alive.load(Ordering::Relaxed) {
                return;
            }
            notify.update(|n| n.expire_error(seq));
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = (alive, seq);
}
