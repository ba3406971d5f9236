//! Image picker and submit button.
//!
//! Handles file selection, the upload to the backend, and settling the
//! outcome into the shared state.

use detect_common::{detect, view_model, UploadStart, UploadState};
use leptos::*;
use web_sys::{AbortController, Event, File, HtmlInputElement};

use crate::config::{backend_config, ACCEPTED_TYPES, RETRIGGER_POLICY};
use crate::services::GlooBackend;

#[component]
pub fn UploadSection(state: RwSignal<UploadState<File>>) -> impl IntoView {
    // Abort handle of the request in flight
    let in_flight = store_value(None::<AbortController>);

    let abort_in_flight = move || {
        if let Some(controller) = in_flight.get_value() {
            controller.abort();
        }
        in_flight.set_value(None);
    };

    let controls = create_memo(move |_| state.with(view_model));

    // Selection handler
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files: Vec<File> = input
            .files()
            .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
            .unwrap_or_default();

        if let Some(name) = files.first().map(File::name) {
            log::info!("Selected image: {}", name);
        }

        let cancelled = state.try_update(|s| s.select(files)).flatten();
        if cancelled.is_some() {
            abort_in_flight();
        }
    };

    // Upload orchestrator
    let on_upload = move |_| {
        let Some(start) = state.try_update(|s| s.begin_upload(RETRIGGER_POLICY)) else {
            return;
        };

        let UploadStart::Started { ticket, file, superseded } = start else {
            return;
        };
        if superseded.is_some() {
            abort_in_flight();
        }

        let mut backend = GlooBackend::new(backend_config().upload_url());
        match AbortController::new() {
            Ok(controller) => {
                backend = backend.with_abort_signal(controller.signal());
                in_flight.set_value(Some(controller));
            }
            Err(e) => log::warn!("AbortController unavailable: {:?}", e),
        }

        spawn_local(async move {
            let outcome = detect(&backend, &file).await;
            state.update(|s| {
                if s.settle(ticket, outcome) {
                    in_flight.set_value(None);
                }
            });
        });
    };

    view! {
        <div class="upload-section">
            <input
                type="file"
                accept=ACCEPTED_TYPES
                on:change=on_file_change
                disabled=move || controls.with(|c| c.picker_disabled)
            />
            <button
                on:click=on_upload
                disabled=move || controls.with(|c| c.submit_disabled)
            >
                {move || controls.with(|c| c.submit_label)}
            </button>
        </div>
    }
}
