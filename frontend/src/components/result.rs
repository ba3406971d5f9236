//! Error message or detection image, whichever the last upload produced.

use detect_common::{view_model, UploadState, RESULT_ALT};
use leptos::*;
use web_sys::File;

#[component]
pub fn ResultPanel(state: RwSignal<UploadState<File>>) -> impl IntoView {
    let outcome = create_memo(move |_| {
        state.with(|s| {
            let vm = view_model(s);
            (vm.error, vm.result)
        })
    });

    move || match outcome.get() {
        (Some(error), _) => view! {
            <div class="error">{error}</div>
        }
        .into_view(),
        (None, Some(src)) => view! {
            <div class="result">
                <img src=src alt=RESULT_ALT/>
            </div>
        }
        .into_view(),
        (None, None) => ().into_view(),
    }
}
