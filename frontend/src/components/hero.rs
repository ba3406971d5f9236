//! Page heading

use detect_common::APP_TITLE;
use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <h1>{APP_TITLE}</h1>
    }
}
