//! Entry point for the WASM application

use detect_frontend::{App, BACKEND_URL};
use leptos::*;

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 YOLO Detect - Starting Leptos App (backend: {})", BACKEND_URL);

    mount_to_body(|| view! { <App/> })
}
