//! YOLO Detect - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that uploads an image to the object-detection
//! backend and shows the annotated image it sends back.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (owns UploadState)                              │
//! │  ├── Hero (title)                                            │
//! │  ├── UploadSection (file picker, submit button)              │
//! │  └── ResultPanel (error or detection image)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Backend origin and UI policy
//! - [`components`] - UI components
//! - [`services`] - Backend communication

use detect_common::UploadState;
use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;
use web_sys::File;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;
pub use components::*;
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 YOLO Detect - Starting Leptos App (backend: {})", BACKEND_URL);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Selection, loading flag, error and result for this page
    let state = create_rw_signal(UploadState::<File>::new());

    view! {
        <div class="App">
            <Hero/>
            <UploadSection state=state/>
            <ResultPanel state=state/>
        </div>
    }
}
