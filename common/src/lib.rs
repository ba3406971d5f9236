//! # detect-common - Shared core of the YOLO detection client
//!
//! Everything the browser UI and the command-line client agree on lives here:
//! the upload state and its transitions, the backend wire contract, and the
//! mapping from a backend reply to either a result image or an error string.
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌────────────┐
//! │  select()   │────▶│ begin_upload │────▶│  detect()   │────▶│  settle()  │
//! │ (pick file) │     │  (ticket)    │     │ (POST file) │     │ (UI state) │
//! └─────────────┘     └──────────────┘     └─────────────┘     └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Backend origin, fixed messages, re-trigger policy
//! - [`error`] - Upload error taxonomy
//! - [`types`] - Wire types and response mapping
//! - [`backend`] - Transport trait implemented per platform
//! - [`state`] - Upload state machine
//! - [`view`] - Pure projection of state onto the page

pub mod config;
pub mod error;
pub mod types;
pub mod backend;
pub mod state;
pub mod view;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{
    BackendConfig,
    RetriggerPolicy,
    BACKEND_URL_ENV,
    DEFAULT_BACKEND_URL,
    ERROR_PREFIX,
    FILE_FIELD,
    IMAGE_DATA_URI_PREFIX,
    NO_FILE_MESSAGE,
    UPLOAD_PATH,
};

pub use error::{UploadError, UploadResult};

pub use types::{BackendReply, DetectResponse};

pub use backend::{detect, DetectionBackend};

pub use state::{RequestTicket, UploadStart, UploadState};

pub use view::{view_model, ViewModel, APP_TITLE, BUSY_LABEL, IDLE_LABEL, RESULT_ALT};
