//! Pure projection of [`UploadState`] onto what the page shows.

use crate::state::UploadState;

/// Page heading.
pub const APP_TITLE: &str = "YOLO Object Detection";

/// Submit caption when idle.
pub const IDLE_LABEL: &str = "Upload and Detect";

/// Submit caption while a request is in flight.
pub const BUSY_LABEL: &str = "Processing...";

/// Alt text of the result image.
pub const RESULT_ALT: &str = "Detection Result";

/// Everything the page needs to render one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub title: &'static str,
    pub picker_disabled: bool,
    pub submit_disabled: bool,
    pub submit_label: &'static str,
    /// Error region; takes precedence over the result.
    pub error: Option<String>,
    /// Result image source, only when no error is shown.
    pub result: Option<String>,
}

/// Project `state` onto a [`ViewModel`]. Never mutates.
pub fn view_model<F>(state: &UploadState<F>) -> ViewModel {
    let loading = state.is_loading();
    let error = state.error().map(str::to_string);
    let result = match error {
        Some(_) => None,
        None => state.result().map(str::to_string),
    };

    ViewModel {
        title: APP_TITLE,
        picker_disabled: loading,
        submit_disabled: loading || !state.has_selection(),
        submit_label: if loading { BUSY_LABEL } else { IDLE_LABEL },
        error,
        result,
    }
}
