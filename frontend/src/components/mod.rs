//! UI components for the detection page.
//!
//! - [`Hero`] - Page heading
//! - [`UploadSection`] - Image picker and submit button
//! - [`ResultPanel`] - Error message or annotated image

mod hero;
mod upload;
mod result;

pub use hero::*;
pub use upload::*;
pub use result::*;
