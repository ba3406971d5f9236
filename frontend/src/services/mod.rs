//! Backend communication.
//!
//! # Services
//!
//! - [`upload`] - Image upload to the detection backend via `fetch`

pub mod upload;

pub use upload::*;
