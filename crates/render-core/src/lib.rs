//! Core rendering abstractions for report output.
//!
//! This crate provides the fundamental traits and types used by drawing backends:
//! - `Surface` trait for abstracting the page-drawing primitives
//! - `RecordingSurface`, a backend that records calls instead of drawing
//! - Error types for rendering operations
//! - Shared utility functions for font naming and unit conversion

mod error;
pub mod recording;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use recording::{RecordingSurface, SurfaceCall};
pub use traits::Surface;
