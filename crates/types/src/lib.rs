//! Value types shared by the report engine and its drawing surfaces.
//!
//! All lengths are millimetres with the origin at the top-left corner of the
//! page; font sizes are points.

pub mod color;
pub mod font;
pub mod geometry;
pub mod paint;

pub use color::Color;
pub use font::{Font, FontStyle, PT_TO_MM};
pub use geometry::{Offset, Position, Size};
pub use paint::RectStyle;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Font size must be a positive number of points, got {0}")]
    InvalidFontSize(f32),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}
