use crate::ElementKind;
use enroll_render_core::RenderError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    /// Structural misuse of the tree, such as giving a leaf element a child.
    #[error("Cannot add a child to a leaf element ({0})")]
    InvalidOperation(ElementKind),

    #[error("Image file {} not found: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A drawing primitive failed; the surface's error is passed through as is.
    #[error(transparent)]
    Surface(#[from] RenderError),
}
