use crate::ReportError;
use enroll_render_core::Surface;
use enroll_types::Position;
use std::path::{Path, PathBuf};

/// A raster image file drawn scaled into its own box.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageNode {
    pub(crate) position: Position,
    path: PathBuf,
}

impl ImageNode {
    pub fn new(path: impl Into<PathBuf>, position: Position) -> Self {
        Self {
            position,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        parent: &Position,
    ) -> Result<(), ReportError> {
        if let Err(source) = std::fs::metadata(&self.path) {
            log::warn!("Image file {} is not accessible: {}", self.path.display(), source);
            return Err(ReportError::FileNotFound {
                path: self.path.clone(),
                source,
            });
        }

        let absolute = self.position.within(parent);
        surface.image(
            &self.path,
            absolute.x(),
            absolute.y(),
            absolute.width(),
            absolute.height(),
        )?;
        Ok(())
    }
}
