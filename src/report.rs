use crate::config::ReportConfig;
use crate::error::AppError;
use crate::{sample, template::ReportTemplate};
use enroll_render_core::Surface;
use enroll_render_lopdf::LopdfSurface;
use enroll_report::Element;
use enroll_types::{Offset, Position, Size};
use log::{debug, info};
use std::io::{Cursor, Write};

/// A fully assembled report: one element list per page.
///
/// Owns the page lifecycle the element tree leaves to its caller: a page is
/// opened before each list is drawn, and the surface is finalised once at
/// the end.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    page_size: Size,
    pages: Vec<Vec<Element>>,
}

impl Report {
    pub fn new(page_size: Size) -> Self {
        Self {
            page_size,
            pages: Vec::new(),
        }
    }

    pub fn page_size(&self) -> Size {
        self.page_size
    }

    pub fn pages(&self) -> &[Vec<Element>] {
        &self.pages
    }

    pub fn add_page(&mut self, elements: Vec<Element>) {
        self.pages.push(elements);
    }

    /// Frame every top-level element on a page is placed in.
    pub fn page_frame(&self) -> Position {
        Position::from_parts(Offset::zero(), self.page_size)
    }

    /// Draws every page onto `surface`, stopping at the first failure.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), AppError> {
        let frame = self.page_frame();
        for (index, elements) in self.pages.iter().enumerate() {
            debug!("Rendering page {} ({} elements)", index + 1, elements.len());
            surface.add_page()?;
            for element in elements {
                element.render(surface, &frame)?;
            }
        }
        Ok(())
    }

    /// Renders the report to a PDF document written into `writer`.
    pub fn write_pdf<W: Write>(&self, writer: W) -> Result<W, AppError> {
        let mut surface = LopdfSurface::new(self.page_size);
        self.render(&mut surface)?;
        Ok(surface.finalize(writer)?)
    }

    pub fn to_pdf_bytes(&self) -> Result<Vec<u8>, AppError> {
        let cursor = self.write_pdf(Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }
}

/// Builds the report described by the configuration: the configured JSON
/// template, or the built-in sample when none is set.
pub fn load_report(config: &ReportConfig) -> Result<Report, AppError> {
    let page_size = Size::new(config.page_width, config.page_height);
    match &config.template {
        Some(path) => {
            info!("Loading report template from {}", path.display());
            ReportTemplate::from_file(path)?.build(page_size)
        }
        None => {
            debug!("No template configured, using the sample report");
            sample::sample_report(page_size)
        }
    }
}
