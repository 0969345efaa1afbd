use crate::error::RenderError;
use enroll_types::{Color, FontStyle, RectStyle};
use std::io::Write;
use std::path::Path;

/// A paginated drawing sink, abstracting the document-writing primitives.
///
/// Coordinates and lengths are millimetres measured from the top-left corner
/// of the current page. Font sizes are points. The color and font setters
/// change state that applies to every later primitive until changed again.
pub trait Surface {
    fn set_fill_color(&mut self, color: Color) -> Result<(), RenderError>;

    fn set_draw_color(&mut self, color: Color) -> Result<(), RenderError>;

    fn set_text_color(&mut self, color: Color) -> Result<(), RenderError>;

    fn set_font(&mut self, name: &str, style: FontStyle, size_pt: f32)
    -> Result<(), RenderError>;

    fn rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        style: RectStyle,
    ) -> Result<(), RenderError>;

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), RenderError>;

    /// Draws a single line of text with its baseline starting at `(x, y)`.
    fn text(&mut self, x: f32, y: f32, text: &str) -> Result<(), RenderError>;

    /// Draws the raster image at `path`, scaled to fill the given box.
    fn image(
        &mut self,
        path: &Path,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<(), RenderError>;

    /// Starts a new page; subsequent primitives draw onto it.
    fn add_page(&mut self) -> Result<(), RenderError>;

    /// Writes the finished document and hands the writer back.
    fn finalize<W: Write>(self, writer: W) -> Result<W, RenderError>
    where
        Self: Sized;
}
