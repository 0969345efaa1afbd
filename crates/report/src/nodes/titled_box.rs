use crate::frame::{Frame, render_children};
use crate::ReportError;
use enroll_render_core::Surface;
use enroll_types::{Color, Font, Position, RectStyle};

/// Gap between the header band edges and the title text, in millimetres.
pub const TITLE_MARGIN_MM: f32 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct TitledBoxOptions {
    pub title: String,
    pub font: Font,
    /// Header band color. Without it no band is painted.
    pub fill_color: Option<Color>,
    /// Outline color. Falls back to the fill color, then black.
    pub border_color: Option<Color>,
}

impl TitledBoxOptions {
    pub fn new(title: impl Into<String>, font: Font) -> Self {
        Self {
            title: title.into(),
            font,
            fill_color: None,
            border_color: None,
        }
    }

    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }
}

/// A bordered container with a caption band along its top edge.
///
/// Children are laid out below the band: their frame starts `header_height`
/// millimetres under the box's top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct TitledBoxNode {
    pub(crate) frame: Frame,
    pub options: TitledBoxOptions,
}

impl TitledBoxNode {
    pub fn new(options: TitledBoxOptions, position: Position) -> Self {
        Self {
            frame: Frame::new(position),
            options,
        }
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Height of the caption band: the font size in millimetres plus the margin.
    pub fn header_height(&self) -> f32 {
        self.options.font.size_mm() + TITLE_MARGIN_MM
    }

    pub fn border_color(&self) -> Color {
        self.options
            .border_color
            .or(self.options.fill_color)
            .unwrap_or(Color::BLACK)
    }

    pub(crate) fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        parent: &Position,
    ) -> Result<(), ReportError> {
        let font = &self.options.font;
        let absolute = self.frame.absolute(parent);
        let header_height = self.header_height();

        surface.set_font(font.name(), font.style(), font.size())?;

        if let Some(fill) = self.options.fill_color {
            surface.set_fill_color(fill)?;
            surface.rect(
                absolute.x(),
                absolute.y(),
                absolute.width(),
                header_height,
                RectStyle::Fill,
            )?;
        }

        surface.set_draw_color(self.border_color())?;
        surface.rect(
            absolute.x(),
            absolute.y(),
            absolute.width(),
            absolute.height(),
            RectStyle::Outline,
        )?;

        surface.set_text_color(font.color())?;
        surface.text(
            absolute.x() + TITLE_MARGIN_MM,
            absolute.y() + font.size_mm(),
            &self.options.title,
        )?;

        let body = Position::from_parts(absolute.offset.shifted_down(header_height), absolute.size);
        render_children(self.frame.children(), surface, &body)
    }
}
