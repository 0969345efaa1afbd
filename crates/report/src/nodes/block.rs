use crate::frame::{Frame, render_children};
use crate::ReportError;
use enroll_render_core::Surface;
use enroll_types::{Color, Position, RectStyle};

/// A plain rectangular container, painted in a single color.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxNode {
    pub(crate) frame: Frame,
    pub style: RectStyle,
    pub color: Color,
}

impl BoxNode {
    pub fn new(position: Position, style: RectStyle, color: Color) -> Self {
        Self {
            frame: Frame::new(position),
            style,
            color,
        }
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub(crate) fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        parent: &Position,
    ) -> Result<(), ReportError> {
        let absolute = self.frame.absolute(parent);

        surface.set_fill_color(self.color)?;
        surface.set_draw_color(self.color)?;
        surface.rect(
            absolute.x(),
            absolute.y(),
            absolute.width(),
            absolute.height(),
            self.style,
        )?;

        render_children(self.frame.children(), surface, &absolute)
    }
}
