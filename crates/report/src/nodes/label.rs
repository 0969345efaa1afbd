use crate::ReportError;
use enroll_render_core::Surface;
use enroll_types::{Font, Position};

/// One line of text. The baseline sits one font height below the label's
/// top edge so the glyphs fall inside its box.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelNode {
    pub(crate) position: Position,
    pub font: Font,
    pub text: String,
}

impl LabelNode {
    pub fn new(font: Font, text: impl Into<String>, position: Position) -> Self {
        Self {
            position,
            font,
            text: text.into(),
        }
    }

    pub(crate) fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        parent: &Position,
    ) -> Result<(), ReportError> {
        let absolute = self.position.within(parent);

        surface.set_font(self.font.name(), self.font.style(), self.font.size())?;
        surface.set_text_color(self.font.color())?;
        surface.text(
            absolute.x(),
            absolute.y() + self.font.size_mm(),
            &self.text,
        )?;
        Ok(())
    }
}
