use crate::{Element, ReportError};
use enroll_render_core::Surface;
use enroll_types::Position;

/// State shared by every composite element: its own parent-relative
/// placement and the children it exclusively owns, in paint order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    position: Position,
    children: Vec<Element>,
}

impl Frame {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            children: Vec::new(),
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.position.size.width = width;
        self.position.size.height = height;
    }

    /// This frame's placement resolved against its parent frame.
    pub fn absolute(&self, parent: &Position) -> Position {
        self.position.within(parent)
    }
}

/// Renders `children` in insertion order against `frame`, stopping at the
/// first failure. Draws nothing itself.
pub fn render_children<S: Surface + ?Sized>(
    children: &[Element],
    surface: &mut S,
    frame: &Position,
) -> Result<(), ReportError> {
    for child in children {
        child.render(surface, frame)?;
    }
    Ok(())
}
