use crate::nodes::{BoxNode, ImageNode, LabelNode, TitledBoxNode};
use crate::ReportError;
use enroll_render_core::Surface;
use enroll_types::Position;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Box,
    TitledBox,
    Image,
    Label,
}

impl ElementKind {
    pub fn is_leaf(self) -> bool {
        matches!(self, ElementKind::Image | ElementKind::Label)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Box => "Box",
            ElementKind::TitledBox => "TitledBox",
            ElementKind::Image => "Image",
            ElementKind::Label => "Label",
        };
        f.write_str(name)
    }
}

/// A node of a report tree.
///
/// `Box` and `TitledBox` are composites and own their children; `Image` and
/// `Label` are leaves. Every placement is relative to the parent's frame, so
/// the absolute position of an element is its own offset plus the offsets of
/// all its ancestors.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Box(BoxNode),
    TitledBox(TitledBoxNode),
    Image(ImageNode),
    Label(LabelNode),
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Box(_) => ElementKind::Box,
            Element::TitledBox(_) => ElementKind::TitledBox,
            Element::Image(_) => ElementKind::Image,
            Element::Label(_) => ElementKind::Label,
        }
    }

    /// Own placement, relative to the parent frame.
    pub fn position(&self) -> &Position {
        match self {
            Element::Box(node) => node.frame.position(),
            Element::TitledBox(node) => node.frame.position(),
            Element::Image(node) => &node.position,
            Element::Label(node) => &node.position,
        }
    }

    /// Appends `child` after the existing children. Fails for leaf elements.
    pub fn add_child(&mut self, child: impl Into<Element>) -> Result<(), ReportError> {
        let kind = self.kind();
        match self {
            Element::Box(node) => node.frame.push(child.into()),
            Element::TitledBox(node) => node.frame.push(child.into()),
            Element::Image(_) | Element::Label(_) => {
                return Err(ReportError::InvalidOperation(kind));
            }
        }
        Ok(())
    }

    /// Children in paint order; always empty for leaves.
    pub fn children(&self) -> &[Element] {
        match self {
            Element::Box(node) => node.frame.children(),
            Element::TitledBox(node) => node.frame.children(),
            Element::Image(_) | Element::Label(_) => &[],
        }
    }

    /// Overwrites width and height. The offset and the children's own
    /// placements are left untouched.
    pub fn resize(&mut self, width: f32, height: f32) {
        match self {
            Element::Box(node) => node.frame.resize(width, height),
            Element::TitledBox(node) => node.frame.resize(width, height),
            Element::Image(node) => {
                node.position.size.width = width;
                node.position.size.height = height;
            }
            Element::Label(node) => {
                node.position.size.width = width;
                node.position.size.height = height;
            }
        }
    }

    /// Draws this element, then its subtree, inside `parent`.
    ///
    /// Rendering is depth-first in insertion order and stops at the first
    /// error; anything drawn before the failure stays drawn. The tree itself
    /// is never modified, so rendering the same tree twice issues the same
    /// surface calls.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        parent: &Position,
    ) -> Result<(), ReportError> {
        log::trace!(
            "Rendering {} at ({}, {}) in frame ({}, {})",
            self.kind(),
            self.position().x(),
            self.position().y(),
            parent.x(),
            parent.y()
        );
        match self {
            Element::Box(node) => node.render(surface, parent),
            Element::TitledBox(node) => node.render(surface, parent),
            Element::Image(node) => node.render(surface, parent),
            Element::Label(node) => node.render(surface, parent),
        }
    }

    /// Number of elements in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(Element::count).sum::<usize>()
    }
}

impl From<BoxNode> for Element {
    fn from(node: BoxNode) -> Self {
        Element::Box(node)
    }
}

impl From<TitledBoxNode> for Element {
    fn from(node: TitledBoxNode) -> Self {
        Element::TitledBox(node)
    }
}

impl From<ImageNode> for Element {
    fn from(node: ImageNode) -> Self {
        Element::Image(node)
    }
}

impl From<LabelNode> for Element {
    fn from(node: LabelNode) -> Self {
        Element::Label(node)
    }
}
