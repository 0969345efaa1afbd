//! Report element tree.
//!
//! A report is a tree of [`Element`]s. Containers ([`BoxNode`],
//! [`TitledBoxNode`]) own their children; [`ImageNode`] and [`LabelNode`]
//! are leaves. Positions are always relative to the parent's frame, and
//! rendering walks the tree depth-first against any [`Surface`].

mod element;
mod error;
pub mod frame;
pub mod nodes;


pub use element::{Element, ElementKind};
pub use error::ReportError;
pub use frame::{Frame, render_children};
pub use nodes::{BoxNode, ImageNode, LabelNode, TITLE_MARGIN_MM, TitledBoxNode, TitledBoxOptions};

pub use enroll_render_core::{RenderError, Surface};
pub use enroll_types::{Color, Font, FontStyle, Offset, PT_TO_MM, Position, RectStyle, Size};
