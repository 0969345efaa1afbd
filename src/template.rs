//! JSON report templates.
//!
//! A template describes the page size and, for each page, a tree of nodes:
//!
//! ```json
//! {
//!   "page": { "width": 210, "height": 297 },
//!   "pages": [
//!     { "elements": [
//!       { "type": "box", "offset": { "x": 10, "y": 10 },
//!         "size": { "width": 190, "height": 270 },
//!         "style": "fill", "color": "#c8c8c8",
//!         "children": [
//!           { "type": "label", "offset": { "x": 2, "y": 2 },
//!             "size": { "width": 50, "height": 5 },
//!             "font": { "name": "Arial", "size": 8 }, "text": "Hello" }
//!         ] }
//!     ] }
//!   ]
//! }
//! ```
//!
//! Trees are assembled through [`Element::add_child`], so a leaf node that
//! lists children is rejected before anything is drawn.

use crate::error::AppError;
use crate::report::Report;
use enroll_report::{
    BoxNode, Element, ImageNode, LabelNode, TitledBoxNode, TitledBoxOptions,
};
use enroll_types::{Color, Font, Offset, Position, RectStyle, Size};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct ReportTemplate {
    /// Overrides the configured page size.
    #[serde(default)]
    pub page: Option<Size>,
    pub pages: Vec<JsonPage>,
    /// Directory relative image paths are resolved against.
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JsonPage {
    #[serde(default)]
    pub elements: Vec<JsonNode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JsonNode {
    Box(JsonBox),
    TitledBox(JsonTitledBox),
    Image(JsonImage),
    Label(JsonLabel),
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonBox {
    #[serde(default)]
    pub offset: Offset,
    pub size: Size,
    #[serde(default)]
    pub style: RectStyle,
    #[serde(default)]
    pub color: Color,
    /// When set, the height becomes the sum of the children's heights plus
    /// this margin once all children are added.
    #[serde(default)]
    pub fit_height: Option<f32>,
    #[serde(default)]
    pub children: Vec<JsonNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonTitledBox {
    #[serde(default)]
    pub offset: Offset,
    pub size: Size,
    pub title: String,
    pub font: Font,
    #[serde(default)]
    pub fill_color: Option<Color>,
    #[serde(default)]
    pub border_color: Option<Color>,
    #[serde(default)]
    pub fit_height: Option<f32>,
    #[serde(default)]
    pub children: Vec<JsonNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonImage {
    #[serde(default)]
    pub offset: Offset,
    pub size: Size,
    pub path: PathBuf,
    #[serde(default)]
    pub children: Vec<JsonNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonLabel {
    #[serde(default)]
    pub offset: Offset,
    pub size: Size,
    pub font: Font,
    pub text: String,
    #[serde(default)]
    pub children: Vec<JsonNode>,
}

impl ReportTemplate {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a template file. Relative image paths in it are resolved
    /// against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Template(format!("cannot read {}: {}", path.display(), e))
        })?;
        let mut template = Self::from_json(&content)?;
        template.base_dir = path.parent().map(Path::to_path_buf);
        Ok(template)
    }

    /// Assembles the element trees. `default_page` is used when the
    /// template does not name a page size.
    pub fn build(&self, default_page: Size) -> Result<Report, AppError> {
        if self.pages.is_empty() {
            return Err(AppError::Template("template has no pages".to_string()));
        }

        let mut report = Report::new(self.page.unwrap_or(default_page));
        for page in &self.pages {
            let elements = page
                .elements
                .iter()
                .map(|node| self.build_node(node))
                .collect::<Result<Vec<_>, _>>()?;
            report.add_page(elements);
        }
        debug!(
            "Built report with {} page(s), {} element(s)",
            report.pages().len(),
            report.pages().iter().flatten().map(Element::count).sum::<usize>()
        );
        Ok(report)
    }

    fn build_node(&self, node: &JsonNode) -> Result<Element, AppError> {
        let (mut element, children, fit_height) = match node {
            JsonNode::Box(b) => (
                Element::from(BoxNode::new(placement(b.offset, b.size), b.style, b.color)),
                &b.children,
                b.fit_height,
            ),
            JsonNode::TitledBox(tb) => {
                let mut options = TitledBoxOptions::new(tb.title.clone(), tb.font.clone());
                options.fill_color = tb.fill_color;
                options.border_color = tb.border_color;
                (
                    Element::from(TitledBoxNode::new(options, placement(tb.offset, tb.size))),
                    &tb.children,
                    tb.fit_height,
                )
            }
            JsonNode::Image(img) => (
                Element::from(ImageNode::new(
                    self.resolve(&img.path),
                    placement(img.offset, img.size),
                )),
                &img.children,
                None,
            ),
            JsonNode::Label(label) => (
                Element::from(LabelNode::new(
                    label.font.clone(),
                    label.text.clone(),
                    placement(label.offset, label.size),
                )),
                &label.children,
                None,
            ),
        };

        for child in children {
            element.add_child(self.build_node(child)?)?;
        }

        if let Some(margin) = fit_height {
            let width = element.position().width();
            element.resize(width, children_height(&element) + margin);
        }
        Ok(element)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

fn placement(offset: Offset, size: Size) -> Position {
    Position::from_parts(offset, size)
}

/// Sum of the heights of `element`'s direct children.
pub fn children_height(element: &Element) -> f32 {
    element
        .children()
        .iter()
        .map(|child| child.position().height())
        .sum()
}
