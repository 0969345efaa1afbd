//! Content-stream builder for a single page.
//!
//! Takes millimetre, top-down coordinates and emits PDF operators in points
//! with the bottom-up PDF origin. Color and font operators are only emitted
//! when they differ from what the stream already has in effect.

use enroll_render_core::utils::{flip_y, mm_to_pt, to_win_ansi};
use enroll_render_core::RenderError;
use enroll_types::{Color, RectStyle};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

/// Stroke width in millimetres used for outlines and lines.
const DEFAULT_LINE_WIDTH_MM: f32 = 0.2;

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    font: Option<(String, f32)>,
}

pub(crate) struct PageContext {
    page_height_pt: f32,
    content: Content,
    state: PageRenderState,
}

impl PageContext {
    pub(crate) fn new(page_height_mm: f32) -> Self {
        let mut content = Content { operations: vec![] };
        content.operations.push(Operation::new(
            "w",
            vec![mm_to_pt(DEFAULT_LINE_WIDTH_MM).into()],
        ));
        Self {
            page_height_pt: mm_to_pt(page_height_mm),
            content,
            state: Default::default(),
        }
    }

    pub(crate) fn finish(self) -> Result<Vec<u8>, RenderError> {
        Ok(self.content.encode()?)
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.to_unit();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke_color(&mut self, color: Color) {
        if self.state.stroke_color != Some(color) {
            let [r, g, b] = color.to_unit();
            self.push("RG", vec![r.into(), g.into(), b.into()]);
            self.state.stroke_color = Some(color);
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn draw_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        style: RectStyle,
        fill: Color,
        stroke: Color,
    ) {
        if style.fills() {
            self.set_fill_color(fill);
        }
        if style.strokes() {
            self.set_stroke_color(stroke);
        }
        let pdf_y = flip_y(mm_to_pt(y + height), self.page_height_pt);
        self.push(
            "re",
            vec![
                mm_to_pt(x).into(),
                pdf_y.into(),
                mm_to_pt(width).into(),
                mm_to_pt(height).into(),
            ],
        );
        let paint = match style {
            RectStyle::Outline => "S",
            RectStyle::Fill => "f",
            RectStyle::FillOutline => "B",
        };
        self.push(paint, vec![]);
    }

    pub(crate) fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, stroke: Color) {
        self.set_stroke_color(stroke);
        self.push(
            "m",
            vec![
                mm_to_pt(x1).into(),
                flip_y(mm_to_pt(y1), self.page_height_pt).into(),
            ],
        );
        self.push(
            "l",
            vec![
                mm_to_pt(x2).into(),
                flip_y(mm_to_pt(y2), self.page_height_pt).into(),
            ],
        );
        self.push("S", vec![]);
    }

    /// `font_key` is the resource name (e.g. `F1`) the font is registered under.
    pub(crate) fn draw_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        font_key: &str,
        size_pt: f32,
        color: Color,
    ) {
        self.push("BT", vec![]);
        let font = (font_key.to_string(), size_pt);
        if self.state.font.as_ref() != Some(&font) {
            self.push(
                "Tf",
                vec![Object::Name(font_key.as_bytes().to_vec()), size_pt.into()],
            );
            self.state.font = Some(font);
        }
        self.set_fill_color(color);
        self.push(
            "Td",
            vec![
                mm_to_pt(x).into(),
                flip_y(mm_to_pt(y), self.page_height_pt).into(),
            ],
        );
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    /// `image_key` is the XObject resource name (e.g. `Im1`).
    pub(crate) fn draw_image(&mut self, image_key: &str, x: f32, y: f32, width: f32, height: f32) {
        let pdf_y = flip_y(mm_to_pt(y + height), self.page_height_pt);
        self.push("q", vec![]);
        self.push(
            "cm",
            vec![
                mm_to_pt(width).into(),
                0.into(),
                0.into(),
                mm_to_pt(height).into(),
                mm_to_pt(x).into(),
                pdf_y.into(),
            ],
        );
        self.push("Do", vec![Object::Name(image_key.as_bytes().to_vec())]);
        self.push("Q", vec![]);
    }

    #[cfg(test)]
    pub(crate) fn operators(&self) -> Vec<&str> {
        self.content
            .operations
            .iter()
            .map(|op| op.operator.as_str())
            .collect()
    }
}
