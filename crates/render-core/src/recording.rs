//! A surface that records primitive calls instead of drawing them.
//!
//! Useful for asserting exactly what a renderer emitted, and for dry runs
//! where the call log itself is the output.

use crate::error::RenderError;
use crate::traits::Surface;
use enroll_types::{Color, FontStyle, RectStyle};
use std::io::Write;
use std::path::{Path, PathBuf};

/// One primitive call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    SetFillColor(Color),
    SetDrawColor(Color),
    SetTextColor(Color),
    SetFont {
        name: String,
        style: FontStyle,
        size: f32,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        style: RectStyle,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
    },
    Image {
        path: PathBuf,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    AddPage,
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
    fail_at: Option<usize>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface whose `index`-th call (zero based) fails with
    /// [`RenderError::Other`] instead of being recorded.
    pub fn failing_at(index: usize) -> Self {
        Self {
            calls: Vec::new(),
            fail_at: Some(index),
        }
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Recorded rectangles as `(x, y, width, height, style)`.
    pub fn rects(&self) -> Vec<(f32, f32, f32, f32, RectStyle)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Rect {
                    x,
                    y,
                    width,
                    height,
                    style,
                } => Some((*x, *y, *width, *height, *style)),
                _ => None,
            })
            .collect()
    }

    /// Recorded text draws as `(x, y, text)`.
    pub fn texts(&self) -> Vec<(f32, f32, &str)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Text { x, y, text } => Some((*x, *y, text.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn images(&self) -> Vec<&SurfaceCall> {
        self.calls
            .iter()
            .filter(|call| matches!(call, SurfaceCall::Image { .. }))
            .collect()
    }

    fn record(&mut self, call: SurfaceCall) -> Result<(), RenderError> {
        if self.fail_at == Some(self.calls.len()) {
            self.fail_at = None;
            return Err(RenderError::Other(format!("injected failure on {:?}", call)));
        }
        self.calls.push(call);
        Ok(())
    }
}

impl Surface for RecordingSurface {
    fn set_fill_color(&mut self, color: Color) -> Result<(), RenderError> {
        self.record(SurfaceCall::SetFillColor(color))
    }

    fn set_draw_color(&mut self, color: Color) -> Result<(), RenderError> {
        self.record(SurfaceCall::SetDrawColor(color))
    }

    fn set_text_color(&mut self, color: Color) -> Result<(), RenderError> {
        self.record(SurfaceCall::SetTextColor(color))
    }

    fn set_font(
        &mut self,
        name: &str,
        style: FontStyle,
        size_pt: f32,
    ) -> Result<(), RenderError> {
        self.record(SurfaceCall::SetFont {
            name: name.to_string(),
            style,
            size: size_pt,
        })
    }

    fn rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        style: RectStyle,
    ) -> Result<(), RenderError> {
        self.record(SurfaceCall::Rect {
            x,
            y,
            width,
            height,
            style,
        })
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), RenderError> {
        self.record(SurfaceCall::Line { x1, y1, x2, y2 })
    }

    fn text(&mut self, x: f32, y: f32, text: &str) -> Result<(), RenderError> {
        self.record(SurfaceCall::Text {
            x,
            y,
            text: text.to_string(),
        })
    }

    fn image(
        &mut self,
        path: &Path,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<(), RenderError> {
        self.record(SurfaceCall::Image {
            path: path.to_path_buf(),
            x,
            y,
            width,
            height,
        })
    }

    fn add_page(&mut self) -> Result<(), RenderError> {
        self.record(SurfaceCall::AddPage)
    }

    fn finalize<W: Write>(self, mut writer: W) -> Result<W, RenderError> {
        for call in &self.calls {
            writeln!(writer, "{:?}", call)?;
        }
        writer.flush()?;
        Ok(writer)
    }
}
