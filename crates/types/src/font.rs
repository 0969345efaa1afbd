use serde::{Deserialize, Serialize};

use crate::{Color, GeometryError};

/// Millimetres per typographic point.
pub const PT_TO_MM: f32 = 0.3528;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub fn is_bold(self) -> bool {
        matches!(self, FontStyle::Bold | FontStyle::BoldItalic)
    }

    pub fn is_italic(self) -> bool {
        matches!(self, FontStyle::Italic | FontStyle::BoldItalic)
    }
}

/// A font selection: family name, style, size in points and text color.
///
/// The size is always positive and finite; use [`Font::new`] to construct one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FontDef")]
pub struct Font {
    name: String,
    style: FontStyle,
    size: f32,
    color: Color,
}

#[derive(Deserialize)]
struct FontDef {
    name: String,
    #[serde(default)]
    style: FontStyle,
    size: f32,
    #[serde(default)]
    color: Color,
}

impl TryFrom<FontDef> for Font {
    type Error = GeometryError;

    fn try_from(def: FontDef) -> Result<Self, Self::Error> {
        Font::new(def.name, def.style, def.size, def.color)
    }
}

impl Font {
    pub fn new(
        name: impl Into<String>,
        style: FontStyle,
        size: f32,
        color: Color,
    ) -> Result<Self, GeometryError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(GeometryError::InvalidFontSize(size));
        }
        Ok(Self {
            name: name.into(),
            style,
            size,
            color,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }

    /// Size in points.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Size converted to millimetres.
    pub fn size_mm(&self) -> f32 {
        self.size * PT_TO_MM
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}
