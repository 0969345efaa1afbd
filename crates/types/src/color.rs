use serde::{Deserialize, Deserializer, Serialize, de};

use crate::GeometryError;

/// An RGB color with 8-bit channels.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn gray(value: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }

    /// Channels scaled to `0.0..=1.0`, as PDF color operators expect them.
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Parse a hex color string (#RGB or #RRGGBB format)
    pub fn parse_hex(s: &str) -> Result<Color, GeometryError> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| GeometryError::InvalidColor(format!("must start with #, got: {}", s)))?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(GeometryError::InvalidColor(format!("not a hex color: {}", s)));
        }

        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16)
                .map_err(|e| GeometryError::InvalidColor(format!("{}: {}", s, e)))
        };

        match hex.len() {
            3 => Ok(Color {
                r: channel(&hex[0..1].repeat(2))?,
                g: channel(&hex[1..2].repeat(2))?,
                b: channel(&hex[2..3].repeat(2))?,
            }),
            6 => Ok(Color {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
            }),
            n => Err(GeometryError::InvalidColor(format!(
                "expected 3 or 6 hex digits, got {}",
                n
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b } => Ok(Color { r, g, b }),
        }
    }
}
