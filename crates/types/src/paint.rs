use serde::{Deserialize, Serialize};

/// How a rectangle is painted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RectStyle {
    /// Stroke the border only.
    #[default]
    Outline,
    /// Fill the interior only.
    Fill,
    /// Fill the interior, then stroke the border.
    FillOutline,
}

impl RectStyle {
    pub fn fills(self) -> bool {
        matches!(self, RectStyle::Fill | RectStyle::FillOutline)
    }

    pub fn strokes(self) -> bool {
        matches!(self, RectStyle::Outline | RectStyle::FillOutline)
    }
}
