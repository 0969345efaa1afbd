use serde::{Deserialize, Serialize};
use std::ops::Add;

/// A displacement in millimetres, relative to the enclosing frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Returns this offset moved down by `dy` millimetres.
    pub fn shifted_down(self, dy: f32) -> Self {
        Self {
            x: self.x,
            y: self.y + dy,
        }
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Placement of a rectangular region: where it starts and how large it is.
///
/// Used both for an element's own (parent-relative) placement and for the
/// frame handed down to children while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub offset: Offset,
    pub size: Size,
}

impl Position {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            offset: Offset::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn from_parts(offset: Offset, size: Size) -> Self {
        Self { offset, size }
    }

    pub fn x(&self) -> f32 {
        self.offset.x
    }

    pub fn y(&self) -> f32 {
        self.offset.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Resolves this parent-relative position against the frame it lives in.
    ///
    /// Only the offset is accumulated; width and height stay as they are.
    pub fn within(&self, frame: &Position) -> Position {
        Position {
            offset: frame.offset + self.offset,
            size: self.size,
        }
    }
}
