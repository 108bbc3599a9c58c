//! Grid and pixel geometry primitives shared by layout and rendering.

use serde::{Deserialize, Serialize};

/// A position in pixel space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A size in pixel space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeF {
    pub width: f32,
    pub height: f32,
}

impl SizeF {
    #[inline]
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A discrete slot in the timeline grid.
///
/// Columns start at 1; column 0 is never assigned. Rows start at 1; row 0 is
/// reserved for time-instant headers drawn by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub column: u32,
    pub row: u32,
}

impl GridPosition {
    #[inline]
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_and_size_construct() {
        let p = PointF::new(1.5, -2.0);
        assert_eq!(p.x, 1.5);
        assert_eq!(p.y, -2.0);

        let s = SizeF::new(130.0, 80.0);
        assert_eq!(s.width, 130.0);
        assert_eq!(s.height, 80.0);
    }

    #[test]
    fn grid_position_serde_round_trip() {
        let g = GridPosition::new(3, 7);
        let json = serde_json::to_string(&g).unwrap();
        let back: GridPosition = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
