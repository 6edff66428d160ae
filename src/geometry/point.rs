use serde::{Deserialize, Serialize};

/// Immutable `(row, col)` pixel coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointPixel {
    pub row: i32,
    pub col: i32,
}

impl PointPixel {
    /// Returned by value queries that have no meaningful answer.
    pub const SENTINEL: PointPixel = PointPixel { row: -1, col: -1 };

    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }
}

impl From<(i32, i32)> for PointPixel {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}
