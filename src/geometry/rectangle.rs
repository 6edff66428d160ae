use super::{PixelBounds, PointPixel};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle handed over by the rectangle-fitting stage.
///
/// The bar flags are written by [`crate::classify::classify_bars`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rectangle {
    pub upper_left: PointPixel,
    pub lower_right: PointPixel,
    #[serde(default)]
    pub is_vertical_bar: bool,
    #[serde(default)]
    pub is_horizontal_bar: bool,
}

impl Rectangle {
    pub fn new(upper_left: PointPixel, lower_right: PointPixel) -> Self {
        Self {
            upper_left,
            lower_right,
            is_vertical_bar: false,
            is_horizontal_bar: false,
        }
    }

    /// Shorthand taking `(top, left, bottom, right)`.
    pub fn from_edges(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self::new(PointPixel::new(top, left), PointPixel::new(bottom, right))
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.lower_right.col - self.upper_left.col
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.lower_right.row - self.upper_left.row
    }

    /// Corners in the order upper-left, upper-right, lower-right, lower-left.
    pub fn corners(&self) -> [PointPixel; 4] {
        [
            self.upper_left,
            PointPixel::new(self.upper_left.row, self.lower_right.col),
            self.lower_right,
            PointPixel::new(self.lower_right.row, self.upper_left.col),
        ]
    }

    pub fn bounds(&self) -> PixelBounds {
        PixelBounds {
            upper_left: self.upper_left,
            lower_right: self.lower_right,
        }
    }

    pub fn is_bar(&self) -> bool {
        self.is_vertical_bar || self.is_horizontal_bar
    }
}
