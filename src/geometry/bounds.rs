use super::PointPixel;
use serde::{Deserialize, Serialize};

/// Inclusive axis-aligned bounding box in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelBounds {
    pub upper_left: PointPixel,
    pub lower_right: PointPixel,
}

impl PixelBounds {
    /// Degenerate box covering a single point.
    pub fn at(p: PointPixel) -> Self {
        Self {
            upper_left: p,
            lower_right: p,
        }
    }

    /// Smallest box containing every point, or `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = PointPixel>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::at(first);
        for p in iter {
            bounds.expand_to_contain(p);
        }
        Some(bounds)
    }

    pub fn expand_to_contain(&mut self, p: PointPixel) {
        self.upper_left.row = self.upper_left.row.min(p.row);
        self.upper_left.col = self.upper_left.col.min(p.col);
        self.lower_right.row = self.lower_right.row.max(p.row);
        self.lower_right.col = self.lower_right.col.max(p.col);
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.lower_right.row - self.upper_left.row
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.lower_right.col - self.upper_left.col
    }

    /// Number of pixels covered, counting both edges.
    pub fn area_px(&self) -> i64 {
        (self.height() as i64 + 1) * (self.width() as i64 + 1)
    }

    pub fn contains(&self, p: PointPixel) -> bool {
        p.row >= self.upper_left.row
            && p.row <= self.lower_right.row
            && p.col >= self.upper_left.col
            && p.col <= self.lower_right.col
    }

    /// True when `inner`, shrunk by `tolerance` on every side, fits in `self`.
    pub fn contains_within(&self, inner: &PixelBounds, tolerance: i32) -> bool {
        inner.upper_left.row + tolerance >= self.upper_left.row
            && inner.upper_left.col + tolerance >= self.upper_left.col
            && inner.lower_right.row - tolerance <= self.lower_right.row
            && inner.lower_right.col - tolerance <= self.lower_right.col
    }
}
