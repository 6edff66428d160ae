use super::PointPixel;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

/// Chart axis as produced by the external line-fitting stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "AxisRecord")]
pub struct Axis {
    pub orientation: AxisOrientation,
    pub begin: PointPixel,
    pub end: PointPixel,
    length: f64,
}

#[derive(Deserialize)]
struct AxisRecord {
    orientation: AxisOrientation,
    begin: PointPixel,
    end: PointPixel,
}

impl From<AxisRecord> for Axis {
    fn from(r: AxisRecord) -> Self {
        Axis::new(r.orientation, r.begin, r.end)
    }
}

impl Axis {
    pub fn new(orientation: AxisOrientation, begin: PointPixel, end: PointPixel) -> Self {
        let dr = (end.row - begin.row) as f64;
        let dc = (end.col - begin.col) as f64;
        Self {
            orientation,
            begin,
            end,
            length: (dr * dr + dc * dc).sqrt(),
        }
    }

    pub fn horizontal(row: i32, col_begin: i32, col_end: i32) -> Self {
        Self::new(
            AxisOrientation::Horizontal,
            PointPixel::new(row, col_begin),
            PointPixel::new(row, col_end),
        )
    }

    pub fn vertical(col: i32, row_begin: i32, row_end: i32) -> Self {
        Self::new(
            AxisOrientation::Vertical,
            PointPixel::new(row_begin, col),
            PointPixel::new(row_end, col),
        )
    }

    /// Euclidean distance between the endpoints.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn is_horizontal(&self) -> bool {
        self.orientation == AxisOrientation::Horizontal
    }

    pub fn is_vertical(&self) -> bool {
        self.orientation == AxisOrientation::Vertical
    }
}
