use crate::geometry::{Axis, PointPixel, Rectangle};
use serde::{Deserialize, Serialize};

/// Geometry supplied by the external axis and rectangle fitting stages.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartAnnotations {
    pub horizontal_axis: Option<Axis>,
    pub vertical_axis: Option<Axis>,
    pub rectangles: Vec<Rectangle>,
}

impl ChartAnnotations {
    /// Both axes, when both are known.
    pub fn axes(&self) -> Option<(&Axis, &Axis)> {
        self.horizontal_axis
            .as_ref()
            .zip(self.vertical_axis.as_ref())
    }
}

/// Value encoded by one bar, measured from the axis the bar stands on.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarValue {
    /// Index of the rectangle in the annotation list.
    pub rectangle: usize,
    pub point: PointPixel,
    /// Pixel length from the axis to `point`: rows above the horizontal axis
    /// for vertical bars, columns right of the vertical axis for horizontal
    /// bars.
    pub magnitude_px: i32,
}

impl BarValue {
    pub(crate) fn measure(
        rectangle: usize,
        rect: &Rectangle,
        horizontal: Option<&Axis>,
        vertical: Option<&Axis>,
    ) -> Option<Self> {
        let point = crate::classify::BarFinder::bar_value(rect);
        if point.is_sentinel() {
            return None;
        }
        let magnitude_px = if rect.is_vertical_bar {
            let axis = horizontal?;
            axis.begin.row.max(axis.end.row) - point.row
        } else {
            let axis = vertical?;
            point.col - axis.begin.col.min(axis.end.col)
        };
        Some(Self {
            rectangle,
            point,
            magnitude_px,
        })
    }
}
