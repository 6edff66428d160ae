//! Axis-relative containment test for connected lines.
use crate::error::Result;
use crate::geometry::{Axis, PixelBounds};
use crate::lines::ConnectedLine;

/// Decides whether connected lines sit inside the area spanned by the axes.
#[derive(Clone, Copy, Debug)]
pub struct DataLineFinder {
    tolerance_px: i32,
}

impl Default for DataLineFinder {
    fn default() -> Self {
        Self { tolerance_px: 2 }
    }
}

impl DataLineFinder {
    /// `tolerance_px` is the overhang allowed on each side of the axes area.
    pub fn new(tolerance_px: i32) -> Self {
        Self { tolerance_px }
    }

    /// Bounding box of the four axis endpoints. Axes that do not meet at a
    /// right angle still give a usable area.
    pub fn axes_area(horizontal: &Axis, vertical: &Axis) -> PixelBounds {
        let mut area = PixelBounds::at(horizontal.begin);
        for p in [horizontal.end, vertical.begin, vertical.end] {
            area.expand_to_contain(p);
        }
        area
    }

    /// Single-pixel lines are noise and never qualify.
    pub fn is_data_line(
        &self,
        line: &ConnectedLine,
        horizontal: &Axis,
        vertical: &Axis,
    ) -> Result<bool> {
        let bounds = line.bounds()?;
        if line.pixel_count() == 1 {
            return Ok(false);
        }
        let area = Self::axes_area(horizontal, vertical);
        Ok(area.contains_within(&bounds, self.tolerance_px))
    }

    /// Set the data-line flag on every line; returns how many qualified.
    pub fn mark_data_lines(
        &self,
        lines: &mut [ConnectedLine],
        horizontal: &Axis,
        vertical: &Axis,
    ) -> Result<usize> {
        let mut count = 0;
        for line in lines.iter_mut() {
            let flag = self.is_data_line(line, horizontal, vertical)?;
            line.set_data_line(flag);
            count += usize::from(flag);
        }
        Ok(count)
    }
}
