//! Bar classification for rectangles emerging from a chart axis.
//!
//! A rectangle is a bar for a horizontal axis when it is slender relative to
//! the axis and its bottom corner lies on the axis line. Stacked bar charts
//! only let the bottom segment touch the axis, so a rectangle that misses the
//! axis is still a bar when the rectangle directly below it (same column
//! bounds, small gap) is one. The vertical-axis case is the same rotated by
//! 90°: leftmost corner, neighbor to the left, row bounds within a tolerance.
//!
//! The neighbor search carries a visited set, so duplicated or mutually
//! adjacent rectangles cannot recurse forever.
use crate::geometry::{squared_distance_to_line, Axis, AxisOrientation, PointPixel, Rectangle};
use serde::{Deserialize, Serialize};

/// Tunables for [`BarFinder`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BarParams {
    /// Bar thickness must stay below this fraction of the axis length.
    pub max_extent_ratio: f64,
    /// Maximum squared distance between the axis-facing corner and the axis.
    pub max_axis_distance_sq: f64,
    /// Gap allowed between stacked segments, in pixels.
    pub stack_gap_px: i32,
    /// Row-bound tolerance for side-by-side segments of horizontal bars.
    pub row_tolerance_px: i32,
}

impl Default for BarParams {
    fn default() -> Self {
        Self {
            max_extent_ratio: 0.30,
            max_axis_distance_sq: 4.0,
            stack_gap_px: 5,
            row_tolerance_px: 2,
        }
    }
}

/// Read-only view over every rectangle of a chart, used to classify any one
/// of them as a bar.
#[derive(Clone, Copy, Debug)]
pub struct BarFinder<'a> {
    rectangles: &'a [Rectangle],
    params: BarParams,
}

impl<'a> BarFinder<'a> {
    pub fn new(rectangles: &'a [Rectangle], params: BarParams) -> Self {
        Self { rectangles, params }
    }

    pub fn rectangles(&self) -> &'a [Rectangle] {
        self.rectangles
    }

    /// Whether rectangle `index` is a bar emerging from `axis`. Out-of-range
    /// indices are simply not bars.
    pub fn is_bar(&self, index: usize, axis: &Axis) -> bool {
        let mut visited = vec![false; self.rectangles.len()];
        self.is_bar_visit(index, axis, &mut visited)
    }

    fn is_bar_visit(&self, index: usize, axis: &Axis, visited: &mut [bool]) -> bool {
        match visited.get(index) {
            Some(false) => visited[index] = true,
            _ => return false,
        }
        let rect = &self.rectangles[index];
        let limit = self.params.max_extent_ratio * axis.length();

        let (extent, corner) = match axis.orientation {
            AxisOrientation::Horizontal => (rect.width(), bottom_corner(rect)),
            AxisOrientation::Vertical => (rect.height(), leftmost_corner(rect)),
        };
        if extent as f64 >= limit {
            return false;
        }
        let dist_sq = squared_distance_to_line(corner, axis.begin, axis.end);
        if dist_sq <= self.params.max_axis_distance_sq {
            return true;
        }

        for (j, other) in self.rectangles.iter().enumerate() {
            if j == index || !self.is_axis_side_neighbor(rect, other, axis.orientation) {
                continue;
            }
            if self.is_bar_visit(j, axis, visited) {
                return true;
            }
        }
        false
    }

    /// `other` continues `rect` toward the axis: below it for a horizontal
    /// axis, to its left for a vertical one.
    fn is_axis_side_neighbor(
        &self,
        rect: &Rectangle,
        other: &Rectangle,
        orientation: AxisOrientation,
    ) -> bool {
        let gap = self.params.stack_gap_px;
        match orientation {
            AxisOrientation::Horizontal => {
                (other.upper_left.row - rect.lower_right.row).abs() <= gap
                    && other.upper_left.col == rect.upper_left.col
                    && other.lower_right.col == rect.lower_right.col
            }
            AxisOrientation::Vertical => {
                let tol = self.params.row_tolerance_px;
                (other.lower_right.col - rect.upper_left.col).abs() <= gap
                    && (other.upper_left.row - rect.upper_left.row).abs() <= tol
                    && (other.lower_right.row - rect.lower_right.row).abs() <= tol
            }
        }
    }

    /// Point encoding the bar's value: top-center for vertical bars,
    /// right-middle for horizontal ones, [`PointPixel::SENTINEL`] otherwise.
    pub fn bar_value(rect: &Rectangle) -> PointPixel {
        if rect.is_vertical_bar {
            let mid_col = (rect.upper_left.col + rect.lower_right.col) / 2;
            PointPixel::new(rect.upper_left.row, mid_col)
        } else if rect.is_horizontal_bar {
            let mid_row = (rect.upper_left.row + rect.lower_right.row) / 2;
            PointPixel::new(mid_row, rect.lower_right.col)
        } else {
            PointPixel::SENTINEL
        }
    }
}

/// First corner with the largest row.
fn bottom_corner(rect: &Rectangle) -> PointPixel {
    let corners = rect.corners();
    let mut best = corners[0];
    for c in &corners[1..] {
        if c.row > best.row {
            best = *c;
        }
    }
    best
}

/// First corner with the smallest column.
fn leftmost_corner(rect: &Rectangle) -> PointPixel {
    let corners = rect.corners();
    let mut best = corners[0];
    for c in &corners[1..] {
        if c.col < best.col {
            best = *c;
        }
    }
    best
}

/// Classify every rectangle against the available axes and write the bar
/// flags. Returns the number of rectangles flagged as any kind of bar.
pub fn classify_bars(
    rectangles: &mut [Rectangle],
    horizontal: Option<&Axis>,
    vertical: Option<&Axis>,
    params: BarParams,
) -> usize {
    let decisions: Vec<(bool, bool)> = {
        let finder = BarFinder::new(rectangles, params);
        (0..rectangles.len())
            .map(|i| {
                let vertical_bar = horizontal.is_some_and(|axis| finder.is_bar(i, axis));
                let horizontal_bar = vertical.is_some_and(|axis| finder.is_bar(i, axis));
                (vertical_bar, horizontal_bar)
            })
            .collect()
    };
    let mut count = 0;
    for (rect, (vertical_bar, horizontal_bar)) in rectangles.iter_mut().zip(decisions) {
        rect.is_vertical_bar = vertical_bar;
        rect.is_horizontal_bar = horizontal_bar;
        count += usize::from(rect.is_bar());
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_touching_axis_is_bar() {
        let rects = [Rectangle::from_edges(0, 0, 10, 4)];
        let axis = Axis::horizontal(12, 0, 100);
        let finder = BarFinder::new(&rects, BarParams::default());
        assert!(finder.is_bar(0, &axis));

        let far_axis = Axis::horizontal(13, 0, 100);
        assert!(!finder.is_bar(0, &far_axis));
    }

    #[test]
    fn wide_rectangle_is_not_a_bar() {
        // Width 30 is not below 0.3 * 100.
        let rects = [Rectangle::from_edges(0, 0, 12, 30)];
        let axis = Axis::horizontal(12, 0, 100);
        assert!(!BarFinder::new(&rects, BarParams::default()).is_bar(0, &axis));
    }

    #[test]
    fn stacked_segment_inherits_bar_from_segment_below() {
        let rects = [
            Rectangle::from_edges(0, 10, 5, 18),
            Rectangle::from_edges(6, 10, 20, 18),
        ];
        let axis = Axis::horizontal(20, 0, 100);
        let finder = BarFinder::new(&rects, BarParams::default());
        assert!(finder.is_bar(1, &axis));
        assert!(finder.is_bar(0, &axis));
    }

    #[test]
    fn stack_requires_identical_columns() {
        let rects = [
            Rectangle::from_edges(0, 10, 5, 18),
            Rectangle::from_edges(6, 11, 20, 18),
        ];
        let axis = Axis::horizontal(20, 0, 100);
        let finder = BarFinder::new(&rects, BarParams::default());
        assert!(finder.is_bar(1, &axis));
        assert!(!finder.is_bar(0, &axis));
    }

    #[test]
    fn stack_gap_limit_is_inclusive() {
        let axis = Axis::horizontal(100, 0, 100);
        let base = Rectangle::from_edges(50, 0, 99, 4);
        let at_limit = [base.clone(), Rectangle::from_edges(30, 0, 45, 4)];
        assert!(BarFinder::new(&at_limit, BarParams::default()).is_bar(1, &axis));

        let past_limit = [base, Rectangle::from_edges(30, 0, 44, 4)];
        assert!(!BarFinder::new(&past_limit, BarParams::default()).is_bar(1, &axis));
    }

    #[test]
    fn side_segment_row_tolerance_is_inclusive() {
        let axis = Axis::vertical(0, 0, 100);
        let base = Rectangle::from_edges(10, 1, 14, 40);
        // Top and bottom rows both shifted by the tolerance.
        let at_limit = [base.clone(), Rectangle::from_edges(12, 40, 16, 60)];
        assert!(BarFinder::new(&at_limit, BarParams::default()).is_bar(1, &axis));

        let past_limit = [base, Rectangle::from_edges(13, 40, 17, 60)];
        assert!(!BarFinder::new(&past_limit, BarParams::default()).is_bar(1, &axis));
    }

    #[test]
    fn duplicated_rectangles_terminate() {
        // Two identical floating rectangles qualify as each other's neighbor.
        let r = Rectangle::from_edges(10, 10, 10, 14);
        let rects = [r.clone(), r];
        let axis = Axis::horizontal(50, 0, 100);
        let finder = BarFinder::new(&rects, BarParams::default());
        assert!(!finder.is_bar(0, &axis));
        assert!(!finder.is_bar(1, &axis));
    }

    #[test]
    fn horizontal_bars_grow_from_vertical_axis() {
        let rects = [
            Rectangle::from_edges(10, 5, 16, 40),
            Rectangle::from_edges(11, 43, 17, 70),
            Rectangle::from_edges(30, 20, 36, 50),
        ];
        let axis = Axis::vertical(4, 0, 100);
        let finder = BarFinder::new(&rects, BarParams::default());
        assert!(finder.is_bar(0, &axis));
        // Continues the first bar to the right, rows within tolerance.
        assert!(finder.is_bar(1, &axis));
        assert!(!finder.is_bar(2, &axis));
        // Far too wide to stand on a horizontal axis.
        assert!(!finder.is_bar(0, &Axis::horizontal(16, 0, 100)));
    }

    #[test]
    fn out_of_range_index_is_not_a_bar() {
        let rects: [Rectangle; 0] = [];
        let axis = Axis::horizontal(20, 0, 100);
        assert!(!BarFinder::new(&rects, BarParams::default()).is_bar(0, &axis));
    }

    #[test]
    fn bar_values_by_orientation() {
        let mut vertical = Rectangle::from_edges(20, 10, 80, 20);
        vertical.is_vertical_bar = true;
        assert_eq!(BarFinder::bar_value(&vertical), PointPixel::new(20, 15));

        let mut horizontal = Rectangle::from_edges(10, 5, 20, 60);
        horizontal.is_horizontal_bar = true;
        assert_eq!(BarFinder::bar_value(&horizontal), PointPixel::new(15, 60));

        let plain = Rectangle::from_edges(0, 0, 5, 5);
        assert!(BarFinder::bar_value(&plain).is_sentinel());
    }

    #[test]
    fn classify_writes_flags() {
        let mut rects = vec![
            Rectangle::from_edges(40, 10, 90, 18),
            Rectangle::from_edges(0, 60, 30, 70),
        ];
        let h = Axis::horizontal(90, 5, 100);
        let v = Axis::vertical(5, 0, 90);
        let n = classify_bars(&mut rects, Some(&h), Some(&v), BarParams::default());
        assert_eq!(n, 1);
        assert!(rects[0].is_vertical_bar);
        assert!(!rects[0].is_horizontal_bar);
        assert!(!rects[1].is_bar());
    }
}
