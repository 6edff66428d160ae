use crate::error::{ChartError, Result};
use crate::image::{ImageView, Raster};

/// Pixel count per palette index over some region of a raster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistogramTable {
    counts: Vec<u64>,
}

impl HistogramTable {
    pub fn new(num_colors: usize) -> Self {
        Self {
            counts: vec![0; num_colors],
        }
    }

    /// Histogram over every pixel of the raster.
    pub fn from_raster(raster: &Raster) -> Self {
        let mut hist = Self::new(raster.num_colors());
        for row in raster.rows() {
            for &v in row {
                hist.accumulate(v);
            }
        }
        hist
    }

    /// Histogram over the top-left `rows × cols` window.
    pub fn from_window(raster: &Raster, rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 || rows > raster.height() || cols > raster.width() {
            return Err(ChartError::precondition(format!(
                "sample window {rows}x{cols} does not fit raster {}x{}",
                raster.height(),
                raster.width()
            )));
        }
        let mut hist = Self::new(raster.num_colors());
        for row in raster.rows().take(rows) {
            for &v in &row[..cols] {
                hist.accumulate(v);
            }
        }
        Ok(hist)
    }

    #[inline]
    pub fn accumulate(&mut self, color: u16) {
        self.counts[color as usize] += 1;
    }

    #[inline]
    pub fn count(&self, color: usize) -> u64 {
        self.counts.get(color).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Indices of the smallest and largest counts.
    ///
    /// A single linear scan that only replaces the current pick on a strict
    /// improvement, so ties resolve to the lowest index.
    pub fn find_min_max(&self) -> (usize, usize) {
        let mut min_idx = 0;
        let mut max_idx = 0;
        for (i, &c) in self.counts.iter().enumerate().skip(1) {
            if c < self.counts[min_idx] {
                min_idx = i;
            }
            if c > self.counts[max_idx] {
                max_idx = i;
            }
        }
        (min_idx, max_idx)
    }

    /// Most frequent color (lowest index on ties).
    pub fn mode(&self) -> usize {
        self.find_min_max().1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_prefers_first_occurrence() {
        let mut hist = HistogramTable::new(5);
        for c in [1u16, 1, 3, 3, 4] {
            hist.accumulate(c);
        }
        // Colors 0 and 2 both have zero counts, 1 and 3 both have two.
        assert_eq!(hist.find_min_max(), (0, 1));
        assert_eq!(hist.total(), 5);
    }

    #[test]
    fn window_histogram_only_counts_the_corner() {
        let raster = Raster::from_fn(4, 4, 8, |row, col| if row < 2 && col < 2 { 7 } else { 1 })
            .expect("valid raster");
        let window = HistogramTable::from_window(&raster, 2, 2).expect("fits");
        assert_eq!(window.count(7), 4);
        assert_eq!(window.count(1), 0);
        assert_eq!(window.mode(), 7);
    }

    #[test]
    fn oversized_window_is_rejected() {
        let raster = Raster::from_fn(4, 3, 8, |_, _| 0).expect("valid raster");
        let err = HistogramTable::from_window(&raster, 4, 4).unwrap_err();
        assert!(matches!(err, ChartError::PreconditionViolation(_)));
    }
}
