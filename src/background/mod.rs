//! Background color discrimination.
//!
//! The global histogram gives the dominant color; a small top-left sample
//! window (usually plain canvas in a chart) gives a second opinion. Any other
//! color covering more than half as many pixels as the dominant one is also
//! treated as background.
pub mod histogram;

pub use histogram::HistogramTable;

use crate::error::Result;
use crate::image::Raster;
use log::debug;
use serde::{Deserialize, Serialize};

/// Tunables for [`compute_background`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackgroundParams {
    /// Height of the top-left sample window in pixels.
    pub sample_rows: usize,
    /// Width of the top-left sample window in pixels.
    pub sample_cols: usize,
    /// Colors whose count exceeds this fraction of the dominant count join the set.
    pub dominance_ratio: f64,
}

impl Default for BackgroundParams {
    fn default() -> Self {
        Self {
            sample_rows: 10,
            sample_cols: 10,
            dominance_ratio: 0.5,
        }
    }
}

/// Ordered, duplicate-free list of background colors. Never empty; the first
/// entry is the globally most frequent color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BackgroundSet {
    colors: Vec<u16>,
}

impl BackgroundSet {
    /// Color used to drive region labeling.
    pub fn primary(&self) -> u16 {
        self.colors[0]
    }

    pub fn contains(&self, color: u16) -> bool {
        self.colors.contains(&color)
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.colors.iter().copied()
    }
}

/// Histograms of one raster together with the background decision they imply.
#[derive(Clone, Debug)]
pub struct Background {
    histogram: HistogramTable,
    window_histogram: HistogramTable,
    set: BackgroundSet,
}

impl Background {
    pub fn analyze(raster: &Raster, params: &BackgroundParams) -> Result<Self> {
        let histogram = HistogramTable::from_raster(raster);
        let window_histogram =
            HistogramTable::from_window(raster, params.sample_rows, params.sample_cols)?;

        let global_mode = histogram.mode();
        let window_mode = window_histogram.mode();

        let mut colors = vec![global_mode as u16];
        if window_mode != global_mode {
            colors.push(window_mode as u16);
        }
        let threshold = params.dominance_ratio * histogram.count(global_mode) as f64;
        for (color, &count) in histogram.counts().iter().enumerate() {
            if color == global_mode || color == window_mode {
                continue;
            }
            if count as f64 > threshold {
                colors.push(color as u16);
            }
        }
        debug!(
            "Background::analyze global_mode={} window_mode={} set={:?}",
            global_mode, window_mode, colors
        );

        Ok(Self {
            histogram,
            window_histogram,
            set: BackgroundSet { colors },
        })
    }

    pub fn histogram(&self) -> &HistogramTable {
        &self.histogram
    }

    pub fn window_histogram(&self) -> &HistogramTable {
        &self.window_histogram
    }

    pub fn set(&self) -> &BackgroundSet {
        &self.set
    }

    pub fn into_set(self) -> BackgroundSet {
        self.set
    }
}

/// Derive the background colors of `raster`.
pub fn compute_background(raster: &Raster, params: &BackgroundParams) -> Result<BackgroundSet> {
    Background::analyze(raster, params).map(Background::into_set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChartError;

    #[test]
    fn unique_maximum_is_primary() {
        let corner = |row: usize, col: usize| row >= 15 && col >= 15;
        let raster = Raster::from_fn(20, 20, 256, |r, c| if corner(r, c) { 0 } else { 255 })
            .expect("valid raster");
        let set = compute_background(&raster, &BackgroundParams::default()).expect("analyzed");
        assert_eq!(set.as_slice(), &[255]);
        assert_eq!(set.primary(), 255);
    }

    #[test]
    fn window_mode_added_when_it_differs() {
        // Gray canvas in the corner, white dominates overall.
        let corner = |row: usize, col: usize| row < 10 && col < 10;
        let raster = Raster::from_fn(40, 40, 256, |r, c| if corner(r, c) { 200 } else { 255 })
            .expect("valid raster");
        let set = compute_background(&raster, &BackgroundParams::default()).expect("analyzed");
        assert_eq!(set.as_slice(), &[255, 200]);
    }

    #[test]
    fn near_dominant_colors_join_after_modes() {
        // Left half 10, right half split 30/40 columns between 20 and 90.
        let raster = Raster::from_fn(100, 10, 256, |_, col| match col {
            0..=49 => 10,
            50..=79 => 20,
            _ => 90,
        })
        .expect("valid raster");
        let bg = Background::analyze(&raster, &BackgroundParams::default()).expect("analyzed");
        // 20 covers 300 px (> 250), 90 covers 200 px (< 250).
        assert_eq!(bg.set().as_slice(), &[10, 20]);
        assert_eq!(bg.histogram().count(10), 500);
        assert_eq!(bg.window_histogram().total(), 100);
    }

    #[test]
    fn exactly_half_the_dominant_count_stays_foreground() {
        // Column-major fill: 500 px of 10, then 20 up to `boundary`, then 90.
        let split = |boundary: usize| {
            Raster::from_fn(100, 10, 256, move |row, col| match col * 10 + row {
                i if i < 500 => 10,
                i if i < boundary => 20,
                _ => 90,
            })
            .expect("valid raster")
        };
        let params = BackgroundParams::default();

        let at_half = compute_background(&split(750), &params).expect("analyzed");
        assert_eq!(at_half.as_slice(), &[10]);

        let above_half = compute_background(&split(751), &params).expect("analyzed");
        assert_eq!(above_half.as_slice(), &[10, 20]);
    }

    #[test]
    fn set_has_no_duplicates_and_is_bounded() {
        // Four colors with identical counts: every one exceeds half the max.
        let raster = Raster::from_fn(4, 10, 4, |_, col| col as u16).expect("valid raster");
        let params = BackgroundParams {
            sample_rows: 2,
            sample_cols: 2,
            ..Default::default()
        };
        let set = compute_background(&raster, &params).expect("analyzed");
        assert_eq!(set.as_slice(), &[0, 1, 2, 3]);
        assert!(set.len() <= raster.num_colors());
    }

    #[test]
    fn window_larger_than_raster_is_a_precondition_violation() {
        let raster = Raster::from_fn(5, 5, 256, |_, _| 255).expect("valid raster");
        let err = compute_background(&raster, &BackgroundParams::default()).unwrap_err();
        assert!(matches!(err, ChartError::PreconditionViolation(_)));
    }
}
