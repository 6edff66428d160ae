//! Pipeline driving chart segmentation end-to-end.
//!
//! [`ChartPipeline`] takes a validated raster plus whatever axes and
//! rectangles the fitting stages found, and runs:
//!
//! 1. background classification (global + corner-window histograms),
//! 2. region labeling against the primary background color,
//! 3. run-length primitive extraction and connected-line aggregation,
//! 4. filled-area marking from each line's bounding-box coverage,
//! 5. data-line flags (needs both axes),
//! 6. bar classification and bar values (per available axis).
//!
//! ```no_run
//! use chart_segments::{ChartAnnotations, ChartPipeline, PipelineParams};
//! use chart_segments::image::Raster;
//!
//! # fn example(raster: Raster) -> chart_segments::Result<()> {
//! let run = ChartPipeline::new(PipelineParams::default())
//!     .process(&raster, &ChartAnnotations::default())?;
//! println!("regions: {}", run.labeling.label_count() - 1);
//! # Ok(())
//! # }
//! ```
pub mod annotations;
pub mod params;

pub use annotations::{BarValue, ChartAnnotations};
pub use params::{ClassifierParams, PipelineParams};

use crate::background::{compute_background, BackgroundSet};
use crate::classify::{classify_bars, DataLineFinder};
use crate::diagnostics::{ChartReport, TimingBreakdown};
use crate::error::Result;
use crate::geometry::Rectangle;
use crate::image::{ImageView, Raster};
use crate::labeling::{LabelImage, Labeling, PrimitiveStore};
use crate::lines::{aggregate_connected_lines, ConnectedLine};
use log::debug;
use std::time::Instant;

/// Everything a single run produced, in structured form.
#[derive(Clone, Debug)]
pub struct ChartRun {
    pub width: usize,
    pub height: usize,
    pub num_colors: usize,
    pub background: BackgroundSet,
    pub labeling: Labeling,
    pub primitives: PrimitiveStore,
    pub lines: Vec<ConnectedLine>,
    /// Input rectangles with their bar flags filled in.
    pub rectangles: Vec<Rectangle>,
    pub bar_values: Vec<BarValue>,
    pub timings: TimingBreakdown,
}

impl ChartRun {
    /// Serializable summary of the run.
    pub fn report(&self) -> Result<ChartReport> {
        ChartReport::from_run(self)
    }

    pub fn data_lines(&self) -> impl Iterator<Item = &ConnectedLine> + '_ {
        self.lines.iter().filter(|l| l.is_data_line())
    }
}

/// Stateless driver; every call builds its own histograms and forest.
#[derive(Clone, Debug, Default)]
pub struct ChartPipeline {
    params: PipelineParams,
}

impl ChartPipeline {
    pub fn new(params: PipelineParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &PipelineParams {
        &self.params
    }

    pub fn process(&self, raster: &Raster, annotations: &ChartAnnotations) -> Result<ChartRun> {
        debug!(
            "ChartPipeline::process start w={} h={} colors={} rectangles={}",
            raster.width(),
            raster.height(),
            raster.num_colors(),
            annotations.rectangles.len()
        );
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let background = timings.measure("background", || {
            compute_background(raster, &self.params.background)
        })?;

        let labeler = LabelImage::new(self.params.labeling);
        let primary = background.primary();
        let labeling = timings.measure("labeling", || labeler.label(raster, primary))?;

        let primitives = timings.measure("primitives", || PrimitiveStore::from_labeling(&labeling));
        let mut lines = timings.measure("aggregation", || {
            aggregate_connected_lines(&primitives, &labeling)
        })?;

        let classifier = &self.params.classifier;
        let filled_count = timings.measure("filled_areas", || {
            mark_filled_areas(&mut lines, classifier.filled_area_ratio)
        })?;

        let finder = DataLineFinder::new(classifier.data_line_tolerance_px);
        let data_line_count = match annotations.axes() {
            Some((horizontal, vertical)) => timings.measure("data_lines", || {
                finder.mark_data_lines(&mut lines, horizontal, vertical)
            })?,
            None => {
                debug!("ChartPipeline::process axes incomplete, skipping data lines");
                0
            }
        };

        let horizontal = annotations.horizontal_axis.as_ref();
        let vertical = annotations.vertical_axis.as_ref();
        let mut rectangles = annotations.rectangles.clone();
        let bar_count = timings.measure("bars", || {
            classify_bars(&mut rectangles, horizontal, vertical, classifier.bars)
        });
        let bar_values: Vec<BarValue> = rectangles
            .iter()
            .enumerate()
            .filter_map(|(i, rect)| BarValue::measure(i, rect, horizontal, vertical))
            .collect();

        timings.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "ChartPipeline::process labels={} lines={} filled={} data={} bars={} ms={:.3}",
            labeling.label_count(),
            lines.len(),
            filled_count,
            data_line_count,
            bar_count,
            timings.total_ms
        );

        Ok(ChartRun {
            width: raster.width(),
            height: raster.height(),
            num_colors: raster.num_colors(),
            background,
            labeling,
            primitives,
            lines,
            rectangles,
            bar_values,
            timings,
        })
    }
}

/// Flag lines that cover at least `ratio` of a bounding box with non-zero
/// extent in both directions.
fn mark_filled_areas(lines: &mut [ConnectedLine], ratio: f64) -> Result<usize> {
    let mut count = 0;
    for line in lines.iter_mut() {
        let bounds = line.bounds()?;
        let filled = bounds.height() > 0 && bounds.width() > 0 && line.fill_ratio()? >= ratio;
        line.set_filled_area(filled);
        count += usize::from(filled);
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Axis;

    fn bar_chart() -> (Raster, ChartAnnotations) {
        // White canvas, black axes, two gray bars and a thin dark diagonal.
        let raster = Raster::from_fn(60, 50, 256, |r, c| {
            if r == 45 && (5..=55).contains(&c) {
                0
            } else if c == 5 && (5..=45).contains(&r) {
                0
            } else if (20..45).contains(&r) && (10..16).contains(&c) {
                128
            } else if (30..45).contains(&r) && (25..31).contains(&c) {
                128
            } else if r + c == 50 && (35..=45).contains(&c) {
                60
            } else {
                255
            }
        })
        .expect("valid raster");
        let annotations = ChartAnnotations {
            horizontal_axis: Some(Axis::horizontal(45, 5, 55)),
            vertical_axis: Some(Axis::vertical(5, 5, 45)),
            rectangles: vec![
                Rectangle::from_edges(20, 10, 44, 15),
                Rectangle::from_edges(30, 25, 44, 30),
            ],
        };
        (raster, annotations)
    }

    #[test]
    fn filled_bars_and_bar_values() {
        let (raster, annotations) = bar_chart();
        let run = ChartPipeline::default()
            .process(&raster, &annotations)
            .expect("pipeline runs");
        assert_eq!(run.background.primary(), 255);
        // Axes (one L-shaped region), two bars, the diagonal.
        assert_eq!(run.labeling.label_count(), 5);
        let filled = run.lines.iter().filter(|l| l.is_filled_area()).count();
        assert_eq!(filled, 2);
        assert!(run.rectangles.iter().all(|r| r.is_vertical_bar));
        assert_eq!(run.bar_values.len(), 2);
        assert_eq!(run.bar_values[0].point.row, 20);
        assert_eq!(run.bar_values[0].magnitude_px, 25);
        assert_eq!(run.bar_values[1].magnitude_px, 15);
    }

    #[test]
    fn missing_axes_skip_classification() {
        let (raster, mut annotations) = bar_chart();
        annotations.horizontal_axis = None;
        annotations.vertical_axis = None;
        let run = ChartPipeline::default()
            .process(&raster, &annotations)
            .expect("pipeline runs");
        assert_eq!(run.data_lines().count(), 0);
        assert!(run.rectangles.iter().all(|r| !r.is_bar()));
        assert!(run.bar_values.is_empty());
        let timings = &run.timings;
        let stages: Vec<_> = timings.stages.iter().map(|s| s.label.as_str()).collect();
        assert!(!stages.contains(&"data_lines"));
    }
}
