#![doc = include_str!("../README.md")]

// Core stages.
pub mod background;
pub mod classify;
pub mod labeling;
pub mod lines;
pub mod pipeline;

// Shared value types and raster access.
pub mod error;
pub mod geometry;
pub mod image;

// Tooling surface: reports, timings and tool configs.
pub mod config;
pub mod diagnostics;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{ChartError, Result};
pub use crate::pipeline::{ChartAnnotations, ChartPipeline, ChartRun, PipelineParams};

pub use crate::diagnostics::{ChartReport, TimingBreakdown};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use chart_segments::prelude::*;
///
/// # fn main() -> chart_segments::Result<()> {
/// let (w, h) = (64usize, 48usize);
/// let raster = Raster::from_fn(w, h, 256, |r, c| if r == 40 && c > 4 { 0 } else { 255 })?;
///
/// let annotations = ChartAnnotations {
///     horizontal_axis: Some(Axis::horizontal(40, 5, 60)),
///     vertical_axis: Some(Axis::vertical(5, 2, 40)),
///     ..Default::default()
/// };
/// let run = ChartPipeline::new(PipelineParams::default()).process(&raster, &annotations)?;
/// println!("lines={} total_ms={:.3}", run.lines.len(), run.timings.total_ms);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::geometry::{Axis, PointPixel, Rectangle};
    pub use crate::image::{ImageView, Raster};
    pub use crate::{ChartAnnotations, ChartPipeline, ChartRun, PipelineParams};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    pub use crate::background::{compute_background, Background, BackgroundParams, BackgroundSet};
    pub use crate::classify::{classify_bars, BarFinder, BarParams, DataLineFinder};
    pub use crate::labeling::{
        label_regions, LabelImage, Labeling, LabelingParams, PrimitiveStore,
    };
    pub use crate::lines::{aggregate_connected_lines, ConnectedLine, LineOrientation};
}
