//! Serializable diagnostics produced by the pipeline and the demo tool.
//!
//! `ChartReport` is the summary written to disk: input description, the
//! background decision, per-label colors, one descriptor per connected line,
//! per-rectangle bar decisions and stage timings.

pub mod report;
pub mod timing;

pub use report::{BarDescriptor, ChartReport, InputDescriptor, LabelSummary, LineDescriptor};
pub use timing::{StageTiming, TimingBreakdown};
