//! Parameter types configuring the pipeline stages.
//!
//! Every default reproduces the fixed constants of the reference behaviour:
//! a 10×10 background sample window, a color similarity of 8, a 2 px
//! containment tolerance and the bar heuristics in [`BarParams`].
use crate::background::BackgroundParams;
use crate::classify::BarParams;
use crate::labeling::LabelingParams;
use serde::{Deserialize, Serialize};

/// Pipeline-wide parameters.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PipelineParams {
    pub background: BackgroundParams,
    pub labeling: LabelingParams,
    pub classifier: ClassifierParams,
}

/// Knobs of the geometric classification stages.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassifierParams {
    /// Overhang allowed around the axes area for data lines.
    pub data_line_tolerance_px: i32,
    /// Minimum share of its bounding box a line must cover to count as a
    /// filled area.
    pub filled_area_ratio: f64,
    pub bars: BarParams,
}

impl Default for ClassifierParams {
    fn default() -> Self {
        Self {
            data_line_tolerance_px: 2,
            filled_area_ratio: 0.9,
            bars: BarParams::default(),
        }
    }
}
