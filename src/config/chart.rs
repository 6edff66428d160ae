use crate::error::Result;
use crate::image::io::read_json_file;
use crate::pipeline::PipelineParams;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration of the `chart_segments` tool.
///
/// ```json
/// {
///   "input": "chart.png",
///   "annotations": "chart_axes.json",
///   "params": { "labeling": { "similarityThreshold": 8 } },
///   "output": { "report_json": "out/report.json", "labels_image": "out/labels.png" }
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct ChartToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    /// Axes and rectangles found by the fitting stages; without it only
    /// background, labeling and aggregation run.
    #[serde(default)]
    pub annotations: Option<PathBuf>,
    #[serde(default)]
    pub params: PipelineParams,
    pub output: ChartOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct ChartOutputConfig {
    #[serde(rename = "report_json")]
    pub report_json: PathBuf,
    /// Optional grayscale rendering of the label raster.
    #[serde(default)]
    pub labels_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<ChartToolConfig> {
    read_json_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_default_when_omitted() {
        let json = r#"{ "input": "a.png", "output": { "report_json": "r.json" } }"#;
        let cfg: ChartToolConfig = serde_json::from_str(json).expect("parse config");
        assert!(cfg.annotations.is_none());
        assert!(cfg.output.labels_image.is_none());
        assert_eq!(cfg.params.labeling.similarity_threshold, 8);
        assert_eq!(cfg.params.background.sample_rows, 10);
    }

    #[test]
    fn nested_params_override_defaults() {
        let cfg: ChartToolConfig = serde_json::from_str(
            r#"{
                "input": "a.png",
                "params": {
                    "labeling": { "similarityThreshold": 3 },
                    "classifier": { "dataLineTolerancePx": 4 }
                },
                "output": { "report_json": "r.json", "labels_image": "l.png" }
            }"#,
        )
        .expect("parse config");
        assert_eq!(cfg.params.labeling.similarity_threshold, 3);
        assert_eq!(cfg.params.classifier.data_line_tolerance_px, 4);
        assert!((cfg.params.classifier.filled_area_ratio - 0.9).abs() < 1e-12);
        assert_eq!(cfg.output.labels_image, Some(PathBuf::from("l.png")));
    }
}
