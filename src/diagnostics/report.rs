use super::TimingBreakdown;
use crate::error::Result;
use crate::geometry::PointPixel;
use crate::labeling::LabelId;
use crate::lines::{ConnectedLine, LineOrientation};
use crate::pipeline::{BarValue, ChartRun};
use serde::Serialize;

/// Result summary of one [`ChartPipeline`](crate::ChartPipeline) run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartReport {
    pub input: InputDescriptor,
    pub background: Vec<u16>,
    pub labels: LabelSummary,
    pub lines: Vec<LineDescriptor>,
    pub bars: Vec<BarDescriptor>,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub num_colors: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSummary {
    /// Includes the background label.
    pub label_count: usize,
    /// Representative color per label id.
    pub label_colors: Vec<u16>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDescriptor {
    pub label: LabelId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u16>,
    pub pixel_count: usize,
    pub primitive_count: usize,
    pub upper_left: PointPixel,
    pub lower_right: PointPixel,
    pub orientation: LineOrientation,
    pub is_filled_area: bool,
    pub is_data_line: bool,
}

impl LineDescriptor {
    pub fn from_line(line: &ConnectedLine) -> Result<Self> {
        let bounds = line.bounds()?;
        Ok(Self {
            label: line.region_label(),
            color: line.color(),
            pixel_count: line.pixel_count(),
            primitive_count: line.primitives().len(),
            upper_left: bounds.upper_left,
            lower_right: bounds.lower_right,
            orientation: line.orientation()?,
            is_filled_area: line.is_filled_area(),
            is_data_line: line.is_data_line(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarDescriptor {
    pub rectangle: usize,
    pub upper_left: PointPixel,
    pub lower_right: PointPixel,
    pub is_vertical_bar: bool,
    pub is_horizontal_bar: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<BarValue>,
}

impl ChartReport {
    pub fn from_run(run: &ChartRun) -> Result<Self> {
        let lines = run
            .lines
            .iter()
            .map(LineDescriptor::from_line)
            .collect::<Result<Vec<_>>>()?;
        let bars = run
            .rectangles
            .iter()
            .enumerate()
            .map(|(i, rect)| BarDescriptor {
                rectangle: i,
                upper_left: rect.upper_left,
                lower_right: rect.lower_right,
                is_vertical_bar: rect.is_vertical_bar,
                is_horizontal_bar: rect.is_horizontal_bar,
                value: run.bar_values.iter().find(|v| v.rectangle == i).copied(),
            })
            .collect();
        Ok(Self {
            input: InputDescriptor {
                width: run.width,
                height: run.height,
                num_colors: run.num_colors,
            },
            background: run.background.as_slice().to_vec(),
            labels: LabelSummary {
                label_count: run.labeling.label_count(),
                label_colors: run.labeling.label_colors().to_vec(),
            },
            lines,
            bars,
            timings: run.timings.clone(),
        })
    }

    pub fn data_line_count(&self) -> usize {
        self.lines.iter().filter(|l| l.is_data_line).count()
    }

    pub fn bar_count(&self) -> usize {
        self.bars
            .iter()
            .filter(|b| b.is_vertical_bar || b.is_horizontal_bar)
            .count()
    }
}
