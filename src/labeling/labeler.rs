//! Two-pass connected-component labeling with a background-aware forest.
//!
//! - Pass 1 scans row-major. Background pixels take label 0. Every other pixel
//!   looks at the already-visited neighbors (up, left, up-left, up-right) and
//!   treats a non-background neighbor as the same region when the colors differ
//!   by less than the similarity threshold. Without such a neighbor a new label
//!   is allocated; otherwise the smallest neighbor label is taken and the
//!   remaining neighbor labels are merged into it. Background neighbors are
//!   skipped, so pass 1 never unions with label 0 and the forest's
//!   background-absorbs rule is only reached by callers driving
//!   [`LabelForest`] directly.
//! - Pass 2 replaces every foreground label with its forest root.
//! - Pass 3 renumbers roots densely in ascending order (background stays 0) and
//!   records a representative color per label.
//!
//! Complexity is O(W·H) plus the forest walks; the forest is never compressed
//! so the numbering is reproducible across runs.
use super::forest::{LabelForest, LabelId, BACKGROUND_LABEL};
use crate::error::{ChartError, Result};
use crate::geometry::PointPixel;
use crate::image::{ImageView, Raster};
use log::debug;
use serde::{Deserialize, Serialize};

/// 8-neighborhood as `(d_row, d_col)`. The first four entries are the
/// neighbors already visited by a row-major scan.
const NEIGH_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (0, -1),
    (-1, -1),
    (-1, 1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
const PRIOR_NEIGHBORS: usize = 4;

/// Options for [`LabelImage`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabelingParams {
    /// Colors closer than this (exclusive) are merged into one region.
    pub similarity_threshold: u16,
}

impl Default for LabelingParams {
    fn default() -> Self {
        Self {
            similarity_threshold: 8,
        }
    }
}

/// Output of a labeling run: dense per-pixel labels and a color per label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Labeling {
    width: usize,
    height: usize,
    background_color: u16,
    labels: Vec<LabelId>,
    label_colors: Vec<u16>,
}

impl Labeling {
    /// Number of labels including the background label.
    pub fn label_count(&self) -> usize {
        self.label_colors.len()
    }

    pub fn background_color(&self) -> u16 {
        self.background_color
    }

    #[inline]
    pub fn label_at(&self, row: usize, col: usize) -> LabelId {
        self.labels[row * self.width + col]
    }

    /// Representative color of `label`, if the label exists.
    pub fn label_color(&self, label: LabelId) -> Option<u16> {
        self.label_colors.get(label as usize).copied()
    }

    pub fn label_colors(&self) -> &[u16] {
        &self.label_colors
    }

    pub fn labels(&self) -> &[LabelId] {
        &self.labels
    }

    pub fn contains_label(&self, label: LabelId) -> bool {
        (label as usize) < self.label_colors.len()
    }

    /// All pixels carrying `label`, in row-major order.
    pub fn pixels_of(&self, label: LabelId) -> Vec<PointPixel> {
        self.enumerate_pixels()
            .filter(|&(_, _, l)| l == label)
            .map(|(row, col, _)| PointPixel::new(row as i32, col as i32))
            .collect()
    }

    /// Pixel count per label, indexed by label id.
    pub fn label_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.label_count()];
        for &l in &self.labels {
            sizes[l as usize] += 1;
        }
        sizes
    }
}

impl ImageView for Labeling {
    type Pixel = LabelId;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn stride(&self) -> usize {
        self.width
    }
    #[inline]
    fn row(&self, y: usize) -> &[LabelId] {
        let start = y * self.width;
        &self.labels[start..start + self.width]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[LabelId]> {
        Some(&self.labels)
    }
}

/// Region labeler. One forest is built per call; nothing is shared between
/// runs.
#[derive(Clone, Debug, Default)]
pub struct LabelImage {
    params: LabelingParams,
}

impl LabelImage {
    pub fn new(params: LabelingParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &LabelingParams {
        &self.params
    }

    /// Label the foreground of `raster`, with `background_color` as the only
    /// background value.
    pub fn label(&self, raster: &Raster, background_color: u16) -> Result<Labeling> {
        if background_color as usize >= raster.num_colors() {
            return Err(ChartError::precondition(format!(
                "background color {background_color} outside palette of {}",
                raster.num_colors()
            )));
        }
        let mut pass = LabelPass::new(raster, background_color, self.params.similarity_threshold);
        pass.assign_provisional();
        pass.resolve_roots();
        let labeling = pass.remap_dense()?;
        debug!(
            "LabelImage::label w={} h={} provisional={} final={}",
            labeling.width,
            labeling.height,
            pass.forest.len(),
            labeling.label_count()
        );
        Ok(labeling)
    }
}

struct LabelPass<'a> {
    raster: &'a Raster,
    background: u16,
    threshold: u16,
    forest: LabelForest,
    labels: Vec<LabelId>,
}

impl<'a> LabelPass<'a> {
    fn new(raster: &'a Raster, background: u16, threshold: u16) -> Self {
        let n = raster.width() * raster.height();
        Self {
            raster,
            background,
            threshold,
            forest: LabelForest::with_capacity(64),
            labels: vec![BACKGROUND_LABEL; n],
        }
    }

    fn assign_provisional(&mut self) {
        let raster = self.raster;
        let width = raster.width() as isize;
        let height = raster.height() as isize;
        let mut neighbors = [BACKGROUND_LABEL; PRIOR_NEIGHBORS];

        for (row, col, value) in raster.enumerate_pixels() {
            let idx = raster.idx(row, col);
            if value == self.background {
                self.labels[idx] = BACKGROUND_LABEL;
                continue;
            }

            let mut found = 0usize;
            for &(dr, dc) in &NEIGH_OFFSETS[..PRIOR_NEIGHBORS] {
                let rn = row as isize + dr;
                let cn = col as isize + dc;
                if rn < 0 || cn < 0 || rn >= height || cn >= width {
                    continue;
                }
                let (rn, cn) = (rn as usize, cn as usize);
                let neighbor_value = raster.get(rn, cn);
                if neighbor_value == self.background {
                    continue;
                }
                if value.abs_diff(neighbor_value) < self.threshold {
                    neighbors[found] = self.labels[raster.idx(rn, cn)];
                    found += 1;
                }
            }

            let qualifying = &neighbors[..found];
            match qualifying.iter().copied().min() {
                None => self.labels[idx] = self.forest.make_root(),
                Some(min_label) => {
                    self.labels[idx] = min_label;
                    for &other in qualifying {
                        if other != min_label {
                            self.forest.union(min_label, other);
                        }
                    }
                }
            }
        }
    }

    fn resolve_roots(&mut self) {
        for label in self.labels.iter_mut() {
            if *label != BACKGROUND_LABEL {
                *label = self.forest.find(*label);
            }
        }
    }

    fn remap_dense(&mut self) -> Result<Labeling> {
        let mut dense: Vec<Option<LabelId>> = vec![None; self.forest.len()];
        let mut next: LabelId = 0;
        for root in self.forest.roots() {
            dense[root as usize] = Some(next);
            next += 1;
        }

        let mut label_colors = vec![self.background; next as usize];
        let values = self.raster.data();
        for (label, &value) in self.labels.iter_mut().zip(values) {
            let mapped = dense[*label as usize].ok_or_else(|| {
                ChartError::structural(format!("label {label} was not resolved to a root"))
            })?;
            *label = mapped;
            label_colors[mapped as usize] = value;
        }

        Ok(Labeling {
            width: self.raster.width(),
            height: self.raster.height(),
            background_color: self.background,
            labels: std::mem::take(&mut self.labels),
            label_colors,
        })
    }
}
