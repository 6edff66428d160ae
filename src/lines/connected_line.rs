//! Connected lines: same-region primitives viewed as one shape.
//!
//! Construction is two-phase. Primitives are attached first (`new`,
//! `from_primitives`, `add_primitive`); `finalize_bounding_box` then scans
//! every owned point once. Geometry queries before finalization, or after a
//! later `add_primitive`, fail with a structural error instead of returning a
//! stale box.
use crate::error::{ChartError, Result};
use crate::geometry::{PixelBounds, PointPixel};
use crate::labeling::{LabelId, PrimitiveId, PrimitiveStore};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineOrientation {
    Horizontal,
    Vertical,
}

impl LineOrientation {
    /// Wider than tall is horizontal; ties are vertical.
    pub fn from_extent(height: i32, width: i32) -> Self {
        if width > height {
            LineOrientation::Horizontal
        } else {
            LineOrientation::Vertical
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct LineGeometry {
    bounds: PixelBounds,
    orientation: LineOrientation,
}

#[derive(Clone, Debug)]
pub struct ConnectedLine {
    region_label: LabelId,
    color: Option<u16>,
    primitives: Vec<PrimitiveId>,
    pixel_count: usize,
    geometry: Option<LineGeometry>,
    is_filled_area: bool,
    is_data_line: bool,
}

impl ConnectedLine {
    /// Start a line from a single primitive.
    pub fn new(store: &PrimitiveStore, id: PrimitiveId) -> Result<Self> {
        let prim = store.primitive(id)?;
        Ok(Self {
            region_label: prim.parent_label(),
            color: None,
            primitives: vec![id],
            pixel_count: prim.size(),
            geometry: None,
            is_filled_area: false,
            is_data_line: false,
        })
    }

    /// Start a line from a pre-grouped, non-empty list of same-label primitives.
    pub fn from_primitives(store: &PrimitiveStore, ids: &[PrimitiveId]) -> Result<Self> {
        let (&first, rest) = ids
            .split_first()
            .ok_or_else(|| ChartError::structural("connected line needs a primitive"))?;
        let mut line = Self::new(store, first)?;
        for &id in rest {
            line.add_primitive(store, id)?;
        }
        Ok(line)
    }

    /// Attach another primitive of the same region. Invalidates any finalized
    /// bounding box.
    pub fn add_primitive(&mut self, store: &PrimitiveStore, id: PrimitiveId) -> Result<()> {
        let prim = store.primitive(id)?;
        if prim.parent_label() != self.region_label {
            return Err(ChartError::structural(format!(
                "primitive {} belongs to region {}, line belongs to region {}",
                id.0,
                prim.parent_label(),
                self.region_label
            )));
        }
        self.primitives.push(id);
        self.pixel_count += prim.size();
        self.geometry = None;
        Ok(())
    }

    /// Compute the bounding box and orientation from every owned point.
    pub fn finalize_bounding_box(&mut self, store: &PrimitiveStore) -> Result<()> {
        let mut bounds: Option<PixelBounds> = None;
        for &id in &self.primitives {
            for &p in store.points(id)? {
                bounds = Some(match bounds {
                    Some(mut b) => {
                        b.expand_to_contain(p);
                        b
                    }
                    None => PixelBounds::at(p),
                });
            }
        }
        let Some(bounds) = bounds else {
            let label = self.region_label;
            return Err(ChartError::structural(format!("region {label} has no pixels to bound")));
        };
        self.geometry = Some(LineGeometry {
            bounds,
            orientation: LineOrientation::from_extent(bounds.height(), bounds.width()),
        });
        Ok(())
    }

    pub fn is_finalized(&self) -> bool {
        self.geometry.is_some()
    }

    fn geometry(&self) -> Result<&LineGeometry> {
        self.geometry.as_ref().ok_or_else(|| {
            ChartError::structural(format!(
                "bounding box of region {} queried before finalize_bounding_box",
                self.region_label
            ))
        })
    }

    pub fn bounds(&self) -> Result<PixelBounds> {
        Ok(self.geometry()?.bounds)
    }

    pub fn upper_left(&self) -> Result<PointPixel> {
        Ok(self.geometry()?.bounds.upper_left)
    }

    pub fn lower_right(&self) -> Result<PointPixel> {
        Ok(self.geometry()?.bounds.lower_right)
    }

    pub fn height(&self) -> Result<i32> {
        Ok(self.geometry()?.bounds.height())
    }

    pub fn width(&self) -> Result<i32> {
        Ok(self.geometry()?.bounds.width())
    }

    pub fn orientation(&self) -> Result<LineOrientation> {
        Ok(self.geometry()?.orientation)
    }

    /// Share of the bounding box covered by the line's pixels.
    pub fn fill_ratio(&self) -> Result<f64> {
        let area = self.geometry()?.bounds.area_px();
        Ok(self.pixel_count as f64 / area as f64)
    }

    pub fn region_label(&self) -> LabelId {
        self.region_label
    }

    pub fn color(&self) -> Option<u16> {
        self.color
    }

    pub fn set_color(&mut self, color: u16) {
        self.color = Some(color);
    }

    pub fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    pub fn primitives(&self) -> &[PrimitiveId] {
        &self.primitives
    }

    /// Every point of every owned primitive.
    pub fn points(&self, store: &PrimitiveStore) -> Result<Vec<PointPixel>> {
        let mut out = Vec::with_capacity(self.pixel_count);
        for &id in &self.primitives {
            out.extend_from_slice(store.points(id)?);
        }
        Ok(out)
    }

    pub fn is_filled_area(&self) -> bool {
        self.is_filled_area
    }

    pub fn set_filled_area(&mut self, value: bool) {
        self.is_filled_area = value;
    }

    pub fn is_data_line(&self) -> bool {
        self.is_data_line
    }

    pub fn set_data_line(&mut self, value: bool) {
        self.is_data_line = value;
    }
}
