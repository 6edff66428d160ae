//! Arena storage for region primitives.
//!
//! A primitive is a group of pixels attributed to one region label. All
//! points live in one contiguous buffer; a primitive only records its parent
//! label and the range of the buffer it owns.
use super::forest::LabelId;
use super::Labeling;
use crate::error::{ChartError, Result};
use crate::geometry::PointPixel;
use crate::image::ImageView;
use std::ops::Range;

/// Index of a primitive inside its [`PrimitiveStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrimitiveId(pub u32);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Primitive {
    parent_label: LabelId,
    points: Range<usize>,
}

impl Primitive {
    pub fn parent_label(&self) -> LabelId {
        self.parent_label
    }

    /// Number of pixels owned by the primitive.
    pub fn size(&self) -> usize {
        self.points.len()
    }
}

#[derive(Clone, Debug, Default)]
pub struct PrimitiveStore {
    points: Vec<PointPixel>,
    primitives: Vec<Primitive>,
}

impl PrimitiveStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split every labeled region into horizontal runs: each maximal run of
    /// one foreground label within a row becomes a primitive.
    pub fn from_labeling(labeling: &Labeling) -> Self {
        let mut store = Self::new();
        for (row, labels) in labeling.rows().enumerate() {
            let mut col = 0usize;
            while col < labels.len() {
                let label = labels[col];
                let start = col;
                while col < labels.len() && labels[col] == label {
                    col += 1;
                }
                if label != super::BACKGROUND_LABEL {
                    store.push(
                        label,
                        (start..col).map(|c| PointPixel::new(row as i32, c as i32)),
                    );
                }
            }
        }
        store
    }

    /// Append a primitive and return its id.
    pub fn push<I>(&mut self, parent_label: LabelId, points: I) -> PrimitiveId
    where
        I: IntoIterator<Item = PointPixel>,
    {
        let start = self.points.len();
        self.points.extend(points);
        let id = PrimitiveId(self.primitives.len() as u32);
        self.primitives.push(Primitive {
            parent_label,
            points: start..self.points.len(),
        });
        id
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn get(&self, id: PrimitiveId) -> Option<&Primitive> {
        self.primitives.get(id.0 as usize)
    }

    /// Like [`get`](Self::get) but treats an unknown id as an ordering error.
    pub fn primitive(&self, id: PrimitiveId) -> Result<&Primitive> {
        self.get(id).ok_or_else(|| {
            ChartError::structural(format!(
                "primitive {} not present in store of {}",
                id.0,
                self.primitives.len()
            ))
        })
    }

    pub fn points(&self, id: PrimitiveId) -> Result<&[PointPixel]> {
        let prim = self.primitive(id)?;
        Ok(&self.points[prim.points.clone()])
    }

    pub fn iter(&self) -> impl Iterator<Item = (PrimitiveId, &Primitive)> + '_ {
        self.primitives
            .iter()
            .enumerate()
            .map(|(i, p)| (PrimitiveId(i as u32), p))
    }

    /// Total number of points across all primitives.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}
