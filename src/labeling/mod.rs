//! Region labeling: union-find forest, three-pass labeler and the primitive
//! arena fed to the connected-line aggregator.
pub mod forest;
pub mod labeler;
pub mod primitives;


pub use forest::{LabelForest, LabelId, BACKGROUND_LABEL};
pub use labeler::{LabelImage, Labeling, LabelingParams};
pub use primitives::{Primitive, PrimitiveId, PrimitiveStore};

use crate::error::Result;
use crate::image::Raster;

/// Label `raster` with default parameters.
pub fn label_regions(raster: &Raster, background_color: u16) -> Result<Labeling> {
    LabelImage::default().label(raster, background_color)
}
