//! Pixel-space geometry shared by the classifiers.
//!
//! All coordinates follow the image convention: `row` grows downward and
//! `col` grows to the right. Values are signed so that sentinel points such as
//! `(-1, -1)` and small negative tolerances remain representable.
pub mod axis;
pub mod bounds;
pub mod line;
pub mod point;
pub mod rectangle;

pub use axis::{Axis, AxisOrientation};
pub use bounds::PixelBounds;
pub use line::squared_distance_to_line;
pub use point::PointPixel;
pub use rectangle::Rectangle;
