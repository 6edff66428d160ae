//! Geometric classification of connected lines and rectangles relative to
//! the chart axes.
pub mod bar;
pub mod data_line;

pub use bar::{classify_bars, BarFinder, BarParams};
pub use data_line::DataLineFinder;
