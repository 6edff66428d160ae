//! Aggregation of labeled primitives into connected lines.
pub mod aggregate;
pub mod connected_line;

pub use aggregate::aggregate_connected_lines;
pub use connected_line::{ConnectedLine, LineOrientation};
