//! Point-to-line distances in homogeneous coordinates.
//!
//! A line through two pixels is the cross product of their homogeneous
//! vectors `(col, row, 1)`; for `l = (a, b, c)` the squared distance of a
//! point `p` is `(l·p)^2 / (a^2 + b^2)`.
use super::PointPixel;
use nalgebra::Vector3;

const EPS: f64 = 1e-12;

#[inline]
fn homogeneous(p: PointPixel) -> Vector3<f64> {
    Vector3::new(p.col as f64, p.row as f64, 1.0)
}

/// Homogeneous line through `a` and `b` (not normalized).
pub fn line_through(a: PointPixel, b: PointPixel) -> Vector3<f64> {
    homogeneous(a).cross(&homogeneous(b))
}

/// Squared distance from `p` to the infinite line through `a` and `b`.
///
/// When `a == b` the line is undefined and the squared distance to `a` is
/// returned instead.
pub fn squared_distance_to_line(p: PointPixel, a: PointPixel, b: PointPixel) -> f64 {
    let l = line_through(a, b);
    let norm_sq = l.x * l.x + l.y * l.y;
    if norm_sq <= EPS {
        let dr = (p.row - a.row) as f64;
        let dc = (p.col - a.col) as f64;
        return dr * dr + dc * dc;
    }
    let d = l.dot(&homogeneous(p));
    d * d / norm_sq
}
