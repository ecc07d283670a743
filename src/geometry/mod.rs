//! Planar orientation and area measures.
//!
//! All measures are exact translations of the cross product / shoelace
//! formulas; no tolerance is applied, so a collinear triple yields exactly
//! `0.0` whenever the coordinates are exactly representable.

use crate::topology::point::{Point2, PointSet};

/// z-component of `(b - a) × (c - a)`.
///
/// Positive when `a → b → c` turns counterclockwise, negative when clockwise,
/// zero when the three points are collinear.
#[inline]
pub fn cross_z(a: Point2, b: Point2, c: Point2) -> f64 {
    (b - a).cross(c - a)
}

/// Signed area of the triangle `a, b, c` (half of [`cross_z`]).
#[inline]
pub fn triangle_signed_area(a: Point2, b: Point2, c: Point2) -> f64 {
    0.5 * cross_z(a, b, c)
}

/// Signed area of the closed polygon visiting `nodes` in order (shoelace).
///
/// The polygon is implicitly closed from the last node back to the first.
/// Counterclockwise polygons have positive area.
///
/// # Panics
/// Panics if a node index is out of range for `points`.
pub fn polygon_signed_area(points: &PointSet, nodes: &[usize]) -> f64 {
    let n = nodes.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|k| {
            let p = points[nodes[k]];
            let q = points[nodes[(k + 1) % n]];
            p.cross(q)
        })
        .sum();
    0.5 * twice
}
