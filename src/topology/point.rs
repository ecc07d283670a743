//! `Point2` and `PointSet`: the lattice coordinates of a mesh.
//!
//! Points are identified by their index into a [`PointSet`]. An index is
//! assigned once at grid generation and never reused, so triangles and edges
//! refer to points by plain `usize` indices.

use std::fmt;
use std::ops::{Index, Sub};

use serde::{Deserialize, Serialize};

use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshError;

/// A 2D coordinate.
#[derive(Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
#[repr(C)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Point2 { x, y }
    }

    /// z-component of the cross product `self × other`.
    #[inline]
    pub fn cross(self, other: Point2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Sub for Point2 {
    type Output = Point2;

    #[inline]
    fn sub(self, rhs: Point2) -> Point2 {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Debug for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Point2").field(&self.x).field(&self.y).finish()
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<[f64; 2]> for Point2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Point2::new(x, y)
    }
}

/// Ordered, immutable sequence of points addressed by index `0..len()`.
///
/// No mutable access is provided; the index of every point is fixed once the
/// set is built.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointSet {
    points: Vec<Point2>,
}

impl PointSet {
    pub fn new(points: Vec<Point2>) -> Self {
        PointSet { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Point2> {
        self.points.get(index).copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Point2> + '_ {
        self.points.iter().copied()
    }

    pub fn as_slice(&self) -> &[Point2] {
        &self.points
    }

    /// Axis-aligned bounding box `(min, max)`, or `None` for an empty set.
    pub fn bounds(&self) -> Option<(Point2, Point2)> {
        let first = *self.points.first()?;
        Some(self.points.iter().fold((first, first), |(lo, hi), p| {
            (
                Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }
}

impl Index<usize> for PointSet {
    type Output = Point2;

    #[inline]
    fn index(&self, index: usize) -> &Point2 {
        &self.points[index]
    }
}

impl FromIterator<Point2> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        PointSet::new(iter.into_iter().collect())
    }
}

impl DebugInvariants for PointSet {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self, "PointSet");
    }

    fn validate_invariants(&self) -> Result<(), MeshError> {
        for (idx, p) in self.points.iter().enumerate() {
            if !p.is_finite() {
                return Err(MeshError::NonFinitePoint { index: idx });
            }
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_sign_follows_turn_direction() {
        let a = Point2::new(1.0, 0.0);
        let b = Point2::new(0.0, 1.0);
        assert_eq!(a.cross(b), 1.0);
        assert_eq!(b.cross(a), -1.0);
        assert_eq!(a.cross(a), 0.0);
    }

    #[test]
    fn bounds_cover_all_points() {
        let set: PointSet = [[0.5, -1.0], [2.0, 3.0], [-1.0, 0.0]]
            .into_iter()
            .map(Point2::from)
            .collect();
        let (lo, hi) = set.bounds().unwrap();
        assert_eq!(lo, Point2::new(-1.0, -1.0));
        assert_eq!(hi, Point2::new(2.0, 3.0));
        assert!(PointSet::default().bounds().is_none());
    }

    #[test]
    fn non_finite_point_fails_validation() {
        let set = PointSet::new(vec![Point2::new(0.0, 0.0), Point2::new(f64::NAN, 1.0)]);
        assert!(set.validate_invariants().is_err());
    }
}
