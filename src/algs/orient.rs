//! Counterclockwise canonicalization of triangle winding.
//!
//! Each triangle is handled independently: if `cross_z(p0, p1, p2) < 0` the
//! triangle is clockwise and `v1`/`v2` are exchanged. Collinear triangles
//! (`cross_z == 0`) pass through unchanged and are counted in the
//! [`OrientationReport`]; whether they are acceptable is decided by
//! [`check_degenerate`] under a [`DegenerateHandling`] policy.
//!
//! With the `rayon` feature the per-triangle pass runs in parallel. The
//! result is identical to the serial pass since no triangle depends on another.

use serde::{Deserialize, Serialize};

use crate::algs::triangulate::check_vertex_indices;
use crate::geometry::cross_z;
use crate::mesh_error::MeshError;
use crate::topology::cell::Triangle;
use crate::topology::point::PointSet;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Outcome of an orientation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrientationReport {
    /// Number of triangles whose `v1`/`v2` were exchanged.
    pub flipped: usize,
    /// Indices of zero-area triangles, ascending.
    pub degenerate: Vec<usize>,
}

/// Behavior for zero-area triangles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateHandling {
    /// Accept them silently.
    Ignore,
    /// Log a warning per degenerate triangle.
    Warn,
    /// Return an error on the first degenerate triangle.
    #[default]
    Error,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Winding {
    Ccw,
    Flipped,
    Degenerate,
}

#[inline]
fn orient_one(points: &PointSet, tri: &mut Triangle) -> Winding {
    let [a, b, c] = tri.0;
    let cz = cross_z(points[a], points[b], points[c]);
    if cz < 0.0 {
        tri.flip();
        Winding::Flipped
    } else if cz == 0.0 {
        Winding::Degenerate
    } else {
        Winding::Ccw
    }
}

/// Rewrite every triangle in `triangles` to counterclockwise order in place.
///
/// The number of triangles and their relative order are preserved, and each
/// triangle keeps its vertex set. Running the pass twice is the same as
/// running it once.
pub fn orient_ccw(
    points: &PointSet,
    triangles: &mut [Triangle],
) -> Result<OrientationReport, MeshError> {
    check_vertex_indices(triangles, points.len())?;

    #[cfg(feature = "rayon")]
    let windings: Vec<Winding> = triangles
        .par_iter_mut()
        .map(|t| orient_one(points, t))
        .collect();
    #[cfg(not(feature = "rayon"))]
    let windings: Vec<Winding> = triangles
        .iter_mut()
        .map(|t| orient_one(points, t))
        .collect();

    let mut report = OrientationReport::default();
    for (idx, w) in windings.into_iter().enumerate() {
        match w {
            Winding::Flipped => report.flipped += 1,
            Winding::Degenerate => report.degenerate.push(idx),
            Winding::Ccw => {}
        }
    }
    log::debug!(
        "orient: {} triangles, {} flipped, {} degenerate",
        triangles.len(),
        report.flipped,
        report.degenerate.len()
    );
    Ok(report)
}

/// Apply `handling` to the degenerate triangles found by [`orient_ccw`].
pub fn check_degenerate(
    report: &OrientationReport,
    triangles: &[Triangle],
    handling: DegenerateHandling,
) -> Result<(), MeshError> {
    match handling {
        DegenerateHandling::Ignore => {}
        DegenerateHandling::Warn => {
            for &idx in &report.degenerate {
                let tri = reported_triangle(triangles, idx)?;
                log::warn!("zero-area triangle {idx} {:?} kept in mesh", tri.0);
            }
        }
        DegenerateHandling::Error => {
            if let Some(&idx) = report.degenerate.first() {
                return Err(MeshError::DegenerateTriangle {
                    triangle: idx,
                    vertices: reported_triangle(triangles, idx)?.0,
                });
            }
        }
    }
    Ok(())
}

fn reported_triangle(triangles: &[Triangle], idx: usize) -> Result<Triangle, MeshError> {
    triangles.get(idx).copied().ok_or_else(|| {
        MeshError::InvariantViolation(format!(
            "orientation report names triangle {idx} but only {} triangles were given",
            triangles.len()
        ))
    })
}

/// `true` if no triangle is clockwise.
pub fn is_ccw(points: &PointSet, triangles: &[Triangle]) -> bool {
    triangles.iter().all(|t| {
        let [a, b, c] = t.0;
        cross_z(points[a], points[b], points[c]) >= 0.0
    })
}
