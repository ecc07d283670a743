//! Triangulation collaborators.
//!
//! The pipeline only needs `triangulate(points) -> triangles`; the
//! [`Triangulator`] trait is that seam. [`DelaunayTriangulator`] delegates to
//! the `delaunator` crate. [`StructuredSplit`] cuts every lattice cell along
//! its lower-left/upper-right diagonal and needs no geometry at all.

use delaunator::Point as DelaunatorPoint;
use serde::{Deserialize, Serialize};

use crate::mesh_error::MeshError;
use crate::mesh_generation::check_lattice_size;
use crate::topology::cell::Triangle;
use crate::topology::point::PointSet;

/// Produces triangles (index triples into `points`) covering the convex hull.
pub trait Triangulator {
    fn triangulate(&self, points: &PointSet) -> Result<Vec<Triangle>, MeshError>;
}

impl<T: Triangulator + ?Sized> Triangulator for &T {
    fn triangulate(&self, points: &PointSet) -> Result<Vec<Triangle>, MeshError> {
        (**self).triangulate(points)
    }
}

/// Which built-in triangulator the pipeline uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriangulationKind {
    /// Delaunay triangulation via `delaunator`.
    #[default]
    Delaunay,
    /// Two triangles per lattice cell.
    Structured,
}

/// Delaunay triangulation backed by `delaunator`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DelaunayTriangulator;

impl Triangulator for DelaunayTriangulator {
    fn triangulate(&self, points: &PointSet) -> Result<Vec<Triangle>, MeshError> {
        let input: Vec<DelaunatorPoint> = points
            .iter()
            .map(|p| DelaunatorPoint { x: p.x, y: p.y })
            .collect();
        let result = delaunator::triangulate(&input);
        if result.triangles.is_empty() {
            return Err(MeshError::TriangulationFailed(format!(
                "no triangles for {} points (fewer than 3 or all collinear)",
                points.len()
            )));
        }
        let triangles: Vec<Triangle> = result
            .triangles
            .chunks_exact(3)
            .map(|t| Triangle::new(t[0], t[1], t[2]))
            .collect();
        check_vertex_indices(&triangles, points.len())?;
        Ok(triangles)
    }
}

/// Split each cell of an `nx × ny` row-major lattice into two triangles.
///
/// For the cell with lower-left corner `v0`, the corners are
/// `v1 = v0 + 1`, `v3 = v0 + nx`, `v2 = v3 + 1`, and the triangles are
/// `[v0, v1, v2]` and `[v0, v2, v3]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StructuredSplit {
    pub nx: usize,
    pub ny: usize,
}

impl StructuredSplit {
    pub fn new(nx: usize, ny: usize) -> Self {
        StructuredSplit { nx, ny }
    }
}

impl Triangulator for StructuredSplit {
    fn triangulate(&self, points: &PointSet) -> Result<Vec<Triangle>, MeshError> {
        let (nx, ny) = (self.nx, self.ny);
        if nx < 2 || ny < 2 {
            return Err(MeshError::DegenerateGrid { nx, ny });
        }
        let expected = check_lattice_size(nx, ny)?;
        if expected != points.len() {
            return Err(MeshError::TriangulationFailed(format!(
                "structured split expects {nx}x{ny} = {expected} points, got {}",
                points.len()
            )));
        }

        let mut triangles = Vec::with_capacity(2 * (nx - 1) * (ny - 1));
        for j in 0..ny - 1 {
            for i in 0..nx - 1 {
                let v0 = j * nx + i;
                let v1 = v0 + 1;
                let v3 = v0 + nx;
                let v2 = v3 + 1;
                triangles.push(Triangle::new(v0, v1, v2));
                triangles.push(Triangle::new(v0, v2, v3));
            }
        }
        Ok(triangles)
    }
}

/// Ensure every vertex index refers to an existing point.
pub fn check_vertex_indices(triangles: &[Triangle], num_points: usize) -> Result<(), MeshError> {
    for (idx, tri) in triangles.iter().enumerate() {
        if let Some(&vertex) = tri.0.iter().find(|&&v| v >= num_points) {
            return Err(MeshError::VertexOutOfRange {
                triangle: idx,
                vertex,
                num_points,
            });
        }
    }
    Ok(())
}
