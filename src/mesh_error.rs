//! MeshError: unified error type for the rect-mesh pipeline.
//!
//! Every stage (grid, triangulation, orientation, edge extraction, boundary
//! ordering, export) reports failures through this enum so callers get a
//! single descriptive error naming the stage and the offending entity.

use thiserror::Error;

use crate::topology::cell::Edge;

/// Coordinate axis named in domain and spacing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Unified error type for mesh construction and export.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// Domain bounds are not finite and strictly increasing.
    #[error("grid: invalid {axis} bounds [{lower}, {upper}] (expected finite lower < upper)")]
    InvalidDomain { axis: Axis, lower: f64, upper: f64 },
    /// Grid spacing is not a finite positive number.
    #[error("grid: invalid {axis} spacing {spacing} (expected finite value > 0)")]
    InvalidSpacing { axis: Axis, spacing: f64 },
    /// Fewer than two samples along an axis; no triangle can be formed.
    #[error("grid: degenerate lattice {nx}x{ny} (need at least 2 samples per axis)")]
    DegenerateGrid { nx: usize, ny: usize },
    /// The sample counts describe more points than can be addressed.
    #[error("grid: lattice {nx}x{ny} is too large to allocate")]
    GridTooLarge { nx: usize, ny: usize },
    /// A point has a NaN or infinite coordinate.
    #[error("grid: point {index} has non-finite coordinates")]
    NonFinitePoint { index: usize },
    /// The triangulation collaborator produced no usable triangles.
    #[error("triangulation: {0}")]
    TriangulationFailed(String),
    /// A triangle references a point index outside the point set.
    #[error("triangulation: triangle {triangle} references vertex {vertex} but only {num_points} points exist")]
    VertexOutOfRange {
        triangle: usize,
        vertex: usize,
        num_points: usize,
    },
    /// A triangle has zero signed area.
    #[error("orientation: triangle {triangle} {vertices:?} has zero area")]
    DegenerateTriangle { triangle: usize, vertices: [usize; 3] },
    /// An edge is shared by more than two triangles.
    #[error("edges: edge {edge} is shared by {multiplicity} triangles (expected 1 or 2)")]
    NonManifoldMesh { edge: Edge, multiplicity: usize },
    /// No boundary edges were found.
    #[error("boundary: no boundary edges")]
    EmptyBoundary,
    /// A boundary node is not incident to exactly two boundary edges.
    #[error("boundary: node {node} has {degree} boundary edges (expected 2)")]
    DisconnectedBoundary { node: usize, degree: usize },
    /// The boundary walk closed before visiting every boundary node.
    #[error("boundary: loop closed after {visited} of {total} boundary nodes (multiple components)")]
    MultipleBoundaryComponents { visited: usize, total: usize },
    /// The boundary loop encloses no area, e.g. all triangles are collinear.
    #[error("boundary: loop of {nodes} nodes encloses zero area")]
    DegenerateBoundary { nodes: usize },
    /// A mesh record violates one of its structural invariants.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
    /// Failure while writing an exported mesh.
    #[error("export: {0}")]
    Io(String),
}

impl From<std::io::Error> for MeshError {
    fn from(err: std::io::Error) -> Self {
        MeshError::Io(err.to_string())
    }
}
