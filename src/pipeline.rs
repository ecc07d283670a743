//! Mesh pipeline: grid → triangulation → orientation → edges → boundary.
//!
//! ```rust
//! use rect_mesh::pipeline::MeshPipeline;
//! use rect_mesh::mesh_generation::RectDomain;
//!
//! let mesh = MeshPipeline::new(RectDomain::new(0.0, 1.0, 0.0, 1.0, 0.25, 0.25)).run()?;
//! assert_eq!(mesh.points.len(), 16);
//! assert_eq!(mesh.triangles.len(), 18);
//! assert_eq!(mesh.boundary.nodes[0], 0);
//! # Ok::<(), rect_mesh::mesh_error::MeshError>(())
//! ```

use serde::{Deserialize, Serialize};
use static_assertions::assert_impl_all;

use crate::algs::boundary::{BoundaryLoop, order_boundary};
use crate::algs::edges::{EdgeMultiplicity, extract_edges};
use crate::algs::orient::{DegenerateHandling, check_degenerate, orient_ccw};
use crate::algs::triangulate::{
    DelaunayTriangulator, StructuredSplit, TriangulationKind, Triangulator,
};
use crate::debug_invariants::DebugInvariants;
use crate::geometry::triangle_signed_area;
use crate::mesh_error::MeshError;
use crate::mesh_generation::{LatticeGrid, RectDomain, build_grid};
use crate::topology::cell::{Edge, Triangle};
use crate::topology::point::PointSet;

/// Optional configuration for the pipeline stages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshOptions {
    pub triangulation: TriangulationKind,
    pub degenerate: DegenerateHandling,
}

/// Domain plus options, e.g. as read from a JSON file.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub domain: RectDomain,
    #[serde(default)]
    pub options: MeshOptions,
}

/// Complete mesh record produced by [`MeshPipeline::run`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriMesh {
    pub points: PointSet,
    /// Triangles, all counterclockwise.
    pub triangles: Vec<Triangle>,
    /// Distinct edges, ascending.
    pub edges: Vec<Edge>,
    /// Boundary edges, ascending (unordered with respect to the loop).
    pub boundary_edges: Vec<Edge>,
    /// Boundary loop, counterclockwise from the lowest-leftmost node.
    pub boundary: BoundaryLoop,
}

assert_impl_all!(TriMesh: Send, Sync);

impl TriMesh {
    /// Signed area of triangle `index`.
    pub fn signed_area(&self, index: usize) -> Option<f64> {
        let [a, b, c] = self.triangles.get(index)?.0;
        Some(triangle_signed_area(
            self.points.get(a)?,
            self.points.get(b)?,
            self.points.get(c)?,
        ))
    }

    /// Sum of triangle areas.
    pub fn total_area(&self) -> f64 {
        (0..self.triangles.len())
            .filter_map(|i| self.signed_area(i))
            .sum()
    }

    /// Edges shared by two triangles, ascending.
    pub fn interior_edges(&self) -> Vec<Edge> {
        self.edges
            .iter()
            .filter(|&e| self.boundary_edges.binary_search(e).is_err())
            .copied()
            .collect()
    }

    pub fn is_boundary_node(&self, node: usize) -> bool {
        self.boundary.position(node).is_some()
    }

    /// Recount edge multiplicities from the triangles.
    pub fn edge_multiplicity(&self) -> EdgeMultiplicity {
        EdgeMultiplicity::from_triangles(&self.triangles)
    }
}

impl DebugInvariants for TriMesh {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self, "TriMesh");
    }

    fn validate_invariants(&self) -> Result<(), MeshError> {
        self.points.validate_invariants()?;
        for idx in 0..self.triangles.len() {
            match self.signed_area(idx) {
                None => {
                    return Err(MeshError::InvariantViolation(format!(
                        "triangle {idx} references a missing point"
                    )));
                }
                Some(area) if area < 0.0 => {
                    return Err(MeshError::InvariantViolation(format!(
                        "triangle {idx} is clockwise"
                    )));
                }
                Some(_) => {}
            }
        }

        let multiplicity = self.edge_multiplicity();
        multiplicity.check_manifold()?;
        if multiplicity.edges() != self.edges {
            return Err(MeshError::InvariantViolation(
                "edge list does not match triangles".into(),
            ));
        }
        if multiplicity.boundary_edges() != self.boundary_edges {
            return Err(MeshError::InvariantViolation(
                "boundary edges do not match multiplicity-1 edges".into(),
            ));
        }

        self.boundary.validate_invariants()?;
        let mut loop_edges = self.boundary.edges.clone();
        loop_edges.sort_unstable();
        if loop_edges != self.boundary_edges {
            return Err(MeshError::InvariantViolation(
                "boundary loop does not cover the boundary edges".into(),
            ));
        }
        if self.boundary.signed_area(&self.points) <= 0.0 {
            return Err(MeshError::InvariantViolation(
                "boundary loop is not counterclockwise".into(),
            ));
        }
        Ok(())
    }
}

/// Construct-then-invoke entry point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshPipeline {
    domain: RectDomain,
    options: MeshOptions,
}

impl MeshPipeline {
    pub fn new(domain: RectDomain) -> Self {
        MeshPipeline {
            domain,
            options: MeshOptions::default(),
        }
    }

    pub fn from_config(config: PipelineConfig) -> Self {
        MeshPipeline {
            domain: config.domain,
            options: config.options,
        }
    }

    pub fn with_options(mut self, options: MeshOptions) -> Self {
        self.options = options;
        self
    }

    pub fn domain(&self) -> &RectDomain {
        &self.domain
    }

    pub fn options(&self) -> &MeshOptions {
        &self.options
    }

    /// Run every stage with the configured triangulator.
    pub fn run(&self) -> Result<TriMesh, MeshError> {
        let grid = build_grid(&self.domain)?;
        match self.options.triangulation {
            TriangulationKind::Delaunay => self.finish(grid, &DelaunayTriangulator),
            TriangulationKind::Structured => {
                let split = StructuredSplit::new(grid.nx, grid.ny);
                self.finish(grid, &split)
            }
        }
    }

    /// Run every stage with a caller-supplied triangulator.
    pub fn run_with<T: Triangulator + ?Sized>(&self, triangulator: &T) -> Result<TriMesh, MeshError> {
        let grid = build_grid(&self.domain)?;
        self.finish(grid, triangulator)
    }

    fn finish<T: Triangulator + ?Sized>(
        &self,
        grid: LatticeGrid,
        triangulator: &T,
    ) -> Result<TriMesh, MeshError> {
        let triangles = triangulator.triangulate(&grid.points)?;
        log::debug!(
            "triangulation: {} triangles over {} points",
            triangles.len(),
            grid.points.len()
        );
        assemble_mesh(grid.points, triangles, self.options.degenerate)
    }
}

/// Run the post-triangulation stages on an existing point set and triangle list.
pub fn assemble_mesh(
    points: PointSet,
    mut triangles: Vec<Triangle>,
    degenerate: DegenerateHandling,
) -> Result<TriMesh, MeshError> {
    let report = orient_ccw(&points, &mut triangles)?;
    check_degenerate(&report, &triangles, degenerate)?;
    let edge_set = extract_edges(&triangles)?;
    let boundary = order_boundary(&points, &edge_set.boundary)?;

    let mesh = TriMesh {
        points,
        triangles,
        edges: edge_set.edges,
        boundary_edges: edge_set.boundary,
        boundary,
    };
    log::info!(
        "mesh: {} points, {} triangles, {} edges, {} boundary nodes",
        mesh.points.len(),
        mesh.triangles.len(),
        mesh.edges.len(),
        mesh.boundary.len()
    );
    mesh.debug_assert_invariants();
    Ok(mesh)
}
