#![cfg_attr(docsrs, feature(doc_cfg))]
//! # rect-mesh
//!
//! rect-mesh builds structured triangular meshes over rectangular domains for
//! finite-volume and finite-element CFD solvers. Given a bounding box and a
//! grid spacing it
//!
//! - lays out a regular lattice of points ([`mesh_generation`]),
//! - triangulates it ([`algs::triangulate`], Delaunay via `delaunator` or a
//!   structured two-triangles-per-cell split),
//! - rewrites every triangle counterclockwise ([`algs::orient`]),
//! - deduplicates edges and finds the boundary by edge multiplicity
//!   ([`algs::edges`]),
//! - orders the boundary into a single counterclockwise loop starting at the
//!   bottom-left corner ([`algs::boundary`]).
//!
//! [`pipeline::MeshPipeline`] runs all stages and returns a
//! [`pipeline::TriMesh`].
//!
//! ## Determinism
//!
//! No stage uses randomness, and every collection in the output is either in
//! generation order (points, triangles) or sorted (edges), so identical
//! inputs produce identical meshes regardless of hash-map iteration order.
//!
//! ## Features
//! - `rayon`: parallel orientation and edge counting.
//! - `check-invariants` / `strict-invariants`: panic on invariant violations
//!   in release builds (debug builds always check).
//!
//! ## Usage
//!
//! ```rust
//! use rect_mesh::prelude::*;
//!
//! let mesh = MeshPipeline::new(RectDomain::new(0.0, 2.0, 0.0, 1.0, 0.5, 0.5)).run()?;
//! assert_eq!(mesh.boundary.len(), mesh.boundary_edges.len());
//! assert!(mesh.boundary.signed_area(&mesh.points) > 0.0);
//! # Ok::<(), MeshError>(())
//! ```

pub mod algs;
pub mod debug_invariants;
pub mod geometry;
pub mod io;
pub mod mesh_error;
pub mod mesh_generation;
pub mod pipeline;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::boundary::{BoundaryLoop, order_boundary};
    pub use crate::algs::edges::{EdgeMultiplicity, EdgeSet, extract_edges};
    pub use crate::algs::orient::{DegenerateHandling, orient_ccw};
    pub use crate::algs::triangulate::{
        DelaunayTriangulator, StructuredSplit, TriangulationKind, Triangulator,
    };
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::io::MeshWriter;
    pub use crate::io::vtk::VtkWriter;
    pub use crate::mesh_error::MeshError;
    pub use crate::mesh_generation::{LatticeGrid, RectDomain, build_grid};
    pub use crate::pipeline::{MeshOptions, MeshPipeline, PipelineConfig, TriMesh, assemble_mesh};
    pub use crate::topology::cell::{Edge, Triangle};
    pub use crate::topology::point::{Point2, PointSet};
}
