//! Mesh export.
//!
//! The core pipeline never performs I/O; writers here serialize a finished
//! [`TriMesh`] for external viewers and solvers.

pub mod vtk;

use std::io::Write;

use crate::mesh_error::MeshError;
use crate::pipeline::TriMesh;

/// Trait for mesh writers that serialize a [`TriMesh`].
pub trait MeshWriter {
    /// Write `mesh` to `writer`.
    fn write<W: Write>(&self, writer: W, mesh: &TriMesh) -> Result<(), MeshError>;
}
