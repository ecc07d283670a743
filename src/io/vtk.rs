//! Legacy VTK (`.vtk`) writer for triangle meshes.
//!
//! Writes an ASCII `UNSTRUCTURED_GRID`: points lifted to `z = 0`, one VTK
//! triangle (type 5) per mesh triangle, and a `boundary_order` point scalar
//! holding each node's position in the boundary loop (`-1` for interior
//! nodes), so viewers can colour the loop direction.

use std::io::Write;

use crate::io::MeshWriter;
use crate::mesh_error::MeshError;
use crate::pipeline::TriMesh;

const VTK_TRIANGLE: i32 = 5;
const MAX_LINE: usize = 70;

#[derive(Debug, Default, Clone)]
pub struct VtkWriter;

impl VtkWriter {
    /// Write `values` separated by spaces, wrapping lines near `MAX_LINE`.
    fn write_wrapped<W: Write>(writer: &mut W, values: &[String]) -> Result<(), MeshError> {
        let mut line_len = 0usize;
        for value in values {
            if line_len > 0 && line_len + value.len() + 1 > MAX_LINE {
                writeln!(writer)?;
                line_len = 0;
            }
            if line_len > 0 {
                write!(writer, " ")?;
                line_len += 1;
            }
            write!(writer, "{value}")?;
            line_len += value.len();
        }
        writeln!(writer)?;
        Ok(())
    }

    fn boundary_order(mesh: &TriMesh) -> Vec<i64> {
        let mut order = vec![-1i64; mesh.points.len()];
        for (pos, &node) in mesh.boundary.nodes.iter().enumerate() {
            if let Some(slot) = order.get_mut(node) {
                *slot = pos as i64;
            }
        }
        order
    }
}

impl MeshWriter for VtkWriter {
    fn write<W: Write>(&self, mut writer: W, mesh: &TriMesh) -> Result<(), MeshError> {
        let num_points = mesh.points.len();
        let num_cells = mesh.triangles.len();

        writeln!(writer, "# vtk DataFile Version 3.0")?;
        writeln!(writer, "rect-mesh")?;
        writeln!(writer, "ASCII")?;
        writeln!(writer, "DATASET UNSTRUCTURED_GRID")?;
        writeln!(writer, "POINTS {num_points} double")?;
        for p in mesh.points.iter() {
            writeln!(writer, "{} {} 0", p.x, p.y)?;
        }

        writeln!(writer, "CELLS {num_cells} {}", 4 * num_cells)?;
        for (idx, tri) in mesh.triangles.iter().enumerate() {
            let [a, b, c] = tri.vertices();
            if let Some(&vertex) = [a, b, c].iter().find(|&&v| v >= num_points) {
                return Err(MeshError::VertexOutOfRange {
                    triangle: idx,
                    vertex,
                    num_points,
                });
            }
            writeln!(writer, "3 {a} {b} {c}")?;
        }

        writeln!(writer, "CELL_TYPES {num_cells}")?;
        for _ in 0..num_cells {
            writeln!(writer, "{VTK_TRIANGLE}")?;
        }

        writeln!(writer, "POINT_DATA {num_points}")?;
        writeln!(writer, "SCALARS boundary_order int 1")?;
        writeln!(writer, "LOOKUP_TABLE default")?;
        let values: Vec<String> = Self::boundary_order(mesh)
            .into_iter()
            .map(|v| v.to_string())
            .collect();
        Self::write_wrapped(&mut writer, &values)?;
        writer.flush()?;
        Ok(())
    }
}
