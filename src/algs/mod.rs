//! Mesh construction algorithms, in pipeline order.

pub mod triangulate;
pub mod orient;
pub mod edges;
pub mod boundary;

pub use boundary::{BoundaryLoop, order_boundary};
pub use edges::{EdgeMultiplicity, EdgeSet, extract_edges};
pub use orient::{DegenerateHandling, OrientationReport, check_degenerate, orient_ccw};
pub use triangulate::{DelaunayTriangulator, StructuredSplit, TriangulationKind, Triangulator};
