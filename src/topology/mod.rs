//! Mesh entities: points, triangles and edges.

pub mod cell;
pub mod point;

pub use cell::{Edge, Triangle};
pub use point::{Point2, PointSet};
