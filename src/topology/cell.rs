//! Triangles and edges (bars) over a [`PointSet`](super::point::PointSet).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered triple of point indices.
///
/// Vertex order carries orientation: after [`orient_ccw`](crate::algs::orient::orient_ccw)
/// the vertices `[v0, v1, v2]` run counterclockwise.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Triangle(pub [usize; 3]);

impl Triangle {
    #[inline]
    pub const fn new(v0: usize, v1: usize, v2: usize) -> Self {
        Triangle([v0, v1, v2])
    }

    #[inline]
    pub fn vertices(&self) -> [usize; 3] {
        self.0
    }

    /// Reverse orientation by exchanging `v1` and `v2`.
    #[inline]
    pub fn flip(&mut self) {
        self.0.swap(1, 2);
    }

    /// The three canonical edges `(v0,v1)`, `(v0,v2)`, `(v1,v2)`.
    #[inline]
    pub fn edges(&self) -> [Edge; 3] {
        let [a, b, c] = self.0;
        [Edge::new(a, b), Edge::new(a, c), Edge::new(b, c)]
    }

    /// Vertex set in ascending order; equal for both orientations.
    pub fn sorted_vertices(&self) -> [usize; 3] {
        let mut v = self.0;
        v.sort_unstable();
        v
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.0.contains(&vertex)
    }
}

impl From<[usize; 3]> for Triangle {
    fn from(v: [usize; 3]) -> Self {
        Triangle(v)
    }
}

/// Undirected edge stored with the smaller index first.
///
/// Fields are private so every `Edge` in the crate is canonical; equality and
/// hashing therefore identify `(a, b)` with `(b, a)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Edge {
    lo: usize,
    hi: usize,
}

impl Edge {
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Edge { lo: a, hi: b }
        } else {
            Edge { lo: b, hi: a }
        }
    }

    #[inline]
    pub const fn lo(&self) -> usize {
        self.lo
    }

    #[inline]
    pub const fn hi(&self) -> usize {
        self.hi
    }

    #[inline]
    pub const fn as_pair(&self) -> (usize, usize) {
        (self.lo, self.hi)
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.lo == vertex || self.hi == vertex
    }

    /// The endpoint opposite `vertex`, if `vertex` is an endpoint.
    pub fn other(&self, vertex: usize) -> Option<usize> {
        if vertex == self.lo {
            Some(self.hi)
        } else if vertex == self.hi {
            Some(self.lo)
        } else {
            None
        }
    }
}

impl From<(usize, usize)> for Edge {
    fn from((a, b): (usize, usize)) -> Self {
        Edge::new(a, b)
    }
}

impl From<Edge> for (usize, usize) {
    fn from(e: Edge) -> Self {
        e.as_pair()
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lo, self.hi)
    }
}
