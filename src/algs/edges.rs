//! Edge (bar) extraction and boundary detection by multiplicity counting.
//!
//! Every triangle contributes its three canonical edges. In a manifold
//! triangulation of a planar domain an edge is used by exactly one triangle
//! (boundary) or two (interior); any higher count is reported as
//! [`MeshError::NonManifoldMesh`].

use hashbrown::HashMap;
use itertools::Itertools;

use crate::mesh_error::MeshError;
use crate::topology::cell::{Edge, Triangle};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Number of triangles incident to each distinct edge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeMultiplicity {
    counts: HashMap<Edge, usize>,
}

impl EdgeMultiplicity {
    /// Count edge occurrences over `triangles`.
    pub fn from_triangles(triangles: &[Triangle]) -> Self {
        #[cfg(feature = "rayon")]
        let counts = triangles
            .par_iter()
            .fold(HashMap::new, |mut acc: HashMap<Edge, usize>, t| {
                for e in t.edges() {
                    *acc.entry(e).or_insert(0) += 1;
                }
                acc
            })
            .reduce(HashMap::new, |mut a, b| {
                for (e, n) in b {
                    *a.entry(e).or_insert(0) += n;
                }
                a
            });
        #[cfg(not(feature = "rayon"))]
        let counts = {
            let mut counts: HashMap<Edge, usize> = HashMap::with_capacity(triangles.len() * 2);
            for t in triangles {
                for e in t.edges() {
                    *counts.entry(e).or_insert(0) += 1;
                }
            }
            counts
        };
        EdgeMultiplicity { counts }
    }

    /// Multiplicity of `edge`, or 0 if no triangle uses it.
    pub fn get(&self, edge: Edge) -> usize {
        self.counts.get(&edge).copied().unwrap_or(0)
    }

    /// Number of distinct edges.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(edge, multiplicity)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Edge, usize)> + '_ {
        self.counts.iter().map(|(&e, &n)| (e, n))
    }

    /// Distinct edges, ascending.
    pub fn edges(&self) -> Vec<Edge> {
        self.counts.keys().copied().sorted_unstable().collect()
    }

    /// Edges with multiplicity exactly 1, ascending.
    pub fn boundary_edges(&self) -> Vec<Edge> {
        self.counts
            .iter()
            .filter(|&(_, &n)| n == 1)
            .map(|(&e, _)| e)
            .sorted_unstable()
            .collect()
    }

    /// Edges with multiplicity exactly 2, ascending.
    pub fn interior_edges(&self) -> Vec<Edge> {
        self.counts
            .iter()
            .filter(|&(_, &n)| n == 2)
            .map(|(&e, _)| e)
            .sorted_unstable()
            .collect()
    }

    /// Fail on the smallest edge shared by more than two triangles.
    pub fn check_manifold(&self) -> Result<(), MeshError> {
        let worst = self
            .counts
            .iter()
            .filter(|&(_, &n)| n > 2)
            .min_by_key(|&(&e, _)| e);
        match worst {
            Some((&edge, &multiplicity)) => Err(MeshError::NonManifoldMesh { edge, multiplicity }),
            None => Ok(()),
        }
    }
}

/// Deduplicated edges of a triangulation and the subset on its boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeSet {
    /// All distinct edges, ascending.
    pub edges: Vec<Edge>,
    /// Edges used by exactly one triangle, ascending.
    pub boundary: Vec<Edge>,
    pub multiplicity: EdgeMultiplicity,
}

/// Extract distinct and boundary edges from `triangles`.
pub fn extract_edges(triangles: &[Triangle]) -> Result<EdgeSet, MeshError> {
    let multiplicity = EdgeMultiplicity::from_triangles(triangles);
    multiplicity.check_manifold()?;
    let edges = multiplicity.edges();
    let boundary = multiplicity.boundary_edges();
    log::debug!(
        "edges: {} distinct, {} boundary",
        edges.len(),
        boundary.len()
    );
    Ok(EdgeSet {
        edges,
        boundary,
        multiplicity,
    })
}
