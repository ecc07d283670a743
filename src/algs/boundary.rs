//! Ordering of boundary edges into a single counterclockwise loop.
//!
//! The boundary edges come out of [`extract_edges`](super::edges::extract_edges)
//! as an unordered set. [`order_boundary`] rebuilds the polygon:
//!
//! 1. every boundary node must touch exactly two boundary edges;
//! 2. the walk starts at the lowest node (minimum `y`, then minimum `x`);
//! 3. each step moves to the neighbour it did not just come from, until the walk is
//!    back at the start;
//! 4. if the shoelace area of the visited sequence is negative, the sequence
//!    is reversed (the start node stays first); a zero area is an error.
//!
//! The walk is inherently sequential. Domains with holes produce more than
//! one boundary component and are rejected.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::debug_invariants::DebugInvariants;
use crate::geometry::polygon_signed_area;
use crate::mesh_error::MeshError;
use crate::topology::cell::Edge;
use crate::topology::point::PointSet;

/// Closed boundary polygon.
///
/// `edges[k]` joins `nodes[k]` and `nodes[(k + 1) % len]`; the last edge
/// closes the loop back to `nodes[0]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryLoop {
    pub nodes: Vec<usize>,
    pub edges: Vec<Edge>,
}

impl BoundaryLoop {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Position of `node` in the loop.
    pub fn position(&self, node: usize) -> Option<usize> {
        self.nodes.iter().position(|&n| n == node)
    }

    /// Shoelace signed area enclosed by the loop.
    pub fn signed_area(&self, points: &PointSet) -> f64 {
        polygon_signed_area(points, &self.nodes)
    }

    /// Consecutive node pairs, including the closing pair.
    pub fn segments(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.nodes.len();
        (0..n).map(move |k| (self.nodes[k], self.nodes[(k + 1) % n]))
    }
}

impl DebugInvariants for BoundaryLoop {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self, "BoundaryLoop");
    }

    /// Structural checks only; orientation needs the point set.
    fn validate_invariants(&self) -> Result<(), MeshError> {
        if self.nodes.is_empty() {
            return Err(MeshError::EmptyBoundary);
        }
        if self.nodes.len() != self.edges.len() {
            return Err(MeshError::InvariantViolation(format!(
                "boundary loop has {} nodes but {} edges",
                self.nodes.len(),
                self.edges.len()
            )));
        }
        let mut seen = hashbrown::HashSet::with_capacity(self.nodes.len());
        for &n in &self.nodes {
            if !seen.insert(n) {
                return Err(MeshError::InvariantViolation(format!(
                    "boundary node {n} visited twice"
                )));
            }
        }
        for (k, ((a, b), e)) in self.segments().zip(&self.edges).enumerate() {
            if *e != Edge::new(a, b) {
                return Err(MeshError::InvariantViolation(format!(
                    "boundary edge {k} is {e}, expected ({a}, {b})"
                )));
            }
        }
        Ok(())
    }
}

type Adjacency = HashMap<usize, Vec<usize>>;

fn build_adjacency(edges: &[Edge]) -> Adjacency {
    let mut adj: Adjacency = HashMap::with_capacity(edges.len());
    for e in edges {
        let (a, b) = e.as_pair();
        adj.entry(a).or_default().push(b);
        adj.entry(b).or_default().push(a);
    }
    adj
}

/// Lowest node: minimum `y`, ties broken by minimum `x`, then by index.
fn lowest_node(points: &PointSet, nodes: impl Iterator<Item = usize>) -> Option<usize> {
    nodes.min_by(|&a, &b| {
        let (pa, pb) = (points[a], points[b]);
        pa.y.total_cmp(&pb.y)
            .then_with(|| pa.x.total_cmp(&pb.x))
            .then(a.cmp(&b))
    })
}

/// Order `boundary_edges` into a counterclockwise [`BoundaryLoop`].
pub fn order_boundary(
    points: &PointSet,
    boundary_edges: &[Edge],
) -> Result<BoundaryLoop, MeshError> {
    if boundary_edges.is_empty() {
        return Err(MeshError::EmptyBoundary);
    }
    let adj = build_adjacency(boundary_edges);

    // Report the smallest offending node so the error is deterministic.
    if let Some((&node, nbrs)) = adj
        .iter()
        .filter(|(_, nbrs)| nbrs.len() != 2)
        .min_by_key(|&(&n, _)| n)
    {
        return Err(MeshError::DisconnectedBoundary {
            node,
            degree: nbrs.len(),
        });
    }
    if let Some(&node) = adj.keys().find(|&&n| n >= points.len()) {
        return Err(MeshError::InvariantViolation(format!(
            "boundary node {node} outside point set of {} points",
            points.len()
        )));
    }

    let start = lowest_node(points, adj.keys().copied()).ok_or(MeshError::EmptyBoundary)?;
    let total = adj.len();
    let mut nodes = Vec::with_capacity(total);
    nodes.push(start);
    let mut prev = start;
    let mut current = adj[&start][0];
    while current != start {
        if nodes.len() >= total {
            return Err(MeshError::MultipleBoundaryComponents {
                visited: nodes.len(),
                total,
            });
        }
        nodes.push(current);
        let nbrs = &adj[&current];
        let next = if nbrs[0] == prev { nbrs[1] } else { nbrs[0] };
        prev = current;
        current = next;
    }
    if nodes.len() != total {
        return Err(MeshError::MultipleBoundaryComponents {
            visited: nodes.len(),
            total,
        });
    }

    let area = polygon_signed_area(points, &nodes);
    if area == 0.0 || area.is_nan() {
        return Err(MeshError::DegenerateBoundary { nodes: nodes.len() });
    }
    if area < 0.0 {
        nodes[1..].reverse();
    }

    let n = nodes.len();
    let edges = (0..n)
        .map(|k| Edge::new(nodes[k], nodes[(k + 1) % n]))
        .collect();
    log::debug!(
        "boundary: {n} nodes starting at {start}, signed area {}",
        area.abs()
    );
    Ok(BoundaryLoop { nodes, edges })
}
