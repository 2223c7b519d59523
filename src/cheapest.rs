//! Cheapest outgoing edge selection for one Borůvka phase.
//!
//! A single pass over the edge list finds, for every component, its
//! minimum-weight edge to another component. Each vertex is then answered
//! with its component's candidate.
//!
//! # Rules
//!
//! - Edges whose endpoints already share a component are skipped.
//! - The two endpoints' candidates are updated independently: each side
//!   compares the edge only against its own current candidate.
//! - A candidate is replaced only by a strictly lighter edge, so among
//!   equal weights the first edge in scan (insertion) order wins. This makes
//!   the choice a minimum under the total order (weight, edge index), which
//!   keeps simultaneous merges cycle-free.
//! - "No candidate" is `None`, never a sentinel weight.

use crate::components::ComponentTracker;
use crate::graph::{EdgeIndex, Graph, Weight};

/// Candidate edges chosen during one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheapestEdges {
    // Representative of each vertex position at scan time.
    roots: Vec<usize>,
    // Indexed by representative; non-representative slots stay `None`.
    best: Vec<Option<EdgeIndex>>,
}

impl CheapestEdges {
    /// No candidates for any of `n` singleton components.
    pub fn absent(n: usize) -> Self {
        Self {
            roots: (0..n).collect(),
            best: vec![None; n],
        }
    }

    /// Number of vertices covered.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// The cheapest edge leaving the component of the vertex at `position`,
    /// or `None` if that component has no outgoing edge.
    ///
    /// # Panics
    /// Panics if `position >= len()`.
    pub fn for_vertex(&self, position: usize) -> Option<EdgeIndex> {
        self.best[self.roots[position]]
    }

    /// One `(representative, edge)` pair per component that has an outgoing
    /// edge, in representative order. Two components may nominate the
    /// same edge.
    pub fn nominations(&self) -> impl Iterator<Item = (usize, EdgeIndex)> + '_ {
        self.roots
            .iter()
            .enumerate()
            .filter(|&(position, &root)| position == root)
            .filter_map(|(position, _)| self.best[position].map(|edge| (position, edge)))
    }

    /// Returns `true` if no component has an outgoing edge.
    pub fn is_exhausted(&self) -> bool {
        self.best.iter().all(Option::is_none)
    }
}

/// Scans every edge of `graph` once and picks each component's cheapest
/// outgoing edge.
///
/// `components` must track exactly the graph's vertex positions.
///
/// # Complexity
/// O(V + E·α(V))
pub fn select_cheapest(graph: &Graph, components: &mut ComponentTracker) -> CheapestEdges {
    let n = graph.vertex_count();
    assert_eq!(
        components.len(),
        n,
        "component tracker does not match the graph's vertex count"
    );

    let roots: Vec<usize> = (0..n).map(|position| components.find(position)).collect();
    let mut best = vec![None; n];

    for (index, edge, (a, b)) in graph.indexed_edges() {
        let (root_a, root_b) = (roots[a], roots[b]);
        if root_a == root_b {
            continue;
        }
        offer(&mut best, graph, root_a, index, edge.weight());
        offer(&mut best, graph, root_b, index, edge.weight());
    }

    CheapestEdges { roots, best }
}

fn offer(
    best: &mut [Option<EdgeIndex>],
    graph: &Graph,
    root: usize,
    candidate: EdgeIndex,
    weight: Weight,
) {
    let improves = match best[root] {
        None => true,
        Some(current) => graph.edge(current).weight() > weight,
    };
    if improves {
        best[root] = Some(candidate);
    }
}
