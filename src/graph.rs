//! Undirected, weighted graph stored as an arena of vertices and edges.
//!
//! Vertices are identified by a caller-chosen [`VertexId`]; labels are
//! cosmetic and may collide. Each vertex keeps the indices of its incident
//! edges, so adjacency queries cost O(min(deg(u), deg(v))) instead of O(E).
//!
//! # Invariants
//!
//! - Every edge's endpoints are vertices of the graph.
//! - No edge connects a vertex to itself.
//! - At most one edge per unordered vertex pair. A second edge on the same
//!   pair is rejected with [`GraphError::DuplicateEdge`]; the first one wins.
//! - Vertices and edges are never removed, so [`EdgeIndex`] values and
//!   internal vertex positions stay valid for the life of the graph.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// Edge weight. Weights are non-negative integers.
pub type Weight = u32;

/// Opaque vertex identity. Two vertices are the same vertex iff their ids
/// are equal, regardless of label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(pub usize);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for VertexId {
    fn from(id: usize) -> Self {
        VertexId(id)
    }
}

/// Position of an edge in its owning graph, in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeIndex(usize);

impl EdgeIndex {
    /// Returns the zero-based insertion position of the edge.
    pub fn index(self) -> usize {
        self.0
    }
}

/// An undirected weighted edge. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    u: VertexId,
    v: VertexId,
    weight: Weight,
}

impl Edge {
    pub fn u(&self) -> VertexId {
        self.u
    }

    pub fn v(&self) -> VertexId {
        self.v
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns both endpoints in insertion order.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.u, self.v)
    }

    /// Returns `true` if this edge joins `a` and `b`, in either order.
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.u == a && self.v == b) || (self.u == b && self.v == a)
    }

    /// Returns the endpoint opposite `x`, or `None` if `x` is not an endpoint.
    pub fn other(&self, x: VertexId) -> Option<VertexId> {
        if x == self.u {
            Some(self.v)
        } else if x == self.v {
            Some(self.u)
        } else {
            None
        }
    }
}

/// A vertex together with the edges incident to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    id: VertexId,
    label: String,
    incident: Vec<EdgeIndex>,
}

impl Vertex {
    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of edges incident to this vertex.
    pub fn degree(&self) -> usize {
        self.incident.len()
    }

    /// Indices of incident edges, in insertion order.
    pub fn incident_edges(&self) -> &[EdgeIndex] {
        &self.incident
    }
}

/// Undirected weighted graph that exclusively owns its vertices and edges.
///
/// # Examples
/// ```
/// use u_mst::{Graph, VertexId};
///
/// let mut g = Graph::new();
/// g.add_vertex(VertexId(0)).unwrap();
/// g.add_vertex(VertexId(1)).unwrap();
/// g.add_edge(VertexId(0), VertexId(1), 5).unwrap();
///
/// assert!(g.adjacent(VertexId(1), VertexId(0)));
/// assert_eq!(g.edge_weight(VertexId(0), VertexId(1)), Some(5));
/// // Parallel edges are rejected; the first edge stays.
/// assert!(g.add_edge(VertexId(1), VertexId(0), 2).is_err());
/// assert_eq!(g.edge_weight(VertexId(0), VertexId(1)), Some(5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    positions: HashMap<VertexId, usize>,
    edges: Vec<Edge>,
    // Vertex positions of each edge's endpoints, parallel to `edges`.
    edge_positions: Vec<(usize, usize)>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with vertices `0..count` and no edges.
    pub fn with_vertices(count: usize) -> Self {
        let mut graph = Self {
            vertices: Vec::with_capacity(count),
            positions: HashMap::with_capacity(count),
            edges: Vec::new(),
            edge_positions: Vec::new(),
        };
        for id in 0..count {
            graph.insert_vertex(VertexId(id), id.to_string());
        }
        graph
    }

    /// Adds a vertex labelled with its id.
    ///
    /// # Errors
    /// [`GraphError::DuplicateVertex`] if `id` is already present.
    pub fn add_vertex(&mut self, id: VertexId) -> Result<()> {
        self.add_labeled_vertex(id, id.to_string())
    }

    /// Adds a vertex with a display label. Labels need not be unique.
    ///
    /// # Errors
    /// [`GraphError::DuplicateVertex`] if `id` is already present.
    pub fn add_labeled_vertex(&mut self, id: VertexId, label: impl Into<String>) -> Result<()> {
        if self.positions.contains_key(&id) {
            return Err(GraphError::DuplicateVertex(id));
        }
        self.insert_vertex(id, label.into());
        Ok(())
    }

    fn insert_vertex(&mut self, id: VertexId, label: String) {
        self.positions.insert(id, self.vertices.len());
        self.vertices.push(Vertex {
            id,
            label,
            incident: Vec::new(),
        });
    }

    /// Adds an undirected edge `u`-`v` with the given weight.
    ///
    /// # Errors
    /// - [`GraphError::UnknownVertex`] if either endpoint is absent.
    /// - [`GraphError::SelfLoop`] if `u == v`.
    /// - [`GraphError::DuplicateEdge`] if the pair already has an edge.
    ///   The existing edge and its weight are left untouched.
    ///
    /// # Complexity
    /// O(min(deg(u), deg(v))) for the duplicate check.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: Weight) -> Result<EdgeIndex> {
        let pu = self.position(u)?;
        let pv = self.position(v)?;
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        if self.find_edge_at(pu, pv).is_some() {
            return Err(GraphError::DuplicateEdge { u, v });
        }

        let index = EdgeIndex(self.edges.len());
        self.edges.push(Edge { u, v, weight });
        self.edge_positions.push((pu, pv));
        self.vertices[pu].incident.push(index);
        self.vertices[pv].incident.push(index);
        Ok(index)
    }

    /// Returns the edge joining `u` and `v`, if any.
    ///
    /// Unknown vertices simply have no edges.
    ///
    /// # Complexity
    /// O(min(deg(u), deg(v)))
    pub fn find_edge(&self, u: VertexId, v: VertexId) -> Option<EdgeIndex> {
        let pu = *self.positions.get(&u)?;
        let pv = *self.positions.get(&v)?;
        self.find_edge_at(pu, pv)
    }

    fn find_edge_at(&self, pu: usize, pv: usize) -> Option<EdgeIndex> {
        let (scan, target) = if self.vertices[pu].degree() <= self.vertices[pv].degree() {
            (pu, pv)
        } else {
            (pv, pu)
        };
        self.vertices[scan].incident.iter().copied().find(|&e| {
            let (a, b) = self.edge_positions[e.0];
            (a == scan && b == target) || (a == target && b == scan)
        })
    }

    /// Returns `true` if an edge joins `u` and `v`.
    pub fn adjacent(&self, u: VertexId, v: VertexId) -> bool {
        self.find_edge(u, v).is_some()
    }

    /// Returns the weight of the edge joining `u` and `v`, if any.
    pub fn edge_weight(&self, u: VertexId, v: VertexId) -> Option<Weight> {
        self.find_edge(u, v).map(|e| self.edges[e.0].weight)
    }

    /// Iterates over `(neighbor, weight)` pairs of `v` in edge insertion order.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if `v` is absent.
    pub fn neighbors(&self, v: VertexId) -> Result<impl Iterator<Item = (VertexId, Weight)> + '_> {
        let pos = self.position(v)?;
        Ok(self.vertices[pos].incident.iter().map(move |&e| {
            let edge = &self.edges[e.0];
            let other = if edge.u == v { edge.v } else { edge.u };
            (other, edge.weight)
        }))
    }

    /// Returns the degree of `v`, or `None` if `v` is absent.
    pub fn degree(&self, v: VertexId) -> Option<usize> {
        self.vertex(v).map(Vertex::degree)
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.positions.get(&id).map(|&pos| &self.vertices[pos])
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.positions.contains_key(&id)
    }

    /// All vertices, in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertex ids, in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().map(|v| v.id)
    }

    /// All edges, in insertion order. `edges()[i]` is the edge at `EdgeIndex` i.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// # Panics
    /// Panics if `index` belongs to a different graph and is out of range.
    pub fn edge(&self, index: EdgeIndex) -> &Edge {
        &self.edges[index.0]
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Sum of all edge weights.
    pub fn total_weight(&self) -> u64 {
        self.edges.iter().map(|e| u64::from(e.weight)).sum()
    }

    fn position(&self, id: VertexId) -> Result<usize> {
        self.positions
            .get(&id)
            .copied()
            .ok_or(GraphError::UnknownVertex(id))
    }

    /// Edges in index order, with the arena positions of their endpoints.
    pub(crate) fn indexed_edges(&self) -> impl Iterator<Item = (EdgeIndex, &Edge, (usize, usize))> + '_ {
        self.edges
            .iter()
            .zip(&self.edge_positions)
            .enumerate()
            .map(|(i, (edge, &positions))| (EdgeIndex(i), edge, positions))
    }

    /// Arena positions of an edge's endpoints.
    pub(crate) fn edge_positions(&self, index: EdgeIndex) -> (usize, usize) {
        self.edge_positions[index.0]
    }

    /// Builds a graph over the same vertices (ids, labels, order) holding
    /// only the selected edges, re-indexed in the order given.
    ///
    /// Callers pass distinct edges of `self`, so the result keeps every
    /// graph invariant without re-validation.
    pub(crate) fn spanning_subgraph(&self, selected: &[EdgeIndex]) -> Graph {
        let mut sub = Graph {
            vertices: self
                .vertices
                .iter()
                .map(|v| Vertex {
                    id: v.id,
                    label: v.label.clone(),
                    incident: Vec::new(),
                })
                .collect(),
            positions: self.positions.clone(),
            edges: Vec::with_capacity(selected.len()),
            edge_positions: Vec::with_capacity(selected.len()),
        };
        for &original in selected {
            let index = EdgeIndex(sub.edges.len());
            let (pu, pv) = self.edge_positions[original.0];
            sub.edges.push(self.edges[original.0]);
            sub.edge_positions.push((pu, pv));
            sub.vertices[pu].incident.push(index);
            sub.vertices[pv].incident.push(index);
        }
        sub
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: usize) -> VertexId {
        VertexId(id)
    }

    #[test]
    fn test_new_empty() {
        let g = Graph::new();
        assert!(g.is_empty());
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.total_weight(), 0);
    }

    #[test]
    fn test_with_vertices() {
        let g = Graph::with_vertices(4);
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.vertex_ids().collect::<Vec<_>>(), vec![v(0), v(1), v(2), v(3)]);
        assert_eq!(g.vertex(v(2)).map(Vertex::label), Some("2"));
    }

    #[test]
    fn test_duplicate_vertex() {
        let mut g = Graph::new();
        g.add_vertex(v(1)).unwrap();
        assert_eq!(g.add_vertex(v(1)), Err(GraphError::DuplicateVertex(v(1))));
        assert_eq!(g.vertex_count(), 1);
    }

    #[test]
    fn test_labels_may_collide() {
        let mut g = Graph::new();
        g.add_labeled_vertex(v(1), "x").unwrap();
        g.add_labeled_vertex(v(2), "x").unwrap();
        assert_eq!(g.vertex_count(), 2);
        g.add_edge(v(1), v(2), 3).unwrap();
        assert!(g.adjacent(v(1), v(2)));
    }

    #[test]
    fn test_add_edge_unknown_vertex() {
        let mut g = Graph::with_vertices(2);
        assert_eq!(g.add_edge(v(0), v(5), 1), Err(GraphError::UnknownVertex(v(5))));
        assert_eq!(g.add_edge(v(9), v(1), 1), Err(GraphError::UnknownVertex(v(9))));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_add_edge_self_loop() {
        let mut g = Graph::with_vertices(2);
        assert_eq!(g.add_edge(v(1), v(1), 4), Err(GraphError::SelfLoop(v(1))));
        assert_eq!(g.degree(v(1)), Some(0));
    }

    #[test]
    fn test_parallel_edge_first_wins() {
        let mut g = Graph::with_vertices(2);
        g.add_edge(v(0), v(1), 8).unwrap();

        // Cheaper, more expensive, and reversed duplicates are all rejected.
        for (a, b, w) in [(0, 1, 2), (0, 1, 20), (1, 0, 1)] {
            assert_eq!(
                g.add_edge(v(a), v(b), w),
                Err(GraphError::DuplicateEdge { u: v(a), v: v(b) })
            );
        }
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.edge_weight(v(1), v(0)), Some(8));
        assert_eq!(g.degree(v(0)), Some(1));
    }

    #[test]
    fn test_adjacency_queries() {
        let mut g = Graph::with_vertices(4);
        g.add_edge(v(0), v(1), 1).unwrap();
        g.add_edge(v(1), v(2), 2).unwrap();
        g.add_edge(v(0), v(3), 7).unwrap();

        assert!(g.adjacent(v(0), v(1)));
        assert!(g.adjacent(v(1), v(0)));
        assert!(!g.adjacent(v(0), v(2)));
        assert!(!g.adjacent(v(0), v(42)));
        assert_eq!(g.edge_weight(v(3), v(0)), Some(7));
        assert_eq!(g.edge_weight(v(2), v(3)), None);
    }

    #[test]
    fn test_neighbors() {
        let mut g = Graph::with_vertices(4);
        g.add_edge(v(0), v(1), 1).unwrap();
        g.add_edge(v(2), v(0), 5).unwrap();
        g.add_edge(v(0), v(3), 7).unwrap();

        let neighbors: Vec<_> = g.neighbors(v(0)).unwrap().collect();
        assert_eq!(neighbors, vec![(v(1), 1), (v(2), 5), (v(3), 7)]);
        assert_eq!(g.neighbors(v(3)).unwrap().collect::<Vec<_>>(), vec![(v(0), 7)]);
        assert!(g.neighbors(v(9)).is_err());
    }

    #[test]
    fn test_edge_accessors() {
        let mut g = Graph::with_vertices(3);
        let idx = g.add_edge(v(2), v(0), 6).unwrap();
        let edge = g.edge(idx);
        assert_eq!(idx.index(), 0);
        assert_eq!(edge.endpoints(), (v(2), v(0)));
        assert!(edge.connects(v(0), v(2)));
        assert_eq!(edge.other(v(2)), Some(v(0)));
        assert_eq!(edge.other(v(1)), None);
        assert_eq!(g.vertex(v(0)).unwrap().incident_edges(), &[idx]);
    }

    #[test]
    fn test_total_weight_does_not_overflow() {
        let mut g = Graph::with_vertices(3);
        g.add_edge(v(0), v(1), Weight::MAX).unwrap();
        g.add_edge(v(1), v(2), Weight::MAX).unwrap();
        assert_eq!(g.total_weight(), 2 * u64::from(Weight::MAX));
    }

    #[test]
    fn test_spanning_subgraph_keeps_vertices() {
        let mut g = Graph::new();
        g.add_labeled_vertex(v(10), "a").unwrap();
        g.add_labeled_vertex(v(20), "b").unwrap();
        g.add_labeled_vertex(v(30), "c").unwrap();
        let e0 = g.add_edge(v(10), v(20), 1).unwrap();
        g.add_edge(v(20), v(30), 2).unwrap();
        let e2 = g.add_edge(v(10), v(30), 3).unwrap();

        let sub = g.spanning_subgraph(&[e2, e0]);
        assert_eq!(sub.vertex_ids().collect::<Vec<_>>(), vec![v(10), v(20), v(30)]);
        assert_eq!(sub.vertex(v(30)).unwrap().label(), "c");
        assert_eq!(sub.edge_count(), 2);
        assert_eq!(sub.edges()[0].weight(), 3);
        assert_eq!(sub.edge_weight(v(20), v(10)), Some(1));
        assert!(!sub.adjacent(v(20), v(30)));
        assert_eq!(sub.degree(v(10)), Some(2));
    }

    #[test]
    fn test_edge_serde() {
        let mut g = Graph::with_vertices(2);
        let idx = g.add_edge(v(0), v(1), 4).unwrap();
        let json = serde_json::to_string(g.edge(idx)).unwrap();
        assert_eq!(json, r#"{"u":0,"v":1,"weight":4}"#);
        let back: Edge = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, g.edge(idx));
    }
}
