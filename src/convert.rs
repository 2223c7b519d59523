//! Conversions between [`Graph`] and the adjacency-list and adjacency-matrix
//! boundary formats.
//!
//! All conversions are pure: they read their input and build a new value.
//!
//! # Formats
//!
//! - [`AdjacencyList`]: `vertex -> [(neighbor, weight)]`. Every vertex is a
//!   key, isolated vertices map to an empty list. An undirected edge may be
//!   listed under one endpoint or both; when listed twice the weights must
//!   agree.
//! - [`AdjacencyMatrix`]: square, row-major, `0` encodes "no edge". The
//!   matrix must be symmetric with a zero diagonal. Row `i` of a matrix built
//!   from a graph is the graph's `i`-th vertex; a graph built from a matrix
//!   has vertices `0..order`.
//!
//! # Limitations
//!
//! Because `0` means "no edge", a graph with a zero-weight edge cannot be
//! encoded as a matrix ([`GraphError::ZeroWeightEdge`]).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId, Weight};

/// Adjacency-list form: every vertex mapped to its `(neighbor, weight)` pairs.
pub type AdjacencyList = BTreeMap<VertexId, Vec<(VertexId, Weight)>>;

/// Square adjacency matrix where `0` means "no edge".
///
/// Serializes as a list of rows; deserialization goes through
/// [`AdjacencyMatrix::from_rows`], so non-square input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Weight>>", into = "Vec<Vec<Weight>>")]
pub struct AdjacencyMatrix {
    order: usize,
    cells: Vec<Weight>,
}

impl AdjacencyMatrix {
    /// Creates an `order x order` matrix with no edges.
    pub fn zeros(order: usize) -> Self {
        Self {
            order,
            cells: vec![0; order * order],
        }
    }

    /// Builds a matrix from rows.
    ///
    /// # Errors
    /// [`GraphError::NonSquareMatrix`] if any row length differs from the
    /// number of rows.
    pub fn from_rows(rows: Vec<Vec<Weight>>) -> Result<Self> {
        let order = rows.len();
        let mut cells = Vec::with_capacity(order * order);
        for (row, entries) in rows.into_iter().enumerate() {
            if entries.len() != order {
                return Err(GraphError::NonSquareMatrix {
                    row,
                    len: entries.len(),
                    expected: order,
                });
            }
            cells.extend(entries);
        }
        Ok(Self { order, cells })
    }

    /// Number of rows (and columns).
    pub fn order(&self) -> usize {
        self.order
    }

    /// # Panics
    /// Panics if `row` or `col` is out of range.
    pub fn get(&self, row: usize, col: usize) -> Weight {
        assert!(row < self.order, "row {row} out of range");
        assert!(col < self.order, "column {col} out of range");
        self.cells[row * self.order + col]
    }

    /// Writes a single cell. Symmetry is the caller's concern.
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of range.
    pub fn set(&mut self, row: usize, col: usize, weight: Weight) {
        assert!(row < self.order, "row {row} out of range");
        assert!(col < self.order, "column {col} out of range");
        self.cells[row * self.order + col] = weight;
    }

    /// # Panics
    /// Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[Weight] {
        assert!(row < self.order, "row {row} out of range");
        &self.cells[row * self.order..(row + 1) * self.order]
    }

    pub fn to_rows(&self) -> Vec<Vec<Weight>> {
        (0..self.order).map(|r| self.row(r).to_vec()).collect()
    }
}

impl TryFrom<Vec<Vec<Weight>>> for AdjacencyMatrix {
    type Error = GraphError;

    fn try_from(rows: Vec<Vec<Weight>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<AdjacencyMatrix> for Vec<Vec<Weight>> {
    fn from(matrix: AdjacencyMatrix) -> Self {
        matrix.to_rows()
    }
}

impl Graph {
    /// Converts the graph to adjacency-list form.
    ///
    /// Each edge appears under both endpoints; neighbors follow edge
    /// insertion order.
    pub fn to_adjacency_list(&self) -> AdjacencyList {
        let mut list: AdjacencyList = self.vertex_ids().map(|id| (id, Vec::new())).collect();
        for edge in self.edges() {
            let (u, v) = edge.endpoints();
            if let Some(entries) = list.get_mut(&u) {
                entries.push((v, edge.weight()));
            }
            if let Some(entries) = list.get_mut(&v) {
                entries.push((u, edge.weight()));
            }
        }
        list
    }

    /// Builds a graph from adjacency-list form. Vertices are added in key
    /// order, edges in the order they are first listed.
    ///
    /// # Errors
    /// - [`GraphError::UnknownVertex`] if a neighbor is not a key.
    /// - [`GraphError::SelfLoop`] if a vertex lists itself.
    /// - [`GraphError::AsymmetricWeight`] if an edge is listed twice with
    ///   different weights.
    pub fn from_adjacency_list(list: &AdjacencyList) -> Result<Self> {
        let mut graph = Graph::new();
        for &id in list.keys() {
            graph.add_vertex(id)?;
        }
        for (&u, entries) in list {
            for &(v, weight) in entries {
                match graph.edge_weight(u, v) {
                    Some(existing) if existing == weight => {}
                    Some(existing) => {
                        return Err(GraphError::AsymmetricWeight {
                            u,
                            v,
                            forward: existing,
                            backward: weight,
                        });
                    }
                    None => {
                        graph.add_edge(u, v, weight)?;
                    }
                }
            }
        }
        Ok(graph)
    }

    /// Converts the graph to a matrix indexed by vertex insertion order.
    ///
    /// # Errors
    /// [`GraphError::ZeroWeightEdge`] if any edge has weight 0.
    pub fn to_adjacency_matrix(&self) -> Result<AdjacencyMatrix> {
        let mut matrix = AdjacencyMatrix::zeros(self.vertex_count());
        for (_, edge, (a, b)) in self.indexed_edges() {
            if edge.weight() == 0 {
                return Err(GraphError::ZeroWeightEdge {
                    u: edge.u(),
                    v: edge.v(),
                });
            }
            matrix.set(a, b, edge.weight());
            matrix.set(b, a, edge.weight());
        }
        Ok(matrix)
    }

    /// Builds a graph with vertices `0..order` from a matrix, adding edges
    /// row by row over the upper triangle.
    ///
    /// # Errors
    /// - [`GraphError::SelfLoop`] if a diagonal entry is non-zero.
    /// - [`GraphError::AsymmetricWeight`] if `m[i][j] != m[j][i]`.
    pub fn from_adjacency_matrix(matrix: &AdjacencyMatrix) -> Result<Self> {
        let n = matrix.order();
        let mut graph = Graph::with_vertices(n);
        for i in 0..n {
            if matrix.get(i, i) != 0 {
                return Err(GraphError::SelfLoop(VertexId(i)));
            }
            for j in (i + 1)..n {
                let forward = matrix.get(i, j);
                let backward = matrix.get(j, i);
                if forward != backward {
                    return Err(GraphError::AsymmetricWeight {
                        u: VertexId(i),
                        v: VertexId(j),
                        forward,
                        backward,
                    });
                }
                if forward != 0 {
                    graph.add_edge(VertexId(i), VertexId(j), forward)?;
                }
            }
        }
        Ok(graph)
    }
}

/// Converts a matrix to adjacency-list form with vertices `0..order`.
/// Neighbors are listed in ascending order.
///
/// # Errors
/// Same as [`Graph::from_adjacency_matrix`].
pub fn matrix_to_list(matrix: &AdjacencyMatrix) -> Result<AdjacencyList> {
    Graph::from_adjacency_matrix(matrix).map(|g| g.to_adjacency_list())
}

/// Converts adjacency-list form to a matrix. Row `i` is the `i`-th key in
/// ascending order.
///
/// # Errors
/// Same as [`Graph::from_adjacency_list`] and [`Graph::to_adjacency_matrix`].
pub fn list_to_matrix(list: &AdjacencyList) -> Result<AdjacencyMatrix> {
    Graph::from_adjacency_list(list)?.to_adjacency_matrix()
}
