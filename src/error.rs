//! Error types for graph construction, format conversion, and MST queries.

use thiserror::Error;

use crate::graph::{VertexId, Weight};

/// Result type alias for fallible graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors reported by [`Graph`](crate::Graph) mutation, the boundary
/// converters, the random generator, and the MST driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex with this id is already part of the graph.
    #[error("vertex {0} already exists in the graph")]
    DuplicateVertex(VertexId),

    /// An edge or query referenced a vertex the graph does not contain.
    #[error("vertex {0} does not exist in the graph")]
    UnknownVertex(VertexId),

    /// An edge would connect a vertex to itself.
    #[error("self-loop on vertex {0} is not allowed")]
    SelfLoop(VertexId),

    /// The unordered pair already has an edge; the first one is kept.
    #[error("an edge between {u} and {v} already exists")]
    DuplicateEdge {
        /// First endpoint of the rejected edge.
        u: VertexId,
        /// Second endpoint of the rejected edge.
        v: VertexId,
    },

    /// The graph has no vertices, so it has no spanning tree.
    #[error("graph has no vertices")]
    EmptyGraph,

    /// An adjacency matrix row does not match the matrix order.
    #[error("adjacency matrix row {row} has {len} entries, expected {expected}")]
    NonSquareMatrix {
        /// Offending row.
        row: usize,
        /// Number of entries in that row.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },

    /// An adjacency list or matrix gives one undirected edge two weights.
    #[error("edge {u}-{v} has weight {forward} one way and {backward} the other")]
    AsymmetricWeight {
        /// First endpoint.
        u: VertexId,
        /// Second endpoint.
        v: VertexId,
        /// Weight recorded first.
        forward: Weight,
        /// Conflicting weight recorded later.
        backward: Weight,
    },

    /// A zero-weight edge cannot be encoded in an adjacency matrix,
    /// where 0 means "no edge".
    #[error("edge {u}-{v} has weight 0, which a matrix reads as no edge")]
    ZeroWeightEdge {
        /// First endpoint.
        u: VertexId,
        /// Second endpoint.
        v: VertexId,
    },

    /// A generator parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
