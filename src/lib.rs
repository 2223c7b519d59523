//! # u-mst
//!
//! Minimum spanning trees for the U-Engine ecosystem.
//!
//! This crate computes minimum spanning trees of undirected graphs with
//! non-negative integer weights using Borůvka's algorithm. Disconnected
//! inputs yield a minimum spanning forest instead of an error or a hang.
//!
//! ## Modules
//!
//! - [`graph`] — Arena-backed undirected graph with O(degree) adjacency queries
//! - [`convert`] — Adjacency-list and adjacency-matrix boundary formats
//! - [`components`] — Union-find component tracking
//! - [`cheapest`] — Per-phase cheapest outgoing edge selection
//! - [`boruvka`] — The phase driver and result type
//! - [`random`] — Seeded RNG and Erdős–Rényi graph generation
//!
//! ## Design Philosophy
//!
//! - **Identity over names**: vertices are keyed by [`VertexId`]; labels may collide
//! - **Explicit absence**: "no candidate yet" is `None`, never a sentinel weight
//! - **Errors are returned**: invalid mutations fail with [`GraphError`]
//! - **Property-based testing**: results are checked against Kruskal via proptest
//!
//! ## Example
//!
//! ```
//! use u_mst::{spanning_forest, Graph, VertexId};
//!
//! // Two disjoint triangles.
//! let mut g = Graph::with_vertices(6);
//! for (a, b, w) in [(0, 1, 1), (1, 2, 2), (0, 2, 3), (3, 4, 1), (4, 5, 2), (3, 5, 3)] {
//!     g.add_edge(VertexId(a), VertexId(b), w).unwrap();
//! }
//!
//! let forest = spanning_forest(&g).unwrap();
//! assert_eq!(forest.component_count(), 2);
//! assert_eq!(forest.edge_count(), 4);
//! assert_eq!(forest.total_weight(), 6);
//! ```

pub mod boruvka;
pub mod cheapest;
pub mod components;
pub mod convert;
pub mod error;
pub mod graph;
pub mod random;

pub use boruvka::{
    find_mst, spanning_forest, spanning_forest_from_list, spanning_forest_from_matrix, Boruvka,
    Phase, SpanningForest,
};
pub use cheapest::{select_cheapest, CheapestEdges};
pub use components::{AlreadyMerged, ComponentTracker};
pub use convert::{list_to_matrix, matrix_to_list, AdjacencyList, AdjacencyMatrix};
pub use error::{GraphError, Result};
pub use graph::{Edge, EdgeIndex, Graph, Vertex, VertexId, Weight};
pub use random::ErdosRenyi;
