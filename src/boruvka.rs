//! Borůvka's minimum spanning tree algorithm.
//!
//! Each phase, every component picks its cheapest outgoing edge and all
//! picks are committed together, so the number of components at least
//! halves per phase and the run takes O(log V) phases of O(E·α(V)) each.
//!
//! # States
//!
//! ```text
//! Initializing -> Scanning -> Merging -+-> Scanning   (merged, >1 component left)
//!                                      +-> Done       (1 component left)
//!                                      +-> Done       (no merge: disconnected)
//! ```
//!
//! A phase that merges nothing while several components remain means the
//! graph is disconnected. The driver then stops and returns the minimum
//! spanning forest, one tree per connected component.
//!
//! # References
//!
//! - Borůvka (1926), "O jistém problému minimálním"
//! - Nešetřil, Milková & Nešetřilová (2001), "Otakar Borůvka on minimum
//!   spanning tree problem", *Discrete Mathematics* 233.

use tracing::{debug, trace};

use crate::cheapest::{select_cheapest, CheapestEdges};
use crate::components::ComponentTracker;
use crate::convert::{AdjacencyList, AdjacencyMatrix};
use crate::error::{GraphError, Result};
use crate::graph::{EdgeIndex, Graph};

/// Observable driver state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Singleton components built, nothing scanned yet.
    Initializing,
    /// Next step scans all edges for cheapest candidates.
    Scanning,
    /// Candidates chosen; next step commits them.
    Merging,
    /// Finished; the forest is final.
    Done,
}

#[derive(Debug)]
enum State {
    Initializing,
    Scanning,
    Merging(CheapestEdges),
    Done,
}

/// Step-wise Borůvka driver over a borrowed graph.
///
/// The graph is only read; it cannot be mutated while the driver holds it.
///
/// # Examples
/// ```
/// use u_mst::{Boruvka, Graph, Phase, VertexId};
///
/// let mut g = Graph::with_vertices(3);
/// g.add_edge(VertexId(0), VertexId(1), 4).unwrap();
/// g.add_edge(VertexId(1), VertexId(2), 1).unwrap();
/// g.add_edge(VertexId(0), VertexId(2), 3).unwrap();
///
/// let mut driver = Boruvka::new(&g).unwrap();
/// assert_eq!(driver.phase(), Phase::Initializing);
/// assert_eq!(driver.step(), Phase::Scanning);
///
/// let forest = driver.run();
/// assert!(forest.is_spanning_tree());
/// assert_eq!(forest.total_weight(), 4);
/// ```
#[derive(Debug)]
pub struct Boruvka<'g> {
    graph: &'g Graph,
    components: ComponentTracker,
    chosen: Vec<EdgeIndex>,
    state: State,
    phases: usize,
}

impl<'g> Boruvka<'g> {
    /// Prepares a run over `graph`.
    ///
    /// # Errors
    /// [`GraphError::EmptyGraph`] if the graph has no vertices.
    pub fn new(graph: &'g Graph) -> Result<Self> {
        if graph.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        Ok(Self {
            graph,
            components: ComponentTracker::new(graph.vertex_count()),
            chosen: Vec::with_capacity(graph.vertex_count() - 1),
            state: State::Initializing,
            phases: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Initializing => Phase::Initializing,
            State::Scanning => Phase::Scanning,
            State::Merging(_) => Phase::Merging,
            State::Done => Phase::Done,
        }
    }

    /// Number of completed scan/merge phases.
    pub fn phases_completed(&self) -> usize {
        self.phases
    }

    /// Current number of components.
    pub fn component_count(&self) -> usize {
        self.components.component_count()
    }

    /// Edges committed so far, in commit order.
    pub fn chosen_edges(&self) -> &[EdgeIndex] {
        &self.chosen
    }

    /// Performs one state transition and returns the new phase.
    /// Stepping a finished driver is a no-op.
    pub fn step(&mut self) -> Phase {
        self.state = match std::mem::replace(&mut self.state, State::Done) {
            State::Initializing => {
                debug!(
                    vertices = self.graph.vertex_count(),
                    edges = self.graph.edge_count(),
                    "starting Borůvka"
                );
                if self.components.component_count() == 1 {
                    State::Done
                } else {
                    State::Scanning
                }
            }
            State::Scanning => State::Merging(select_cheapest(self.graph, &mut self.components)),
            State::Merging(candidates) => self.commit(&candidates),
            State::Done => State::Done,
        };
        self.phase()
    }

    fn commit(&mut self, candidates: &CheapestEdges) -> State {
        let mut merges = 0;
        for (_, edge) in candidates.nominations() {
            let (a, b) = self.graph.edge_positions(edge);
            // Another component may already have committed this edge, or an
            // edge joining the same pair of components, earlier this phase.
            if self.components.same_component(a, b) {
                continue;
            }
            self.components
                .merge(a, b)
                .expect("merge of components checked to be distinct");
            self.chosen.push(edge);
            merges += 1;
            trace!(
                u = %self.graph.edge(edge).u(),
                v = %self.graph.edge(edge).v(),
                weight = self.graph.edge(edge).weight(),
                "committed edge"
            );
        }

        self.phases += 1;
        let remaining = self.components.component_count();
        debug!(phase = self.phases, merges, remaining, "phase complete");

        if remaining == 1 {
            State::Done
        } else if merges == 0 {
            debug!(
                components = remaining,
                "no outgoing edges left, graph is disconnected"
            );
            State::Done
        } else {
            State::Scanning
        }
    }

    /// Steps until [`Phase::Done`] and returns the result.
    pub fn run(mut self) -> SpanningForest {
        while self.step() != Phase::Done {}
        let graph = self.graph.spanning_subgraph(&self.chosen);
        debug!(
            edges = graph.edge_count(),
            weight = graph.total_weight(),
            components = self.components.component_count(),
            phases = self.phases,
            "Borůvka finished"
        );
        SpanningForest {
            graph,
            components: self.components.component_count(),
            phases: self.phases,
        }
    }
}

/// Result of a run: a minimum spanning tree, or a minimum spanning forest
/// when the input is disconnected.
///
/// The graph has exactly the input's vertices (ids, labels, order) and a
/// subset of its edges, in commit order.
#[derive(Debug, Clone)]
pub struct SpanningForest {
    graph: Graph,
    components: usize,
    phases: usize,
}

impl SpanningForest {
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Number of trees: 1 for a spanning tree, k for a k-component input.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Number of scan/merge phases the run took.
    pub fn phases(&self) -> usize {
        self.phases
    }

    /// Returns `true` if the input was connected.
    pub fn is_spanning_tree(&self) -> bool {
        self.components == 1
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn total_weight(&self) -> u64 {
        self.graph.total_weight()
    }
}

/// Computes the minimum spanning tree (or forest) of `graph`.
///
/// # Errors
/// [`GraphError::EmptyGraph`] if the graph has no vertices.
///
/// # Examples
/// ```
/// use u_mst::{find_mst, Graph, VertexId};
///
/// let mut g = Graph::new();
/// for (id, name) in ["A", "B", "C", "D"].into_iter().enumerate() {
///     g.add_labeled_vertex(VertexId(id), name).unwrap();
/// }
/// for (a, b, w) in [(0, 1, 1), (1, 2, 2), (2, 3, 3), (0, 3, 4), (0, 2, 10)] {
///     g.add_edge(VertexId(a), VertexId(b), w).unwrap();
/// }
///
/// let mst = find_mst(&g).unwrap();
/// assert_eq!(mst.edge_count(), 3);
/// assert_eq!(mst.total_weight(), 6);
/// ```
pub fn find_mst(graph: &Graph) -> Result<Graph> {
    spanning_forest(graph).map(SpanningForest::into_graph)
}

/// Like [`find_mst`], but also reports component and phase counts.
pub fn spanning_forest(graph: &Graph) -> Result<SpanningForest> {
    Ok(Boruvka::new(graph)?.run())
}

/// Converts an adjacency list once, then runs Borůvka on it.
///
/// # Errors
/// Conversion errors from [`Graph::from_adjacency_list`], or
/// [`GraphError::EmptyGraph`].
pub fn spanning_forest_from_list(list: &AdjacencyList) -> Result<SpanningForest> {
    let graph = Graph::from_adjacency_list(list)?;
    spanning_forest(&graph)
}

/// Converts an adjacency matrix once, then runs Borůvka on it. The result
/// has vertices `0..order`.
///
/// # Errors
/// Conversion errors from [`Graph::from_adjacency_matrix`], or
/// [`GraphError::EmptyGraph`].
pub fn spanning_forest_from_matrix(matrix: &AdjacencyMatrix) -> Result<SpanningForest> {
    let graph = Graph::from_adjacency_matrix(matrix)?;
    spanning_forest(&graph)
}
