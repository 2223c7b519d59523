//! Random graphs for testing and benchmarking.
//!
//! Provides seeded RNG construction, a Fisher-Yates shuffle for permuting
//! edge insertion orders, and an Erdős–Rényi G(n, p) generator with
//! integer weights.
//!
//! # Reproducibility
//!
//! For reproducible graphs, use [`create_rng`] with a fixed seed.
//! The underlying algorithm (SmallRng) is deterministic for a given seed
//! on the same platform.

use std::ops::RangeInclusive;

use rand::Rng;
use tracing::trace;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, Weight};

/// Creates a fast, seeded random number generator.
///
/// # Examples
/// ```
/// use u_mst::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: u32 = rng.random_range(1..=74);
/// assert!((1..=74).contains(&x));
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Fisher-Yates (Durstenfeld) in-place shuffle.
///
/// Produces a uniformly random permutation.
///
/// Reference: Knuth (1997), *TAOCP* Vol. 2, §3.4.2, Algorithm P.
///
/// # Complexity
/// Time: O(n), Space: O(1)
pub fn shuffle<T, R: Rng>(slice: &mut [T], rng: &mut R) {
    let n = slice.len();
    if n <= 1 {
        return;
    }
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        slice.swap(i, j);
    }
}

/// Erdős–Rényi G(n, p) model: every unordered vertex pair is joined
/// independently with probability `p`, with a weight drawn uniformly from
/// an inclusive range.
///
/// Weights are always positive, so generated graphs can be encoded as
/// adjacency matrices.
///
/// # Examples
/// ```
/// use u_mst::random::{create_rng, ErdosRenyi};
///
/// let model = ErdosRenyi::new(1.0).unwrap().with_weights(1, 9).unwrap();
/// let g = model.generate(5, &mut create_rng(7)).unwrap();
/// assert_eq!(g.edge_count(), 10); // complete graph K5
/// assert!(g.edges().iter().all(|e| (1..=9).contains(&e.weight())));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ErdosRenyi {
    probability: f64,
    min_weight: Weight,
    max_weight: Weight,
}

impl ErdosRenyi {
    /// Default lightest edge weight.
    pub const DEFAULT_MIN_WEIGHT: Weight = 1;
    /// Default heaviest edge weight.
    pub const DEFAULT_MAX_WEIGHT: Weight = 74;

    /// Creates a model with edge probability `probability` and the default
    /// weight range `1..=74`.
    ///
    /// # Errors
    /// [`GraphError::InvalidParameter`] unless `0 <= probability <= 1`.
    pub fn new(probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GraphError::InvalidParameter(format!(
                "edge probability must be in [0, 1], got {probability}"
            )));
        }
        Ok(Self {
            probability,
            min_weight: Self::DEFAULT_MIN_WEIGHT,
            max_weight: Self::DEFAULT_MAX_WEIGHT,
        })
    }

    /// Sets the inclusive weight range.
    ///
    /// # Errors
    /// [`GraphError::InvalidParameter`] unless `1 <= min <= max`.
    pub fn with_weights(self, min: Weight, max: Weight) -> Result<Self> {
        if min == 0 || min > max {
            return Err(GraphError::InvalidParameter(format!(
                "weight range requires 1 <= min <= max, got min={min}, max={max}"
            )));
        }
        Ok(Self {
            min_weight: min,
            max_weight: max,
            ..self
        })
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn weight_range(&self) -> RangeInclusive<Weight> {
        self.min_weight..=self.max_weight
    }

    /// Generates a graph on vertices `0..vertex_count`.
    ///
    /// # Errors
    /// Propagates graph construction errors; none occur for a fresh vertex set.
    pub fn generate<R: Rng>(&self, vertex_count: usize, rng: &mut R) -> Result<Graph> {
        let mut graph = Graph::with_vertices(vertex_count);
        self.populate(&mut graph, rng)?;
        Ok(graph)
    }

    /// Considers every unordered pair of `graph`'s vertices, in vertex order,
    /// and adds an edge with the model's probability. Pairs that already
    /// have an edge are left alone.
    ///
    /// # Errors
    /// Propagates graph construction errors.
    pub fn populate<R: Rng>(&self, graph: &mut Graph, rng: &mut R) -> Result<()> {
        let ids: Vec<_> = graph.vertex_ids().collect();
        let before = graph.edge_count();
        for (i, &u) in ids.iter().enumerate() {
            for &v in &ids[i + 1..] {
                if rng.random_bool(self.probability) && !graph.adjacent(u, v) {
                    let weight = rng.random_range(self.weight_range());
                    graph.add_edge(u, v, weight)?;
                }
            }
        }
        trace!(
            vertices = ids.len(),
            added = graph.edge_count() - before,
            probability = self.probability,
            "generated Erdős–Rényi edges"
        );
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
