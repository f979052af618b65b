//! Generator configuration and the end-to-end construction.
//!
//! [`GeneratorBuilder`] validates the requested size once; the resulting
//! [`Generator`] can then produce any number of graphs, each from a private
//! sampler, so separate runs never share random state.

use tracing::{Span, field, info, instrument};

use crate::{
    degree::EdgeDirection,
    error::{GeneratorError, Result},
    graph::{AdjacencyGraph, Graph},
    growth::{build_seed, extend_seed},
    repeated::RepeatedNodeList,
    sampler::{RandomSampler, RngSampler},
};

/// Seed used when none is configured.
pub const DEFAULT_RNG_SEED: u64 = 0x5EED_CAFE;

/// Configures and constructs [`Generator`] instances.
///
/// # Examples
/// ```
/// use ddsf_core::GeneratorBuilder;
///
/// let generator = GeneratorBuilder::new(50, 120)
///     .with_rng_seed(7)
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(generator.nodes(), 50);
/// assert_eq!(generator.target_degree(), 4.8);
/// ```
#[derive(Clone, Debug)]
pub struct GeneratorBuilder {
    nodes: usize,
    edges: usize,
    average_degree: Option<f64>,
    rng_seed: u64,
}

impl GeneratorBuilder {
    /// Creates a builder for a graph of `nodes` nodes and roughly `edges`
    /// edges.
    #[must_use]
    pub const fn new(nodes: usize, edges: usize) -> Self {
        Self {
            nodes,
            edges,
            average_degree: None,
            rng_seed: DEFAULT_RNG_SEED,
        }
    }

    /// Overrides the target average degree, usually with the value measured on
    /// the real network being modelled. Zero means "derive it from the edge
    /// count".
    ///
    /// # Examples
    /// ```
    /// use ddsf_core::GeneratorBuilder;
    ///
    /// let builder = GeneratorBuilder::new(100, 300).with_average_degree(5.5);
    /// assert_eq!(builder.average_degree(), Some(5.5));
    /// ```
    #[must_use]
    pub const fn with_average_degree(mut self, average_degree: f64) -> Self {
        self.average_degree = Some(average_degree);
        self
    }

    /// Seeds the sampler used by [`Generator::generate`].
    #[must_use]
    pub const fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Returns the requested node count.
    #[must_use]
    pub const fn nodes(&self) -> usize {
        self.nodes
    }

    /// Returns the requested edge count.
    #[must_use]
    pub const fn edges(&self) -> usize {
        self.edges
    }

    /// Returns the average-degree override, if any.
    #[must_use]
    pub const fn average_degree(&self) -> Option<f64> {
        self.average_degree
    }

    /// Returns the configured RNG seed.
    #[must_use]
    pub const fn rng_seed(&self) -> u64 {
        self.rng_seed
    }

    /// Validates the configuration and constructs a [`Generator`].
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidNodeCount`] when fewer than two nodes
    /// are requested, [`GeneratorError::InvalidEdgeCount`] when no edges are
    /// requested, and [`GeneratorError::InvalidAverageDegree`] when the target
    /// degree is negative, non-finite, or not below the node count.
    ///
    /// # Examples
    /// ```
    /// use ddsf_core::{GeneratorBuilder, GeneratorError};
    ///
    /// let err = GeneratorBuilder::new(1, 1).build().expect_err("one node is too few");
    /// assert_eq!(err, GeneratorError::InvalidNodeCount { got: 1 });
    /// ```
    pub fn build(self) -> Result<Generator> {
        let target_degree = target_degree(self.nodes, self.edges, self.average_degree)?;
        Ok(Generator {
            nodes: self.nodes,
            edges: self.edges,
            target_degree,
            rng_seed: self.rng_seed,
        })
    }
}

/// Validated generator configuration.
///
/// # Examples
/// ```
/// use ddsf_core::{Graph, GeneratorBuilder};
///
/// let generator = GeneratorBuilder::new(200, 500).with_rng_seed(1).build()?;
/// let graph = generator.generate()?;
/// assert_eq!(graph.node_count(), 200);
/// assert_eq!(graph, generator.generate()?);
/// # Ok::<(), ddsf_core::GeneratorError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Generator {
    nodes: usize,
    edges: usize,
    target_degree: f64,
    rng_seed: u64,
}

impl Generator {
    /// Returns the node count every generated graph will have.
    #[must_use]
    pub const fn nodes(&self) -> usize {
        self.nodes
    }

    /// Returns the edge count the extension phase aims for.
    #[must_use]
    pub const fn edges(&self) -> usize {
        self.edges
    }

    /// Returns the average degree the seed phase grows towards.
    #[must_use]
    pub const fn target_degree(&self) -> f64 {
        self.target_degree
    }

    /// Returns the seed used for [`Self::generate`].
    #[must_use]
    pub const fn rng_seed(&self) -> u64 {
        self.rng_seed
    }

    /// Generates a graph from a fresh sampler seeded with [`Self::rng_seed`].
    /// Repeated calls return identical graphs.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InsufficientCandidates`] when the edge count
    /// is too large for the node count to be reachable step by step.
    pub fn generate(&self) -> Result<AdjacencyGraph> {
        self.generate_with(&mut RngSampler::seeded(self.rng_seed))
    }

    /// Generates a graph drawing randomness from `sampler`.
    ///
    /// # Errors
    /// See [`Self::generate`].
    pub fn generate_with<S: RandomSampler>(&self, sampler: &mut S) -> Result<AdjacencyGraph> {
        grow(self.nodes, self.edges, self.target_degree, sampler)
    }
}

/// Generates a scale-free graph with `n` nodes whose average degree
/// approximates `c`, or `2m / n` when `c` is absent or zero.
///
/// The final edge count tracks `m` but is not guaranteed to equal it: every
/// extension step rounds its target degree at random.
///
/// # Errors
/// Returns the validation errors documented on [`GeneratorBuilder::build`]
/// and [`GeneratorError::InsufficientCandidates`] when a growth step cannot
/// find enough distinct targets.
///
/// # Examples
/// ```
/// use ddsf_core::{Graph, RngSampler, generate};
///
/// let mut sampler = RngSampler::seeded(5);
/// let graph = generate(2, 1, None, &mut sampler)?;
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edges().collect::<Vec<_>>(), [(0, 1)]);
/// # Ok::<(), ddsf_core::GeneratorError>(())
/// ```
pub fn generate<S: RandomSampler>(
    n: usize,
    m: usize,
    c: Option<f64>,
    sampler: &mut S,
) -> Result<AdjacencyGraph> {
    let target = target_degree(n, m, c)?;
    grow(n, m, target, sampler)
}

#[instrument(
    name = "core.generate",
    err,
    skip(sampler),
    fields(nodes = n, edges = m, target_degree = target, generated_edges = field::Empty)
)]
fn grow<S: RandomSampler>(
    n: usize,
    m: usize,
    target: f64,
    sampler: &mut S,
) -> Result<AdjacencyGraph> {
    let mut graph = AdjacencyGraph::with_nodes(2);
    graph.add_edge(0, 1)?;
    let mut repeated = RepeatedNodeList::seed();

    let n_current = build_seed(&mut graph, &mut repeated, target, 2, sampler)?;
    extend_seed(n, m, &mut graph, &mut repeated, n_current, sampler)?;

    Span::current().record("generated_edges", graph.edge_count());
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph generated"
    );
    Ok(graph)
}

fn target_degree(nodes: usize, edges: usize, average_degree: Option<f64>) -> Result<f64> {
    if nodes < 2 {
        return Err(GeneratorError::InvalidNodeCount { got: nodes });
    }
    if edges == 0 {
        return Err(GeneratorError::InvalidEdgeCount { got: edges });
    }
    let target = match average_degree {
        Some(value) if value != 0.0 => value,
        _ => EdgeDirection::Undirected.mean_degree(nodes, edges)?,
    };
    if !target.is_finite() || target < 0.0 || target >= nodes as f64 {
        return Err(GeneratorError::InvalidAverageDegree { got: target, nodes });
    }
    Ok(target)
}
