//! The two growth phases: a dense seed network, then degree-driven extension.
//!
//! The seed phase adds nodes with a fixed, increasing degree until the seed is
//! larger than the target average degree. The extension phase then adds the
//! remaining nodes one at a time, each with a degree derived from the edges
//! still owed to the nodes still missing, rounded at random to its floor or
//! the next integer.

use tracing::{debug, instrument};

use crate::{
    attachment::attach,
    degree::average_degree,
    error::Result,
    graph::Graph,
    repeated::RepeatedNodeList,
    sampler::RandomSampler,
};

/// Grows the seed network while `n_current <= avg_deg`.
///
/// Each added node attaches to `n_current - 1` existing nodes, so the seed is
/// close to a complete graph. Returns the node count after seeding; when
/// `avg_deg < 2` nothing is added and `n_current` is returned unchanged.
///
/// # Errors
/// Propagates any [`crate::GeneratorError`] raised by [`attach`].
///
/// # Examples
/// ```
/// use ddsf_core::{AdjacencyGraph, Graph, RepeatedNodeList, RngSampler, build_seed};
///
/// let mut graph = AdjacencyGraph::with_nodes(2);
/// graph.add_edge(0, 1)?;
/// let mut repeated = RepeatedNodeList::seed();
/// let mut sampler = RngSampler::seeded(3);
///
/// let n_current = build_seed(&mut graph, &mut repeated, 4.2, 2, &mut sampler)?;
/// assert_eq!(n_current, 5);
/// assert_eq!(graph.node_count(), 5);
/// assert_eq!(graph.edge_count(), 1 + 1 + 2 + 3);
/// # Ok::<(), ddsf_core::GeneratorError>(())
/// ```
#[instrument(
    name = "core.build_seed",
    err,
    skip(graph, repeated, sampler),
    fields(avg_deg = avg_deg, start = n_current)
)]
pub fn build_seed<G, S>(
    graph: &mut G,
    repeated: &mut RepeatedNodeList,
    avg_deg: f64,
    mut n_current: usize,
    sampler: &mut S,
) -> Result<usize>
where
    G: Graph,
    S: RandomSampler,
{
    while n_current as f64 <= avg_deg {
        attach(n_current, repeated, graph, n_current - 1, sampler)?;
        n_current += 1;
    }
    debug!(
        nodes = n_current,
        edges = graph.edge_count(),
        "seed network built"
    );
    Ok(n_current)
}

/// Extends the graph from `n_current` nodes to `n` nodes.
///
/// Before each step the degree owed to every remaining node is recomputed as
/// `2 * (m - edges so far) / (n - n_current)` and turned into an integer degree
/// by [`round_degree`]. Returns the final node count, which equals `n`.
///
/// # Errors
/// Returns [`crate::GeneratorError::InsufficientCandidates`] when a step asks
/// for more attachment targets than the graph holds; any other error raised by
/// [`attach`] is propagated as well.
///
/// # Examples
/// ```
/// use ddsf_core::{AdjacencyGraph, Graph, RepeatedNodeList, RngSampler, extend_seed};
///
/// let mut graph = AdjacencyGraph::with_nodes(2);
/// graph.add_edge(0, 1)?;
/// let mut repeated = RepeatedNodeList::seed();
/// let mut sampler = RngSampler::seeded(3);
///
/// let n_current = extend_seed(20, 15, &mut graph, &mut repeated, 2, &mut sampler)?;
/// assert_eq!(n_current, 20);
/// assert_eq!(graph.node_count(), 20);
/// assert_eq!(repeated.len(), 2 * graph.edge_count());
/// # Ok::<(), ddsf_core::GeneratorError>(())
/// ```
#[instrument(
    name = "core.extend_seed",
    err,
    skip(graph, repeated, sampler),
    fields(nodes = n, edges = m, start = n_current)
)]
pub fn extend_seed<G, S>(
    n: usize,
    m: usize,
    graph: &mut G,
    repeated: &mut RepeatedNodeList,
    mut n_current: usize,
    sampler: &mut S,
) -> Result<usize>
where
    G: Graph,
    S: RandomSampler,
{
    let budget = signed(m);
    while n_current < n {
        let owed = budget.saturating_sub(signed(repeated.edge_count()));
        let deg_av = average_degree(n - n_current, owed.saturating_mul(2))?;
        let k = round_degree(deg_av, sampler);
        attach(n_current, repeated, graph, k, sampler)?;
        n_current += 1;
    }
    debug!(
        nodes = n_current,
        edges = graph.edge_count(),
        "seed network extended"
    );
    Ok(n_current)
}

/// Turns a fractional target degree into an attachment degree.
///
/// Targets below one become one, so every node joins the graph. Otherwise a
/// uniform draw below the fractional part yields `floor(deg_av)` and any other
/// draw yields `floor(deg_av) + 1`. The mean is `floor(deg_av) + 1 - fraction`,
/// so whole-number targets always round up.
///
/// # Examples
/// ```
/// use ddsf_core::{RngSampler, round_degree};
///
/// let mut sampler = RngSampler::seeded(9);
/// assert_eq!(round_degree(0.3, &mut sampler), 1);
/// assert_eq!(round_degree(4.0, &mut sampler), 5);
/// assert!(matches!(round_degree(2.5, &mut sampler), 2 | 3));
/// ```
pub fn round_degree<S: RandomSampler>(deg_av: f64, sampler: &mut S) -> usize {
    if deg_av < 1.0 {
        return 1;
    }
    let floor = deg_av.floor();
    let fraction = deg_av - floor;
    let base = floor as usize;
    if sampler.uniform01() < fraction {
        base
    } else {
        base + 1
    }
}

fn signed(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}
