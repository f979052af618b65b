//! Preferential attachment of a single new node.
//!
//! Sources are drawn by position from the [`RepeatedNodeList`], so a node is
//! picked with probability proportional to its degree without any explicit
//! degree bookkeeping. A node holding several positions can come up more than
//! once in one draw; each missing source is then redrawn from the positions of
//! nodes not chosen yet, which keeps the sources distinct and the graph
//! simple.

use tracing::trace;

use crate::{
    error::{GeneratorError, Result},
    graph::{Graph, NodeId},
    repeated::RepeatedNodeList,
    sampler::RandomSampler,
};

/// Attaches `new_node` to `k` distinct existing nodes chosen with probability
/// proportional to their degree.
///
/// On success the graph gains one node and exactly `k` edges, and `repeated`
/// grows by `2 * k` entries. Nothing is mutated when an error is returned.
///
/// # Errors
/// - [`GeneratorError::UnexpectedNodeId`] when `new_node` is not the graph's
///   next identifier.
/// - [`GeneratorError::InvalidAttachmentDegree`] when `k == 0`.
/// - [`GeneratorError::InsufficientCandidates`] when `k` exceeds the number
///   of distinct nodes in `repeated`.
/// - [`GeneratorError::PositionOutOfRange`] when `sampler` yields a position
///   outside `repeated`.
///
/// # Examples
/// ```
/// use ddsf_core::{AdjacencyGraph, Graph, RepeatedNodeList, RngSampler, attach};
///
/// let mut graph = AdjacencyGraph::with_nodes(2);
/// graph.add_edge(0, 1)?;
/// let mut repeated = RepeatedNodeList::seed();
/// let mut sampler = RngSampler::seeded(1);
///
/// attach(2, &mut repeated, &mut graph, 2, &mut sampler)?;
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.degree(2), Some(2));
/// assert_eq!(repeated.len(), 6);
/// # Ok::<(), ddsf_core::GeneratorError>(())
/// ```
pub fn attach<G, S>(
    new_node: NodeId,
    repeated: &mut RepeatedNodeList,
    graph: &mut G,
    k: usize,
    sampler: &mut S,
) -> Result<()>
where
    G: Graph,
    S: RandomSampler,
{
    let expected = graph.node_count();
    if new_node != expected {
        return Err(GeneratorError::UnexpectedNodeId {
            got: new_node,
            expected,
        });
    }
    if k == 0 {
        return Err(GeneratorError::InvalidAttachmentDegree { got: k });
    }
    let available = repeated.distinct_count();
    if k > available {
        return Err(GeneratorError::InsufficientCandidates {
            requested: k,
            available,
        });
    }

    let sources = draw_sources(repeated.as_slice(), k, sampler)?;

    let node = graph.add_node();
    for source in sources {
        graph.add_edge(source, node)?;
        repeated.record_edge(source, node);
    }
    Ok(())
}

/// Draws `k` distinct nodes from `entries`. Callers guarantee that `entries`
/// holds at least `k` distinct nodes.
fn draw_sources<S: RandomSampler>(
    entries: &[NodeId],
    k: usize,
    sampler: &mut S,
) -> Result<Vec<NodeId>> {
    let mut sources = Vec::with_capacity(k);
    for node in sampler.sample_without_replacement(entries, k)? {
        if !sources.contains(&node) {
            sources.push(node);
        }
    }
    while sources.len() < k {
        let remaining: Vec<NodeId> = entries
            .iter()
            .copied()
            .filter(|node| !sources.contains(node))
            .collect();
        trace!(drawn = sources.len(), wanted = k, "redrawing duplicate source");
        let Some(&node) = sampler.sample_without_replacement(&remaining, 1)?.first() else {
            return Err(GeneratorError::InsufficientCandidates {
                requested: k,
                available: sources.len(),
            });
        };
        sources.push(node);
    }
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AdjacencyGraph, RngSampler, test_utils::ScriptedSampler};
    use rstest::{fixture, rstest};

    struct Seeded {
        graph: AdjacencyGraph,
        repeated: RepeatedNodeList,
    }

    #[fixture]
    fn seeded() -> Seeded {
        let mut graph = AdjacencyGraph::with_nodes(2);
        graph.add_edge(0, 1).expect("seed edge must insert");
        Seeded {
            graph,
            repeated: RepeatedNodeList::seed(),
        }
    }

    #[rstest]
    fn attaching_grows_graph_and_list_together(mut seeded: Seeded) {
        let mut sampler = RngSampler::seeded(5);
        for (node, k) in [(2, 2), (3, 3), (4, 2), (5, 1), (6, 4)] {
            let edges_before = seeded.graph.edge_count();
            let entries_before = seeded.repeated.len();
            attach(node, &mut seeded.repeated, &mut seeded.graph, k, &mut sampler)
                .expect("attachment is satisfiable");
            assert_eq!(seeded.graph.degree(node), Some(k));
            assert_eq!(seeded.graph.edge_count(), edges_before + k);
            assert_eq!(seeded.repeated.len(), entries_before + 2 * k);
        }
        for node in 0..seeded.graph.node_count() {
            assert_eq!(
                seeded.repeated.multiplicity(node),
                seeded.graph.degree(node).unwrap_or_default()
            );
        }
    }

    #[rstest]
    fn distinct_draws_are_used_as_is(mut seeded: Seeded) {
        let mut sampler = ScriptedSampler::new(vec![], vec![vec![1, 0]]);
        attach(2, &mut seeded.repeated, &mut seeded.graph, 2, &mut sampler)
            .expect("two nodes are available");
        assert_eq!(seeded.repeated.as_slice(), [0, 1, 1, 2, 0, 2]);
    }

    #[rstest]
    fn repeated_draws_are_redrawn_among_unchosen_nodes(mut seeded: Seeded) {
        let mut sampler = ScriptedSampler::new(vec![], vec![vec![1]]);
        attach(2, &mut seeded.repeated, &mut seeded.graph, 1, &mut sampler)
            .expect("one node is available");
        assert_eq!(seeded.repeated.as_slice(), [0, 1, 1, 2]);

        // Positions 1 and 2 both hold node 1. The redraw runs over the
        // unchosen entries [0, 2] and takes position 1, node 2.
        let mut sampler = ScriptedSampler::new(vec![], vec![vec![1, 2], vec![1]]);
        attach(3, &mut seeded.repeated, &mut seeded.graph, 2, &mut sampler)
            .expect("three nodes are available");
        assert_eq!(seeded.graph.neighbours(3), Some(&[1, 2][..]));
        assert!(!seeded.graph.has_edge(0, 3));
        assert_eq!(seeded.repeated.as_slice(), [0, 1, 1, 2, 1, 3, 2, 3]);
        assert_eq!(seeded.repeated.multiplicity(1), 3);
    }

    #[rstest]
    fn faulty_sampler_positions_fail_without_mutation(mut seeded: Seeded) {
        let mut sampler = ScriptedSampler::new(vec![], vec![vec![4]]);
        let err = attach(2, &mut seeded.repeated, &mut seeded.graph, 1, &mut sampler)
            .expect_err("position 4 is past the two seed entries");
        assert_eq!(
            err,
            GeneratorError::PositionOutOfRange {
                position: 4,
                length: 2,
            }
        );
        assert_eq!(seeded.graph.node_count(), 2);
        assert_eq!(seeded.repeated, RepeatedNodeList::seed());
    }

    #[rstest]
    fn zero_degree_is_rejected(mut seeded: Seeded) {
        let mut sampler = RngSampler::seeded(5);
        let err = attach(2, &mut seeded.repeated, &mut seeded.graph, 0, &mut sampler)
            .expect_err("k = 0 must fail");
        assert_eq!(err, GeneratorError::InvalidAttachmentDegree { got: 0 });
        assert_eq!(seeded.graph.node_count(), 2);
    }

    #[rstest]
    fn oversized_degree_is_rejected_without_mutation(mut seeded: Seeded) {
        let mut sampler = RngSampler::seeded(5);
        let err = attach(2, &mut seeded.repeated, &mut seeded.graph, 3, &mut sampler)
            .expect_err("k above the candidate count must fail");
        assert_eq!(
            err,
            GeneratorError::InsufficientCandidates {
                requested: 3,
                available: 2,
            }
        );
        assert_eq!(seeded.graph.node_count(), 2);
        assert_eq!(seeded.repeated, RepeatedNodeList::seed());
    }

    #[rstest]
    fn degree_is_bounded_by_distinct_nodes_not_entries(mut seeded: Seeded) {
        seeded.repeated.record_edge(0, 1);
        let mut sampler = RngSampler::seeded(5);
        let err = attach(2, &mut seeded.repeated, &mut seeded.graph, 3, &mut sampler)
            .expect_err("four entries hold only two nodes");
        assert_eq!(
            err,
            GeneratorError::InsufficientCandidates {
                requested: 3,
                available: 2,
            }
        );
    }

    #[rstest]
    fn empty_list_offers_no_candidates() {
        let mut graph = AdjacencyGraph::new();
        let mut repeated = RepeatedNodeList::new();
        let mut sampler = RngSampler::seeded(5);
        let err = attach(0, &mut repeated, &mut graph, 1, &mut sampler)
            .expect_err("nothing to attach to");
        assert_eq!(
            err,
            GeneratorError::InsufficientCandidates {
                requested: 1,
                available: 0,
            }
        );
        assert_eq!(graph.node_count(), 0);
    }

    #[rstest]
    #[case(0)]
    #[case(3)]
    fn out_of_order_node_is_rejected(mut seeded: Seeded, #[case] node: NodeId) {
        let mut sampler = RngSampler::seeded(5);
        let err = attach(node, &mut seeded.repeated, &mut seeded.graph, 1, &mut sampler)
            .expect_err("node must be the next identifier");
        assert_eq!(
            err,
            GeneratorError::UnexpectedNodeId {
                got: node,
                expected: 2,
            }
        );
    }
}
