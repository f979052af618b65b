//! Degree-weighted sampling pool for preferential attachment.

use crate::graph::NodeId;

/// Sequence of node identifiers in which every node appears once per edge
/// endpoint it holds.
///
/// Drawing a uniform position from the list is the same as drawing a node with
/// probability proportional to its degree, which is all preferential
/// attachment needs. The list length is always twice the edge count.
///
/// # Examples
/// ```
/// use ddsf_core::RepeatedNodeList;
///
/// let mut repeated = RepeatedNodeList::seed();
/// repeated.record_edge(1, 2);
/// assert_eq!(repeated.as_slice(), [0, 1, 1, 2]);
/// assert_eq!(repeated.edge_count(), 2);
/// assert_eq!(repeated.multiplicity(1), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepeatedNodeList {
    nodes: Vec<NodeId>,
    multiplicities: Vec<usize>,
    distinct: usize,
}

impl RepeatedNodeList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the list matching the initial graph: nodes 0 and 1 joined by
    /// one edge.
    #[must_use]
    pub fn seed() -> Self {
        let mut list = Self::new();
        list.record_edge(0, 1);
        list
    }

    /// Appends both endpoints of a newly inserted edge.
    pub fn record_edge(&mut self, source: NodeId, target: NodeId) {
        self.push(source);
        self.push(target);
    }

    fn push(&mut self, node: NodeId) {
        if self.multiplicities.len() <= node {
            self.multiplicities.resize(node + 1, 0);
        }
        if let Some(count) = self.multiplicities.get_mut(node) {
            if *count == 0 {
                self.distinct += 1;
            }
            *count += 1;
        }
        self.nodes.push(node);
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the list holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of edges the list accounts for.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.len() / 2
    }

    /// Returns how many times `node` occurs, which equals its degree.
    #[must_use]
    pub fn multiplicity(&self, node: NodeId) -> usize {
        self.multiplicities.get(node).copied().unwrap_or_default()
    }

    /// Returns the number of distinct nodes present, which bounds the degree
    /// a single attachment step can request.
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        self.distinct
    }

    /// Returns the entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[NodeId] {
        &self.nodes
    }
}
