//! Graph capability consumed by the generator and the adjacency-list graph
//! returned to callers.
//!
//! The generator only needs to introduce nodes in order, join them with
//! undirected edges, and count both. [`Graph`] captures that surface so the
//! growth algorithm can target any storage; [`AdjacencyGraph`] is the
//! implementation used by default.

use crate::error::{GeneratorError, Result};

/// Identifier of a node. Identifiers are contiguous from zero and assigned in
/// the order nodes are introduced.
pub type NodeId = usize;

/// Mutable simple undirected graph grown one node at a time.
///
/// # Examples
/// ```
/// use ddsf_core::{AdjacencyGraph, Graph};
///
/// let mut graph = AdjacencyGraph::new();
/// let a = graph.add_node();
/// let b = graph.add_node();
/// assert!(graph.add_edge(a, b)?);
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// # Ok::<(), ddsf_core::GeneratorError>(())
/// ```
pub trait Graph {
    /// Returns the number of nodes, which is also the next free identifier.
    fn node_count(&self) -> usize;

    /// Returns the number of undirected edges.
    fn edge_count(&self) -> usize;

    /// Introduces a new isolated node and returns its identifier.
    fn add_node(&mut self) -> NodeId;

    /// Joins two existing, distinct nodes.
    ///
    /// Returns `true` when the edge was inserted and `false` when it was
    /// already present.
    ///
    /// # Errors
    /// Returns [`GeneratorError::SelfLoop`] when `left == right` and
    /// [`GeneratorError::UnknownNode`] when either endpoint is missing.
    fn add_edge(&mut self, left: NodeId, right: NodeId) -> Result<bool>;
}

/// Adjacency-list [`Graph`] with contiguous node identifiers.
///
/// # Examples
/// ```
/// use ddsf_core::{AdjacencyGraph, Graph};
///
/// let mut graph = AdjacencyGraph::with_nodes(3);
/// graph.add_edge(0, 1)?;
/// graph.add_edge(2, 1)?;
/// assert_eq!(graph.degree(1), Some(2));
/// assert_eq!(graph.edges().collect::<Vec<_>>(), [(0, 1), (1, 2)]);
/// # Ok::<(), ddsf_core::GeneratorError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    adjacency: Vec<Vec<NodeId>>,
    edge_count: usize,
}

impl AdjacencyGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph of `nodes` isolated nodes.
    #[must_use]
    pub fn with_nodes(nodes: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); nodes],
            edge_count: 0,
        }
    }

    /// Returns the degree of `node`, or `None` when it does not exist.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> Option<usize> {
        self.adjacency.get(node).map(Vec::len)
    }

    /// Returns the neighbours of `node` in insertion order.
    #[must_use]
    pub fn neighbours(&self, node: NodeId) -> Option<&[NodeId]> {
        self.adjacency.get(node).map(Vec::as_slice)
    }

    /// Returns whether `left` and `right` are adjacent.
    #[must_use]
    pub fn has_edge(&self, left: NodeId, right: NodeId) -> bool {
        self.adjacency
            .get(left)
            .is_some_and(|neighbours| neighbours.contains(&right))
    }

    /// Returns the degree of every node indexed by identifier.
    #[must_use]
    pub fn degrees(&self) -> Vec<usize> {
        self.adjacency.iter().map(Vec::len).collect()
    }

    /// Iterates over every edge once as `(low, high)`, ordered by `low` then by
    /// insertion.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(node, neighbours)| {
                neighbours
                    .iter()
                    .filter(move |&&other| node < other)
                    .map(move |&other| (node, other))
            })
    }

    fn check_node(&self, node: NodeId) -> Result<()> {
        if node < self.adjacency.len() {
            Ok(())
        } else {
            Err(GeneratorError::UnknownNode {
                node,
                nodes: self.adjacency.len(),
            })
        }
    }
}

impl Graph for AdjacencyGraph {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn add_node(&mut self) -> NodeId {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    fn add_edge(&mut self, left: NodeId, right: NodeId) -> Result<bool> {
        if left == right {
            return Err(GeneratorError::SelfLoop { node: left });
        }
        self.check_node(left)?;
        self.check_node(right)?;
        if self.has_edge(left, right) {
            return Ok(false);
        }
        if let Some(neighbours) = self.adjacency.get_mut(left) {
            neighbours.push(right);
        }
        if let Some(neighbours) = self.adjacency.get_mut(right) {
            neighbours.push(left);
        }
        self.edge_count += 1;
        Ok(true)
    }
}
