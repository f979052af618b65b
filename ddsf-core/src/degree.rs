//! Average-degree arithmetic.

use crate::error::{GeneratorError, Result};

/// Divides a degree total by a node count.
///
/// The helper is direction-agnostic: pass `2m` for the average degree of an
/// undirected graph with `m` edges, or `m` for a directed one. The total is
/// signed because the generator asks for the degree still owed to the
/// remaining nodes, which turns negative once the edge budget is spent.
///
/// # Errors
/// Returns [`GeneratorError::ZeroNodes`] when `nodes == 0`.
///
/// # Examples
/// ```
/// use ddsf_core::average_degree;
///
/// assert_eq!(average_degree(10, 30)?, 3.0);
/// assert_eq!(average_degree(4, -2)?, -0.5);
/// # Ok::<(), ddsf_core::GeneratorError>(())
/// ```
pub fn average_degree(nodes: usize, degree_total: i64) -> Result<f64> {
    if nodes == 0 {
        return Err(GeneratorError::ZeroNodes);
    }
    Ok(degree_total as f64 / nodes as f64)
}

/// Convention used to turn an edge count into a degree total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgeDirection {
    /// Every edge contributes to the degree of both endpoints.
    #[default]
    Undirected,
    /// Every edge contributes to the degree of one endpoint.
    Directed,
}

impl EdgeDirection {
    /// Returns the mean degree of a graph with `nodes` nodes and `edges` edges.
    ///
    /// # Errors
    /// Returns [`GeneratorError::ZeroNodes`] when `nodes == 0`.
    ///
    /// # Examples
    /// ```
    /// use ddsf_core::EdgeDirection;
    ///
    /// assert_eq!(EdgeDirection::Undirected.mean_degree(50, 120)?, 4.8);
    /// assert_eq!(EdgeDirection::Directed.mean_degree(50, 120)?, 2.4);
    /// # Ok::<(), ddsf_core::GeneratorError>(())
    /// ```
    pub fn mean_degree(self, nodes: usize, edges: usize) -> Result<f64> {
        let edges = i64::try_from(edges).unwrap_or(i64::MAX);
        let total = match self {
            Self::Undirected => edges.saturating_mul(2),
            Self::Directed => edges,
        };
        average_degree(nodes, total)
    }
}
