//! Structural measurements over plain edge lists.
//!
//! The helpers take `(node_count, edges)` pairs rather than a concrete graph
//! type so that any crate in the workspace can feed them.

use std::collections::HashSet;

/// Computes the degree of each node from an edge list.
///
/// Every edge contributes one to both endpoints. Endpoints outside
/// `0..node_count` are ignored.
///
/// # Examples
/// ```
/// use ddsf_test_support::graph_metrics::degree_sequence;
///
/// assert_eq!(degree_sequence(3, &[(0, 1), (1, 2)]), [1, 2, 1]);
/// ```
#[must_use]
pub fn degree_sequence(node_count: usize, edges: &[(usize, usize)]) -> Vec<usize> {
    let mut degrees = vec![0_usize; node_count];
    for &(left, right) in edges {
        for endpoint in [left, right] {
            if let Some(degree) = degrees.get_mut(endpoint) {
                *degree += 1;
            }
        }
    }
    degrees
}

/// Counts connected components using union-find with path compression.
///
/// # Examples
/// ```
/// use ddsf_test_support::graph_metrics::connected_components;
///
/// assert_eq!(connected_components(4, &[(0, 1), (2, 3)]), 2);
/// assert_eq!(connected_components(0, &[]), 0);
/// ```
#[must_use]
pub fn connected_components(node_count: usize, edges: &[(usize, usize)]) -> usize {
    fn find(parent: &mut [usize], mut node: usize) -> usize {
        let mut root = node;
        while parent[root] != root {
            root = parent[root];
        }
        while parent[node] != root {
            let next = parent[node];
            parent[node] = root;
            node = next;
        }
        root
    }

    let mut parent: Vec<usize> = (0..node_count).collect();
    for &(left, right) in edges {
        if left >= node_count || right >= node_count {
            continue;
        }
        let root_left = find(&mut parent, left);
        let root_right = find(&mut parent, right);
        if root_left != root_right {
            parent[root_right] = root_left;
        }
    }

    (0..node_count)
        .filter(|&node| find(&mut parent, node) == node)
        .count()
}

/// Counts edges whose endpoints coincide.
#[must_use]
pub fn self_loop_count(edges: &[(usize, usize)]) -> usize {
    edges.iter().filter(|(left, right)| left == right).count()
}

/// Counts edges that repeat an earlier edge, ignoring orientation.
///
/// # Examples
/// ```
/// use ddsf_test_support::graph_metrics::duplicate_edge_count;
///
/// assert_eq!(duplicate_edge_count(&[(0, 1), (1, 0), (1, 2)]), 1);
/// ```
#[must_use]
pub fn duplicate_edge_count(edges: &[(usize, usize)]) -> usize {
    let mut seen = HashSet::with_capacity(edges.len());
    edges
        .iter()
        .filter(|&&(left, right)| !seen.insert((left.min(right), left.max(right))))
        .count()
}

/// Estimates the exponent of a power-law degree distribution.
///
/// Uses the discrete maximum-likelihood approximation of Clauset, Shalizi
/// and Newman over every degree at or above `min_degree`:
/// `1 + n / sum(ln(k / (min_degree - 0.5)))`. Returns `None` when
/// `min_degree` is zero or fewer than two degrees qualify.
///
/// # Examples
/// ```
/// use ddsf_test_support::graph_metrics::power_law_exponent;
///
/// assert_eq!(power_law_exponent(&[0, 0, 1], 1), None);
/// let alpha = power_law_exponent(&[1, 1, 1, 2, 2, 4], 1).expect("enough samples");
/// assert!(alpha > 1.0);
/// ```
#[must_use]
pub fn power_law_exponent(degrees: &[usize], min_degree: usize) -> Option<f64> {
    if min_degree == 0 {
        return None;
    }
    let offset = min_degree as f64 - 0.5;
    let (count, log_sum) = degrees
        .iter()
        .filter(|&&degree| degree >= min_degree)
        .fold((0_usize, 0.0_f64), |(count, sum), &degree| {
            (count + 1, sum + (degree as f64 / offset).ln())
        });
    if count < 2 || log_sum <= 0.0 {
        return None;
    }
    Some(1.0 + count as f64 / log_sum)
}
