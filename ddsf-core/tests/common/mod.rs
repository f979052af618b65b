use ddsf_core::{AdjacencyGraph, GeneratorBuilder};

/// Generates a graph with a fixed seed, panicking on invalid requests.
#[must_use]
pub fn seeded_graph(nodes: usize, edges: usize, seed: u64) -> AdjacencyGraph {
    GeneratorBuilder::new(nodes, edges)
        .with_rng_seed(seed)
        .build()
        .expect("configuration must be valid")
        .generate()
        .expect("generation must succeed")
}

/// Collects the graph's edges as `(low, high)` pairs.
#[must_use]
pub fn edge_list(graph: &AdjacencyGraph) -> Vec<(usize, usize)> {
    graph.edges().collect()
}
