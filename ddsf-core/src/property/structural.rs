//! Structural checks applied to every generated graph.

use ddsf_test_support::graph_metrics::{
    connected_components, degree_sequence, duplicate_edge_count, self_loop_count,
};
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    AdjacencyGraph, GeneratorBuilder, GeneratorError, Graph, RepeatedNodeList, RngSampler,
    build_seed, extend_seed,
};

use super::strategies::GenerationFixture;

fn generate(fixture: &GenerationFixture) -> Result<AdjacencyGraph, TestCaseError> {
    GeneratorBuilder::new(fixture.nodes, fixture.edges)
        .with_rng_seed(fixture.seed)
        .build()
        .and_then(|generator| generator.generate())
        .map_err(|err| TestCaseError::fail(format!("generation failed for {fixture:?}: {err}")))
}

fn ensure(condition: bool, message: impl FnOnce() -> String) -> TestCaseResult {
    if condition {
        Ok(())
    } else {
        Err(TestCaseError::fail(message()))
    }
}

/// Node count, connectivity, simplicity and a loose edge-count envelope.
pub(super) fn run_structural_property(fixture: &GenerationFixture) -> TestCaseResult {
    let graph = generate(fixture)?;
    let edges: Vec<_> = graph.edges().collect();

    ensure(graph.node_count() == fixture.nodes, || {
        format!("expected {} nodes, got {}", fixture.nodes, graph.node_count())
    })?;
    ensure(edges.len() == graph.edge_count(), || {
        format!("edge iterator yielded {} of {}", edges.len(), graph.edge_count())
    })?;
    ensure(self_loop_count(&edges) == 0, || "self-loop present".to_owned())?;
    ensure(duplicate_edge_count(&edges) == 0, || "duplicate edge present".to_owned())?;

    let components = connected_components(fixture.nodes, &edges);
    ensure(components == 1, || format!("graph split into {components} components"))?;

    let degrees = degree_sequence(fixture.nodes, &edges);
    ensure(degrees == graph.degrees(), || "degree sequence disagrees".to_owned())?;

    let produced = graph.edge_count();
    ensure(
        produced >= fixture.nodes - 1 && produced <= 2 * fixture.edges,
        || format!("{produced} edges outside [n - 1, 2m] for {fixture:?}"),
    )
}

/// Every node occurs in the repeated node list exactly once per incident
/// edge after both growth phases.
pub(super) fn run_repeated_list_property(fixture: &GenerationFixture) -> TestCaseResult {
    let mut graph = AdjacencyGraph::with_nodes(2);
    let mut repeated = RepeatedNodeList::seed();
    let mut sampler = RngSampler::seeded(fixture.seed);
    let fail = |err: GeneratorError| TestCaseError::fail(err.to_string());

    graph.add_edge(0, 1).map_err(fail)?;
    let target = 2.0 * fixture.edges as f64 / fixture.nodes as f64;
    let seeded = build_seed(&mut graph, &mut repeated, target, 2, &mut sampler).map_err(fail)?;
    extend_seed(
        fixture.nodes,
        fixture.edges,
        &mut graph,
        &mut repeated,
        seeded,
        &mut sampler,
    )
    .map_err(fail)?;

    ensure(repeated.len() == 2 * graph.edge_count(), || {
        format!("list holds {} entries for {} edges", repeated.len(), graph.edge_count())
    })?;
    for node in 0..graph.node_count() {
        let degree = graph.degree(node).unwrap_or_default();
        let multiplicity = repeated.multiplicity(node);
        ensure(multiplicity == degree, || {
            format!("node {node} listed {multiplicity} times with degree {degree}")
        })?;
    }
    Ok(())
}

/// Two runs with the same seed produce identical graphs.
pub(super) fn run_reproducibility_property(fixture: &GenerationFixture) -> TestCaseResult {
    let first = generate(fixture)?;
    let second = generate(fixture)?;
    ensure(first == second, || format!("runs diverged for {fixture:?}"))
}
