//! Benchmark parameter types.

use std::fmt;

use ddsf_core::{Generator, GeneratorBuilder};

use crate::error::BenchSetupError;

/// Seed used for every benchmark graph.
pub const BENCH_SEED: u64 = 42;

/// Parameters for one generation benchmark run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerateBenchParams {
    /// Number of nodes in the generated graph.
    pub nodes: usize,
    /// Requested number of edges.
    pub edges: usize,
}

impl GenerateBenchParams {
    /// Builds a seeded [`Generator`] for these parameters.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::Generator`] when the parameters are
    /// rejected.
    pub fn generator(self) -> Result<Generator, BenchSetupError> {
        GeneratorBuilder::new(self.nodes, self.edges)
            .with_rng_seed(BENCH_SEED)
            .build()
            .map_err(|source| BenchSetupError::Generator {
                params: self.to_string(),
                source,
            })
    }
}

impl fmt::Display for GenerateBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.nodes, self.edges)
    }
}

/// Sizes covered by the generation benchmarks, from a sparse thousand-node
/// graph to a ten-thousand-node graph of mean degree ten.
pub const GENERATE_SWEEP: &[GenerateBenchParams] = &[
    GenerateBenchParams {
        nodes: 1_000,
        edges: 2_000,
    },
    GenerateBenchParams {
        nodes: 10_000,
        edges: 20_000,
    },
    GenerateBenchParams {
        nodes: 10_000,
        edges: 50_000,
    },
];
