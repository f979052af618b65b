//! DDSF core library.
//!
//! Grows scale-free graphs whose average degree approximates a target taken
//! from a real network. Construction runs in two phases that share one
//! preferential-attachment primitive: a near-complete seed grown until it is
//! larger than the target degree, then an extension phase in which every new
//! node receives a randomly rounded share of the edges still owed.

mod attachment;
mod degree;
mod error;
mod generator;
mod graph;
mod growth;
mod repeated;
mod sampler;
#[cfg(test)]
mod test_utils;

pub use crate::{
    attachment::attach,
    degree::{EdgeDirection, average_degree},
    error::{GeneratorError, GeneratorErrorCode, Result},
    generator::{DEFAULT_RNG_SEED, Generator, GeneratorBuilder, generate},
    graph::{AdjacencyGraph, Graph, NodeId},
    growth::{build_seed, extend_seed, round_degree},
    repeated::RepeatedNodeList,
    sampler::{RandomSampler, RngSampler},
};

#[cfg(test)]
mod property;
