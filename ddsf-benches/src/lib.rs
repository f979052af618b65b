//! Benchmark support crate for ddsf.
//!
//! Provides the parameter sweep and setup error type used by the Criterion
//! benchmarks of the generation phases.

pub mod error;
pub mod params;
