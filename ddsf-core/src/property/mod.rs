//! Property-based suites for graph generation.
//!
//! Covers structural invariants of generated graphs (size, connectivity,
//! simplicity), agreement between the graph and the repeated node list, and
//! reproducibility under a fixed seed.

mod strategies;
mod structural;
