//! Command-line interface for the ddsf generator.
//!
//! The `generate` command grows one graph, prints a short summary and can
//! write the edge list to a file.

mod commands;

pub use commands::{
    Cli, CliError, Command, GenerateCommand, GenerationSummary, render_summary, run_cli,
    write_edge_list,
};

#[cfg(test)]
mod test_helpers;
