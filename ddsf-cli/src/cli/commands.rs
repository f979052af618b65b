//! Command implementations and argument parsing for the ddsf CLI.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use ddsf_core::{
    AdjacencyGraph, DEFAULT_RNG_SEED, EdgeDirection, GeneratorBuilder, GeneratorError, Graph,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "ddsf", about = "Generate degree-driven scale-free graphs.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Grow one graph by preferential attachment.
    Generate(GenerateCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Number of nodes in the generated graph (at least 2).
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub nodes: usize,

    /// Approximate number of edges to generate (at least 1).
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub edges: usize,

    /// Target average degree measured on a real network. Defaults to
    /// `2 * edges / nodes`.
    #[arg(long = "average-degree")]
    pub average_degree: Option<f64>,

    /// Seed for the random number generator.
    #[arg(long, default_value_t = DEFAULT_RNG_SEED)]
    pub seed: u64,

    /// Write the edge list to this file, one `u v` pair per line.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Writing the edge list failed.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Graph generation failed.
    #[error(transparent)]
    Core(#[from] GeneratorError),
}

/// Outcome of a `generate` run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSummary {
    /// Node count of the generated graph.
    pub nodes: usize,
    /// Edge count of the generated graph.
    pub edges: usize,
    /// Undirected mean degree, `2 * edges / nodes`.
    pub mean_degree: f64,
    /// File the edge list was written to, if requested.
    pub output: Option<PathBuf>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when generation or output fails.
///
/// # Examples
/// ```
/// use ddsf_cli::cli::{Cli, Command, GenerateCommand, run_cli};
///
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         nodes: 10,
///         edges: 15,
///         average_degree: None,
///         seed: 1,
///         output: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.nodes, 10);
/// # Ok::<(), ddsf_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<GenerationSummary, CliError> {
    match cli.command {
        Command::Generate(command) => {
            Span::current().record("command", field::display("generate"));
            run_generate(command)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(nodes = command.nodes, edges = command.edges, seed = command.seed, output = field::Empty),
)]
pub(super) fn run_generate(command: GenerateCommand) -> Result<GenerationSummary, CliError> {
    let GenerateCommand {
        nodes,
        edges,
        average_degree,
        seed,
        output,
    } = command;

    let mut builder = GeneratorBuilder::new(nodes, edges).with_rng_seed(seed);
    if let Some(degree) = average_degree {
        builder = builder.with_average_degree(degree);
    }
    let graph = builder.build()?.generate()?;

    if let Some(path) = output.as_deref() {
        Span::current().record("output", field::display(path.display()));
        save_edge_list(&graph, path)?;
    }

    let summary = GenerationSummary {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        mean_degree: EdgeDirection::Undirected.mean_degree(graph.node_count(), graph.edge_count())?,
        output,
    };
    info!(
        nodes = summary.nodes,
        edges = summary.edges,
        mean_degree = summary.mean_degree,
        "command completed"
    );
    Ok(summary)
}

fn save_edge_list(graph: &AdjacencyGraph, path: &Path) -> Result<(), CliError> {
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    write_edge_list(graph, &mut writer).map_err(io_error)?;
    writer.flush().map_err(io_error)
}

/// Writes every edge of `graph` as a `u v` line with `u < v`, sorted.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// use ddsf_cli::cli::write_edge_list;
/// use ddsf_core::{AdjacencyGraph, Graph};
///
/// let mut graph = AdjacencyGraph::with_nodes(3);
/// graph.add_edge(2, 0)?;
/// graph.add_edge(1, 0)?;
/// let mut buffer = Vec::new();
/// write_edge_list(&graph, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "0 1\n0 2\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_edge_list(graph: &AdjacencyGraph, mut writer: impl Write) -> io::Result<()> {
    let mut edges: Vec<_> = graph.edges().collect();
    edges.sort_unstable();
    for (low, high) in edges {
        writeln!(writer, "{low} {high}")?;
    }
    Ok(())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// use ddsf_cli::cli::{GenerationSummary, render_summary};
///
/// let summary = GenerationSummary {
///     nodes: 10,
///     edges: 16,
///     mean_degree: 3.2,
///     output: None,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "nodes: 10\nedges: 16\nmean degree: 3.200\n"
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_summary(summary: &GenerationSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "nodes: {}", summary.nodes)?;
    writeln!(writer, "edges: {}", summary.edges)?;
    writeln!(writer, "mean degree: {:.3}", summary.mean_degree)?;
    if let Some(path) = &summary.output {
        writeln!(writer, "edge list: {}", path.display())?;
    }
    Ok(())
}
