//! Small helpers shared across CLI tests.

use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, Command, GenerateCommand, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn generate_cli(nodes: usize, edges: usize, output: Option<PathBuf>) -> Cli {
    Cli {
        command: Command::Generate(GenerateCommand {
            nodes,
            edges,
            average_degree: None,
            seed: 7,
            output,
        }),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
