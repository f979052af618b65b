//! Benchmark setup error type.

use ddsf_core::GeneratorError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Generator configuration or growth failed.
    #[error("graph generation failed for {params}: {source}")]
    Generator {
        /// Rendered parameters of the failing run.
        params: String,
        /// Underlying generator failure.
        #[source]
        source: GeneratorError,
    },
    /// Preparing a seed network outside the measured loop failed.
    #[error("seed preparation failed: {0}")]
    Seed(#[from] GeneratorError),
}
