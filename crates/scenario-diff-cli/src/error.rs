//! Error types for the command-line front end.

use std::path::PathBuf;

use scenario_diff::ParseError;
use thiserror::Error;

/// Errors raised while configuring the command or loading its inputs.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path that failed; `-` for stdin.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Strict parsing rejected an input.
    #[error("{}: {source}", path.display())]
    Parse {
        /// Path of the rejected input.
        path: PathBuf,
        /// The strict-mode violation.
        #[source]
        source: ParseError,
    },
}
