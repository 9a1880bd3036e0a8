//! CLI error types.

use std::path::PathBuf;

use healthfirst_core::appointments::QueryError;
use thiserror::Error;
use uuid::Uuid;

/// Result type alias for the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Appointment not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid status: {0}")]
    Status(#[from] QueryError),
}
