use placard_core::{ExportError, StudioError};
use thiserror::Error;

/// Errors surfaced by the command line tool.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Studio(#[from] StudioError),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Failed to read capture image: {0}")]
    Capture(#[from] ExportError),
}
