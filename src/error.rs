use miette::Diagnostic;
use thiserror::Error;

use crate::types::Location;

/// Main error type for tilegrid operations
#[derive(Error, Diagnostic, Debug)]
pub enum GridError {
    #[error("IO error: {0}")]
    #[diagnostic(code(tilegrid::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(tilegrid::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(tilegrid::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Location {location} is outside the {width}x{height} grid")]
    #[diagnostic(
        code(tilegrid::bounds),
        help("Rows and columns are zero-based and must be smaller than the grid size")
    )]
    OutOfBounds {
        location: Location,
        width: usize,
        height: usize,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(tilegrid::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, GridError>;
