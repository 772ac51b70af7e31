use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all povercat operations.
#[derive(Debug, Error, Diagnostic)]
pub enum PovercatError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configured version catalog does not exist on disk.
    #[error("Version catalog file not found: {}", .path.display())]
    #[diagnostic(help("Check the `catalogs` list in Povercat.toml or the paths given on the command line"))]
    CatalogNotFound { path: PathBuf },

    /// A version catalog could not be read or is not valid TOML.
    #[error("Invalid version catalog {}: {message}", .path.display())]
    #[diagnostic(help("Version catalogs must be valid TOML"))]
    Catalog { path: PathBuf, message: String },

    /// Invalid or malformed generator configuration (Povercat.toml).
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check your Povercat.toml for syntax errors"))]
    Config { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type PovercatResult<T> = miette::Result<T>;
