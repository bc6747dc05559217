//! Error types for scanning and reporting

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while discovering or loading ports.
#[derive(Error, Debug)]
pub enum PortError {
    /// A file or directory could not be read.
    #[error("IO error at {}: {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// A manifest is not valid TOML or does not match the schema.
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        /// Manifest path.
        path: PathBuf,
        /// Underlying error.
        source: toml::de::Error,
    },

    /// A manifest parsed but describes an impossible port.
    #[error("Invalid port {}: {reason}", path.display())]
    Invalid {
        /// Manifest path.
        path: PathBuf,
        /// What is wrong with it.
        reason: String,
    },

    /// Two directories declare the same port name.
    #[error("Duplicate port '{name}' in {} and {}", first.display(), second.display())]
    Duplicate {
        /// The repeated name.
        name: String,
        /// Directory that declared it first.
        first: PathBuf,
        /// Directory that declared it again.
        second: PathBuf,
    },

    /// Directory traversal failed.
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl PortError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised while producing the report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Scanning or formatting a port failed.
    #[error(transparent)]
    Port(#[from] PortError),

    /// Writing the report failed.
    #[error("Failed to write report: {0}")]
    Write(#[from] std::io::Error),
}
