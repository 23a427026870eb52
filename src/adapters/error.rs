//! Catalog loading errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building or loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog path does not exist
    #[error("catalog not found: {}", path.display())]
    NotFound {
        /// The missing path
        path: PathBuf,
    },

    /// A file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A catalog directory could not be walked
    #[error("failed to scan {}: {source}", path.display())]
    Walk {
        /// Directory being walked
        path: PathBuf,
        /// Underlying walk error
        #[source]
        source: walkdir::Error,
    },

    /// A file is not valid catalog JSON
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Top-level JSON value is neither an object nor an array
    #[error("{}: expected an object keyed by item ID or an array of items", path.display())]
    UnexpectedShape {
        /// Offending file
        path: PathBuf,
    },

    /// An array entry has no `_id`
    #[error("{}: item at index {index} has no _id", path.display())]
    MissingId {
        /// Offending file
        path: PathBuf,
        /// Position in the array
        index: usize,
    },

    /// The same item ID was defined twice
    #[error("duplicate item ID: {id}")]
    DuplicateId {
        /// The repeated ID
        id: String,
    },
}
