//! Error types for the records crate.
//!
//! Loading fixture files is the only fallible operation here: the files may
//! be missing, malformed, or describe the same movie twice.

use thiserror::Error;

/// Errors that can occur while loading and indexing provider records
#[derive(Error, Debug)]
pub enum RecordError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// File content is not valid JSON for the expected record shape
    #[error("Parse error in {file}: {source}")]
    ParseError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two records share an identifier that must be unique
    #[error("Duplicate {entity} id: {id}")]
    DuplicateId { entity: String, id: String },

    /// A record is missing its canonical id, so it can never be joined
    #[error("{entity} with id {id} has no canonical id")]
    MissingCanonicalId { entity: String, id: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RecordError>;
