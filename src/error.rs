//! Error types for precondition violations.
//!
//! Only operations with an input precondition return these. Everything else
//! in the crate is total.

use thiserror::Error;

/// Errors raised when an input does not have the shape an operation requires.
#[derive(Debug, Error)]
pub enum ReshapeError {
    /// A record value was expected to be a record itself.
    #[error("value at key '{key}' is not a record")]
    NotARecord { key: String },

    /// A sequence of key-value pairs was expected.
    #[error("expected a sequence of key-value pairs")]
    NotASequence,

    /// A sequence element is not a `[key, value]` pair with a string key.
    #[error("element {index} is not a [key, value] pair with a string key")]
    MalformedPair { index: usize },

    /// A nested record has no id field and cannot be extracted.
    #[error("record at '{path}' has no '{field}' field")]
    MissingId { field: String, path: String },

    /// A nested record's id is null, an array or an object.
    #[error("record at '{path}' has an '{field}' that cannot be used as a key")]
    InvalidId { field: String, path: String },

    /// A value could not be read as a tree node.
    #[error("invalid tree: {0}")]
    InvalidTree(#[from] serde_json::Error),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, ReshapeError>;
