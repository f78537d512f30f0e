//! Errors raised by the instance crate.

use thiserror::Error;

/// Errors raised while decoding bindings or rendering queries.
#[derive(Error, Debug)]
pub enum InstanceError {
    /// A result row lacks a required cell.
    #[error("Malformed binding at row {index}: missing '{field}'")]
    MalformedBinding {
        /// Zero-based row index.
        index: usize,
        /// Name of the missing cell.
        field: &'static str,
    },

    /// A result cell carries a term type that cannot appear in that position.
    #[error("Unsupported term at row {index}: '{field}' has type '{kind}'")]
    UnsupportedTerm {
        /// Zero-based row index.
        index: usize,
        /// Name of the offending cell.
        field: &'static str,
        /// The term type found.
        kind: String,
    },

    /// A URI cannot be embedded in a query.
    #[error("Invalid IRI: {iri}")]
    InvalidIri {
        /// The rejected URI.
        iri: String,
    },

    /// A language tag cannot be embedded in a query.
    #[error("Invalid language tag: {lang}")]
    InvalidLanguage {
        /// The rejected tag.
        lang: String,
    },

    /// The query result is not valid JSON in the expected shape.
    #[error("Invalid query result: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for instance operations.
pub type Result<T> = std::result::Result<T, InstanceError>;
