//! Registry errors.

use thiserror::Error;

/// Errors raised by [`crate::PrefixRegistry`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrefixError {
    /// A compact URI used a slug that is not registered.
    #[error("Unknown prefix: '{slug}'")]
    UnknownPrefix {
        /// The unregistered slug.
        slug: String,
    },

    /// Two namespaces were registered under the same slug.
    #[error("Slug '{slug}' is registered more than once")]
    DuplicateSlug {
        /// The repeated slug.
        slug: String,
    },

    /// Two slugs were registered for the same namespace URI.
    #[error("Namespace '{iri}' is registered under both '{first}' and '{second}'")]
    DuplicateNamespace {
        /// The repeated namespace URI.
        iri: String,
        /// Slug registered first.
        first: String,
        /// Slug registered second.
        second: String,
    },
}

/// Result alias for registry operations.
pub type Result<T> = std::result::Result<T, PrefixError>;
