//! Semantica namespace registry.
//!
//! The `semantica-vocab` crate holds the well-known namespace table used to
//! compact URIs into `slug:local` form, together with the reverse expansion
//! and the slug ↔ namespace conversions used to name search indexes.
//!
//! # Entry Point
//!
//! ```
//! let registry = semantica_vocab::PrefixRegistry::global();
//! assert_eq!(registry.shorten("http://schema.org/name"), "schema:name");
//! assert_eq!(
//!     registry.expand("schema:name").as_deref(),
//!     Ok("http://schema.org/name")
//! );
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod iri;
pub mod model;
pub mod namespaces;
pub mod registry;

pub use error::{PrefixError, Result};
pub use model::{iris, Namespace};
pub use registry::{PrefixRegistry, UriMode};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_count() {
        assert_eq!(PrefixRegistry::global().len(), 23);
    }

    #[test]
    fn registered_slugs() {
        let slugs: Vec<&str> = PrefixRegistry::global()
            .namespaces()
            .iter()
            .map(|ns| ns.slug)
            .collect();
        assert_eq!(
            slugs,
            [
                "base",
                "dbpedia",
                "dc",
                "dct",
                "ego",
                "esportes",
                "eureka",
                "event",
                "foaf",
                "g1",
                "geo",
                "glb",
                "organization",
                "owl",
                "person",
                "place",
                "rdf",
                "rdfs",
                "schema",
                "time",
                "tvg",
                "upper",
                "xsd",
            ]
        );
    }

    #[test]
    fn all_namespace_iris_end_with_separator() {
        for ns in PrefixRegistry::global().namespaces() {
            assert!(
                ns.iri.ends_with('/') || ns.iri.ends_with('#'),
                "Namespace without trailing separator: {}",
                ns.iri
            );
        }
    }

    #[test]
    fn every_namespace_has_a_label() {
        for ns in PrefixRegistry::global().namespaces() {
            assert!(!ns.label.trim().is_empty(), "Unlabelled namespace: {}", ns.slug);
        }
    }

    #[test]
    fn registry_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PrefixRegistry>();
    }
}
