//! Namespace model types.
//!
//! A [`Namespace`] pairs a short slug (the part before the colon in a
//! compact URI such as `rdf:type`) with the full namespace URI it stands for.
//! The registered table lives in [`crate::namespaces`].

/// A registered namespace (e.g., `rdf` → `http://www.w3.org/1999/02/22-rdf-syntax-ns#`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Namespace {
    /// The slug used in compact URIs and in the `@context` (e.g., `"rdf"`).
    pub slug: &'static str,
    /// The full namespace URI, ending in `/` or `#`.
    pub iri: &'static str,
    /// Human-readable label.
    pub label: &'static str,
}

impl Namespace {
    /// Returns `true` when `uri` lies inside this namespace.
    #[must_use]
    pub fn contains(&self, uri: &str) -> bool {
        uri.starts_with(self.iri)
    }

    /// Returns the local name of `uri` relative to this namespace, if it
    /// lies inside it.
    #[must_use]
    pub fn local_name<'a>(&self, uri: &'a str) -> Option<&'a str> {
        uri.strip_prefix(self.iri)
    }

    /// Builds the compact form `slug:local`.
    #[must_use]
    pub fn compact(&self, local: &str) -> String {
        format!("{}:{}", self.slug, local)
    }
}

/// Standard IRI constants used by the instance compiler.
pub mod iris {
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";

    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdfs:label`.
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    /// `rdfs:subPropertyOf`.
    pub const RDFS_SUB_PROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";
    /// `rdfs:Resource`, the range recorded for reference-valued predicates.
    pub const RDFS_RESOURCE: &str = "http://www.w3.org/2000/01/rdf-schema#Resource";

    /// Compact form of `rdf:type`.
    pub const RDF_TYPE_COMPACT: &str = "rdf:type";
    /// Compact form of `rdfs:label`.
    pub const RDFS_LABEL_COMPACT: &str = "rdfs:label";
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: Namespace = Namespace {
        slug: "schema",
        iri: "http://schema.org/",
        label: "Schema.org",
    };

    #[test]
    fn local_name_strips_namespace() {
        assert_eq!(SCHEMA.local_name("http://schema.org/name"), Some("name"));
        assert_eq!(SCHEMA.local_name("http://example.org/name"), None);
    }

    #[test]
    fn compact_joins_with_colon() {
        assert_eq!(SCHEMA.compact("name"), "schema:name");
    }
}
