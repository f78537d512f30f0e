//! The immutable prefix registry.
//!
//! [`PrefixRegistry`] is built once and then only read. It is `Send + Sync`
//! and the process-wide instance returned by [`PrefixRegistry::global`] is
//! shared by reference with every compaction context.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{PrefixError, Result};
use crate::iri::{is_http_uri, parse_compact};
use crate::model::Namespace;
use crate::namespaces;

/// Direction for [`PrefixRegistry::normalize_uri`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriMode {
    /// Turn compact URIs into full URIs.
    Expand,
    /// Turn full URIs into compact URIs where a namespace matches.
    Shorten,
}

/// Bidirectional slug ↔ namespace table with longest-match compaction.
#[derive(Debug, Clone)]
pub struct PrefixRegistry {
    /// slug → namespace
    by_slug: HashMap<&'static str, Namespace>,
    /// namespace URI → slug
    by_iri: HashMap<&'static str, &'static str>,
    /// Namespaces sorted longest URI first, so the most specific one wins.
    longest_first: Vec<Namespace>,
}

impl PrefixRegistry {
    /// Returns the process-wide registry holding the built-in namespace table.
    #[must_use]
    pub fn global() -> &'static PrefixRegistry {
        static REGISTRY: OnceLock<PrefixRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| Self::build(namespaces::all()))
    }

    /// Builds a registry from an explicit namespace list.
    ///
    /// # Errors
    ///
    /// Returns [`PrefixError::DuplicateSlug`] or
    /// [`PrefixError::DuplicateNamespace`] when the list would break the
    /// slug ↔ namespace bijection.
    pub fn new(namespaces: impl IntoIterator<Item = Namespace>) -> Result<Self> {
        let namespaces: Vec<Namespace> = namespaces.into_iter().collect();
        let mut slugs: HashMap<&str, &str> = HashMap::new();
        let mut iris: HashMap<&str, &str> = HashMap::new();
        for ns in &namespaces {
            if slugs.insert(ns.slug, ns.iri).is_some() {
                return Err(PrefixError::DuplicateSlug {
                    slug: ns.slug.to_owned(),
                });
            }
            if let Some(first) = iris.insert(ns.iri, ns.slug) {
                return Err(PrefixError::DuplicateNamespace {
                    iri: ns.iri.to_owned(),
                    first: first.to_owned(),
                    second: ns.slug.to_owned(),
                });
            }
        }
        Ok(Self::build(namespaces))
    }

    fn build(namespaces: Vec<Namespace>) -> Self {
        let by_slug = namespaces.iter().map(|ns| (ns.slug, *ns)).collect();
        let by_iri = namespaces.iter().map(|ns| (ns.iri, ns.slug)).collect();
        let mut longest_first = namespaces;
        longest_first.sort_by(|a, b| b.iri.len().cmp(&a.iri.len()).then(a.slug.cmp(b.slug)));
        Self {
            by_slug,
            by_iri,
            longest_first,
        }
    }

    /// Number of registered namespaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_slug.len()
    }

    /// Returns true when no namespace is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_slug.is_empty()
    }

    /// All registered namespaces, ordered by slug.
    #[must_use]
    pub fn namespaces(&self) -> Vec<Namespace> {
        let mut all: Vec<Namespace> = self.by_slug.values().copied().collect();
        all.sort_by(|a, b| a.slug.cmp(b.slug));
        all
    }

    /// Looks up a namespace by slug.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&Namespace> {
        self.by_slug.get(slug)
    }

    /// Finds the longest registered namespace that is a prefix of `uri`.
    #[must_use]
    pub fn extract_prefix(&self, uri: &str) -> Option<&Namespace> {
        self.longest_first.iter().find(|ns| ns.contains(uri))
    }

    /// Splits `uri` into its longest matching namespace and the local name.
    #[must_use]
    pub fn split<'a>(&self, uri: &'a str) -> Option<(&Namespace, &'a str)> {
        let ns = self.extract_prefix(uri)?;
        let local = ns.local_name(uri)?;
        Some((ns, local))
    }

    /// Compacts `uri` to `slug:local` using the longest matching namespace.
    ///
    /// URIs outside every registered namespace come back unchanged.
    #[must_use]
    pub fn shorten(&self, uri: &str) -> String {
        match self.split(uri) {
            Some((ns, local)) => ns.compact(local),
            None => uri.to_owned(),
        }
    }

    /// Expands a compact URI to its full form.
    ///
    /// Full `http(s)` URIs pass through unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`PrefixError::UnknownPrefix`] when the slug is not registered.
    /// A value without a colon is treated as a bare, unregistered slug.
    pub fn expand(&self, compact: &str) -> Result<String> {
        if is_http_uri(compact) {
            return Ok(compact.to_owned());
        }
        let (slug, local) = parse_compact(compact).unwrap_or((compact, ""));
        let ns = self.get(slug).ok_or_else(|| PrefixError::UnknownPrefix {
            slug: slug.to_owned(),
        })?;
        Ok(format!("{}{}", ns.iri, local))
    }

    /// Expands or shortens `value` according to `mode`.
    ///
    /// # Errors
    ///
    /// Expansion fails like [`PrefixRegistry::expand`]; shortening never fails.
    pub fn normalize_uri(&self, value: &str, mode: UriMode) -> Result<String> {
        match mode {
            UriMode::Expand => self.expand(value),
            UriMode::Shorten => Ok(self.shorten(value)),
        }
    }

    /// Returns the slug registered for an exact namespace URI.
    #[must_use]
    pub fn prefix_to_slug(&self, namespace: &str) -> Option<&'static str> {
        self.by_iri.get(namespace).copied()
    }

    /// Returns the namespace URI registered for `slug`.
    ///
    /// # Errors
    ///
    /// Returns [`PrefixError::UnknownPrefix`] when the slug is not registered.
    pub fn slug_to_prefix(&self, slug: &str) -> Result<&'static str> {
        self.get(slug)
            .map(|ns| ns.iri)
            .ok_or_else(|| PrefixError::UnknownPrefix {
                slug: slug.to_owned(),
            })
    }

    /// Like [`PrefixRegistry::slug_to_prefix`], but an unknown slug is
    /// returned as-is.
    #[must_use]
    pub fn safe_slug_to_prefix<'a>(&self, slug: &'a str) -> &'a str {
        match self.get(slug) {
            Some(ns) => ns.iri,
            None => slug,
        }
    }

    /// Returns the slug of the longest namespace containing `uri`, or `uri`
    /// itself when none does.
    ///
    /// Together with [`PrefixRegistry::safe_slug_to_prefix`] this is the
    /// total slug ↔ namespace mapping used to name search indexes.
    #[must_use]
    pub fn uri_to_slug<'a>(&self, uri: &'a str) -> &'a str {
        match self.extract_prefix(uri) {
            Some(ns) => ns.slug,
            None => uri,
        }
    }

    /// Returns true for `slug:local` values whose slug is registered.
    #[must_use]
    pub fn is_compressed_uri(&self, value: &str) -> bool {
        parse_compact(value).is_some_and(|(slug, _)| self.by_slug.contains_key(slug))
    }

    /// Search index name for a graph: `"<index_prefix>.<slug>"`.
    #[must_use]
    pub fn search_index_name(&self, index_prefix: &str, graph_uri: &str) -> String {
        format!("{}.{}", index_prefix, self.uri_to_slug(graph_uri))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> &'static PrefixRegistry {
        PrefixRegistry::global()
    }

    #[test]
    fn builtin_table_is_a_bijection() {
        assert!(PrefixRegistry::new(namespaces::all()).is_ok());
    }

    #[test]
    fn prefix_to_slug() {
        assert_eq!(
            registry().prefix_to_slug("http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
            Some("rdf")
        );
        assert_eq!(registry().prefix_to_slug("http://nowhere/"), None);
    }

    #[test]
    fn uri_to_slug() {
        assert_eq!(
            registry().uri_to_slug("http://www.w3.org/1999/02/22-rdf-syntax-ns#type"),
            "rdf"
        );
        assert_eq!(registry().uri_to_slug("http://nowhere/x"), "http://nowhere/x");
    }

    #[test]
    fn safe_slug_to_prefix() {
        assert_eq!(
            registry().safe_slug_to_prefix("rdf"),
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#"
        );
        assert_eq!(registry().safe_slug_to_prefix("bigoletinha"), "bigoletinha");
    }

    #[test]
    fn slug_to_prefix() {
        assert_eq!(registry().slug_to_prefix("dct"), Ok("http://purl.org/dc/terms/"));
        assert_eq!(
            registry().slug_to_prefix("alchueyr"),
            Err(PrefixError::UnknownPrefix {
                slug: "alchueyr".to_owned()
            })
        );
    }

    #[test]
    fn shorten_success() {
        assert_eq!(
            registry().shorten("http://www.w3.org/1999/02/22-rdf-syntax-ns#type"),
            "rdf:type"
        );
    }

    #[test]
    fn shorten_unknown_passes_through() {
        assert_eq!(registry().shorten("http://some/invalid/uri"), "http://some/invalid/uri");
    }

    #[test]
    fn shorten_prefers_longest_namespace() {
        assert_eq!(
            registry().shorten("http://semantica.globo.com/upper/name"),
            "upper:name"
        );
        assert_eq!(
            registry().shorten("http://semantica.globo.com/Something"),
            "glb:Something"
        );
        assert_eq!(registry().shorten("http://semantica.globo.com/G1/Materia"), "g1:Materia");
    }

    #[test]
    fn expand() {
        assert_eq!(
            registry().expand("geo:Brasil").as_deref(),
            Ok("http://www.w3.org/2003/01/geo/wgs84_pos#Brasil")
        );
        assert_eq!(
            registry().expand("schema:whatever").as_deref(),
            Ok("http://schema.org/whatever")
        );
    }

    #[test]
    fn expand_full_uri_passes_through() {
        assert_eq!(registry().expand("http://oi").as_deref(), Ok("http://oi"));
        assert_eq!(registry().expand("https://secure").as_deref(), Ok("https://secure"));
    }

    #[test]
    fn expand_unknown_prefix_fails() {
        assert_eq!(
            registry().expand("nope:thing"),
            Err(PrefixError::UnknownPrefix {
                slug: "nope".to_owned()
            })
        );
    }

    #[test]
    fn is_compressed_uri() {
        assert!(!registry().is_compressed_uri("oi"));
        assert!(registry().is_compressed_uri("rdf:type"));
        assert!(!registry().is_compressed_uri("nope:type"));
        assert!(!registry().is_compressed_uri("http://schema.org/name"));
    }

    #[test]
    fn normalize_uri_both_ways() {
        let r = registry();
        assert_eq!(
            r.normalize_uri("dbpedia:name", UriMode::Expand).as_deref(),
            Ok("http://dbpedia.org/ontology/name")
        );
        assert_eq!(
            r.normalize_uri("http://dbpedia.org/ontology/name", UriMode::Shorten).as_deref(),
            Ok("dbpedia:name")
        );
    }

    #[test]
    fn extract_prefix_when_one_namespace_contains_another() {
        let r = PrefixRegistry::new([
            Namespace {
                slug: "some",
                iri: "http://some",
                label: "",
            },
            Namespace {
                slug: "place",
                iri: "http://someprefix/place/",
                label: "",
            },
            Namespace {
                slug: "city",
                iri: "http://someprefix/place/City",
                label: "",
            },
        ])
        .unwrap();
        assert_eq!(
            r.extract_prefix("http://someprefix/place/City").map(|ns| ns.iri),
            Some("http://someprefix/place/City")
        );
    }

    #[test]
    fn duplicate_entries_are_rejected() {
        let dup_slug = PrefixRegistry::new([
            Namespace {
                slug: "a",
                iri: "http://a/",
                label: "",
            },
            Namespace {
                slug: "a",
                iri: "http://b/",
                label: "",
            },
        ]);
        assert!(matches!(dup_slug, Err(PrefixError::DuplicateSlug { .. })));

        let dup_iri = PrefixRegistry::new([
            Namespace {
                slug: "a",
                iri: "http://a/",
                label: "",
            },
            Namespace {
                slug: "b",
                iri: "http://a/",
                label: "",
            },
        ]);
        assert!(matches!(dup_iri, Err(PrefixError::DuplicateNamespace { .. })));
    }

    #[test]
    fn search_index_name() {
        assert_eq!(
            registry().search_index_name("semantica", "http://semantica.globo.com/G1/"),
            "semantica.g1"
        );
    }
}
