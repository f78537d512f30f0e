//! Per-document compaction context.
//!
//! A [`CompactionContext`] wraps the shared [`PrefixRegistry`] and remembers
//! every namespace it has used, so the finished document can carry exactly
//! the `@context` its keys and values need. Create one per document; it is
//! mutated through `&mut self` and never shared between assemblies.

use std::collections::{BTreeMap, BTreeSet};

use semantica_vocab::{iri, PrefixRegistry};

/// Accumulated `@context`: slug → namespace URI.
pub type ContextMap = BTreeMap<String, String>;

/// Memoizing URI compactor for a single document.
#[derive(Debug, Clone)]
pub struct CompactionContext<'r> {
    registry: &'r PrefixRegistry,
    context: ContextMap,
    /// compact predicate → range class
    object_properties: BTreeMap<String, String>,
}

impl CompactionContext<'static> {
    /// Creates a context over the process-wide registry.
    #[must_use]
    pub fn global() -> Self {
        Self::new(PrefixRegistry::global())
    }
}

impl Default for CompactionContext<'static> {
    fn default() -> Self {
        Self::global()
    }
}

impl<'r> CompactionContext<'r> {
    /// Creates an empty context over `registry`.
    #[must_use]
    pub fn new(registry: &'r PrefixRegistry) -> Self {
        Self {
            registry,
            context: ContextMap::new(),
            object_properties: BTreeMap::new(),
        }
    }

    /// The registry this context compacts against.
    #[must_use]
    pub fn registry(&self) -> &'r PrefixRegistry {
        self.registry
    }

    /// Compacts `uri` and records the namespace it used.
    ///
    /// Repeated calls are idempotent. A URI outside every registered
    /// namespace comes back unchanged and records nothing.
    pub fn shorten(&mut self, uri: &str) -> String {
        match self.registry.split(uri) {
            Some((ns, local)) => {
                if !self.context.contains_key(ns.slug) {
                    self.context.insert(ns.slug.to_owned(), ns.iri.to_owned());
                }
                ns.compact(local)
            }
            None => uri.to_owned(),
        }
    }

    /// Returns the slug of an exact namespace URI, recording it on success.
    pub fn prefix_to_slug(&mut self, namespace: &str) -> Option<&'static str> {
        let slug = self.registry.prefix_to_slug(namespace)?;
        self.context
            .entry(slug.to_owned())
            .or_insert_with(|| namespace.to_owned());
        Some(slug)
    }

    /// Records that `predicate` (compact form) points at resources of
    /// `range_class`.
    pub fn mark_object_property(
        &mut self,
        predicate: impl Into<String>,
        range_class: impl Into<String>,
    ) {
        self.object_properties
            .insert(predicate.into(), range_class.into());
    }

    /// Returns true when `predicate` was marked as reference-valued.
    #[must_use]
    pub fn is_object_property(&self, predicate: &str) -> bool {
        self.object_properties.contains_key(predicate)
    }

    /// Compact predicates marked as reference-valued, in sorted order.
    pub fn object_properties(&self) -> impl Iterator<Item = &str> {
        self.object_properties.keys().map(String::as_str)
    }

    /// The context accumulated so far.
    #[must_use]
    pub fn snapshot(&self) -> &ContextMap {
        &self.context
    }

    /// The accumulated context restricted to slugs referenced by `terms`.
    ///
    /// A term references a slug when it has the compact form `slug:local`
    /// and `slug` is in the context.
    pub fn snapshot_for<'a>(&self, terms: impl IntoIterator<Item = &'a str>) -> ContextMap {
        let used: BTreeSet<&str> = terms
            .into_iter()
            .filter_map(|term| iri::parse_compact(term).map(|(slug, _)| slug))
            .filter(|slug| self.context.contains_key(*slug))
            .collect();
        self.context
            .iter()
            .filter(|(slug, _)| used.contains(slug.as_str()))
            .map(|(slug, ns)| (slug.clone(), ns.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    #[test]
    fn shorten_records_namespace() {
        let mut ctx = CompactionContext::global();
        assert_eq!(ctx.shorten(&format!("{RDF}type")), "rdf:type");
        assert_eq!(ctx.snapshot().get("rdf").map(String::as_str), Some(RDF));
    }

    #[test]
    fn shorten_is_idempotent() {
        let mut ctx = CompactionContext::global();
        let first = ctx.shorten("http://schema.org/name");
        let second = ctx.shorten("http://schema.org/name");
        assert_eq!(first, second);
        assert_eq!(ctx.snapshot().len(), 1);
    }

    #[test]
    fn unknown_uri_records_nothing() {
        let mut ctx = CompactionContext::global();
        assert_eq!(ctx.shorten("http://some/invalid/uri"), "http://some/invalid/uri");
        assert!(ctx.snapshot().is_empty());
    }

    #[test]
    fn prefix_to_slug_records_namespace() {
        let mut ctx = CompactionContext::global();
        assert_eq!(ctx.prefix_to_slug(RDF), Some("rdf"));
        assert_eq!(ctx.snapshot().get("rdf").map(String::as_str), Some(RDF));
        assert_eq!(ctx.prefix_to_slug("http://nowhere/"), None);
    }

    #[test]
    fn object_properties_are_membership_only() {
        let mut ctx = CompactionContext::global();
        ctx.mark_object_property("ctx:field_name", "upper:Entity");
        ctx.mark_object_property("ctx:field_name", "upper:Other");
        assert!(ctx.is_object_property("ctx:field_name"));
        assert!(!ctx.is_object_property("ctx:other"));
        assert_eq!(ctx.object_properties().count(), 1);
        assert!(ctx.snapshot().is_empty());
    }

    #[test]
    fn snapshot_for_keeps_only_referenced_slugs() {
        let mut ctx = CompactionContext::global();
        ctx.shorten("http://schema.org/name");
        ctx.shorten("http://semantica.globo.com/upper/name");
        let used = ctx.snapshot_for(["upper:name", "Rio", "http://x/y"]);
        assert_eq!(used.len(), 1);
        assert!(used.contains_key("upper"));
    }
}
