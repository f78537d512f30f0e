//! Folding bindings into a predicate → value map.

use std::collections::{BTreeMap, BTreeSet};

use semantica_vocab::iris;
use tracing::{trace, warn};

use crate::binding::{Binding, Term};
use crate::context::CompactionContext;
use crate::value::PropertyValue;

/// Compact predicate → aggregated value.
pub type PropertyMap = BTreeMap<String, PropertyValue>;

/// Compact predicate → compact super-property, one entry per predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuperPropertyMap(BTreeMap<String, String>);

impl SuperPropertyMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `predicate ⊑ super_property`, returning the entry it replaced.
    pub fn insert(&mut self, predicate: String, super_property: String) -> Option<String> {
        self.0.insert(predicate, super_property)
    }

    /// The declared super-property of `predicate`.
    #[must_use]
    pub fn get(&self, predicate: &str) -> Option<&str> {
        self.0.get(predicate).map(String::as_str)
    }

    /// Returns true when some predicate declares `super_property` as its parent.
    #[must_use]
    pub fn has_super(&self, super_property: &str) -> bool {
        self.0.values().any(|s| s == super_property)
    }

    /// `(predicate, super_property)` pairs ordered by predicate.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(p, s)| (p.as_str(), s.as_str()))
    }

    /// Number of predicates with a declared super-property.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no super-property was declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Output of [`PropertyAggregator`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    /// Aggregated values by compact predicate.
    pub properties: PropertyMap,
    /// Declared super-properties by compact predicate.
    pub super_properties: SuperPropertyMap,
    /// `(predicate, value)` pairs whose value is a compacted reference
    /// rather than a literal.
    pub references: BTreeSet<(String, String)>,
}

impl Aggregation {
    /// Returns true when `value` under `predicate` came from a reference
    /// object.
    #[must_use]
    pub fn is_reference(&self, predicate: &str, value: &str) -> bool {
        self.references
            .contains(&(predicate.to_owned(), value.to_owned()))
    }
}

/// Folds an ordered binding sequence for one subject.
///
/// Predicates, reference objects and super-properties are compacted through
/// the shared [`CompactionContext`]. Literals are kept verbatim.
#[derive(Debug, Default)]
pub struct PropertyAggregator {
    aggregation: Aggregation,
}

impl PropertyAggregator {
    /// Creates an empty aggregator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds every binding in order and returns the result.
    pub fn aggregate(context: &mut CompactionContext<'_>, bindings: &[Binding]) -> Aggregation {
        let mut aggregator = Self::new();
        for binding in bindings {
            aggregator.fold(context, binding);
        }
        aggregator.finish()
    }

    /// Folds one binding.
    pub fn fold(&mut self, context: &mut CompactionContext<'_>, binding: &Binding) {
        let predicate = context.shorten(&binding.predicate);
        let value = match &binding.object {
            Term::Iri(uri) => {
                context.mark_object_property(predicate.clone(), iris::RDFS_RESOURCE);
                let value = context.shorten(uri);
                self.aggregation
                    .references
                    .insert((predicate.clone(), value.clone()));
                value
            }
            Term::Blank(id) => id.clone(),
            Term::Literal { value, .. } => value.clone(),
        };
        trace!(%predicate, %value, "folding binding");

        if let Some(super_uri) = &binding.super_property {
            let super_property = context.shorten(super_uri);
            let previous = self
                .aggregation
                .super_properties
                .insert(predicate.clone(), super_property.clone());
            if let Some(previous) = previous.filter(|p| *p != super_property) {
                warn!(
                    %predicate,
                    %previous,
                    current = %super_property,
                    "conflicting super-property declarations; keeping the last one"
                );
            }
        }

        match self.aggregation.properties.get_mut(&predicate) {
            Some(existing) => existing.push(value),
            None => {
                self.aggregation
                    .properties
                    .insert(predicate, PropertyValue::Scalar(value));
            }
        }
    }

    /// Returns the aggregation built so far.
    #[must_use]
    pub fn finish(self) -> Aggregation {
        self.aggregation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: &str = "http://schema.org/name";
    const UPPER_NAME: &str = "http://semantica.globo.com/upper/name";

    #[test]
    fn repeated_predicate_keeps_encounter_order() {
        let mut ctx = CompactionContext::global();
        let bindings = [
            Binding::new(NAME, Term::literal("v1")),
            Binding::new(NAME, Term::literal("v2")),
            Binding::new(NAME, Term::literal("v3")),
        ];
        let agg = PropertyAggregator::aggregate(&mut ctx, &bindings);
        assert_eq!(
            agg.properties["schema:name"],
            PropertyValue::List(vec!["v1".into(), "v2".into(), "v3".into()])
        );
    }

    #[test]
    fn duplicate_values_are_kept() {
        let mut ctx = CompactionContext::global();
        let bindings = [
            Binding::new(NAME, Term::literal("Rio")),
            Binding::new(NAME, Term::literal("Rio")),
        ];
        let agg = PropertyAggregator::aggregate(&mut ctx, &bindings);
        assert_eq!(agg.properties["schema:name"].values(), ["Rio", "Rio"]);
    }

    #[test]
    fn reference_objects_are_compacted_and_marked() {
        let mut ctx = CompactionContext::global();
        let bindings = [Binding::new(
            "http://semantica.globo.com/place/partOf",
            Term::iri("http://semantica.globo.com/place/Brasil"),
        )];
        let agg = PropertyAggregator::aggregate(&mut ctx, &bindings);
        assert_eq!(
            agg.properties["place:partOf"],
            PropertyValue::from("place:Brasil")
        );
        assert!(ctx.is_object_property("place:partOf"));
        assert!(agg.is_reference("place:partOf", "place:Brasil"));
    }

    #[test]
    fn literals_are_not_compacted() {
        let mut ctx = CompactionContext::global();
        let bindings = [Binding::new(
            "http://schema.org/url",
            Term::literal("http://semantica.globo.com/upper/x"),
        )];
        let agg = PropertyAggregator::aggregate(&mut ctx, &bindings);
        assert_eq!(
            agg.properties["schema:url"],
            PropertyValue::from("http://semantica.globo.com/upper/x")
        );
        assert!(!ctx.snapshot().contains_key("upper"));
        assert!(agg.references.is_empty());
    }

    #[test]
    fn last_super_property_wins() {
        let mut ctx = CompactionContext::global();
        let bindings = [
            Binding::new(UPPER_NAME, Term::literal("Rio")).with_super_property(NAME),
            Binding::new(UPPER_NAME, Term::literal("Rio"))
                .with_super_property("http://www.w3.org/2000/01/rdf-schema#label"),
        ];
        let agg = PropertyAggregator::aggregate(&mut ctx, &bindings);
        assert_eq!(agg.super_properties.len(), 1);
        assert_eq!(agg.super_properties.get("upper:name"), Some("rdfs:label"));
        assert!(agg.super_properties.has_super("rdfs:label"));
        assert!(!agg.super_properties.has_super("schema:name"));
    }
}
