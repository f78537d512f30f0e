//! Instance document validator.
//!
//! Checks one emitted document:
//! - `_resource_id`, `@id` and `@context` are present; reserved keys are strings
//! - every `@context` entry maps a registered slug to its namespace
//! - every registered slug used by a key or `@type` is declared, and every
//!   declared slug is used by a key, `@type` or a value
//! - predicate keys are `slug:local` with a registered slug, or absolute
//!   URIs outside every registered namespace
//! - `rdf:type` mirrors `@type`

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use regex::Regex;
use semantica_vocab::{iri, iris, PrefixRegistry};
use serde_json::{Map, Value};

use crate::report::{ConformanceReport, TestResult};

/// Keys that carry document metadata rather than predicates.
const RESERVED: &[&str] = &["_resource_id", "@id", "@type", "@context"];

const COMPACT_KEY: &str = r"^[A-Za-z][A-Za-z0-9_.-]*:[^\s:/]\S*$";

const ABSOLUTE_URI: &str = r"^[A-Za-z][A-Za-z0-9+.-]*:\S+$";

/// Validates instance documents against one registry.
#[derive(Debug)]
pub struct DocumentValidator<'r> {
    registry: &'r PrefixRegistry,
    compact_key: Regex,
    absolute_uri: Regex,
}

impl DocumentValidator<'static> {
    /// A validator over the process-wide registry.
    ///
    /// # Errors
    ///
    /// Returns an error if a key pattern fails to compile.
    pub fn global() -> Result<Self> {
        Self::new(PrefixRegistry::global())
    }
}

impl<'r> DocumentValidator<'r> {
    /// Creates a validator over `registry`.
    ///
    /// # Errors
    ///
    /// Returns an error if a key pattern fails to compile.
    pub fn new(registry: &'r PrefixRegistry) -> Result<Self> {
        let compact_key = Regex::new(COMPACT_KEY).context("Failed to compile compact key pattern")?;
        let absolute_uri =
            Regex::new(ABSOLUTE_URI).context("Failed to compile absolute URI pattern")?;
        Ok(Self {
            registry,
            compact_key,
            absolute_uri,
        })
    }

    /// Runs every check on `doc`, tagging results with `name`.
    pub fn validate(&self, name: &str, doc: &Value) -> ConformanceReport {
        let mut report = ConformanceReport::new();
        let Some(object) = doc.as_object() else {
            report.push(TestResult::fail("document/shape", "Document is not a JSON object").in_document(name));
            return report;
        };

        let mut results = Vec::new();
        check_reserved(object, &mut results);
        self.check_context_entries(object, &mut results);
        self.check_context_coverage(object, &mut results);
        self.check_keys(object, &mut results);
        check_type_mirror(object, &mut results);

        for result in results {
            report.push(result.in_document(name));
        }
        report
    }

    fn check_context_entries(&self, doc: &Map<String, Value>, results: &mut Vec<TestResult>) {
        let Some(context) = doc.get("@context").and_then(Value::as_object) else {
            return;
        };
        let mismatched: Vec<String> = context
            .iter()
            .filter(|(slug, ns)| match self.registry.slug_to_prefix(slug) {
                Ok(expected) => ns.as_str() != Some(expected),
                Err(_) => true,
            })
            .map(|(slug, ns)| format!("{slug} -> {ns}"))
            .collect();
        if mismatched.is_empty() {
            results.push(TestResult::pass(
                "document/context-registry",
                format!("{} @context entries match the registry", context.len()),
            ));
        } else {
            results.push(TestResult::fail_with_details(
                "document/context-registry",
                "@context entries do not match the registry",
                mismatched,
            ));
        }
    }

    fn check_context_coverage(&self, doc: &Map<String, Value>, results: &mut Vec<TestResult>) {
        let Some(context) = doc.get("@context").and_then(Value::as_object) else {
            return;
        };
        // A string value may be a literal that merely looks compact, so values
        // can justify a declaration but never require one.
        let required = self.used_slugs(doc, false);
        let justified = self.used_slugs(doc, true);
        let declared: BTreeSet<&str> = context.keys().map(String::as_str).collect();

        let missing: Vec<String> = required.difference(&declared).map(|s| s.to_string()).collect();
        if missing.is_empty() {
            results.push(TestResult::pass(
                "document/context-complete",
                "Every used namespace is declared in @context",
            ));
        } else {
            results.push(TestResult::fail_with_details(
                "document/context-complete",
                "Namespaces used but not declared in @context",
                missing,
            ));
        }

        let unused: Vec<String> = declared
            .difference(&justified)
            .map(|s| s.to_string())
            .collect();
        if unused.is_empty() {
            results.push(TestResult::pass(
                "document/context-minimal",
                "Every @context entry is used",
            ));
        } else {
            results.push(TestResult::fail_with_details(
                "document/context-minimal",
                "@context declares namespaces the document never uses",
                unused,
            ));
        }
    }

    /// Registered slugs referenced by predicate keys and `@type`, plus those
    /// of compact-looking values when `with_values` is set.
    fn used_slugs<'d>(&self, doc: &'d Map<String, Value>, with_values: bool) -> BTreeSet<&'d str> {
        let mut terms: Vec<&str> = Vec::new();
        for (key, value) in doc {
            if key == "@type" {
                terms.extend(value.as_str());
                continue;
            }
            if RESERVED.contains(&key.as_str()) {
                continue;
            }
            terms.push(key);
            if !with_values {
                continue;
            }
            match value {
                Value::String(s) => terms.push(s),
                Value::Array(items) => terms.extend(items.iter().filter_map(Value::as_str)),
                _ => {}
            }
        }
        terms
            .into_iter()
            .filter_map(|term| iri::parse_compact(term).map(|(slug, _)| slug))
            .filter(|slug| self.registry.get(slug).is_some())
            .collect()
    }

    fn check_keys(&self, doc: &Map<String, Value>, results: &mut Vec<TestResult>) {
        let invalid: Vec<String> = doc
            .keys()
            .filter(|key| !RESERVED.contains(&key.as_str()))
            .filter(|key| !self.is_valid_key(key))
            .cloned()
            .collect();
        if invalid.is_empty() {
            results.push(TestResult::pass(
                "document/keys",
                "Predicate keys are compact or absolute URIs",
            ));
        } else {
            results.push(TestResult::fail_with_details(
                "document/keys",
                "Predicate keys are neither registered compact URIs nor unregistered absolute URIs",
                invalid,
            ));
        }
    }

    /// A key is a registered compact URI, or an absolute URI that no
    /// registered namespace would have compacted.
    fn is_valid_key(&self, key: &str) -> bool {
        if self.registry.is_compressed_uri(key) {
            return self.compact_key.is_match(key);
        }
        self.absolute_uri.is_match(key) && self.registry.extract_prefix(key).is_none()
    }
}

fn check_reserved(doc: &Map<String, Value>, results: &mut Vec<TestResult>) {
    let mut problems = Vec::new();
    for key in ["_resource_id", "@id"] {
        match doc.get(key) {
            Some(Value::String(_)) => {}
            Some(_) => problems.push(format!("{key} is not a string")),
            None => problems.push(format!("{key} is missing")),
        }
    }
    match doc.get("@context") {
        Some(Value::Object(_)) => {}
        Some(_) => problems.push("@context is not an object".to_owned()),
        None => problems.push("@context is missing".to_owned()),
    }
    for key in ["@type", iris::RDFS_LABEL_COMPACT] {
        if doc.get(key).is_some_and(|v| !v.is_string()) {
            problems.push(format!("{key} is not a string"));
        }
    }
    if problems.is_empty() {
        results.push(TestResult::pass(
            "document/reserved",
            "Reserved keys present and well typed",
        ));
    } else {
        results.push(TestResult::fail_with_details(
            "document/reserved",
            "Reserved keys missing or mistyped",
            problems,
        ));
    }
}

fn check_type_mirror(doc: &Map<String, Value>, results: &mut Vec<TestResult>) {
    let type_ = doc.get("@type");
    let rdf_type = doc.get(iris::RDF_TYPE_COMPACT);
    if type_ == rdf_type {
        results.push(TestResult::pass("document/type", "rdf:type mirrors @type"));
    } else {
        results.push(TestResult::fail(
            "document/type",
            format!(
                "rdf:type ({}) does not mirror @type ({})",
                rdf_type.map_or_else(|| "absent".to_owned(), Value::to_string),
                type_.map_or_else(|| "absent".to_owned(), Value::to_string),
            ),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validate(doc: Value) -> ConformanceReport {
        DocumentValidator::global().unwrap().validate("doc.json", &doc)
    }

    fn failed_checks(report: &ConformanceReport) -> Vec<&str> {
        report.failures().map(|r| r.check.as_str()).collect()
    }

    fn rio() -> Value {
        json!({
            "_resource_id": "Rio",
            "@id": "http://semantica.globo.com/place/Rio",
            "@type": "place:City",
            "@context": {
                "place": "http://semantica.globo.com/place/",
                "rdf": "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
                "rdfs": "http://www.w3.org/2000/01/rdf-schema#",
                "upper": "http://semantica.globo.com/upper/"
            },
            "rdfs:label": "Rio de Janeiro",
            "rdf:type": "place:City",
            "upper:name": "Rio",
            "http://example.org/p": ["a", "b"]
        })
    }

    #[test]
    fn well_formed_document_passes() {
        let report = validate(rio());
        assert!(report.all_passed(), "{:#?}", report.results);
        assert!(report.results.iter().all(|r| r.document.as_deref() == Some("doc.json")));
    }

    #[test]
    fn missing_context_entry() {
        let mut doc = rio();
        doc["@context"].as_object_mut().unwrap().remove("upper");
        assert_eq!(failed_checks(&validate(doc)), ["document/context-complete"]);
    }

    #[test]
    fn unused_context_entry() {
        let mut doc = rio();
        doc["@context"]["schema"] = json!("http://schema.org/");
        assert_eq!(failed_checks(&validate(doc)), ["document/context-minimal"]);
    }

    #[test]
    fn wrong_namespace_in_context() {
        let mut doc = rio();
        doc["@context"]["upper"] = json!("http://example.org/upper/");
        assert_eq!(failed_checks(&validate(doc)), ["document/context-registry"]);
    }

    #[test]
    fn uncompacted_registered_key() {
        let mut doc = rio();
        doc["http://schema.org/name"] = json!("Rio");
        assert_eq!(failed_checks(&validate(doc)), ["document/keys"]);
    }

    #[test]
    fn unregistered_absolute_key() {
        let mut doc = rio();
        doc["urn:isbn:0451450523"] = json!("x");
        assert!(validate(doc).all_passed());
    }

    #[test]
    fn compact_looking_literal_needs_no_declaration() {
        let mut doc = rio();
        doc["upper:code"] = json!("schema:Thing");
        assert!(validate(doc).all_passed());
    }

    #[test]
    fn compact_looking_value_justifies_declaration() {
        let mut doc = rio();
        doc["upper:partOf"] = json!(["schema:Place"]);
        doc["@context"]["schema"] = json!("http://schema.org/");
        assert!(validate(doc).all_passed());
    }

    #[test]
    fn type_mismatch() {
        let mut doc = rio();
        doc["rdf:type"] = json!("place:State");
        assert_eq!(failed_checks(&validate(doc)), ["document/type"]);
    }

    #[test]
    fn missing_identity() {
        let mut doc = rio();
        doc.as_object_mut().unwrap().remove("@id");
        assert_eq!(failed_checks(&validate(doc)), ["document/reserved"]);
    }

    #[test]
    fn non_object_document() {
        assert_eq!(failed_checks(&validate(json!([1, 2]))), ["document/shape"]);
    }
}
