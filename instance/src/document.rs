//! Document assembly.
//!
//! [`DocumentAssembler`] runs the whole pipeline for one subject:
//! aggregation, subsumption filtering, label selection, then merges the
//! identity fields and the `@context` into an [`InstanceDocument`].

use std::collections::BTreeMap;

use semantica_vocab::{iris, PrefixRegistry};
use serde::Serialize;
use tracing::debug;

use crate::aggregate::{Aggregation, PropertyAggregator, PropertyMap};
use crate::binding::Binding;
use crate::context::{CompactionContext, ContextMap};
use crate::label::{LabelDecision, LabelSelector};
use crate::subsumption::SubsumptionFilter;
use crate::value::PropertyValue;

/// Identity of the resource being represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceRequest {
    /// Short resource identifier, emitted as `_resource_id`.
    pub instance_id: String,
    /// Full instance URI, emitted as `@id`.
    pub instance_uri: String,
    /// Full class URI, emitted compacted as `@type` and `rdf:type`.
    pub class_uri: Option<String>,
}

impl InstanceRequest {
    /// Creates a request for an instance of `class_uri`.
    pub fn new(
        instance_id: impl Into<String>,
        instance_uri: impl Into<String>,
        class_uri: impl Into<String>,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            instance_uri: instance_uri.into(),
            class_uri: Some(class_uri.into()),
        }
    }
}

/// A compacted JSON-LD representation of one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstanceDocument {
    /// Short resource identifier.
    #[serde(rename = "_resource_id")]
    pub resource_id: String,
    /// Full instance URI.
    #[serde(rename = "@id")]
    pub id: String,
    /// Compact class URI.
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    /// Namespaces referenced by the document's keys and values.
    #[serde(rename = "@context")]
    pub context: ContextMap,
    /// Display label, unless suppressed or absent.
    #[serde(rename = "rdfs:label", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Remaining predicates by compact URI, including `rdf:type`.
    #[serde(flatten)]
    pub properties: BTreeMap<String, PropertyValue>,
}

impl InstanceDocument {
    /// The value of a compact predicate.
    #[must_use]
    pub fn get(&self, predicate: &str) -> Option<&PropertyValue> {
        self.properties.get(predicate)
    }

    /// Returns true when the document has an entry for `predicate`.
    #[must_use]
    pub fn contains(&self, predicate: &str) -> bool {
        self.properties.contains_key(predicate)
    }

    /// Serializes the document into a JSON value.
    ///
    /// # Errors
    ///
    /// Propagates [`serde_json::Error`]; all keys are strings, so this only
    /// fails on allocator-level problems.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Builds [`InstanceDocument`]s against one registry.
#[derive(Debug, Clone, Copy)]
pub struct DocumentAssembler<'r> {
    registry: &'r PrefixRegistry,
}

impl DocumentAssembler<'static> {
    /// An assembler over the process-wide registry.
    #[must_use]
    pub fn global() -> Self {
        Self::new(PrefixRegistry::global())
    }
}

impl<'r> DocumentAssembler<'r> {
    /// Creates an assembler over `registry`.
    #[must_use]
    pub fn new(registry: &'r PrefixRegistry) -> Self {
        Self { registry }
    }

    /// Assembles a document with a fresh [`CompactionContext`].
    ///
    /// Returns `None` when `bindings` is empty: the resource does not exist
    /// (or is not an instance of the requested class).
    #[must_use]
    pub fn assemble(
        &self,
        request: &InstanceRequest,
        bindings: &[Binding],
    ) -> Option<InstanceDocument> {
        let mut context = CompactionContext::new(self.registry);
        Self::assemble_with_context(&mut context, request, bindings)
    }

    /// Assembles a document, compacting through a caller-provided context.
    ///
    /// The context keeps every namespace it saw; the document's `@context`
    /// is narrowed to the namespaces its keys and reference values use.
    pub fn assemble_with_context(
        context: &mut CompactionContext<'_>,
        request: &InstanceRequest,
        bindings: &[Binding],
    ) -> Option<InstanceDocument> {
        if bindings.is_empty() {
            debug!(instance = %request.instance_uri, "no bindings; instance not found");
            return None;
        }

        let mut aggregation = PropertyAggregator::aggregate(context, bindings);
        let mut properties = std::mem::take(&mut aggregation.properties);
        let super_properties = &aggregation.super_properties;

        SubsumptionFilter::apply(&mut properties, super_properties);

        let label_key = context.shorten(iris::RDFS_LABEL);
        let label = match LabelSelector::decide(bindings, super_properties) {
            LabelDecision::Show(label) => {
                properties.remove(&label_key);
                Some(label)
            }
            LabelDecision::Suppressed => {
                properties.remove(&label_key);
                None
            }
            LabelDecision::Absent => None,
        };

        let type_key = context.shorten(iris::RDF_TYPE);
        let type_ = request.class_uri.as_deref().map(|uri| context.shorten(uri));
        match &type_ {
            Some(type_) => {
                properties.insert(type_key, PropertyValue::Scalar(type_.clone()));
            }
            None => {
                properties.remove(&type_key);
            }
        }

        let terms = used_terms(&properties, &aggregation, type_.as_deref(), label.is_some());
        let doc_context = context.snapshot_for(terms);

        debug!(
            instance = %request.instance_uri,
            properties = properties.len(),
            namespaces = doc_context.len(),
            "assembled instance document"
        );

        Some(InstanceDocument {
            resource_id: request.instance_id.clone(),
            id: request.instance_uri.clone(),
            type_,
            context: doc_context,
            label,
            properties,
        })
    }
}

/// Every compact term that references a namespace: keys, reference
/// values, `@type`, and the label key when a label is emitted. Literal
/// values never count, even when they look like `slug:local`.
fn used_terms<'a>(
    properties: &'a PropertyMap,
    aggregation: &Aggregation,
    type_: Option<&'a str>,
    has_label: bool,
) -> Vec<&'a str> {
    let mut terms: Vec<&str> = Vec::new();
    for (key, value) in properties {
        terms.push(key);
        terms.extend(
            value
                .values()
                .into_iter()
                .filter(|v| aggregation.is_reference(key, v)),
        );
    }
    terms.extend(type_);
    if has_label {
        terms.push(iris::RDFS_LABEL_COMPACT);
    }
    terms
}
