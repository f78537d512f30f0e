//! Semantica instance representation compiler.
//!
//! Converts the flat rows a graph query returns for one resource into a
//! compacted JSON-LD document:
//!
//! 1. [`PropertyAggregator`] folds rows into predicate → value, compacting
//!    URIs through a per-document [`CompactionContext`].
//! 2. [`SubsumptionFilter`] drops inferred super-property entries that only
//!    repeat a sub-property's value.
//! 3. [`LabelSelector`] picks the display label, or suppresses it when a
//!    bound predicate specializes `rdfs:label`.
//! 4. [`DocumentAssembler`] merges identity fields, properties, label and
//!    `@context` into an [`InstanceDocument`].
//!
//! # Entry Point
//!
//! ```
//! use semantica_instance::{Binding, DocumentAssembler, InstanceRequest, Term};
//!
//! let request = InstanceRequest::new(
//!     "Rio",
//!     "http://semantica.globo.com/place/Rio",
//!     "http://semantica.globo.com/place/City",
//! );
//! let bindings = vec![
//!     Binding::new("http://schema.org/name", Term::literal("Rio")).with_label("Rio de Janeiro"),
//!     Binding::new("http://semantica.globo.com/upper/name", Term::literal("Rio"))
//!         .with_super_property("http://schema.org/name"),
//! ];
//! let doc = DocumentAssembler::global().assemble(&request, &bindings);
//! let doc = doc.ok_or("not found")?;
//! assert!(doc.contains("upper:name"));
//! assert!(!doc.contains("schema:name"));
//! assert_eq!(doc.label.as_deref(), Some("Rio de Janeiro"));
//! # Ok::<(), &'static str>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod aggregate;
pub mod binding;
pub mod context;
pub mod document;
pub mod error;
pub mod label;
pub mod patch;
pub mod query;
pub mod settings;
pub mod subsumption;
pub mod value;

pub use aggregate::{Aggregation, PropertyAggregator, PropertyMap, SuperPropertyMap};
pub use binding::{Binding, QueryResult, Term};
pub use context::{CompactionContext, ContextMap};
pub use document::{DocumentAssembler, InstanceDocument, InstanceRequest};
pub use error::{InstanceError, Result};
pub use label::{LabelDecision, LabelSelector};
pub use query::InstanceQuery;
pub use settings::Settings;
pub use subsumption::SubsumptionFilter;
pub use value::PropertyValue;

/// Decodes a query result and assembles the instance document.
///
/// Returns `Ok(None)` when the result has no rows.
///
/// # Errors
///
/// Returns [`InstanceError::MalformedBinding`] or
/// [`InstanceError::UnsupportedTerm`] when a row cannot be decoded.
pub fn get_instance(
    request: &InstanceRequest,
    result: &QueryResult,
) -> Result<Option<InstanceDocument>> {
    if result.is_empty() {
        return Ok(None);
    }
    let bindings = result.to_bindings()?;
    Ok(DocumentAssembler::global().assemble(request, &bindings))
}
