//! Display label selection.

use semantica_vocab::iris;
use tracing::debug;

use crate::aggregate::SuperPropertyMap;
use crate::binding::Binding;

/// What to do with the top-level `rdfs:label` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelDecision {
    /// Emit this label.
    Show(String),
    /// Some predicate specializes `rdfs:label`; its value already carries the label.
    Suppressed,
    /// No row carried a label.
    Absent,
}

/// Picks the document label.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelSelector;

impl LabelSelector {
    /// The label of the last row that carries one.
    #[must_use]
    pub fn candidate(bindings: &[Binding]) -> Option<&str> {
        bindings.iter().rev().find_map(|b| b.label.as_deref())
    }

    /// Decides the top-level label from the rows and the declared hierarchy.
    #[must_use]
    pub fn decide(bindings: &[Binding], super_properties: &SuperPropertyMap) -> LabelDecision {
        if super_properties.has_super(iris::RDFS_LABEL_COMPACT)
            || super_properties.has_super(iris::RDFS_LABEL)
        {
            debug!("rdfs:label is specialized by a bound predicate; omitting top-level label");
            return LabelDecision::Suppressed;
        }
        match Self::candidate(bindings) {
            Some(label) => LabelDecision::Show(label.to_owned()),
            None => LabelDecision::Absent,
        }
    }
}
