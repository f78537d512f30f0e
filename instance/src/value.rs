//! Aggregated predicate values.

use serde::Serialize;

/// The value of one predicate in a document: a single compact value, or an
/// ordered list once the predicate has been bound more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Exactly one binding so far.
    Scalar(String),
    /// Two or more bindings, in encounter order. Duplicates are kept.
    List(Vec<String>),
}

impl PropertyValue {
    /// Appends a value, promoting a scalar to a two-element list.
    pub fn push(&mut self, value: String) {
        match self {
            PropertyValue::Scalar(first) => {
                let first = std::mem::take(first);
                *self = PropertyValue::List(vec![first, value]);
            }
            PropertyValue::List(values) => values.push(value),
        }
    }

    /// The values in encounter order.
    #[must_use]
    pub fn values(&self) -> Vec<&str> {
        match self {
            PropertyValue::Scalar(v) => vec![v.as_str()],
            PropertyValue::List(vs) => vs.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Scalar(value.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Scalar(value)
    }
}
