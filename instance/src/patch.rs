//! JSON Patch (RFC 6902 subset) over instance data.
//!
//! Instance data is keyed by full predicate URI. Patch paths may be full or
//! compact URIs; compact ones are expanded through the registry first.
//! Operations are applied in order to a copy of the input.

use semantica_vocab::{PrefixError, PrefixRegistry, UriMode};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised while reading or applying a patch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatchError {
    /// The patch document is not a JSON array.
    #[error("Patch must be a list of operations")]
    NotAList,

    /// An item lacks `op` or `path`.
    #[error("Incorrect patch item. Every object in the list must contain the following keys: op, path")]
    MissingKeys,

    /// An item names an operation other than `add`, `remove` or `replace`.
    #[error("Unsupported patch operation: '{op}'")]
    UnknownOperation {
        /// The operation found.
        op: String,
    },

    /// An `add` or `replace` item has no `value`.
    #[error("Patch operation '{op}' requires a value")]
    MissingValue {
        /// The operation found.
        op: String,
    },

    /// A compact path used an unregistered prefix.
    #[error(transparent)]
    Prefix(#[from] PrefixError),
}

/// One patch operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchOperation {
    /// Merge `value` (a value or a list) into the existing values.
    Add {
        /// Predicate URI.
        path: String,
        /// Value(s) to add.
        value: Value,
    },
    /// Delete the predicate, if present.
    Remove {
        /// Predicate URI.
        path: String,
    },
    /// Set the predicate to `value`, adding it when absent.
    Replace {
        /// Predicate URI.
        path: String,
        /// New value.
        value: Value,
    },
}

impl PatchOperation {
    /// Reads one patch item.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::MissingKeys`], [`PatchError::UnknownOperation`]
    /// or [`PatchError::MissingValue`] for malformed items.
    pub fn from_value(item: &Value) -> Result<Self, PatchError> {
        let op = item.get("op").and_then(Value::as_str);
        let path = item.get("path").and_then(Value::as_str);
        let (Some(op), Some(path)) = (op, path) else {
            return Err(PatchError::MissingKeys);
        };
        let path = path.to_owned();
        let value = || {
            item.get("value").cloned().ok_or_else(|| PatchError::MissingValue {
                op: op.to_owned(),
            })
        };
        match op {
            "add" => Ok(PatchOperation::Add {
                path,
                value: value()?,
            }),
            "remove" => Ok(PatchOperation::Remove { path }),
            "replace" => Ok(PatchOperation::Replace {
                path,
                value: value()?,
            }),
            other => Err(PatchError::UnknownOperation {
                op: other.to_owned(),
            }),
        }
    }

    /// The predicate this operation targets, as written in the patch.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            PatchOperation::Add { path, .. }
            | PatchOperation::Remove { path }
            | PatchOperation::Replace { path, .. } => path,
        }
    }
}

/// Reads a patch document (a JSON array of operations).
///
/// # Errors
///
/// Returns [`PatchError::NotAList`] when `patch` is not an array, or the
/// first error from [`PatchOperation::from_value`].
pub fn parse_patch(patch: &Value) -> Result<Vec<PatchOperation>, PatchError> {
    patch
        .as_array()
        .ok_or(PatchError::NotAList)?
        .iter()
        .map(PatchOperation::from_value)
        .collect()
}

/// Applies `operations` to a copy of `data` and returns the copy.
///
/// # Errors
///
/// Returns [`PatchError::Prefix`] when a compact path cannot be expanded.
/// Nothing is returned partially patched.
pub fn apply_patch(
    registry: &PrefixRegistry,
    data: &Map<String, Value>,
    operations: &[PatchOperation],
) -> Result<Map<String, Value>, PatchError> {
    let mut patched = data.clone();
    for operation in operations {
        let predicate = registry.normalize_uri(operation.path(), UriMode::Expand)?;
        match operation {
            PatchOperation::Replace { value, .. } => {
                patched.insert(predicate, value.clone());
            }
            PatchOperation::Remove { .. } => {
                patched.remove(&predicate);
            }
            PatchOperation::Add { value, .. } => {
                let mut values = into_list(patched.remove(&predicate));
                values.extend(into_list(Some(value.clone())));
                patched.insert(predicate, Value::Array(sorted_unique(values)));
            }
        }
    }
    Ok(patched)
}

fn into_list(value: Option<Value>) -> Vec<Value> {
    match value {
        None => Vec::new(),
        Some(Value::Array(values)) => values,
        Some(other) => vec![other],
    }
}

/// Strings sort by their text; the serialized form breaks ties so equal
/// values always end up adjacent.
fn sort_key(value: &Value) -> (String, String) {
    let text = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    (text, value.to_string())
}

fn sorted_unique(mut values: Vec<Value>) -> Vec<Value> {
    values.sort_by_cached_key(sort_key);
    values.dedup();
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    fn apply(instance: Value, patch: Value) -> Result<Value, PatchError> {
        let ops = parse_patch(&patch)?;
        apply_patch(PrefixRegistry::global(), &data(instance), &ops).map(Value::Object)
    }

    #[test]
    fn replace_succeeds() {
        let computed = apply(
            json!({"http://on.to/name": "Flipper", "http://on.to/age": 4}),
            json!([{"path": "http://on.to/age", "value": 5, "op": "replace"}]),
        );
        assert_eq!(
            computed,
            Ok(json!({"http://on.to/name": "Flipper", "http://on.to/age": 5}))
        );
    }

    #[test]
    fn replace_with_add_semantics() {
        let computed = apply(
            json!({"http://on.to/name": "Flipper", "http://on.to/age": 4}),
            json!([{"path": "http://on.to/birthDate", "value": "2014-08-01", "op": "replace"}]),
        );
        assert_eq!(
            computed,
            Ok(json!({
                "http://on.to/name": "Flipper",
                "http://on.to/age": 4,
                "http://on.to/birthDate": "2014-08-01"
            }))
        );
    }

    #[test]
    fn wrong_keys_are_rejected() {
        let err = apply(json!({}), json!([{"wrong key": "any value"}])).unwrap_err();
        assert_eq!(err, PatchError::MissingKeys);
        assert_eq!(
            err.to_string(),
            "Incorrect patch item. Every object in the list must contain the following keys: op, path"
        );
    }

    #[test]
    fn remove_succeeds() {
        let computed = apply(
            json!({"http://on.to/name": "Flipper", "http://on.to/weight": 200.0}),
            json!([{"path": "http://on.to/weight", "op": "remove"}]),
        );
        assert_eq!(computed, Ok(json!({"http://on.to/name": "Flipper"})));
    }

    #[test]
    fn remove_compact_path() {
        let computed = apply(
            json!({"http://dbpedia.org/ontology/name": "Francis"}),
            json!([{"path": "dbpedia:name", "op": "remove"}]),
        );
        assert_eq!(computed, Ok(json!({})));
    }

    #[test]
    fn add_to_missing_predicate() {
        let computed = apply(
            json!({}),
            json!([{"path": "http://on.to/children", "op": "add", "value": "Mary"}]),
        );
        assert_eq!(computed, Ok(json!({"http://on.to/children": ["Mary"]})));
    }

    #[test]
    fn add_list_sorts_and_dedups() {
        let computed = apply(
            json!({"http://on.to/children": ["Dave", "Eric"]}),
            json!([{"path": "http://on.to/children", "op": "add", "value": ["Mary", "John", "Dave"]}]),
        );
        assert_eq!(
            computed,
            Ok(json!({"http://on.to/children": ["Dave", "Eric", "John", "Mary"]}))
        );
    }

    #[test]
    fn unknown_prefix_in_path() {
        let err = apply(json!({}), json!([{"path": "nope:name", "op": "remove"}])).unwrap_err();
        assert!(matches!(err, PatchError::Prefix(PrefixError::UnknownPrefix { .. })));
    }

    #[test]
    fn unsupported_operation() {
        let err = apply(json!({}), json!([{"path": "http://on.to/a", "op": "move"}])).unwrap_err();
        assert_eq!(err, PatchError::UnknownOperation { op: "move".into() });
    }

    #[test]
    fn add_requires_value() {
        let err = apply(json!({}), json!([{"path": "http://on.to/a", "op": "add"}])).unwrap_err();
        assert_eq!(err, PatchError::MissingValue { op: "add".into() });
    }

    #[test]
    fn patch_must_be_a_list() {
        assert_eq!(parse_patch(&json!({"op": "remove"})), Err(PatchError::NotAList));
    }

    #[test]
    fn input_is_not_mutated() {
        let original = data(json!({"http://on.to/age": 4}));
        let ops = parse_patch(&json!([{"path": "http://on.to/age", "op": "remove"}])).unwrap();
        let patched = apply_patch(PrefixRegistry::global(), &original, &ops).unwrap();
        assert!(patched.is_empty());
        assert_eq!(original.len(), 1);
    }
}
