//! Query result rows.
//!
//! The graph query engine returns SPARQL 1.1 JSON results. Each row for the
//! requested subject carries a `predicate` and an `object`, and optionally a
//! language-filtered `label` and the predicate's declared `super_property`.
//! [`QueryResult::to_bindings`] turns those rows into typed [`Binding`]s and
//! rejects malformed rows instead of guessing.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{InstanceError, Result};

/// The object position of a binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// A resource reference.
    Iri(String),
    /// A blank node, rendered as `_:id`.
    Blank(String),
    /// A literal, already filtered to the requested language upstream.
    Literal {
        /// Lexical value.
        value: String,
        /// Language tag, if any.
        lang: Option<String>,
        /// Datatype URI, if any.
        datatype: Option<String>,
    },
}

impl Term {
    /// Shorthand for a plain literal.
    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal {
            value: value.into(),
            lang: None,
            datatype: None,
        }
    }

    /// Shorthand for a resource reference.
    pub fn iri(value: impl Into<String>) -> Self {
        Term::Iri(value.into())
    }

    /// The lexical value (URI, blank node label, or literal text).
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Term::Iri(v) | Term::Blank(v) => v,
            Term::Literal { value, .. } => value,
        }
    }

    /// Returns true for resource references.
    #[must_use]
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }
}

/// One outgoing relation of the subject being represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Full predicate URI.
    pub predicate: String,
    /// The related resource or literal.
    pub object: Term,
    /// The subject's `rdfs:label` as delivered with this row.
    pub label: Option<String>,
    /// Full URI of the predicate's declared super-property.
    pub super_property: Option<String>,
}

impl Binding {
    /// Creates a binding with no label and no super-property.
    pub fn new(predicate: impl Into<String>, object: Term) -> Self {
        Self {
            predicate: predicate.into(),
            object,
            label: None,
            super_property: None,
        }
    }

    /// Attaches the label delivered with this row.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Attaches the predicate's declared super-property.
    #[must_use]
    pub fn with_super_property(mut self, super_property: impl Into<String>) -> Self {
        self.super_property = Some(super_property.into());
        self
    }
}

/// A single cell of a SPARQL JSON result row.
#[derive(Debug, Clone, Deserialize)]
pub struct RdfTerm {
    /// `uri`, `literal`, `typed-literal` or `bnode`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Lexical value.
    pub value: String,
    /// Language tag of a literal.
    #[serde(rename = "xml:lang", default)]
    pub lang: Option<String>,
    /// Datatype of a typed literal.
    #[serde(default)]
    pub datatype: Option<String>,
}

/// A SPARQL JSON result row, keyed by variable name.
pub type Row = HashMap<String, RdfTerm>;

/// The `results` member of a SPARQL JSON result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultSet {
    /// Rows, in the order the engine returned them.
    #[serde(default)]
    pub bindings: Vec<Row>,
}

/// A SPARQL 1.1 JSON query result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryResult {
    /// The result rows.
    #[serde(default)]
    pub results: ResultSet,
}

impl QueryResult {
    /// Parses a SPARQL JSON result document.
    ///
    /// # Errors
    ///
    /// Returns [`InstanceError::Json`] when the text is not a result document.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Returns true when the engine returned no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.bindings.is_empty()
    }

    /// Converts every row into a [`Binding`], preserving row order.
    ///
    /// # Errors
    ///
    /// Returns [`InstanceError::MalformedBinding`] for a row without
    /// `predicate` or `object`, and [`InstanceError::UnsupportedTerm`] when a
    /// `predicate` or `super_property` cell is not a URI.
    pub fn to_bindings(&self) -> Result<Vec<Binding>> {
        self.results
            .bindings
            .iter()
            .enumerate()
            .map(|(index, row)| decode_row(index, row))
            .collect()
    }
}

fn decode_row(index: usize, row: &Row) -> Result<Binding> {
    let predicate = row
        .get("predicate")
        .ok_or(InstanceError::MalformedBinding {
            index,
            field: "predicate",
        })?;
    let object = row.get("object").ok_or(InstanceError::MalformedBinding {
        index,
        field: "object",
    })?;

    Ok(Binding {
        predicate: expect_uri(index, "predicate", predicate)?,
        object: decode_term(index, object)?,
        label: row.get("label").map(|t| t.value.clone()),
        super_property: row
            .get("super_property")
            .map(|t| expect_uri(index, "super_property", t))
            .transpose()?,
    })
}

fn expect_uri(index: usize, field: &'static str, term: &RdfTerm) -> Result<String> {
    if term.kind == "uri" {
        Ok(term.value.clone())
    } else {
        Err(InstanceError::UnsupportedTerm {
            index,
            field,
            kind: term.kind.clone(),
        })
    }
}

fn decode_term(index: usize, term: &RdfTerm) -> Result<Term> {
    match term.kind.as_str() {
        "uri" => Ok(Term::Iri(term.value.clone())),
        "bnode" => Ok(Term::Blank(format!("_:{}", term.value))),
        "literal" | "typed-literal" => Ok(Term::Literal {
            value: term.value.clone(),
            lang: term.lang.clone(),
            datatype: term.datatype.clone(),
        }),
        other => Err(InstanceError::UnsupportedTerm {
            index,
            field: "object",
            kind: other.to_owned(),
        }),
    }
}
