//! The SPARQL query whose rows feed the assembler.
//!
//! Only rendering lives here; executing it against the triplestore is the
//! caller's job.

use crate::error::{InstanceError, Result};

/// Parameters of the instance query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceQuery<'a> {
    /// Full URI of the subject.
    pub instance_uri: &'a str,
    /// Full URI of the class the subject must belong to.
    pub class_uri: &'a str,
    /// Language tag used to filter literal objects and labels.
    pub lang: &'a str,
    /// Inference ruleset that materializes super-properties.
    pub ruleset_uri: &'a str,
}

impl InstanceQuery<'_> {
    /// Renders the query.
    ///
    /// Rows come back with `?predicate ?object ?label ?super_property`,
    /// where `?super_property` is optional and literal objects are limited
    /// to `lang` or untagged values.
    ///
    /// # Errors
    ///
    /// Returns [`InstanceError::InvalidIri`] when a URI cannot be written as
    /// an IRI reference, and [`InstanceError::InvalidLanguage`] when `lang`
    /// is not a plain language tag.
    pub fn to_sparql(&self) -> Result<String> {
        let instance_uri = iri_ref(self.instance_uri)?;
        let class_uri = iri_ref(self.class_uri)?;
        let ruleset_uri = iri_ref(self.ruleset_uri)?;
        let lang = language_tag(self.lang)?;
        Ok(format!(
            r#"DEFINE input:inference {ruleset_uri}
SELECT DISTINCT ?predicate ?object ?label ?super_property {{
    {instance_uri} a {class_uri};
        rdfs:label ?label;
        ?predicate ?object .
OPTIONAL {{ ?predicate rdfs:subPropertyOf ?super_property }} .
FILTER((langMatches(lang(?object), "{lang}") OR langMatches(lang(?object), "")) OR (IsURI(?object))) .
FILTER(langMatches(lang(?label), "{lang}") OR langMatches(lang(?label), "")) .
}}"#
        ))
    }
}

fn iri_ref(uri: &str) -> Result<String> {
    let forbidden = |c: char| c.is_whitespace() || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\');
    if uri.is_empty() || uri.chars().any(forbidden) {
        return Err(InstanceError::InvalidIri {
            iri: uri.to_owned(),
        });
    }
    Ok(format!("<{uri}>"))
}

fn language_tag(lang: &str) -> Result<&str> {
    if lang.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        Ok(lang)
    } else {
        Err(InstanceError::InvalidLanguage {
            lang: lang.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query<'a>(instance_uri: &'a str) -> InstanceQuery<'a> {
        InstanceQuery {
            instance_uri,
            class_uri: "http://semantica.globo.com/place/City",
            lang: "pt",
            ruleset_uri: "http://semantica.globo.com/ruleset",
        }
    }

    #[test]
    fn renders_parameters() {
        let sparql = query("http://semantica.globo.com/place/Rio").to_sparql().unwrap();
        assert!(sparql.starts_with("DEFINE input:inference <http://semantica.globo.com/ruleset>"));
        assert!(sparql.contains(
            "<http://semantica.globo.com/place/Rio> a <http://semantica.globo.com/place/City>;"
        ));
        assert!(sparql.contains("OPTIONAL { ?predicate rdfs:subPropertyOf ?super_property }"));
        assert!(sparql.contains(r#"langMatches(lang(?label), "pt")"#));
    }

    #[test]
    fn rejects_injection() {
        let err = query("http://x/> } DROP ALL { <http://y").to_sparql();
        assert!(matches!(err, Err(InstanceError::InvalidIri { .. })));
    }

    #[test]
    fn rejects_bad_language() {
        let q = InstanceQuery {
            lang: "pt\")",
            ..query("http://semantica.globo.com/place/Rio")
        };
        assert!(matches!(q.to_sparql(), Err(InstanceError::InvalidLanguage { .. })));
    }
}
