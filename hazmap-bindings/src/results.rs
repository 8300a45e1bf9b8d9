//! SPARQL results JSON decoding.
//!
//! Parses the SPARQL 1.1 Query Results JSON format (`head.vars` +
//! `results.bindings`) into a format-independent [`ResultSet`]. Only SELECT
//! results are handled; the query engine producing the payload is out of
//! scope.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{BindingsError, Result};

/// A single RDF term bound to a variable in a result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundTerm {
    /// An IRI binding (`"type": "uri"`).
    Uri(String),
    /// A literal binding, with optional datatype IRI and language tag.
    Literal {
        value: String,
        datatype: Option<String>,
        language: Option<String>,
    },
    /// A blank node binding.
    BlankNode(String),
}

impl BoundTerm {
    /// The lexical value of the term, independent of its kind.
    pub fn value(&self) -> &str {
        match self {
            BoundTerm::Uri(v) => v,
            BoundTerm::Literal { value, .. } => value,
            BoundTerm::BlankNode(v) => v,
        }
    }
}

/// Decoded SELECT results: declared variables plus solution rows.
///
/// A variable missing from a row's map is the legal representation of an
/// unbound OPTIONAL. Row order matches the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    /// Declared variables, in `head.vars` order.
    pub variables: Vec<String>,
    /// One term map per solution row.
    pub bindings: Vec<HashMap<String, BoundTerm>>,
}

impl ResultSet {
    /// Decode a SPARQL results JSON payload.
    ///
    /// Structural malformation (missing `head.vars` or `results.bindings`)
    /// is an error; a term of an unexpected shape within a row is decoded
    /// leniently (see [`decode_term`]) so one odd binding cannot poison the
    /// batch.
    pub fn from_json(json: &str) -> Result<ResultSet> {
        let value: Value = serde_json::from_str(json)?;

        let vars = value
            .get("head")
            .and_then(|h| h.get("vars"))
            .and_then(|v| v.as_array())
            .ok_or_else(|| BindingsError::Structure("missing 'head.vars'".into()))?;
        let variables: Vec<String> = vars
            .iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect();

        let rows = value
            .get("results")
            .and_then(|r| r.get("bindings"))
            .and_then(|b| b.as_array())
            .ok_or_else(|| BindingsError::Structure("missing 'results.bindings'".into()))?;

        let mut bindings = Vec::with_capacity(rows.len());
        for row in rows {
            let obj = row
                .as_object()
                .ok_or_else(|| BindingsError::Structure("binding row is not an object".into()))?;
            let mut solution = HashMap::with_capacity(obj.len());
            for (var, term) in obj {
                if let Some(term) = decode_term(term) {
                    solution.insert(var.clone(), term);
                }
            }
            bindings.push(solution);
        }

        Ok(ResultSet { variables, bindings })
    }

    /// Number of solution rows.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True when the result set has no solution rows.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Decode one term object into a [`BoundTerm`].
///
/// The standard shape is `{"type": ..., "value": ...}`; a bare JSON string
/// is also accepted and treated as a plain literal, since some endpoints
/// emit unwrapped scalars. Anything else yields `None` (the variable reads
/// as unbound for that row).
fn decode_term(term: &Value) -> Option<BoundTerm> {
    if let Some(s) = term.as_str() {
        return Some(BoundTerm::Literal {
            value: s.to_string(),
            datatype: None,
            language: None,
        });
    }

    let obj = term.as_object()?;
    let value = obj.get("value")?.as_str()?.to_string();
    let kind = obj.get("type").and_then(|t| t.as_str()).unwrap_or("literal");

    match kind {
        "uri" => Some(BoundTerm::Uri(value)),
        "bnode" => Some(BoundTerm::BlankNode(value)),
        // "literal" and the legacy "typed-literal"
        _ => Some(BoundTerm::Literal {
            value,
            datatype: obj
                .get("datatype")
                .and_then(|d| d.as_str())
                .map(String::from),
            language: obj
                .get("xml:lang")
                .and_then(|l| l.as_str())
                .map(String::from),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "head": { "vars": ["municipality", "name_it", "hazardPct"] },
        "results": { "bindings": [
            {
                "municipality": { "type": "uri", "value": "http://hazard-ontology.org/Municipality/123" },
                "name_it": { "type": "literal", "xml:lang": "it", "value": "Bolzano" },
                "hazardPct": { "type": "literal", "datatype": "http://www.w3.org/2001/XMLSchema#decimal", "value": "42.5" }
            },
            {
                "municipality": { "type": "uri", "value": "http://hazard-ontology.org/Municipality/124" }
            }
        ] }
    }"#;

    #[test]
    fn test_decode_select_results() {
        let rs = ResultSet::from_json(SAMPLE).unwrap();
        assert_eq!(rs.variables, vec!["municipality", "name_it", "hazardPct"]);
        assert_eq!(rs.len(), 2);

        let first = &rs.bindings[0];
        assert_eq!(
            first.get("name_it").map(|t| t.value()),
            Some("Bolzano")
        );
        assert!(matches!(first.get("municipality"), Some(BoundTerm::Uri(_))));

        // Unbound OPTIONALs are simply missing keys.
        assert!(!rs.bindings[1].contains_key("hazardPct"));
    }

    #[test]
    fn test_bare_scalar_term() {
        let rs = ResultSet::from_json(
            r#"{"head":{"vars":["x"]},"results":{"bindings":[{"x": "plain"}]}}"#,
        )
        .unwrap();
        assert_eq!(rs.bindings[0].get("x").map(|t| t.value()), Some("plain"));
    }

    #[test]
    fn test_missing_head_is_structural_error() {
        let err = ResultSet::from_json(r#"{"results":{"bindings":[]}}"#).unwrap_err();
        assert!(matches!(err, BindingsError::Structure(_)));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            ResultSet::from_json("not json"),
            Err(BindingsError::Json(_))
        ));
    }
}
