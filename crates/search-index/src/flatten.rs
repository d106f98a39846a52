//! Flattening JSON documents into path-scoped index terms.

use crate::analyzer::analyze;
use serde_json::Value;
use std::collections::BTreeSet;
use tantivy::tokenizer::TextAnalyzer;

/// Separates the field path from the token inside a path-scoped term.
pub const PATH_TERM_SEPARATOR: char = '\u{1f}';

/// Term stored in the path-scoped field for `token` found under `path`.
pub fn path_term(path: &str, token: &str) -> String {
    format!("{path}{PATH_TERM_SEPARATOR}{token}")
}

/// A scalar found at a dotted path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub path: String,
    pub text: String,
    /// String leaves feed the default field; numbers and booleans do not.
    pub is_string: bool,
}

/// Collect every non-null scalar of `document` with its dotted path.
///
/// Array elements share the path of the array. Object keys are used verbatim,
/// including keys that contain `:` or `@`.
pub fn flatten(document: &Value) -> Vec<Leaf> {
    let mut leaves = Vec::new();
    walk(document, String::new(), &mut leaves);
    leaves
}

fn walk(value: &Value, path: String, leaves: &mut Vec<Leaf>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                walk(child, child_path, leaves);
            }
        }
        Value::Array(items) => {
            for item in items {
                walk(item, path.clone(), leaves);
            }
        }
        Value::String(s) => leaves.push(Leaf {
            path,
            text: s.clone(),
            is_string: true,
        }),
        Value::Number(n) => leaves.push(Leaf {
            path,
            text: n.to_string(),
            is_string: false,
        }),
        Value::Bool(b) => leaves.push(Leaf {
            path,
            text: b.to_string(),
            is_string: false,
        }),
        Value::Null => {}
    }
}

/// Deduplicated terms of one document.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DocumentTerms {
    /// Tokens for the default field.
    pub all: BTreeSet<String>,
    /// `path_term` values for the path-scoped field.
    pub scoped: BTreeSet<String>,
}

/// Analyze every leaf of `document`.
pub fn document_terms(
    document: &Value,
    analyzer: &mut TextAnalyzer,
    default_field: bool,
) -> DocumentTerms {
    let mut terms = DocumentTerms::default();
    for leaf in flatten(document) {
        for token in analyze(analyzer, &leaf.text) {
            if default_field && leaf.is_string {
                terms.all.insert(token.clone());
            }
            terms.scoped.insert(path_term(&leaf.path, &token));
        }
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::build_analyzer;
    use serde_json::json;

    #[test]
    fn test_flatten_nested_paths() {
        let doc = json!({
            "name": {"first": "Walter", "last": "Campbell"},
            "age": 34,
            "like": [349, 12],
            "gone": null,
        });
        let leaves = flatten(&doc);
        let paths: Vec<(&str, &str)> = leaves
            .iter()
            .map(|l| (l.path.as_str(), l.text.as_str()))
            .collect();

        assert!(paths.contains(&("name.first", "Walter")));
        assert!(paths.contains(&("name.last", "Campbell")));
        assert!(paths.contains(&("age", "34")));
        assert!(paths.contains(&("like", "349")));
        assert!(paths.contains(&("like", "12")));
        assert!(!paths.iter().any(|(p, _)| *p == "gone"));
    }

    #[test]
    fn test_flatten_keeps_colon_keys() {
        let doc = json!({"properties": {"temperature": {"tm:optional": true, "unit": "om:degreeCelsius"}}});
        let leaves = flatten(&doc);

        assert!(leaves.iter().any(|l| l.path == "properties.temperature.tm:optional"));
        assert!(leaves.iter().any(|l| l.path == "properties.temperature.unit" && l.is_string));
    }

    #[test]
    fn test_document_terms() {
        let doc = json!({"city": "Rio Rancho", "age": 7});
        let mut analyzer = build_analyzer(40);
        let terms = document_terms(&doc, &mut analyzer, true);

        assert!(terms.all.contains("rio"));
        assert!(terms.all.contains("rancho"));
        assert!(!terms.all.contains("7"));
        assert!(terms.scoped.contains(&path_term("city", "rancho")));
        assert!(terms.scoped.contains(&path_term("age", "7")));
    }

    #[test]
    fn test_document_terms_without_default_field() {
        let doc = json!({"city": "Reno"});
        let terms = document_terms(&doc, &mut build_analyzer(40), false);
        assert!(terms.all.is_empty());
        assert_eq!(terms.scoped.len(), 1);
    }
}
