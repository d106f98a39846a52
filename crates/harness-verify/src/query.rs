//! Building field-scoped boolean query strings.

use std::fmt;

/// Characters with meaning in the query syntax.
pub const RESERVED_CHARS: &[char] = &[
    '+', '-', '=', '&', '|', '>', '<', '!', '(', ')', '{', '}', '[', ']', '^', '"', '~', '*',
    '?', ':', '\\', '/',
];

/// Escape every reserved character and whitespace with a backslash.
///
/// The result matches `text` literally when used as a value or as one path
/// segment.
pub fn escape_query_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if RESERVED_CHARS.contains(&ch) || ch.is_whitespace() {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// A dot-separated path into a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    pub fn new<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Self {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Split on `.`; segments themselves cannot contain dots.
    pub fn parse(path: &str) -> Self {
        Self::new(path.split('.'))
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Path with each segment escaped, ready for a query clause.
    pub fn to_query_text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| escape_query_text(segment))
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// Accumulates clauses and renders them space-separated.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    clauses: Vec<String>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `+<path>:<value>`
    pub fn must_match(mut self, path: &FieldPath, value: &str) -> Self {
        self.clauses.push(format!(
            "+{}:{}",
            path.to_query_text(),
            escape_query_text(value)
        ));
        self
    }

    /// `+<value>` against the default field.
    pub fn must_contain(mut self, value: &str) -> Self {
        self.clauses.push(format!("+{}", escape_query_text(value)));
        self
    }

    /// `-<path>:<value>`
    pub fn must_not_match(mut self, path: &FieldPath, value: &str) -> Self {
        self.clauses.push(format!(
            "-{}:{}",
            path.to_query_text(),
            escape_query_text(value)
        ));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn build(&self) -> String {
        self.clauses.join(" ")
    }
}
