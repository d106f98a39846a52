//! Query string grammar.
//!
//! ```text
//! query   := clause (WS clause)*
//! clause  := ['+' | '-'] [path ':'] value
//! ```
//!
//! `+` marks a required clause, `-` an excluded one, and a clause without a
//! prefix is optional. The path is split off at the first unescaped `:`.
//! A backslash makes the next character literal, including whitespace, `:`
//! and the backslash itself.

use crate::error::QuerySyntaxError;

/// Characters that must be escaped anywhere in a clause.
const RESERVED: &[char] = &['"', '(', ')', '[', ']', '{', '}', '^', '~', '*', '?'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseOccur {
    Must,
    MustNot,
    Should,
}

/// One parsed clause with escapes resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub occur: ClauseOccur,
    /// Dotted field path, or `None` for the default field.
    pub field: Option<String>,
    pub value: String,
    /// The clause as written, for error messages.
    pub text: String,
}

#[derive(Debug, Clone, Copy)]
struct RawChar {
    ch: char,
    escaped: bool,
    /// Byte offset in the query; for escaped characters, of the backslash.
    position: usize,
}

impl RawChar {
    fn end(&self) -> usize {
        self.position + self.ch.len_utf8() + usize::from(self.escaped)
    }
}

pub fn parse_query(query: &str) -> Result<Vec<Clause>, QuerySyntaxError> {
    let mut clauses = Vec::new();
    let mut current: Vec<RawChar> = Vec::new();
    let mut chars = query.char_indices();

    while let Some((position, ch)) = chars.next() {
        if ch == '\\' {
            let Some((_, literal)) = chars.next() else {
                return Err(QuerySyntaxError::TrailingEscape {
                    query: query.to_string(),
                });
            };
            current.push(RawChar {
                ch: literal,
                escaped: true,
                position,
            });
        } else if ch.is_whitespace() {
            if !current.is_empty() {
                clauses.push(parse_clause(query, &std::mem::take(&mut current))?);
            }
        } else {
            current.push(RawChar {
                ch,
                escaped: false,
                position,
            });
        }
    }
    if !current.is_empty() {
        clauses.push(parse_clause(query, &current)?);
    }

    if clauses.is_empty() {
        return Err(QuerySyntaxError::Empty);
    }
    Ok(clauses)
}

fn parse_clause(query: &str, raw: &[RawChar]) -> Result<Clause, QuerySyntaxError> {
    let text = match (raw.first(), raw.last()) {
        (Some(first), Some(last)) => query[first.position..last.end()].to_string(),
        _ => String::new(),
    };

    let (occur, body) = match raw.first() {
        Some(c) if !c.escaped && c.ch == '+' => (ClauseOccur::Must, &raw[1..]),
        Some(c) if !c.escaped && c.ch == '-' => (ClauseOccur::MustNot, &raw[1..]),
        _ => (ClauseOccur::Should, raw),
    };

    let (field, value) = match body.iter().position(|c| !c.escaped && c.ch == ':') {
        Some(i) => (Some(&body[..i]), &body[i + 1..]),
        None => (None, body),
    };

    if field.is_some_and(|f| f.is_empty()) {
        return Err(QuerySyntaxError::EmptyField { clause: text });
    }
    if value.is_empty() {
        return Err(QuerySyntaxError::EmptyValue { clause: text });
    }

    let unexpected = field
        .unwrap_or(&[])
        .iter()
        .chain(value)
        .find(|c| !c.escaped && RESERVED.contains(&c.ch))
        .or_else(|| value.iter().find(|c| !c.escaped && c.ch == ':'));
    if let Some(c) = unexpected {
        return Err(QuerySyntaxError::UnexpectedCharacter {
            query: query.to_string(),
            ch: c.ch,
            position: c.position,
        });
    }

    Ok(Clause {
        occur,
        field: field.map(literal),
        value: literal(value),
        text,
    })
}

fn literal(raw: &[RawChar]) -> String {
    raw.iter().map(|c| c.ch).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(query: &str) -> Clause {
        let mut clauses = parse_query(query).unwrap();
        assert_eq!(clauses.len(), 1);
        clauses.remove(0)
    }

    #[test]
    fn test_occurrence_prefixes() {
        let clauses = parse_query("+a -b c").unwrap();
        let occurs: Vec<_> = clauses.iter().map(|c| c.occur).collect();
        assert_eq!(
            occurs,
            vec![ClauseOccur::Must, ClauseOccur::MustNot, ClauseOccur::Should]
        );
    }

    #[test]
    fn test_field_scoped_clause() {
        let clause = single("+name.first:Walter");
        assert_eq!(clause.field.as_deref(), Some("name.first"));
        assert_eq!(clause.value, "Walter");
        assert_eq!(clause.text, "+name.first:Walter");
    }

    #[test]
    fn test_escaped_colon_in_value() {
        let clause = single(r"+properties.temperature.unit:om\:degreeCelsius");
        assert_eq!(clause.field.as_deref(), Some("properties.temperature.unit"));
        assert_eq!(clause.value, "om:degreeCelsius");
    }

    #[test]
    fn test_unescaped_colon_in_value_is_rejected() {
        let err = parse_query("+properties.temperature.unit:om:degreeCelsius").unwrap_err();
        assert!(matches!(
            err,
            QuerySyntaxError::UnexpectedCharacter { ch: ':', position: 31, .. }
        ));
    }

    #[test]
    fn test_escaped_path_segment() {
        let clause = single(r"+properties.temperature.tm\:optional:true");
        assert_eq!(
            clause.field.as_deref(),
            Some("properties.temperature.tm:optional")
        );
        assert_eq!(clause.value, "true");
    }

    #[test]
    fn test_escaped_whitespace_stays_in_clause() {
        let clause = single(r"+city:Rio\ Rancho");
        assert_eq!(clause.value, "Rio Rancho");
    }

    #[test]
    fn test_escaped_prefix_is_literal() {
        let clause = single(r"\+plus");
        assert_eq!(clause.occur, ClauseOccur::Should);
        assert_eq!(clause.value, "+plus");
    }

    #[test]
    fn test_reserved_characters_need_escaping() {
        assert!(matches!(
            parse_query("+name:(Walter)"),
            Err(QuerySyntaxError::UnexpectedCharacter { ch: '(', .. })
        ));
        assert!(matches!(
            parse_query("wal*"),
            Err(QuerySyntaxError::UnexpectedCharacter { ch: '*', .. })
        ));
        assert_eq!(single(r"wal\*").value, "wal*");
    }

    #[test]
    fn test_malformed_queries() {
        assert_eq!(parse_query("   "), Err(QuerySyntaxError::Empty));
        assert!(matches!(
            parse_query(r"abc\"),
            Err(QuerySyntaxError::TrailingEscape { .. })
        ));
        assert!(matches!(
            parse_query("+:value"),
            Err(QuerySyntaxError::EmptyField { .. })
        ));
        assert!(matches!(
            parse_query("+city:"),
            Err(QuerySyntaxError::EmptyValue { .. })
        ));
        assert!(matches!(
            parse_query("+"),
            Err(QuerySyntaxError::EmptyValue { .. })
        ));
    }
}
