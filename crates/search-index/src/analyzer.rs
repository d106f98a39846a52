//! Text analysis shared by indexing and query translation.
//!
//! Pipeline: `SimpleTokenizer` (Unicode word boundaries) → `RemoveLongFilter`
//! → `LowerCaser`. Both sides use the same analyzer, so a value matches when
//! its tokens were produced from the indexed text.

use tantivy::tokenizer::{LowerCaser, RemoveLongFilter, SimpleTokenizer, TextAnalyzer, TokenStream};

/// Build the analyzer. Tokens longer than `max_token_len` bytes are dropped.
pub fn build_analyzer(max_token_len: usize) -> TextAnalyzer {
    // RemoveLongFilter keeps tokens strictly shorter than its limit.
    TextAnalyzer::builder(SimpleTokenizer::default())
        .filter(RemoveLongFilter::limit(max_token_len.saturating_add(1)))
        .filter(LowerCaser)
        .build()
}

/// Tokenize `text`, keeping token order and duplicates.
pub fn analyze(analyzer: &mut TextAnalyzer, text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut stream = analyzer.token_stream(text);
    while stream.advance() {
        tokens.push(stream.token().text.clone());
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_TOKEN_LEN;

    fn tokens(text: &str) -> Vec<String> {
        analyze(&mut build_analyzer(DEFAULT_MAX_TOKEN_LEN), text)
    }

    #[test]
    fn test_lowercases_and_splits() {
        assert_eq!(tokens("Walter Campbell"), vec!["walter", "campbell"]);
        assert_eq!(tokens("om:degreeCelsius"), vec!["om", "degreecelsius"]);
    }

    #[test]
    fn test_keeps_non_latin_words() {
        assert_eq!(tokens("伟"), vec!["伟"]);
        assert_eq!(tokens("Zoë"), vec!["zoë"]);
    }

    #[test]
    fn test_drops_long_tokens() {
        let long = "x".repeat(DEFAULT_MAX_TOKEN_LEN + 1);
        assert_eq!(tokens(&format!("short {long}")), vec!["short"]);

        let edge = "y".repeat(DEFAULT_MAX_TOKEN_LEN);
        assert_eq!(tokens(&edge), vec![edge.clone()]);
    }

    #[test]
    fn test_punctuation_only_yields_nothing() {
        assert!(tokens("::--").is_empty());
    }
}
