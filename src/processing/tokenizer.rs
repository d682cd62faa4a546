//! Word-boundary tokenization

use regex::Regex;
use std::collections::BTreeSet;

/// Lowercase word tokenizer.
///
/// A token is a maximal run of letters, digits or underscore (`\b\w+\b`).
/// Punctuation and whitespace only separate tokens. No stemming and no
/// stopword removal.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    word_regex: Regex,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        let word_regex = Regex::new(r"\b\w+\b").expect("Invalid word regex");
        Self { word_regex }
    }

    /// Lowercase tokens of `text` in order of appearance
    pub fn tokens(&self, text: &str) -> impl Iterator<Item = String> + '_ {
        let lowered = text.to_lowercase();
        let spans: Vec<(usize, usize)> = self
            .word_regex
            .find_iter(&lowered)
            .map(|m| (m.start(), m.end()))
            .collect();
        spans
            .into_iter()
            .map(move |(start, end)| lowered[start..end].to_string())
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokens(text).collect()
    }

    /// Distinct tokens, ignoring frequency
    pub fn token_set(&self, text: &str) -> BTreeSet<String> {
        self.tokens(text).collect()
    }
}
