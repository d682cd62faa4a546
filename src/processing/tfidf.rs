//! TF-IDF vectors over a resume/job posting pair

use crate::processing::tokenizer::Tokenizer;
use std::collections::{BTreeSet, HashMap};

/// Dense TF-IDF table, one row per document and one column per vocabulary term.
///
/// All entries are non-negative. A term missing from a document has a zero
/// entry in that document's row whatever its document frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct TfIdfMatrix {
    vocabulary: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl TfIdfMatrix {
    /// `(documents, vocabulary terms)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.vocabulary.len())
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Weight of `term` in document `index`, if both exist
    pub fn weight(&self, index: usize, term: &str) -> Option<f64> {
        let column = self.vocabulary.iter().position(|t| t == term)?;
        self.rows.get(index).map(|row| row[column])
    }
}

/// Builds TF-IDF matrices with smoothed IDF: `ln((N + 1) / (df + 1)) + 1`.
#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    tokenizer: Tokenizer,
}

impl TfIdfVectorizer {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// Vectorize exactly two documents (resume first, job posting second)
    pub fn compute_tfidf(&self, doc_a: &str, doc_b: &str) -> TfIdfMatrix {
        self.fit(&[doc_a, doc_b])
    }

    fn fit(&self, documents: &[&str]) -> TfIdfMatrix {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| self.tokenizer.tokenize(doc))
            .collect();

        let vocabulary: Vec<String> = tokenized
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let counts: Vec<HashMap<&str, usize>> = tokenized
            .iter()
            .map(|tokens| {
                let mut counts = HashMap::new();
                for token in tokens {
                    *counts.entry(token.as_str()).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        let n = documents.len() as f64;
        let idf: Vec<f64> = vocabulary
            .iter()
            .map(|term| {
                let df = counts.iter().filter(|c| c.contains_key(term.as_str())).count() as f64;
                ((n + 1.0) / (df + 1.0)).ln() + 1.0
            })
            .collect();

        let rows = tokenized
            .iter()
            .zip(counts.iter())
            .map(|(tokens, counts)| {
                let total = tokens.len();
                vocabulary
                    .iter()
                    .zip(idf.iter())
                    .map(|(term, idf)| {
                        if total == 0 {
                            return 0.0;
                        }
                        let tf = *counts.get(term.as_str()).unwrap_or(&0) as f64 / total as f64;
                        tf * idf
                    })
                    .collect()
            })
            .collect();

        TfIdfMatrix { vocabulary, rows }
    }
}
