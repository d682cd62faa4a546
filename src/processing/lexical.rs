//! Lexical scoring: TF-IDF cosine rating plus matched/missing keywords

use crate::processing::similarity::{cosine_similarity, to_rating};
use crate::processing::tfidf::{TfIdfMatrix, TfIdfVectorizer};
use crate::processing::tokenizer::Tokenizer;
use log::debug;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default)]
pub struct LexicalScorer {
    tokenizer: Tokenizer,
    vectorizer: TfIdfVectorizer,
}

impl LexicalScorer {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self {
            vectorizer: TfIdfVectorizer::new(tokenizer.clone()),
            tokenizer,
        }
    }

    pub fn compute_tfidf(&self, resume: &str, job: &str) -> TfIdfMatrix {
        self.vectorizer.compute_tfidf(resume, job)
    }

    /// TF-IDF cosine similarity between resume and job posting, in [0, 100]
    pub fn score(&self, resume: &str, job: &str) -> f64 {
        let matrix = self.compute_tfidf(resume, job);
        let (resume_row, job_row) = match (matrix.row(0), matrix.row(1)) {
            (Some(r), Some(j)) => (r, j),
            _ => return 0.0,
        };

        // Both rows span the same vocabulary, so the lengths always agree
        let similarity = cosine_similarity(resume_row, job_row).unwrap_or(0.0);
        debug!(
            "Lexical similarity {:.4} over {} terms",
            similarity,
            matrix.vocabulary().len()
        );
        to_rating(similarity)
    }

    /// Distinct tokens present in both documents
    pub fn matched_keywords(&self, resume: &str, job: &str) -> BTreeSet<String> {
        let resume_words = self.tokenizer.token_set(resume);
        let job_words = self.tokenizer.token_set(job);
        resume_words.intersection(&job_words).cloned().collect()
    }

    /// Job posting tokens that never appear in the resume
    pub fn missing_keywords(&self, resume: &str, job: &str) -> BTreeSet<String> {
        let resume_words = self.tokenizer.token_set(resume);
        let job_words = self.tokenizer.token_set(job);
        job_words.difference(&resume_words).cloned().collect()
    }
}
