//! Lightweight keyword-overlap rating with resume heuristics.
//!
//! Cheaper than the TF-IDF path and intentionally generous: the rating lives
//! in a 50-100 band so sparse resumes are not scored harshly.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "for", "to", "of", "in", "on", "with", "by", "at", "from",
    "as", "is", "are", "be", "this", "that", "it", "you", "your",
];

const HEURISTIC_BONUS: f64 = 0.05;
const MAX_LISTED: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuickMatch {
    pub rating: u32,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub totals: QuickTotals,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuickTotals {
    pub job_keys: usize,
    pub matched: usize,
}

pub struct QuickMatcher {
    separator_regex: Regex,
    years_regex: Regex,
    projects_regex: Regex,
    metrics_regex: Regex,
}

impl Default for QuickMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl QuickMatcher {
    pub fn new() -> Self {
        Self {
            separator_regex: Regex::new(r"[^a-z0-9+.#]").expect("Invalid separator regex"),
            years_regex: Regex::new(r"(?i)\b\d+\+?\s*(years|yrs)\b").expect("Invalid years regex"),
            projects_regex: Regex::new(r"(?i)\b(project|projects|portfolio|github)\b")
                .expect("Invalid projects regex"),
            metrics_regex: Regex::new(r"\b%|\b\d{2,}\b").expect("Invalid metrics regex"),
        }
    }

    /// Unique keywords in order of first appearance
    pub fn keywords(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let spaced = self.separator_regex.replace_all(&lowered, " ");

        let mut seen = HashSet::new();
        spaced
            .split_whitespace()
            .filter(|t| t.len() > 2 && !STOPWORDS.contains(t))
            .filter(|t| seen.insert(t.to_string()))
            .map(|t| t.to_string())
            .collect()
    }

    pub fn rate(&self, resume: &str, job: &str) -> QuickMatch {
        let job_keys = self.keywords(job);
        let resume_keys: HashSet<String> = self.keywords(resume).into_iter().collect();

        let (matched, missing): (Vec<String>, Vec<String>) = job_keys
            .iter()
            .cloned()
            .partition(|k| resume_keys.contains(k));

        let base_ratio = if job_keys.is_empty() {
            0.0
        } else {
            matched.len() as f64 / job_keys.len() as f64
        };

        let bonus = [
            self.years_regex.is_match(resume),
            self.projects_regex.is_match(resume),
            self.metrics_regex.is_match(resume),
        ]
        .iter()
        .filter(|&&hit| hit)
        .count() as f64
            * HEURISTIC_BONUS;

        let score = (base_ratio + bonus).min(1.0);
        let rating = ((0.5 + 0.5 * score) * 100.0).round() as u32;

        QuickMatch {
            rating,
            totals: QuickTotals {
                job_keys: job_keys.len(),
                matched: matched.len(),
            },
            matched: matched.into_iter().take(MAX_LISTED).collect(),
            missing: missing.into_iter().take(MAX_LISTED).collect(),
        }
    }
}
