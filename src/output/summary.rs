//! Format-neutral view of scoring results for the text formatters

use crate::llm::rater::LlmRating;
use crate::processing::quick::QuickMatch;
use crate::ranker::{HybridMatch, LexicalMatch, MatchReport, SemanticMatch, SkillsMatch};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub title: String,
    pub generated_at: Option<String>,
    pub scores: Vec<ScoreLine>,
    pub lists: Vec<KeywordList>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreLine {
    pub label: String,
    /// Rating on the 0-100 scale
    pub value: f64,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeywordList {
    pub label: String,
    pub positive: bool,
    /// Sorted for set-backed results, job order for quick matches
    pub items: Vec<String>,
}

impl Summary {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            generated_at: None,
            scores: Vec::new(),
            lists: Vec::new(),
            notes: Vec::new(),
        }
    }

    fn score(mut self, label: &str, value: f64, detail: Option<String>) -> Self {
        self.scores.push(ScoreLine {
            label: label.to_string(),
            value,
            detail,
        });
        self
    }

    /// Items keep the order the result holds them in
    fn list<'a>(mut self, label: &str, positive: bool, items: impl IntoIterator<Item = &'a String>) -> Self {
        let items: Vec<String> = items.into_iter().cloned().collect();
        self.lists.push(KeywordList {
            label: label.to_string(),
            positive,
            items,
        });
        self
    }

    fn merge(mut self, other: Summary) -> Self {
        self.scores.extend(other.scores);
        self.lists.extend(other.lists);
        self.notes.extend(other.notes);
        self
    }
}

/// A result that every output format can render
pub trait Presentable: Serialize {
    fn summary(&self) -> Summary;
}

impl Presentable for LexicalMatch {
    fn summary(&self) -> Summary {
        Summary::new("Keyword Match")
            .score("TF-IDF rating", self.rating, None)
            .list("Matched keywords", true, &self.matched)
            .list("Missing keywords", false, &self.missing)
    }
}

impl Presentable for SemanticMatch {
    fn summary(&self) -> Summary {
        Summary::new("Semantic Match").score("Semantic rating", self.semantic_rating, Some("local model".to_string()))
    }
}

impl Presentable for SkillsMatch {
    fn summary(&self) -> Summary {
        Summary::new("Skills Match")
            .score("Skills coverage", self.skills_score, None)
            .list("Matched skills", true, &self.matched_skills)
            .list("Missing skills", false, &self.missing_skills)
    }
}

impl Presentable for HybridMatch {
    fn summary(&self) -> Summary {
        let source = serde_json::to_value(self.source)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string));
        let mut summary = Summary::new("Hybrid Semantic Match").score(
            "Semantic rating",
            self.hybrid_semantic_rating,
            source.map(|s| format!("source: {}", s)),
        );
        summary.notes.extend(self.diagnostics.iter().cloned());
        summary
    }
}

impl Presentable for QuickMatch {
    fn summary(&self) -> Summary {
        Summary::new("Quick Match")
            .score(
                "Quick rating",
                self.rating as f64,
                Some(format!("{} of {} job keywords", self.totals.matched, self.totals.job_keys)),
            )
            .list("Matched keywords", true, &self.matched)
            .list("Missing keywords", false, &self.missing)
    }
}

impl Presentable for LlmRating {
    fn summary(&self) -> Summary {
        Summary::new("LLM Match Rating").score("Model rating", self.rating as f64, None)
    }
}

impl Presentable for MatchReport {
    fn summary(&self) -> Summary {
        let mut summary = Summary::new("Resume Match Report")
            .merge(self.lexical.summary())
            .merge(self.skills.summary())
            .merge(self.hybrid.summary());
        // Quick keyword lists overlap the TF-IDF ones; only the rating is shown
        summary.scores.extend(self.quick.summary().scores);
        summary.generated_at = Some(self.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string());
        summary
    }
}
