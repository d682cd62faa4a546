//! Resume ranking facade.
//!
//! `ResumeRanker` bundles the scorers behind the operations the command line
//! and library callers use: lexical, semantic, skills and hybrid scoring, the
//! quick keyword rating, the chat-completion rating and a combined report.
//! Every result type serializes with stable field names.

use crate::config::{Config, RemoteConfig};
use crate::embeddings::hybrid::{HybridScorer, ScoreSource};
use crate::embeddings::local::LocalEmbedder;
use crate::embeddings::{score_with, EmbeddingProvider};
use crate::error::{Result, ResumeRankerError};
use crate::llm::rater::{LlmRater, LlmRating};
use crate::processing::lexical::LexicalScorer;
use crate::processing::quick::{QuickMatch, QuickMatcher};
use crate::processing::similarity::round2;
use crate::processing::skills::SkillExtractor;
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexicalMatch {
    pub rating: f64,
    pub matched: BTreeSet<String>,
    pub missing: BTreeSet<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SemanticMatch {
    pub semantic_rating: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillsMatch {
    pub matched_skills: BTreeSet<String>,
    pub missing_skills: BTreeSet<String>,
    pub skills_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HybridMatch {
    pub hybrid_semantic_rating: f64,
    pub source: ScoreSource,
    pub diagnostics: Vec<String>,
}

/// Every offline-capable score for one resume/job pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub generated_at: DateTime<Utc>,
    pub lexical: LexicalMatch,
    pub skills: SkillsMatch,
    pub quick: QuickMatch,
    pub hybrid: HybridMatch,
}

pub struct ResumeRanker {
    lexical: LexicalScorer,
    skills: SkillExtractor,
    quick: QuickMatcher,
    local: Arc<dyn EmbeddingProvider>,
    hybrid: HybridScorer,
    remote_config: RemoteConfig,
}

impl ResumeRanker {
    /// Ranker with the configured skill vocabulary and a lazily loaded local model
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_local_provider(config, Arc::new(LocalEmbedder::from_config(config)))
    }

    /// Ranker whose semantic and fallback scoring use `local`
    pub fn with_local_provider(config: &Config, local: Arc<dyn EmbeddingProvider>) -> Result<Self> {
        Ok(Self {
            lexical: LexicalScorer::default(),
            skills: SkillExtractor::new(&config.skills.vocabulary)?,
            quick: QuickMatcher::new(),
            hybrid: HybridScorer::new(config.remote.clone(), Arc::clone(&local)),
            local,
            remote_config: config.remote.clone(),
        })
    }

    /// Reject blank resume or job text
    pub fn validate_inputs(resume: &str, job: &str) -> Result<()> {
        if resume.trim().is_empty() {
            return Err(ResumeRankerError::InvalidInput("Resume text is empty".to_string()));
        }
        if job.trim().is_empty() {
            return Err(ResumeRankerError::InvalidInput("Job description text is empty".to_string()));
        }
        Ok(())
    }

    pub fn lexical_score(&self, resume: &str, job: &str) -> LexicalMatch {
        LexicalMatch {
            rating: self.lexical.score(resume, job),
            matched: self.lexical.matched_keywords(resume, job),
            missing: self.lexical.missing_keywords(resume, job),
        }
    }

    /// Semantic similarity with the local model only
    pub async fn semantic_score(&self, resume: &str, job: &str) -> Result<SemanticMatch> {
        let semantic_rating = score_with(self.local.as_ref(), resume, job).await?;
        Ok(SemanticMatch { semantic_rating })
    }

    pub fn skills_match(&self, resume: &str, job: &str) -> SkillsMatch {
        compare_skills(&self.skills, resume, job)
    }

    /// Skills match against a one-off skill list instead of the configured one
    pub fn skills_match_with<S: AsRef<str>>(&self, resume: &str, job: &str, skills: &[S]) -> Result<SkillsMatch> {
        let extractor = SkillExtractor::new(skills.iter().map(|s| s.as_ref()))?;
        Ok(compare_skills(&extractor, resume, job))
    }

    /// Remote-first semantic score with local fallback; never fails
    pub async fn hybrid_score(&self, resume: &str, job: &str, api_key: Option<&str>) -> HybridMatch {
        let outcome = self.hybrid.score(resume, job, api_key).await;
        HybridMatch {
            hybrid_semantic_rating: outcome.score,
            source: outcome.source,
            diagnostics: outcome.diagnostics,
        }
    }

    pub fn quick_match(&self, resume: &str, job: &str) -> QuickMatch {
        self.quick.rate(resume, job)
    }

    /// Ask the chat model for a 1-100 match rating
    pub async fn llm_rating(&self, resume: &str, job: &str, api_key: &str) -> Result<LlmRating> {
        LlmRater::new(api_key, &self.remote_config)?.rate(resume, job).await
    }

    pub async fn full_report(&self, resume: &str, job: &str, api_key: Option<&str>) -> Result<MatchReport> {
        Self::validate_inputs(resume, job)?;

        let report = MatchReport {
            generated_at: Utc::now(),
            lexical: self.lexical_score(resume, job),
            skills: self.skills_match(resume, job),
            quick: self.quick_match(resume, job),
            hybrid: self.hybrid_score(resume, job, api_key).await,
        };

        info!(
            "Report: lexical {:.2}, skills {:.2}, quick {}, semantic {:.2} ({:?})",
            report.lexical.rating,
            report.skills.skills_score,
            report.quick.rating,
            report.hybrid.hybrid_semantic_rating,
            report.hybrid.source
        );
        Ok(report)
    }
}

fn compare_skills(extractor: &SkillExtractor, resume: &str, job: &str) -> SkillsMatch {
    let resume_skills = extractor.extract(resume);
    let job_skills = extractor.extract(job);

    let matched_skills: BTreeSet<String> = job_skills.intersection(&resume_skills).cloned().collect();
    let missing_skills: BTreeSet<String> = job_skills.difference(&resume_skills).cloned().collect();
    let skills_score = round2(matched_skills.len() as f64 / job_skills.len().max(1) as f64 * 100.0);

    SkillsMatch {
        matched_skills,
        missing_skills,
        skills_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embeddings::Embedding;
    use async_trait::async_trait;

    struct WordCountEmbedder;

    #[async_trait]
    impl EmbeddingProvider for WordCountEmbedder {
        fn name(&self) -> &str {
            "word-count"
        }

        async fn embed(&self, text: &str) -> Result<Embedding> {
            Ok(vec![text.split_whitespace().count() as f32, 1.0])
        }
    }

    fn ranker() -> ResumeRanker {
        ResumeRanker::with_local_provider(&Config::default(), Arc::new(WordCountEmbedder)).unwrap()
    }

    #[test]
    fn test_validate_inputs() {
        assert!(ResumeRanker::validate_inputs("python", "python").is_ok());
        assert!(matches!(
            ResumeRanker::validate_inputs("  ", "python"),
            Err(ResumeRankerError::InvalidInput(_))
        ));
        assert!(matches!(
            ResumeRanker::validate_inputs("python", "\n"),
            Err(ResumeRankerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_skills_match_example() {
        let result = ranker().skills_match(
            "Experienced in Python, SQL, and teamwork.",
            "Looking for Python, Docker, and teamwork skills.",
        );
        let expected: BTreeSet<String> = ["python", "teamwork"].iter().map(|s| s.to_string()).collect();
        assert_eq!(result.matched_skills, expected);
        assert_eq!(result.missing_skills, BTreeSet::from(["docker".to_string()]));
        assert!((result.skills_score - 66.67).abs() < 1e-9);
    }

    #[test]
    fn test_skills_match_without_job_skills() {
        let result = ranker().skills_match("python", "gardening");
        assert!(result.matched_skills.is_empty());
        assert_eq!(result.skills_score, 0.0);
    }

    #[test]
    fn test_skills_match_with_override() {
        let result = ranker()
            .skills_match_with("Built Terraform modules", "Terraform and Ansible", &["terraform", "ansible"])
            .unwrap();
        assert_eq!(result.matched_skills, BTreeSet::from(["terraform".to_string()]));
        assert_eq!(result.skills_score, 50.0);
    }

    #[tokio::test]
    async fn test_semantic_and_hybrid_use_local_provider() {
        let ranker = ranker();
        let semantic = ranker.semantic_score("one two", "three four").await.unwrap();
        assert_eq!(semantic.semantic_rating, 100.0);

        let hybrid = ranker.hybrid_score("one two", "three four", None).await;
        assert_eq!(hybrid.source, ScoreSource::Local);
        assert_eq!(hybrid.hybrid_semantic_rating, 100.0);
    }

    #[tokio::test]
    async fn test_full_report_rejects_blank_input() {
        assert!(ranker().full_report("", "python", None).await.is_err());
    }

    #[tokio::test]
    async fn test_full_report_serializes() {
        let report = ranker()
            .full_report("Python developer with SQL", "Python and Docker engineer", None)
            .await
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["lexical"]["rating"].is_number());
        assert!(json["skills"]["skills_score"].is_number());
        assert_eq!(json["hybrid"]["source"], "local");
        assert!(json["generated_at"].is_string());
    }
}
