//! Integration tests for the resume ranker

mod common;

use common::{fixture, LetterEmbedder};
use resume_ranker::embeddings::hybrid::ScoreSource;
use resume_ranker::input::InputManager;
use resume_ranker::processing::lexical::LexicalScorer;
use resume_ranker::processing::tokenizer::Tokenizer;
use resume_ranker::{Config, ResumeRanker, ResumeRankerError};
use std::collections::BTreeSet;
use std::sync::Arc;
use tempfile::TempDir;

fn ranker() -> ResumeRanker {
    let mut config = Config::default();
    // Unreachable remote so credentialed calls always fall back
    config.remote.base_url = "http://127.0.0.1:9".to_string();
    config.remote.timeout_secs = 2;
    ResumeRanker::with_local_provider(&config, Arc::new(LetterEmbedder)).unwrap()
}

fn set(words: &[&str]) -> BTreeSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_identical_texts_score_full() {
    let text = "Experienced Python developer with FastAPI and machine learning skills.";
    let result = ranker().lexical_score(text, text);
    assert!((result.rating - 100.0).abs() < 0.01);
    assert!(result.missing.is_empty());
}

#[test]
fn test_disjoint_texts_score_low() {
    let result = ranker().lexical_score("gardening roses tulips", "kubernetes operators golang");
    assert!(result.rating < 1.0);
    assert!(result.matched.is_empty());
    assert_eq!(result.missing, set(&["golang", "kubernetes", "operators"]));
}

#[test]
fn test_missing_keywords_complement_job_tokens() {
    let resume = "Python developer, SQL and Docker experience";
    let job = "Seeking Python engineer with Docker, Kubernetes and AWS";
    let tokenizer = Tokenizer::new();
    let resume_tokens = tokenizer.token_set(resume);
    let job_tokens = tokenizer.token_set(job);

    let result = ranker().lexical_score(resume, job);
    for token in &job_tokens {
        assert_eq!(result.missing.contains(token), !resume_tokens.contains(token), "token {}", token);
    }
    let union: BTreeSet<String> = result.matched.union(&result.missing).cloned().collect();
    assert_eq!(union, job_tokens);
}

#[test]
fn test_matched_symmetric_missing_not() {
    let ranker = ranker();
    let a = "rust tokio serde";
    let b = "rust python";

    let ab = ranker.lexical_score(a, b);
    let ba = ranker.lexical_score(b, a);
    assert_eq!(ab.matched, ba.matched);
    assert_eq!(ab.matched, set(&["rust"]));
    assert_eq!(ab.missing, set(&["python"]));
    assert_eq!(ba.missing, set(&["serde", "tokio"]));
    assert_eq!(ab.rating, ba.rating);
}

#[test]
fn test_empty_and_tokenless_inputs_score_zero() {
    let ranker = ranker();
    assert_eq!(ranker.lexical_score("", "").rating, 0.0);
    assert_eq!(ranker.lexical_score("!!! ---", "Python developer").rating, 0.0);
    assert!(ResumeRanker::validate_inputs("", "").is_err());
}

#[test]
fn test_tfidf_shape_and_non_negative() {
    let matrix = LexicalScorer::default().compute_tfidf("Python developer", "Senior Python engineer");
    assert_eq!(matrix.shape(), (2, 4));
    assert!(matrix.rows().iter().flatten().all(|w| *w >= 0.0));
}

#[test]
fn test_tokenize_example() {
    assert_eq!(
        Tokenizer::new().tokenize("Experienced Python developer."),
        vec!["experienced", "python", "developer"]
    );
}

#[test]
fn test_skills_match_example() {
    let result = ranker().skills_match("Skills: python, java", "Requires python and sql");
    assert!(result.matched_skills.contains("python"));
    assert!(result.missing_skills.contains("sql"));
    assert_eq!(result.skills_score, 50.0);
}

#[tokio::test]
async fn test_hybrid_invalid_credential_falls_back_to_local() {
    let result = ranker()
        .hybrid_score("Senior Rust engineer", "Senior Rust engineer", Some("invalid_key"))
        .await;
    assert_eq!(result.source, ScoreSource::Local);
    assert!((result.hybrid_semantic_rating - 100.0).abs() < 0.01);
    assert_eq!(result.diagnostics.len(), 1);
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let text = InputManager::new()
        .load_document(&fixture("sample_resume.txt"))
        .await
        .unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("FastAPI"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let text = InputManager::new()
        .load_document(&fixture("sample_resume.md"))
        .await
        .unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_unsupported_and_missing_files() {
    let temp_dir = TempDir::new().unwrap();
    let unsupported = temp_dir.path().join("resume.xyz");
    std::fs::write(&unsupported, "Python").unwrap();

    let manager = InputManager::new();
    assert!(matches!(
        manager.load_document(&unsupported).await,
        Err(ResumeRankerError::UnsupportedFormat(_))
    ));
    assert!(matches!(
        manager.load_document(&fixture("nonexistent.txt")).await,
        Err(ResumeRankerError::InvalidInput(_))
    ));
    assert!(matches!(
        manager.extract_upload(b"Python developer", "test.txt"),
        Err(ResumeRankerError::UnsupportedFormat(_))
    ));
}

#[tokio::test]
async fn test_full_report_on_fixtures() {
    let manager = InputManager::new();
    let resume = manager.load_document(&fixture("sample_resume.txt")).await.unwrap();
    let job = manager.load_document(&fixture("sample_job.txt")).await.unwrap();

    let report = ranker().full_report(&resume, &job, None).await.unwrap();

    assert!(report.lexical.rating > 0.0 && report.lexical.rating < 100.0);
    assert!(report.lexical.matched.contains("python"));
    assert!(report.skills.matched_skills.contains("kubernetes"));
    assert!(report.skills.missing_skills.contains("machine learning"));
    assert!(report.quick.rating >= 50 && report.quick.rating <= 100);
    assert_eq!(report.hybrid.source, ScoreSource::Local);
}
