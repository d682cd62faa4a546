//! Dense embedding providers and semantic scoring.
//!
//! A provider turns one text into one vector, independent of the other
//! document in the pair. Vectors from different providers are never
//! compared: every score embeds both texts with the same provider.

pub mod local;
pub mod remote;
pub mod hybrid;
pub mod models;

use crate::error::Result;
use crate::processing::similarity::{cosine_similarity, to_rating};
use async_trait::async_trait;
use log::debug;

/// A single embedding vector.
pub type Embedding = Vec<f32>;

#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Short name used in logs and diagnostics
    fn name(&self) -> &str;

    async fn embed(&self, text: &str) -> Result<Embedding>;
}

/// Cosine similarity of two same-provider embeddings as a rating in [0, 100]
pub fn semantic_score(a: &[f32], b: &[f32]) -> Result<f64> {
    Ok(to_rating(cosine_similarity(a, b)?))
}

/// Embed both texts with one provider, sequentially, and score them
pub async fn score_with(provider: &dyn EmbeddingProvider, resume: &str, job: &str) -> Result<f64> {
    let resume_vec = provider.embed(resume).await?;
    let job_vec = provider.embed(job).await?;
    let score = semantic_score(&resume_vec, &job_vec)?;
    debug!(
        "{} semantic score {:.2} ({} dimensions)",
        provider.name(),
        score,
        resume_vec.len()
    );
    Ok(score)
}
