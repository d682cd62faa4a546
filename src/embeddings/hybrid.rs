//! Hybrid semantic scoring: remote provider first, local model as fallback.
//!
//! Scoring never fails. The remote attempt only happens when a non-blank
//! credential is supplied; any remote failure falls through to the local
//! model, and a local failure yields a score of 0. Failures are kept as
//! diagnostics on the outcome and logged, never returned as errors.

use crate::config::RemoteConfig;
use crate::embeddings::remote::RemoteEmbedder;
use crate::embeddings::{score_with, EmbeddingProvider};
use crate::error::Result;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Which provider to try first, decided once per call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderSelection {
    Remote { api_key: String },
    Local,
}

impl ProviderSelection {
    pub fn from_credential(credential: Option<&str>) -> Self {
        match credential.map(str::trim) {
            Some(key) if !key.is_empty() => ProviderSelection::Remote {
                api_key: key.to_string(),
            },
            _ => ProviderSelection::Local,
        }
    }
}

/// Provider that produced the final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreSource {
    Remote,
    Local,
    /// Both attempts failed; the score is 0
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HybridOutcome {
    pub score: f64,
    pub source: ScoreSource,
    pub diagnostics: Vec<String>,
}

enum HybridState {
    Start(ProviderSelection),
    Remote(String),
    Local,
    Done { score: f64, source: ScoreSource },
}

pub struct HybridScorer {
    remote_config: RemoteConfig,
    local: Arc<dyn EmbeddingProvider>,
}

impl HybridScorer {
    pub fn new(remote_config: RemoteConfig, local: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            remote_config,
            local,
        }
    }

    pub async fn score(&self, resume: &str, job: &str, credential: Option<&str>) -> HybridOutcome {
        let mut diagnostics = Vec::new();
        let mut state = HybridState::Start(ProviderSelection::from_credential(credential));

        loop {
            state = match state {
                HybridState::Start(ProviderSelection::Remote { api_key }) => HybridState::Remote(api_key),
                HybridState::Start(ProviderSelection::Local) => HybridState::Local,
                HybridState::Remote(api_key) => match self.score_remote(&api_key, resume, job).await {
                    Ok(score) => HybridState::Done {
                        score,
                        source: ScoreSource::Remote,
                    },
                    Err(e) => {
                        warn!("Remote embedding failed, falling back to local model: {}", e);
                        diagnostics.push(format!("remote embedding failed: {}", e));
                        HybridState::Local
                    }
                },
                HybridState::Local => match score_with(self.local.as_ref(), resume, job).await {
                    Ok(score) => HybridState::Done {
                        score,
                        source: ScoreSource::Local,
                    },
                    Err(e) => {
                        warn!("Local embedding failed, reporting a score of 0: {}", e);
                        diagnostics.push(format!("{} embedding failed: {}", self.local.name(), e));
                        HybridState::Done {
                            score: 0.0,
                            source: ScoreSource::Unavailable,
                        }
                    }
                },
                HybridState::Done { score, source } => {
                    info!("Hybrid semantic score {:.2} from {:?}", score, source);
                    return HybridOutcome {
                        score,
                        source,
                        diagnostics,
                    };
                }
            };
        }
    }

    async fn score_remote(&self, api_key: &str, resume: &str, job: &str) -> Result<f64> {
        let remote = RemoteEmbedder::new(api_key, &self.remote_config)?;
        score_with(&remote, resume, job).await
    }
}
