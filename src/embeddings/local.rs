//! Local embedding provider backed by a Model2Vec static model

use crate::config::Config;
use crate::embeddings::models::resolve_model_source;
use crate::embeddings::{Embedding, EmbeddingProvider};
use crate::error::{Result, ResumeRankerError};
use async_trait::async_trait;
use log::{debug, info};
use model2vec_rs::model::StaticModel;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::OnceCell;

/// Embeds text with a pretrained Model2Vec model.
///
/// The model is loaded on first use and kept for the lifetime of this value.
/// Loading and inference run on the blocking thread pool.
pub struct LocalEmbedder {
    model_name: String,
    source: PathBuf,
    model: OnceCell<Arc<StaticModel>>,
}

impl LocalEmbedder {
    /// `source` is either a local model directory or a Hugging Face repo id
    pub fn new(model_name: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            model_name: model_name.into(),
            source: source.into(),
            model: OnceCell::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let source = resolve_model_source(config, &config.models.local_embedding_model);
        Self::new(config.models.local_embedding_model.clone(), source)
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn is_loaded(&self) -> bool {
        self.model.initialized()
    }

    /// Load the model now instead of on the first `embed` call
    pub async fn load(&self) -> Result<()> {
        self.model().await.map(|_| ())
    }

    async fn model(&self) -> Result<Arc<StaticModel>> {
        self.model
            .get_or_try_init(|| async {
                let source = self.source.clone();
                info!("Loading Model2Vec embedding model from: {}", source.display());
                let start_time = Instant::now();

                let model = tokio::task::spawn_blocking(move || {
                    StaticModel::from_pretrained(&source, None, None, None)
                })
                .await
                .map_err(|e| ResumeRankerError::ModelLoading(format!("Model loading task failed: {}", e)))??;

                info!("Model loaded successfully in {:.2?}", start_time.elapsed());
                Ok::<_, ResumeRankerError>(Arc::new(model))
            })
            .await
            .cloned()
    }
}

#[async_trait]
impl EmbeddingProvider for LocalEmbedder {
    fn name(&self) -> &str {
        "local"
    }

    async fn embed(&self, text: &str) -> Result<Embedding> {
        let model = self.model().await?;
        let text = text.to_string();
        let start_time = Instant::now();

        let embedding = tokio::task::spawn_blocking(move || model.encode_single(&text))
            .await
            .map_err(|e| ResumeRankerError::Embedding(format!("Embedding task failed: {}", e)))?;

        if embedding.is_empty() {
            return Err(ResumeRankerError::Embedding(format!(
                "Model '{}' produced an empty embedding",
                self.model_name
            )));
        }

        debug!(
            "Encoded {} dimensions in {:.2?}",
            embedding.len(),
            start_time.elapsed()
        );
        Ok(embedding)
    }
}
