//! Remote embedding provider over the OpenAI-compatible embeddings API

use crate::config::RemoteConfig;
use crate::embeddings::{Embedding, EmbeddingProvider};
use crate::error::Result;
use crate::llm::client::{OpenAiClient, PROVIDER_NAME};
use async_trait::async_trait;

pub struct RemoteEmbedder {
    client: OpenAiClient,
}

impl RemoteEmbedder {
    /// Errors immediately when the credential is blank
    pub fn new(api_key: impl Into<String>, config: &RemoteConfig) -> Result<Self> {
        Ok(Self {
            client: OpenAiClient::new(api_key, config)?,
        })
    }

    pub fn model(&self) -> &str {
        self.client.embedding_model()
    }
}

#[async_trait]
impl EmbeddingProvider for RemoteEmbedder {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn embed(&self, text: &str) -> Result<Embedding> {
        self.client.embeddings(text).await
    }
}
