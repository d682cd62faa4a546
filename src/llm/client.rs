//! HTTP client for OpenAI-compatible embeddings and chat completions

use crate::config::RemoteConfig;
use crate::error::{Result, ResumeRankerError};
use crate::llm::types::{
    ChatMessage, ChatRequest, ChatResponse, EmbeddingsRequest, EmbeddingsResponse,
};
use log::debug;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

pub const PROVIDER_NAME: &str = "openai";

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: Client,
    api_key: String,
    base_url: String,
    embedding_model: String,
    chat_model: String,
}

impl OpenAiClient {
    /// Fails without touching the network when the key is blank
    pub fn new(api_key: impl Into<String>, config: &RemoteConfig) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ResumeRankerError::provider(PROVIDER_NAME, "missing API key"));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            embedding_model: config.embedding_model.clone(),
            chat_model: config.chat_model.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn embedding_model(&self) -> &str {
        &self.embedding_model
    }

    /// Embed a single input with the configured embedding model
    pub async fn embeddings(&self, input: &str) -> Result<Vec<f32>> {
        let request = EmbeddingsRequest {
            model: &self.embedding_model,
            input,
        };
        let body = self.post("/v1/embeddings", &request).await?;
        parse_embeddings_response(&body)
    }

    /// Send one user message and return the assistant's reply text
    pub async fn chat(&self, prompt: &str, temperature: Option<f32>) -> Result<String> {
        let request = ChatRequest {
            model: &self.chat_model,
            messages: vec![ChatMessage::user(prompt)],
            temperature,
        };
        let body = self.post("/v1/chat/completions", &request).await?;
        let response: ChatResponse = serde_json::from_str(&body).map_err(|e| {
            ResumeRankerError::provider(PROVIDER_NAME, format!("failed to parse response: {}", e))
        })?;
        Ok(response.text().unwrap_or_default().to_string())
    }

    async fn post<T: Serialize>(&self, path: &str, request: &T) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "(no body)".into());
            return Err(ResumeRankerError::provider(
                PROVIDER_NAME,
                format!("API error (status {}): {}", status.as_u16(), body),
            ));
        }

        Ok(response.text().await?)
    }
}

/// Extract the first embedding from an embeddings API response body
pub fn parse_embeddings_response(body: &str) -> Result<Vec<f32>> {
    let response: EmbeddingsResponse = serde_json::from_str(body).map_err(|e| {
        ResumeRankerError::provider(PROVIDER_NAME, format!("failed to parse response: {}", e))
    })?;

    let embedding = response
        .data
        .into_iter()
        .min_by_key(|d| d.index)
        .map(|d| d.embedding)
        .ok_or_else(|| ResumeRankerError::provider(PROVIDER_NAME, "response contained no embeddings"))?;

    if embedding.is_empty() {
        return Err(ResumeRankerError::provider(PROVIDER_NAME, "response contained an empty embedding"));
    }
    Ok(embedding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_requires_api_key() {
        let config = RemoteConfig::default();
        assert!(OpenAiClient::new("", &config).is_err());
        assert!(OpenAiClient::new("   ", &config).is_err());
    }

    #[test]
    fn test_client_trims_base_url() {
        let config = RemoteConfig {
            base_url: "http://localhost:8080/".into(),
            ..RemoteConfig::default()
        };
        let client = OpenAiClient::new("test-key", &config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.embedding_model(), "text-embedding-3-small");
    }

    #[test]
    fn test_parses_embedding_body() {
        let body = r#"{"object":"list","data":[{"object":"embedding","index":0,"embedding":[0.1,0.2,0.3]}],"model":"text-embedding-3-small"}"#;
        assert_eq!(parse_embeddings_response(body).unwrap(), vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_rejects_malformed_bodies() {
        assert!(parse_embeddings_response("not json").is_err());
        assert!(parse_embeddings_response(r#"{"data":[]}"#).is_err());
        assert!(parse_embeddings_response(r#"{"data":[{"embedding":[]}]}"#).is_err());
        assert!(parse_embeddings_response(r#"{"error":{"message":"bad key"}}"#).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = ResumeRankerError::provider(PROVIDER_NAME, "API error (status 401): invalid api key");
        assert!(err.to_string().contains("openai"));
        assert!(err.to_string().contains("401"));
    }
}
