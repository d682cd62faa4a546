//! Shared helpers for integration tests: offline embedders and a mock HTTP server

#![allow(dead_code)]

use async_trait::async_trait;
use resume_ranker::embeddings::{Embedding, EmbeddingProvider};
use resume_ranker::{Config, Result, ResumeRankerError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Letter-frequency vector; deterministic stand-in for a real model
pub fn letter_vector(text: &str) -> Vec<f32> {
    let mut v = vec![0.0f32; 26];
    for c in text.to_lowercase().chars().filter(|c| c.is_ascii_lowercase()) {
        v[(c as u8 - b'a') as usize] += 1.0;
    }
    v
}

pub struct LetterEmbedder;

#[async_trait]
impl EmbeddingProvider for LetterEmbedder {
    fn name(&self) -> &str {
        "letters"
    }

    async fn embed(&self, text: &str) -> Result<Embedding> {
        Ok(letter_vector(text))
    }
}

pub struct BrokenEmbedder;

#[async_trait]
impl EmbeddingProvider for BrokenEmbedder {
    fn name(&self) -> &str {
        "broken"
    }

    async fn embed(&self, _text: &str) -> Result<Embedding> {
        Err(ResumeRankerError::ModelLoading("model files missing".into()))
    }
}

/// Config whose remote provider points at `base_url`
pub fn config_with_remote(base_url: &str) -> Config {
    let mut config = Config::default();
    config.remote.base_url = base_url.to_string();
    config.remote.timeout_secs = 5;
    config
}

pub fn fixture(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[derive(Debug, Clone)]
pub struct MockRequest {
    pub path: String,
    pub headers: String,
    pub body: String,
}

impl MockRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

pub struct MockServer {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl MockServer {
    /// Serve every request with `handler`, which returns a status and a JSON body
    pub async fn start<F>(handler: F) -> Self
    where
        F: Fn(&MockRequest) -> (u16, String) + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let hits = Arc::new(AtomicUsize::new(0));
        let handler = Arc::new(handler);

        let counter = Arc::clone(&hits);
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let handler = Arc::clone(&handler);
                let counter = Arc::clone(&counter);
                tokio::spawn(async move {
                    let _ = serve(stream, handler.as_ref(), &counter).await;
                });
            }
        });

        Self { base_url, hits }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn serve<F>(mut stream: TcpStream, handler: &F, hits: &AtomicUsize) -> std::io::Result<()>
where
    F: Fn(&MockRequest) -> (u16, String),
{
    let request = read_request(&mut stream).await?;
    hits.fetch_add(1, Ordering::SeqCst);

    let (status, body) = handler(&request);
    let reason = match status {
        200 => "OK",
        401 => "Unauthorized",
        429 => "Too Many Requests",
        _ => "Error",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}

async fn read_request(stream: &mut TcpStream) -> std::io::Result<MockRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Err(std::io::ErrorKind::UnexpectedEof.into());
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = headers
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let body_end = buf.len().min(header_end + content_length);
    Ok(MockRequest {
        path: headers.split_whitespace().nth(1).unwrap_or("/").to_string(),
        body: String::from_utf8_lossy(&buf[header_end..body_end]).to_string(),
        headers,
    })
}

/// Embeddings API body for the letter vector of the request's input
pub fn embeddings_reply(request: &MockRequest) -> (u16, String) {
    let input = request.json()["input"].as_str().unwrap_or_default().to_string();
    let body = serde_json::json!({
        "object": "list",
        "data": [{ "object": "embedding", "index": 0, "embedding": letter_vector(&input) }],
        "model": "text-embedding-3-small"
    });
    (200, body.to_string())
}

pub fn chat_reply(content: &str) -> (u16, String) {
    let body = serde_json::json!({
        "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }]
    });
    (200, body.to_string())
}
