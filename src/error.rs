//! Error handling for the resume ranker

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeRankerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("Embedding generation error: {0}")]
    Embedding(String),

    #[error("{provider} provider error: {reason}")]
    Provider { provider: String, reason: String },

    #[error("Model loading error: {0}")]
    ModelLoading(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Processing error: {0}")]
    Processing(String),
}

impl ResumeRankerError {
    pub fn provider(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        ResumeRankerError::Provider {
            provider: provider.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ResumeRankerError>;

/// Model2Vec reports load failures through anyhow
impl From<anyhow::Error> for ResumeRankerError {
    fn from(err: anyhow::Error) -> Self {
        ResumeRankerError::ModelLoading(format!("Failed to load model: {:#}", err))
    }
}

impl From<reqwest::Error> for ResumeRankerError {
    fn from(err: reqwest::Error) -> Self {
        ResumeRankerError::Network(err.to_string())
    }
}

impl From<zip::result::ZipError> for ResumeRankerError {
    fn from(err: zip::result::ZipError) -> Self {
        ResumeRankerError::DocxExtraction(err.to_string())
    }
}
