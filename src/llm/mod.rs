//! Remote OpenAI-compatible API integration

pub mod types;
pub mod client;
pub mod prompts;
pub mod rater;
