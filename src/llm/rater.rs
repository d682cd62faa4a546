//! Chat-completion match rating

use crate::config::RemoteConfig;
use crate::error::Result;
use crate::llm::client::OpenAiClient;
use crate::llm::prompts::render_match_rating;
use log::info;
use serde::{Deserialize, Serialize};

const RATING_TEMPERATURE: f32 = 0.2;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LlmRating {
    pub rating: u8,
    /// Reply text the rating was parsed from
    pub raw: String,
}

pub struct LlmRater {
    client: OpenAiClient,
}

impl LlmRater {
    pub fn new(api_key: impl Into<String>, config: &RemoteConfig) -> Result<Self> {
        Ok(Self {
            client: OpenAiClient::new(api_key, config)?,
        })
    }

    pub async fn rate(&self, resume: &str, job: &str) -> Result<LlmRating> {
        let prompt = render_match_rating(job, resume);
        let reply = self.client.chat(&prompt, Some(RATING_TEMPERATURE)).await?;
        let rating = parse_rating(&reply);
        info!("LLM match rating: {} (reply {:?})", rating, reply.trim());
        Ok(LlmRating {
            rating,
            raw: reply,
        })
    }
}

/// Parse the leading integer of a reply and clamp it to 1..=100.
///
/// Replies without a leading integer, or with zero, rate 1.
pub fn parse_rating(reply: &str) -> u8 {
    let trimmed = reply.trim();
    let (negative, digits_start) = match trimmed.chars().next() {
        Some('-') => (true, 1),
        Some('+') => (false, 1),
        _ => (false, 0),
    };

    let digits: String = trimmed[digits_start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return 1;
    }

    let value = match digits.parse::<i64>() {
        Ok(v) if negative => -v,
        Ok(v) => v,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    };

    if value == 0 {
        return 1;
    }
    value.clamp(1, 100) as u8
}
