//! Cosine similarity and the 0-100 rating scale shared by all scorers

use crate::error::{Result, ResumeRankerError};

/// Cosine similarity between two equal-length vectors.
///
/// Empty or zero-norm vectors have similarity 0.
pub fn cosine_similarity<T>(a: &[T], b: &[T]) -> Result<f64>
where
    T: Copy + Into<f64>,
{
    if a.len() != b.len() {
        return Err(ResumeRankerError::Processing(format!(
            "Vector dimensions don't match: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    if a.is_empty() {
        return Ok(0.0);
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b.iter()) {
        let (x, y): (f64, f64) = (x.into(), y.into());
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot / (norm_a.sqrt() * norm_b.sqrt()))
}

/// Scale a cosine similarity to a rating in [0, 100] with two decimals.
///
/// Negative similarities clamp to 0; floating point overshoot clamps to 100.
pub fn to_rating(similarity: f64) -> f64 {
    if !similarity.is_finite() {
        return 0.0;
    }
    round2((similarity * 100.0).clamp(0.0, 100.0))
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
