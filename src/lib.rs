//! Resume ranker library: lexical, skill and embedding-based resume/job matching

pub mod cli;
pub mod config;
pub mod embeddings;
pub mod error;
pub mod input;
pub mod llm;
pub mod output;
pub mod processing;
pub mod ranker;

pub use config::Config;
pub use error::{Result, ResumeRankerError};
pub use ranker::ResumeRanker;
