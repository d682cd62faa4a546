//! CLI interface for the resume ranker

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-ranker")]
#[command(about = "Score how well a resume matches a job posting")]
#[command(long_about = "Compare a resume with a job posting using TF-IDF keywords, skill coverage, and local or remote text embeddings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// The resume/job pair every scoring command reads
#[derive(Args, Debug, Clone)]
pub struct PairArgs {
    /// Path to resume file (PDF, DOCX, TXT, MD)
    #[arg(short, long)]
    pub resume: PathBuf,

    /// Path to job posting file (PDF, DOCX, TXT, MD)
    #[arg(short, long)]
    pub job: PathBuf,

    /// Output format: console, json, markdown (defaults to the configured format)
    #[arg(short, long, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// TF-IDF keyword match with matched and missing keywords
    Match {
        #[command(flatten)]
        pair: PairArgs,
    },

    /// Semantic similarity with the local embedding model
    Semantic {
        #[command(flatten)]
        pair: PairArgs,
    },

    /// Skill coverage against a skill vocabulary
    Skills {
        #[command(flatten)]
        pair: PairArgs,

        /// Skill to look for instead of the configured vocabulary (repeatable)
        #[arg(short, long = "skill")]
        skills: Vec<String>,
    },

    /// Semantic similarity, remote provider first with local fallback
    Hybrid {
        #[command(flatten)]
        pair: PairArgs,

        /// API key for the remote provider (defaults to the configured env var)
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Lightweight keyword rating with resume heuristics
    Quick {
        #[command(flatten)]
        pair: PairArgs,
    },

    /// Ask a chat model for a 1-100 match rating
    Rate {
        #[command(flatten)]
        pair: PairArgs,

        /// API key for the remote provider (defaults to the configured env var)
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Combined report of every offline-capable score
    Report {
        #[command(flatten)]
        pair: PairArgs,

        /// API key for the remote provider (defaults to the configured env var)
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Print the text extracted from a PDF or DOCX document
    Extract {
        /// Document to extract
        file: PathBuf,
    },

    /// Model management commands
    Models {
        #[command(subcommand)]
        action: ModelAction,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ModelAction {
    /// List known local embedding models
    List,

    /// Download a model into the models directory
    Download {
        /// Model name or Hugging Face repo ID
        model: String,

        /// Force re-download if model exists
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "remote.timeout_secs")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}
