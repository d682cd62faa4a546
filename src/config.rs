//! Configuration management for the resume ranker

use crate::error::{Result, ResumeRankerError};
use crate::processing::skills::DEFAULT_SKILLS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub models: ModelConfig,
    pub remote: RemoteConfig,
    pub skills: SkillsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub models_dir: PathBuf,
    /// Model2Vec model used by the local embedding provider
    pub local_embedding_model: String,
    pub available_models: Vec<AvailableModel>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableModel {
    pub name: String,
    pub repo_id: String,
    pub size_mb: u64,
    pub dimensions: u32,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub base_url: String,
    pub embedding_model: String,
    pub chat_model: String,
    pub timeout_secs: u64,
    /// Environment variable consulted when no API key is passed explicitly
    pub api_key_env: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsConfig {
    pub vocabulary: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub keyword_limit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            embedding_model: "text-embedding-3-small".to_string(),
            chat_model: "gpt-4o-mini".to_string(),
            timeout_secs: 30,
            api_key_env: "OPENAI_API_KEY".to_string(),
        }
    }
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            vocabulary: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let models_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".resume-ranker")
            .join("models");

        Self {
            models: ModelConfig {
                models_dir,
                local_embedding_model: "potion-base-8M".to_string(),
                available_models: vec![
                    AvailableModel {
                        name: "potion-base-8M".to_string(),
                        repo_id: "minishlab/potion-base-8M".to_string(),
                        size_mb: 33,
                        dimensions: 256,
                        description: "Recommended Model2Vec model, good quality/size balance".to_string(),
                    },
                    AvailableModel {
                        name: "m2v-base".to_string(),
                        repo_id: "minishlab/M2V_base_output".to_string(),
                        size_mb: 90,
                        dimensions: 256,
                        description: "Legacy Model2Vec base embeddings model".to_string(),
                    },
                    AvailableModel {
                        name: "m2v-large".to_string(),
                        repo_id: "minishlab/M2V_large_output".to_string(),
                        size_mb: 250,
                        dimensions: 512,
                        description: "High-capacity Model2Vec large embeddings model".to_string(),
                    },
                ],
            },
            remote: RemoteConfig::default(),
            skills: SkillsConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
                keyword_limit: 25,
            },
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first run
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ResumeRankerError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeRankerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-ranker")
            .join("config.toml")
    }

    pub fn models_dir(&self) -> &PathBuf {
        &self.models.models_dir
    }

    pub fn get_model_by_name(&self, name: &str) -> Option<&AvailableModel> {
        self.models
            .available_models
            .iter()
            .find(|m| m.name == name || m.repo_id == name)
    }

    /// Resolve an API key: explicit value first, then the configured env var.
    /// Blank keys count as absent.
    pub fn resolve_api_key(&self, explicit: Option<String>) -> Option<String> {
        let non_blank = |key: &String| !key.trim().is_empty();
        explicit
            .filter(non_blank)
            .or_else(|| std::env::var(&self.remote.api_key_env).ok().filter(non_blank))
    }

    /// Update a single value addressed by a dotted key, e.g. `remote.timeout_secs`
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
            value.parse::<T>().map_err(|_| {
                ResumeRankerError::Configuration(format!("Invalid value for {}: {}", key, value))
            })
        }

        match key {
            "models.models_dir" => self.models.models_dir = PathBuf::from(value),
            "models.local_embedding_model" => self.models.local_embedding_model = value.to_string(),
            "remote.base_url" => self.remote.base_url = value.trim_end_matches('/').to_string(),
            "remote.embedding_model" => self.remote.embedding_model = value.to_string(),
            "remote.chat_model" => self.remote.chat_model = value.to_string(),
            "remote.timeout_secs" => self.remote.timeout_secs = parse(key, value)?,
            "remote.api_key_env" => self.remote.api_key_env = value.to_string(),
            "skills.vocabulary" => {
                self.skills.vocabulary = value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
            }
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(ResumeRankerError::Configuration)?;
            }
            "output.color_output" => self.output.color_output = parse(key, value)?,
            "output.keyword_limit" => self.output.keyword_limit = parse(key, value)?,
            _ => {
                return Err(ResumeRankerError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}
