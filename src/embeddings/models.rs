//! Local embedding model management: listing and downloading Model2Vec models

use crate::config::{AvailableModel, Config};
use crate::error::{Result, ResumeRankerError};
use hf_hub::api::tokio::Api;
use log::{info, warn};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Files Model2Vec needs to load a model from a local directory
const REQUIRED_FILES: [&str; 3] = ["tokenizer.json", "model.safetensors", "config.json"];
const OPTIONAL_FILES: [&str; 1] = ["README.md"];

/// Where the local provider should load `model` from.
///
/// A downloaded copy under `models_dir` wins, then the Hugging Face repo id
/// of a known model, then `model` itself (a path or repo id).
pub fn resolve_model_source(config: &Config, model: &str) -> PathBuf {
    let local_path = config.models_dir().join(model);
    if is_model_directory(&local_path) {
        return local_path;
    }

    match config.get_model_by_name(model) {
        Some(known) => PathBuf::from(&known.repo_id),
        None => PathBuf::from(model),
    }
}

fn is_model_directory(path: &Path) -> bool {
    REQUIRED_FILES.iter().all(|file| path.join(file).is_file())
}

pub struct EmbeddingModelManager {
    models_dir: PathBuf,
    available_models: Vec<AvailableModel>,
}

impl EmbeddingModelManager {
    pub async fn new(config: &Config) -> Result<Self> {
        let models_dir = config.models_dir().clone();
        fs::create_dir_all(&models_dir).await.map_err(|e| {
            ResumeRankerError::ModelLoading(format!("Failed to create models directory: {}", e))
        })?;

        Ok(Self {
            models_dir,
            available_models: config.models.available_models.clone(),
        })
    }

    pub fn list_available_models(&self) -> &[AvailableModel] {
        &self.available_models
    }

    pub fn is_model_downloaded(&self, name: &str) -> bool {
        is_model_directory(&self.models_dir.join(name))
    }

    pub fn get_model_path(&self, name: &str) -> Option<PathBuf> {
        let path = self.models_dir.join(name);
        is_model_directory(&path).then_some(path)
    }

    /// Download a known model into the models directory
    pub async fn download_model(&self, name: &str, force: bool) -> Result<PathBuf> {
        let model_info = self
            .available_models
            .iter()
            .find(|m| m.name == name || m.repo_id == name)
            .ok_or_else(|| ResumeRankerError::ModelLoading(format!("Unknown embedding model: {}", name)))?;

        let model_dir = self.models_dir.join(&model_info.name);
        if !force && is_model_directory(&model_dir) {
            info!("Model {} already present at {}", model_info.name, model_dir.display());
            return Ok(model_dir);
        }

        info!(
            "Downloading embedding model {} ({} MB) from {}",
            model_info.name, model_info.size_mb, model_info.repo_id
        );
        fs::create_dir_all(&model_dir).await?;

        let api = Api::new()
            .map_err(|e| ResumeRankerError::ModelLoading(format!("Failed to initialize HF API: {}", e)))?;
        let repo = api.model(model_info.repo_id.clone());

        for file in REQUIRED_FILES {
            let cached = repo.get(file).await.map_err(|e| {
                ResumeRankerError::ModelLoading(format!("Failed to download required file {}: {}", file, e))
            })?;
            fs::copy(&cached, model_dir.join(file)).await?;
            info!("  Downloaded: {}", file);
        }

        for file in OPTIONAL_FILES {
            match repo.get(file).await {
                Ok(cached) => {
                    fs::copy(&cached, model_dir.join(file)).await?;
                }
                Err(e) => warn!("Optional file {} not found: {}", file, e),
            }
        }

        Ok(model_dir)
    }
}
