//! resume-ranker: score how well a resume matches a job posting

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_ranker::cli::{Cli, Commands, ConfigAction, ModelAction, PairArgs};
use resume_ranker::config::OutputFormat;
use resume_ranker::embeddings::local::LocalEmbedder;
use resume_ranker::embeddings::models::EmbeddingModelManager;
use resume_ranker::input::InputManager;
use resume_ranker::output::ReportGenerator;
use resume_ranker::{Config, Result, ResumeRanker, ResumeRankerError};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: PathBuf) -> Result<()> {
    let output = ReportGenerator::new(&config.output);

    match command {
        Commands::Match { pair } => {
            let (resume, job) = read_pair(&pair).await?;
            let ranker = ResumeRanker::from_config(&config)?;
            let result = ranker.lexical_score(&resume, &job);
            println!("{}", output.render(&result, format_for(&pair, &config))?);
        }

        Commands::Semantic { pair } => {
            let (resume, job) = read_pair(&pair).await?;
            let embedder = Arc::new(LocalEmbedder::from_config(&config));

            let spinner = spinner(&format!("Loading embedding model {}", embedder.model_name()));
            let loaded = embedder.load().await;
            spinner.finish_and_clear();
            loaded?;

            let ranker = ResumeRanker::with_local_provider(&config, embedder)?;
            let result = ranker.semantic_score(&resume, &job).await?;
            println!("{}", output.render(&result, format_for(&pair, &config))?);
        }

        Commands::Skills { pair, skills } => {
            let (resume, job) = read_pair(&pair).await?;
            let ranker = ResumeRanker::from_config(&config)?;
            let result = if skills.is_empty() {
                ranker.skills_match(&resume, &job)
            } else {
                ranker.skills_match_with(&resume, &job, &skills)?
            };
            println!("{}", output.render(&result, format_for(&pair, &config))?);
        }

        Commands::Hybrid { pair, api_key } => {
            let (resume, job) = read_pair(&pair).await?;
            let api_key = config.resolve_api_key(api_key);
            let ranker = ResumeRanker::from_config(&config)?;
            let result = ranker.hybrid_score(&resume, &job, api_key.as_deref()).await;
            println!("{}", output.render(&result, format_for(&pair, &config))?);
        }

        Commands::Quick { pair } => {
            let (resume, job) = read_pair(&pair).await?;
            let ranker = ResumeRanker::from_config(&config)?;
            let result = ranker.quick_match(&resume, &job);
            println!("{}", output.render(&result, format_for(&pair, &config))?);
        }

        Commands::Rate { pair, api_key } => {
            let (resume, job) = read_pair(&pair).await?;
            let api_key = config.resolve_api_key(api_key).ok_or_else(|| {
                ResumeRankerError::InvalidInput(format!(
                    "No API key: pass --api-key or set {}",
                    config.remote.api_key_env
                ))
            })?;
            let ranker = ResumeRanker::from_config(&config)?;
            let result = ranker.llm_rating(&resume, &job, &api_key).await?;
            println!("{}", output.render(&result, format_for(&pair, &config))?);
        }

        Commands::Report { pair, api_key } => {
            let (resume, job) = read_pair(&pair).await?;
            let api_key = config.resolve_api_key(api_key);
            let ranker = ResumeRanker::from_config(&config)?;
            let report = ranker.full_report(&resume, &job, api_key.as_deref()).await?;
            println!("{}", output.render(&report, format_for(&pair, &config))?);
        }

        Commands::Extract { file } => {
            let bytes = tokio::fs::read(&file).await?;
            let filename = file
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default();
            let text = InputManager::new().extract_upload(&bytes, &filename)?;
            println!("{}", text);
        }

        Commands::Models { action } => match action {
            ModelAction::List => {
                let manager = EmbeddingModelManager::new(&config).await?;
                println!("🧠 Embedding Models:");
                for model in manager.list_available_models() {
                    let status = if manager.is_model_downloaded(&model.name) {
                        "✅ Downloaded"
                    } else {
                        "⬇️  Available"
                    };
                    let active = if model.name == config.models.local_embedding_model {
                        " (active)"
                    } else {
                        ""
                    };
                    println!(
                        "  • {}{} ({}) - {} MB, {} dims [{}]",
                        model.name, active, model.repo_id, model.size_mb, model.dimensions, status
                    );
                    println!("    {}", model.description);
                }
            }

            ModelAction::Download { model, force } => {
                let manager = EmbeddingModelManager::new(&config).await?;
                let spinner = spinner(&format!("Downloading model {}", model));
                let downloaded = manager.download_model(&model, force).await;
                spinner.finish_and_clear();

                let model_path = downloaded?;
                println!("✅ Model '{}' ready", model);
                println!("📁 Location: {}", model_path.display());
            }
        },

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| ResumeRankerError::Configuration(e.to_string()))?;
                println!("{}", content);
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }

            Some(ConfigAction::Reset) => {
                Config::default().save_to(&config_path)?;
                println!("✅ Configuration reset to defaults");
            }

            Some(ConfigAction::Set { key, value }) => {
                let mut config = config;
                config.set_value(&key, &value)?;
                config.save_to(&config_path)?;
                println!("🔧 {} = {}", key, value);
            }
        },
    }

    Ok(())
}

/// Read and validate the resume/job pair of a scoring command
async fn read_pair(pair: &PairArgs) -> Result<(String, String)> {
    let input = InputManager::new();
    let resume = load(&input, &pair.resume, "Resume").await?;
    let job = load(&input, &pair.job, "Job posting").await?;
    ResumeRanker::validate_inputs(&resume, &job)?;
    info!(
        "Loaded resume ({} chars) and job posting ({} chars)",
        resume.len(),
        job.len()
    );
    Ok((resume, job))
}

async fn load(input: &InputManager, path: &Path, label: &str) -> Result<String> {
    input.load_document(path).await.map_err(|e| match e {
        ResumeRankerError::InvalidInput(msg) => ResumeRankerError::InvalidInput(format!("{}: {}", label, msg)),
        other => other,
    })
}

fn format_for(pair: &PairArgs, config: &Config) -> OutputFormat {
    pair.format.unwrap_or(config.output.format)
}

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
