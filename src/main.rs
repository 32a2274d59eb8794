//! skillmatch: resume and job description matching from the command line

use anyhow::Context;
use clap::Parser;
use log::{error, info, warn};
use skillmatch::cli::{self, Cli, Commands, ConfigAction, JobSource, ResumeSource};
use skillmatch::config::Config;
use skillmatch::error::{Result, SkillMatchError};
use skillmatch::input::InputManager;
use skillmatch::output::{resolve_output_path, save_report_to_file, MatchReport, ReportGenerator, ReportMetadata};
use skillmatch::processing::{normalize, parse_skill_list, MatchScorer, NormalizedText, SkillCatalog, SkillExtractor};
use skillmatch::processing::bullets::suggest_bullets_limited;
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Instant, SystemTime};

const INLINE_SOURCE: &str = "<inline>";

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

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        match e.downcast_ref::<SkillMatchError>() {
            Some(inner) if inner.is_user_facing() => eprintln!("{:#}", e),
            _ => error!("Command failed: {:#}", e),
        }
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> anyhow::Result<()> {
    match command {
        Commands::Match {
            resume,
            job,
            skills,
            output,
            save,
            detailed,
        } => {
            let started = Instant::now();

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(SkillMatchError::InvalidInput)?,
                None => config.output.format,
            };

            // A broken catalog is a configuration fault; fail before reading inputs.
            let catalog = load_catalog(&config, skills.as_deref())?;

            let mut input_manager = InputManager::new();
            let (resume_text, resume_source) = read_resume(&mut input_manager, resume)
                .await
                .context("Failed to read resume")?;
            let (job_text, job_source) = read_job(&mut input_manager, job)
                .await
                .context("Failed to read job description")?;

            if job_text.trim().is_empty() {
                return Err(SkillMatchError::InvalidInput(
                    "Job description is required (paste text or provide a PDF/DOCX/TXT file)".to_string(),
                )
                .into());
            }

            let scorer = MatchScorer::new(&catalog, config.scoring.clone())?;
            let result = scorer.score(&resume_text, &job_text);
            info!("Match score: {:.2}%", result.rounded_score());

            let bullets = suggest_bullets_limited(result.missing.as_slice(), config.suggestions.max_bullets);

            let metadata = ReportMetadata {
                generated_at: SystemTime::now(),
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
                resume_source,
                job_source,
                catalog_size: catalog.len(),
                processing_time_ms: started.elapsed().as_millis() as u64,
            };
            let report = MatchReport::new(result, bullets, &config.scoring, metadata);

            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                detailed || config.output.detailed,
                true,
                true,
            );
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    let resume_name = match report.metadata.resume_source.as_str() {
                        INLINE_SOURCE => "resume",
                        source => source,
                    };
                    let path = resolve_output_path(&path, &output_format, resume_name);
                    save_report_to_file(&rendered, &path)?;
                    println!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Extract { file } => {
            let mut input_manager = InputManager::new().with_cache(false);
            let text = input_manager.extract_file(&file).await?;
            println!("{}", text);
        }

        Commands::Suggest { skills, missing } => {
            let skills = match missing {
                Some(stored) => parse_skill_list(&stored),
                None => skills,
            };

            if skills.is_empty() {
                warn!("No missing skills given; nothing to suggest");
                return Ok(());
            }

            for bullet in suggest_bullets_limited(skills.as_slice(), config.suggestions.max_bullets) {
                println!("{}", bullet);
            }
        }

        Commands::Skills { skills, input } => {
            let catalog = load_catalog(&config, skills.as_deref())?;

            match input {
                Some(path) => {
                    let mut input_manager = InputManager::new().with_cache(false);
                    let text = input_manager.extract_file(&path).await?;
                    let extractor = SkillExtractor::new(&catalog)?;
                    for skill in extractor.extract(&text) {
                        println!("{}", skill);
                    }
                }
                None => {
                    for skill in catalog.terms() {
                        println!("{}", skill);
                    }
                }
            }
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| SkillMatchError::Configuration(format!("Failed to serialize config: {}", e)))?;
                println!("{}", content);
            }
            ConfigAction::Reset => {
                Config::default()
                    .save_to(config_path)
                    .with_context(|| format!("Failed to reset {}", config_path.display()))?;
                println!("Configuration reset to defaults at {}", config_path.display());
            }
            ConfigAction::Path => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

fn load_catalog(config: &Config, override_path: Option<&Path>) -> anyhow::Result<SkillCatalog> {
    let path: PathBuf = override_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.skills_path().to_path_buf());
    SkillCatalog::load(&path).context("Skill catalog is unavailable; matching cannot run")
}

async fn read_resume(manager: &mut InputManager, source: ResumeSource) -> Result<(NormalizedText, String)> {
    read_source(manager, source.resume, source.resume_text, "Resume").await
}

async fn read_job(manager: &mut InputManager, source: JobSource) -> Result<(NormalizedText, String)> {
    read_source(manager, source.job, source.job_text, "Job description").await
}

async fn read_source(
    manager: &mut InputManager,
    path: Option<PathBuf>,
    text: Option<String>,
    label: &str,
) -> Result<(NormalizedText, String)> {
    match (path, text) {
        (Some(path), _) => {
            let extracted = manager.extract_file(&path).await?;
            Ok((extracted, path.display().to_string()))
        }
        (None, Some(text)) => Ok((normalize(&text), INLINE_SOURCE.to_string())),
        (None, None) => Err(SkillMatchError::InvalidInput(format!("{} is required", label))),
    }
}
