//! CLI interface for the skill matcher

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skillmatch")]
#[command(about = "Match a resume against job descriptions")]
#[command(long_about = "Score resume/job description fit with TF-IDF similarity and skill coverage, and suggest bullets for missing skills")]
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

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against a job description
    Match {
        #[command(flatten)]
        resume: ResumeSource,

        #[command(flatten)]
        job: JobSource,

        /// Skill reference CSV (overrides the configured path)
        #[arg(long)]
        skills: Option<PathBuf>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Output detailed report
        #[arg(short, long)]
        detailed: bool,
    },

    /// Print the normalized text of a document
    Extract {
        /// Path to a PDF, DOCX or TXT file
        file: PathBuf,
    },

    /// Suggest resume bullets for missing skills
    Suggest {
        /// Skills to write bullets for
        #[arg(conflicts_with = "missing")]
        skills: Vec<String>,

        /// Comma-separated skill list, as stored with a job
        #[arg(long)]
        missing: Option<String>,
    },

    /// List catalog skills, or the skills found in a document
    Skills {
        /// Skill reference CSV (overrides the configured path)
        #[arg(long)]
        skills: Option<PathBuf>,

        /// Only list skills found in this document
        #[arg(long = "in")]
        input: Option<PathBuf>,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct ResumeSource {
    /// Path to resume file (PDF, DOCX, TXT)
    #[arg(short, long)]
    pub resume: Option<PathBuf>,

    /// Resume text pasted inline
    #[arg(long)]
    pub resume_text: Option<String>,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct JobSource {
    /// Path to job description file (PDF, DOCX, TXT)
    #[arg(short, long)]
    pub job: Option<PathBuf>,

    /// Job description text pasted inline
    #[arg(long)]
    pub job_text: Option<String>,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
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
