//! Output formatters for match reports

use crate::config::OutputFormat;
use crate::error::{Result, SkillMatchError};
use crate::output::report::{MatchRating, MatchReport};
use colored::{Color, Colorize};
use std::path::{Path, PathBuf};

/// Trait for rendering match reports
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and storage by the caller
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Picks the formatter for the requested output format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_rating_badge(&self, rating: MatchRating) -> String {
        let color = match rating {
            MatchRating::Excellent => Color::Green,
            MatchRating::Good => Color::BrightGreen,
            MatchRating::Fair => Color::Yellow,
            MatchRating::Weak => Color::Red,
            MatchRating::Poor => Color::BrightRed,
        };

        if self.use_colors {
            format!("[{}]", rating.label().color(color).bold())
        } else {
            format!("[{}]", rating.label())
        }
    }

    fn format_skill_list(&self, skills: &[String], color: Color) -> String {
        if skills.is_empty() {
            "(none)".to_string()
        } else {
            self.colorize(&skills.join(", "), color)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();
        let summary = &report.summary;

        output.push_str(&self.format_header("RESUME MATCH", 1));
        output.push_str(&format!(
            "Match Score: {:.2}% {}\n",
            summary.score,
            self.format_rating_badge(summary.rating)
        ));
        output.push_str(&format!("Verdict: {}\n", self.colorize(&summary.verdict, Color::Cyan)));

        output.push_str(&self.format_header("Score Breakdown", 3));
        output.push_str(&format!(
            "Text Similarity: {:.1}% (weight: {:.0}%)\n",
            summary.similarity_percentage,
            summary.weights.similarity_weight * 100.0
        ));
        output.push_str(&format!(
            "Skill Coverage: {:.1}% (weight: {:.0}%)\n",
            summary.coverage_percentage,
            summary.weights.coverage_weight * 100.0
        ));

        output.push_str(&self.format_header("Skills", 2));
        output.push_str(&format!(
            "Matched: {}\n",
            self.format_skill_list(&report.result.matched, Color::Green)
        ));
        output.push_str(&format!(
            "Missing: {}\n",
            self.format_skill_list(&report.result.missing, Color::Yellow)
        ));

        if !report.suggested_bullets.is_empty() {
            output.push_str(&self.format_header("Suggested Bullets", 2));
            for bullet in &report.suggested_bullets {
                output.push_str(&format!("  {}\n", bullet));
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("Details", 3));
            output.push_str(&format!("Raw score: {:.6}\n", report.result.score));
            output.push_str(&format!("Resume: {}\n", report.metadata.resume_source));
            output.push_str(&format!("Job description: {}\n", report.metadata.job_source));
            output.push_str(&format!("Catalog size: {} skills\n", report.metadata.catalog_size));
            output.push_str(&format!(
                "Generated: {} | Processing time: {}ms\n",
                chrono::DateTime::<chrono::Utc>::from(report.metadata.generated_at).format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.processing_time_ms
            ));
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_skill_list(skills: &[String]) -> String {
        if skills.is_empty() {
            "_none_".to_string()
        } else {
            format!("`{}`", skills.join("`, `"))
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();
        let summary = &report.summary;

        output.push_str("# Resume Match Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n",
                chrono::DateTime::<chrono::Utc>::from(report.metadata.generated_at).format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.processing_time_ms
            ));
            output.push_str(&format!(
                "**Resume:** `{}` | **Job:** `{}`\n\n",
                display_name(&report.metadata.resume_source),
                display_name(&report.metadata.job_source)
            ));
        }

        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "**Match Score:** {:.2}% ({})\n\n",
            summary.score,
            summary.rating.label()
        ));
        output.push_str(&format!("**Verdict:** {}\n\n", summary.verdict));

        output.push_str("| Component | Value | Weight |\n");
        output.push_str("|-----------|-------|--------|\n");
        output.push_str(&format!(
            "| Text Similarity | {:.1}% | {:.0}% |\n",
            summary.similarity_percentage,
            summary.weights.similarity_weight * 100.0
        ));
        output.push_str(&format!(
            "| Skill Coverage | {:.1}% | {:.0}% |\n\n",
            summary.coverage_percentage,
            summary.weights.coverage_weight * 100.0
        ));

        output.push_str("## Skills\n\n");
        output.push_str(&format!("**Matched:** {}\n\n", Self::markdown_skill_list(&report.result.matched)));
        output.push_str(&format!("**Missing:** {}\n\n", Self::markdown_skill_list(&report.result.missing)));

        if !report.suggested_bullets.is_empty() {
            output.push_str("## Suggested Bullets\n\n");
            for bullet in &report.suggested_bullets {
                let text = bullet.trim_start_matches("• ");
                output.push_str(&format!("- {}\n", text));
            }
            output.push('\n');
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated by skillmatch v{} with {} catalog skills*\n",
                report.metadata.tool_version, report.metadata.catalog_size
            ));
        }

        Ok(output)
    }
}

fn display_name(source: &str) -> String {
    Path::new(source)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| source.to_string())
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &MatchReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            SkillMatchError::OutputFormatting(format!("Cannot create {}: {}", parent.display(), e))
        })?;
    }
    std::fs::write(file_path, content).map_err(|e| {
        SkillMatchError::OutputFormatting(format!("Cannot write {}: {}", file_path.display(), e))
    })?;
    Ok(())
}

/// Where to write a saved report. A directory gets a generated file name
/// derived from the resume name.
pub fn resolve_output_path(path: &Path, format: &OutputFormat, resume_name: &str) -> PathBuf {
    if path.is_dir() {
        path.join(suggest_filename(format, resume_name, true))
    } else {
        path.to_path_buf()
    }
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "resume".to_string());

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_match{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_match{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_match{}.md", base_name, timestamp_suffix),
    }
}
