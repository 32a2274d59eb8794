//! Match report structures

use crate::config::ScoringConfig;
use crate::processing::match_scorer::MatchResult;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Everything the CLI shows or saves for one resume/job comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Score summary with a one-line verdict
    pub summary: MatchSummary,

    /// Raw engine output
    pub result: MatchResult,

    /// Suggested resume bullets for the missing skills
    pub suggested_bullets: Vec<String>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Score rounded to two decimals (0-100)
    pub score: f64,
    pub rating: MatchRating,
    pub verdict: String,
    pub similarity_percentage: f64,
    pub coverage_percentage: f64,
    pub weights: ScoreWeights,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub similarity_weight: f64,
    pub coverage_weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: SystemTime,
    pub tool_version: String,
    /// Path of the resume file, or `<inline>` for pasted text
    pub resume_source: String,
    /// Path of the job description file, or `<inline>` for pasted text
    pub job_source: String,
    pub catalog_size: usize,
    pub processing_time_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchRating {
    Excellent, // >= 80
    Good,      // 65-80
    Fair,      // 50-65
    Weak,      // 35-50
    Poor,      // < 35
}

impl MatchRating {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 80.0 => MatchRating::Excellent,
            s if s >= 65.0 => MatchRating::Good,
            s if s >= 50.0 => MatchRating::Fair,
            s if s >= 35.0 => MatchRating::Weak,
            _ => MatchRating::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchRating::Excellent => "EXCELLENT",
            MatchRating::Good => "GOOD",
            MatchRating::Fair => "FAIR",
            MatchRating::Weak => "WEAK",
            MatchRating::Poor => "POOR",
        }
    }
}

impl MatchReport {
    pub fn new(
        result: MatchResult,
        suggested_bullets: Vec<String>,
        scoring: &ScoringConfig,
        metadata: ReportMetadata,
    ) -> Self {
        let score = result.rounded_score();
        let rating = MatchRating::from_score(score);

        let summary = MatchSummary {
            score,
            rating,
            verdict: Self::verdict(rating, &result),
            similarity_percentage: result.similarity * 100.0,
            coverage_percentage: result.coverage * 100.0,
            weights: ScoreWeights {
                similarity_weight: scoring.similarity_weight,
                coverage_weight: scoring.coverage_weight,
            },
        };

        Self {
            summary,
            result,
            suggested_bullets,
            metadata,
        }
    }

    fn verdict(rating: MatchRating, result: &MatchResult) -> String {
        let total = result.matched.len() + result.missing.len();
        let skills = if total == 0 {
            "the job description lists no recognized skills".to_string()
        } else {
            format!("{} of {} required skills found", result.matched.len(), total)
        };

        let headline = match rating {
            MatchRating::Excellent => "Strong match",
            MatchRating::Good => "Good match",
            MatchRating::Fair => "Partial match",
            MatchRating::Weak => "Weak match",
            MatchRating::Poor => "Poor match",
        };

        format!("{}: {}", headline, skills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> ReportMetadata {
        ReportMetadata {
            generated_at: SystemTime::now(),
            tool_version: "0.1.0".to_string(),
            resume_source: "resume.txt".to_string(),
            job_source: "<inline>".to_string(),
            catalog_size: 3,
            processing_time_ms: 1,
        }
    }

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(MatchRating::from_score(100.0), MatchRating::Excellent);
        assert_eq!(MatchRating::from_score(80.0), MatchRating::Excellent);
        assert_eq!(MatchRating::from_score(79.99), MatchRating::Good);
        assert_eq!(MatchRating::from_score(50.0), MatchRating::Fair);
        assert_eq!(MatchRating::from_score(35.0), MatchRating::Weak);
        assert_eq!(MatchRating::from_score(0.0), MatchRating::Poor);
    }

    #[test]
    fn test_summary_uses_rounded_score() {
        let result = MatchResult {
            score: 61.23456,
            similarity: 0.4462,
            coverage: 2.0 / 3.0,
            matched: vec!["python".into(), "sql".into()],
            missing: vec!["aws".into()],
        };
        let report = MatchReport::new(result, Vec::new(), &ScoringConfig::default(), metadata());

        assert_eq!(report.summary.score, 61.23);
        assert_eq!(report.summary.rating, MatchRating::Fair);
        assert_eq!(report.summary.verdict, "Partial match: 2 of 3 required skills found");
        assert_eq!(report.summary.weights.similarity_weight, 0.7);
    }
}
