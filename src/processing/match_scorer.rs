//! Combines text similarity and skill coverage into a match score

use crate::config::ScoringConfig;
use crate::error::Result;
use crate::processing::skill_catalog::SkillCatalog;
use crate::processing::skill_extractor::SkillExtractor;
use crate::processing::text_processor::normalize;
use crate::processing::tfidf::text_similarity;
use log::debug;
use serde::{Deserialize, Serialize};

/// Outcome of matching one resume against one job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Weighted score in `[0, 100]`.
    pub score: f64,
    /// TF-IDF cosine similarity in `[0, 1]`.
    pub similarity: f64,
    /// Fraction of job skills also found in the resume; 1.0 when the job
    /// lists no recognized skills.
    pub coverage: f64,
    /// Job skills present in the resume, sorted.
    pub matched: Vec<String>,
    /// Job skills absent from the resume, sorted.
    pub missing: Vec<String>,
}

impl MatchResult {
    /// Score rounded to two decimals, the form callers store and display.
    pub fn rounded_score(&self) -> f64 {
        (self.score * 100.0).round() / 100.0
    }
}

/// Scores resumes against job descriptions with a fixed catalog and weights.
pub struct MatchScorer<'c> {
    extractor: SkillExtractor<'c>,
    scoring: ScoringConfig,
}

impl<'c> MatchScorer<'c> {
    pub fn new(catalog: &'c SkillCatalog, scoring: ScoringConfig) -> Result<Self> {
        scoring.validate()?;
        Ok(Self {
            extractor: SkillExtractor::new(catalog)?,
            scoring,
        })
    }

    /// Match `resume_text` against `job_text`. Both are normalized first.
    ///
    /// The result is not symmetric: coverage is measured against the skills of
    /// the second argument.
    pub fn score(&self, resume_text: &str, job_text: &str) -> MatchResult {
        let resume = normalize(resume_text);
        let job = normalize(job_text);

        let similarity = text_similarity(&resume, &job, self.scoring.max_features);

        let resume_skills = self.extractor.extract(&resume);
        let job_skills = self.extractor.extract(&job);

        let matched: Vec<String> = job_skills.intersection(&resume_skills).cloned().collect();
        let missing: Vec<String> = job_skills.difference(&resume_skills).cloned().collect();

        let coverage = if job_skills.is_empty() {
            1.0
        } else {
            matched.len() as f64 / job_skills.len() as f64
        };

        let weighted =
            self.scoring.similarity_weight * similarity + self.scoring.coverage_weight * coverage;
        let score = weighted * 100.0;

        debug!(
            "similarity={:.4} coverage={:.4} ({}/{} job skills) score={:.2}",
            similarity,
            coverage,
            matched.len(),
            job_skills.len(),
            score
        );

        MatchResult {
            score,
            similarity,
            coverage,
            matched,
            missing,
        }
    }
}

/// Match with the default 0.7 / 0.3 weighting.
pub fn match_resume(
    resume_text: &str,
    job_text: &str,
    catalog: &SkillCatalog,
) -> Result<MatchResult> {
    Ok(MatchScorer::new(catalog, ScoringConfig::default())?.score(resume_text, job_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn catalog() -> SkillCatalog {
        SkillCatalog::from_terms(["python", "sql", "aws", "docker", "java", "javascript"])
    }

    #[test]
    fn test_end_to_end_example() {
        let catalog = catalog();
        let result = match_resume(
            "experienced python sql developer",
            "looking for python sql aws expert",
            &catalog,
        )
        .unwrap();

        assert_eq!(result.matched, vec!["python", "sql"]);
        assert_eq!(result.missing, vec!["aws"]);
        assert!((result.coverage - 2.0 / 3.0).abs() < EPS);

        let expected = 0.7 * result.similarity * 100.0 + 0.3 * (2.0 / 3.0) * 100.0;
        assert!((result.score - expected).abs() < EPS);
        assert!(result.similarity > 0.0 && result.similarity < 1.0);
    }

    #[test]
    fn test_job_without_skills_is_fully_covered() {
        let catalog = catalog();
        let result =
            match_resume("python developer", "friendly team player wanted", &catalog).unwrap();

        assert_eq!(result.coverage, 1.0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
        assert!((result.score - (0.7 * result.similarity * 100.0 + 30.0)).abs() < EPS);
    }

    #[test]
    fn test_empty_inputs_do_not_fail() {
        let catalog = catalog();
        let result = match_resume("", "", &catalog).unwrap();
        assert_eq!(result.similarity, 0.0);
        assert_eq!(result.coverage, 1.0);
        assert!((result.score - 30.0).abs() < EPS);
    }

    #[test]
    fn test_swapping_arguments_changes_score() {
        let catalog = catalog();
        let resume = "python sql aws docker engineer";
        let job = "python engineer";

        let forward = match_resume(resume, job, &catalog).unwrap();
        let backward = match_resume(job, resume, &catalog).unwrap();

        assert_eq!(forward.coverage, 1.0);
        assert!((backward.coverage - 0.25).abs() < EPS);
        assert!((forward.score - backward.score).abs() > 1.0);
        assert_eq!(forward.missing, Vec::<String>::new());
        assert_eq!(backward.missing, vec!["aws", "docker", "sql"]);
    }

    #[test]
    fn test_score_stays_in_range_and_is_deterministic() {
        let catalog = catalog();
        let pairs = [
            ("", "python"),
            ("python", ""),
            ("Python  SQL", "python sql"),
            ("javascript", "java"),
            ("the the the", "a an of"),
        ];
        for (resume, job) in pairs {
            let first = match_resume(resume, job, &catalog).unwrap();
            let second = match_resume(resume, job, &catalog).unwrap();
            assert_eq!(first, second);
            assert!((0.0..=100.0).contains(&first.score), "{} out of range", first.score);
        }
    }

    #[test]
    fn test_custom_weights() {
        let catalog = catalog();
        let scoring = ScoringConfig {
            similarity_weight: 0.0,
            coverage_weight: 1.0,
            max_features: 5000,
        };
        let scorer = MatchScorer::new(&catalog, scoring).unwrap();
        let result = scorer.score("python", "python and sql");
        assert!((result.score - 50.0).abs() < EPS);
    }

    #[test]
    fn test_rounded_score() {
        let result = MatchResult {
            score: 66.66666,
            similarity: 0.5,
            coverage: 0.5,
            matched: Vec::new(),
            missing: Vec::new(),
        };
        assert_eq!(result.rounded_score(), 66.67);
    }
}
