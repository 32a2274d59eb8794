//! Resume bullet suggestions for missing skills

use std::collections::HashMap;
use std::sync::OnceLock;

/// Most suggestions returned for one job.
pub const MAX_BULLETS: usize = 6;

const BULLET_GLYPH: &str = "• ";

fn bullet_patterns() -> &'static HashMap<&'static str, &'static str> {
    static PATTERNS: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        HashMap::from([
            ("python", "Developed data pipelines and automation scripts using Python to reduce manual effort by 30%."),
            ("sql", "Wrote optimized SQL queries, joins, and window functions to support analytics and reporting."),
            ("tableau", "Built Tableau dashboards with filters and KPIs to monitor product and operational metrics."),
            ("power bi", "Designed Power BI reports using DAX measures to visualize trends and business KPIs."),
            ("aws", "Deployed and monitored data workloads on AWS (S3, Lambda, EC2) following best practices."),
            ("azure", "Implemented Azure-based ETL workflows using Data Factory and Azure Functions."),
            ("gcp", "Managed GCP services (BigQuery, Cloud Storage) for large-scale analytics."),
            ("docker", "Containerized applications with Docker, improving local parity and deployment consistency."),
            ("kubernetes", "Orchestrated containerized services with Kubernetes for resilient scaling."),
            ("airflow", "Created and scheduled DAGs in Apache Airflow for reliable data workflows."),
            ("spark", "Processed large datasets with Apache Spark (PySpark) to accelerate analytics."),
            ("nlp", "Built NLP pipelines (tokenization, TF-IDF, similarity) to extract insights from unstructured text."),
            ("javascript", "Implemented interactive UI features with JavaScript to improve user experience."),
            ("react", "Built reusable React components and integrated REST APIs using Axios/fetch."),
        ])
    })
}

/// One bullet line for `skill`. Lookup ignores case and surrounding
/// whitespace; unknown skills get a generic line naming the skill as given.
pub fn suggest_bullet(skill: &str) -> String {
    match bullet_patterns().get(skill.trim().to_lowercase().as_str()) {
        Some(sentence) => format!("{}{}", BULLET_GLYPH, sentence),
        None => format!(
            "{}Demonstrated proficiency with {} through hands-on projects and documentation.",
            BULLET_GLYPH, skill
        ),
    }
}

/// Bullets for the first [`MAX_BULLETS`] skills, in input order.
pub fn suggest_bullets<S: AsRef<str>>(missing_skills: &[S]) -> Vec<String> {
    suggest_bullets_limited(missing_skills, MAX_BULLETS)
}

pub fn suggest_bullets_limited<S: AsRef<str>>(missing_skills: &[S], limit: usize) -> Vec<String> {
    missing_skills
        .iter()
        .take(limit)
        .map(|skill| suggest_bullet(skill.as_ref()))
        .collect()
}

/// Split a stored comma-joined skill list, trimming entries and dropping
/// empty ones.
pub fn parse_skill_list(stored: &str) -> Vec<String> {
    stored
        .split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

/// The comma-joined form callers persist alongside a job.
pub fn join_skill_list<S: AsRef<str>>(skills: &[S]) -> String {
    skills.iter().map(|s| s.as_ref()).collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_skill_uses_canned_sentence() {
        assert_eq!(
            suggest_bullet("  Docker "),
            "• Containerized applications with Docker, improving local parity and deployment consistency."
        );
        assert!(suggest_bullet("POWER BI").contains("DAX measures"));
    }

    #[test]
    fn test_unknown_skill_falls_back() {
        assert_eq!(
            suggest_bullet("Terraform"),
            "• Demonstrated proficiency with Terraform through hands-on projects and documentation."
        );
    }

    #[test]
    fn test_caps_at_six_in_input_order() {
        let skills = ["python", "sql", "aws", "docker", "kubernetes", "airflow", "spark"];
        let bullets = suggest_bullets(&skills);

        assert_eq!(bullets.len(), 6);
        assert!(bullets[0].contains("Python"));
        assert!(bullets[5].contains("Airflow"));
        assert!(bullets.iter().all(|b| !b.contains("Spark")));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let bullets = suggest_bullets(&["rust", "rust"]);
        assert_eq!(bullets.len(), 2);
        assert_eq!(bullets[0], bullets[1]);
    }

    #[test]
    fn test_empty_input() {
        let none: [&str; 0] = [];
        assert!(suggest_bullets(&none).is_empty());
    }

    #[test]
    fn test_skill_list_round_trip() {
        let parsed = parse_skill_list(" aws, ,docker,,kubernetes ");
        assert_eq!(parsed, vec!["aws", "docker", "kubernetes"]);
        assert_eq!(join_skill_list(&parsed), "aws,docker,kubernetes");
        assert!(parse_skill_list("").is_empty());
    }
}
