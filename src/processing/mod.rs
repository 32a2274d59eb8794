//! Matching engine: normalization, skill extraction, similarity and scoring

pub mod bullets;
pub mod match_scorer;
pub mod skill_catalog;
pub mod skill_extractor;
pub mod text_processor;
pub mod tfidf;

pub use bullets::{join_skill_list, parse_skill_list, suggest_bullets};
pub use match_scorer::{match_resume, MatchResult, MatchScorer};
pub use skill_catalog::SkillCatalog;
pub use skill_extractor::{extract_skills, SkillExtractor, SkillSet};
pub use text_processor::{normalize, NormalizedText};
