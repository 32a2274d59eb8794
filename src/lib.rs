//! Resume and job description matching engine
//!
//! The engine exposes three operations to its caller:
//! [`extract_text`] turns an uploaded document into normalized text,
//! [`match_resume`] scores a resume against a job description, and
//! [`suggest_bullets`] proposes resume lines for the skills a job asked for
//! but the resume lacked.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{Result, SkillMatchError};
pub use input::extract_text;
pub use processing::{
    extract_skills, match_resume, normalize, suggest_bullets, MatchResult, MatchScorer, NormalizedText,
    SkillCatalog, SkillSet,
};
