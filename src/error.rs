//! Error handling for the skill matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillMatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported file type: {0}. Use PDF, DOCX, or TXT.")]
    UnsupportedFormat(String),

    #[error("Failed to load skill catalog: {0}")]
    CatalogLoad(String),

    #[error("Text extraction failed: {0}")]
    ExtractionFailure(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

impl SkillMatchError {
    /// Errors the caller should show as a validation message rather than
    /// treat as a fault. No record should be created when one of these is
    /// returned.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            SkillMatchError::UnsupportedFormat(_)
                | SkillMatchError::ExtractionFailure(_)
                | SkillMatchError::InvalidInput(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SkillMatchError>;

impl From<csv::Error> for SkillMatchError {
    fn from(err: csv::Error) -> Self {
        SkillMatchError::CatalogLoad(err.to_string())
    }
}

impl From<zip::result::ZipError> for SkillMatchError {
    fn from(err: zip::result::ZipError) -> Self {
        SkillMatchError::ExtractionFailure(format!("DOCX container: {}", err))
    }
}

impl From<quick_xml::Error> for SkillMatchError {
    fn from(err: quick_xml::Error) -> Self {
        SkillMatchError::ExtractionFailure(format!("DOCX XML: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_classification() {
        assert!(SkillMatchError::UnsupportedFormat("resume.xyz".into()).is_user_facing());
        assert!(SkillMatchError::ExtractionFailure("corrupt".into()).is_user_facing());
        assert!(!SkillMatchError::CatalogLoad("missing".into()).is_user_facing());
        assert!(!SkillMatchError::Configuration("bad".into()).is_user_facing());
    }

    #[test]
    fn test_unsupported_format_message() {
        let err = SkillMatchError::UnsupportedFormat("resume.xyz".into());
        assert_eq!(
            err.to_string(),
            "Unsupported file type: resume.xyz. Use PDF, DOCX, or TXT."
        );
    }
}
