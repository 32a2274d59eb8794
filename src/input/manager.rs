//! Input manager for handling different file types

use crate::error::{Result, SkillMatchError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{DocxExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use crate::processing::text_processor::{normalize, NormalizedText};
use log::info;
use std::collections::HashMap;
use std::path::Path;

/// Convert an uploaded document into normalized text.
///
/// `filename` is only used to pick the format from its extension. Nothing
/// about where the bytes came from is retained.
pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<NormalizedText> {
    let file_type = FileType::from_filename(filename);

    let raw = match file_type {
        FileType::Pdf => PdfExtractor.extract(bytes)?,
        FileType::Docx => DocxExtractor.extract(bytes)?,
        FileType::Text => PlainTextExtractor.extract(bytes)?,
        FileType::Unsupported => {
            return Err(SkillMatchError::UnsupportedFormat(filename.to_string()));
        }
    };

    info!(
        "Extracted {} characters from {} document '{}'",
        raw.chars().count(),
        file_type.label(),
        filename
    );

    Ok(normalize(&raw))
}

/// Reads documents from disk for the CLI and remembers what it extracted.
pub struct InputManager {
    cache: HashMap<String, NormalizedText>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn extract_file(&mut self, path: &Path) -> Result<NormalizedText> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(SkillMatchError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        // Reject before reading a potentially large file we cannot use.
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        if FileType::from_filename(&filename) == FileType::Unsupported {
            return Err(SkillMatchError::UnsupportedFormat(filename));
        }

        let bytes = tokio::fs::read(path).await?;
        let text = extract_text(&filename, &bytes)?;

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
