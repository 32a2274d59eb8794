//! Reference list of recognized skill terms

use crate::error::{Result, SkillMatchError};
use log::{debug, info};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Distinct, lower-cased skill terms ordered longest first.
///
/// The catalog is an explicit value owned by the caller. Reloading from the
/// same source always yields the same ordering: descending character length,
/// ties broken lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SkillCatalog {
    terms: Vec<String>,
}

impl SkillCatalog {
    /// Load the first column of a CSV file. The first row is a header.
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| {
            SkillMatchError::CatalogLoad(format!("Cannot open {}: {}", path.display(), e))
        })?;

        let catalog = Self::from_reader(file)?;
        info!("Loaded {} skills from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Read skills from any CSV source with a header row.
    ///
    /// Blank cells are skipped; extra columns are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        if csv_reader.headers()?.is_empty() {
            return Err(SkillMatchError::CatalogLoad(
                "Skill source has no header row".to_string(),
            ));
        }

        let mut raw = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            if let Some(cell) = record.get(0) {
                raw.push(cell.to_string());
            }
        }

        debug!("Read {} skill rows", raw.len());
        Ok(Self::from_terms(raw))
    }

    /// Build a catalog from in-memory terms, applying the same cleanup as
    /// [`SkillCatalog::from_reader`].
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique: HashSet<String> = terms
            .into_iter()
            .map(|term| term.as_ref().trim().to_lowercase())
            .filter(|term| !term.is_empty())
            .collect();

        let mut terms: Vec<String> = unique.into_iter().collect();
        terms.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
