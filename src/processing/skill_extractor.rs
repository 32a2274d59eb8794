//! Word-boundary skill matching against a catalog

use crate::error::{Result, SkillMatchError};
use crate::processing::skill_catalog::SkillCatalog;
use aho_corasick::{AhoCorasick, MatchKind};
use log::debug;
use std::collections::BTreeSet;

/// Skill terms found in a text, kept in lexicographic order.
pub type SkillSet = BTreeSet<String>;

/// Finds catalog terms in normalized text.
///
/// A term counts as present when some occurrence of it is neither preceded
/// nor followed by an ASCII lower-case letter or digit. Terms are matched
/// literally, punctuation included, so `c++` and `node.js` work as written
/// while `java` never matches inside `javascript`.
pub struct SkillExtractor<'c> {
    catalog: &'c SkillCatalog,
    matcher: AhoCorasick,
}

impl<'c> SkillExtractor<'c> {
    pub fn new(catalog: &'c SkillCatalog) -> Result<Self> {
        // Patterns keep the catalog's longest-first order. Every occurrence is
        // reported, so the order does not change which terms are found.
        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(catalog.terms())
            .map_err(|e| SkillMatchError::CatalogLoad(format!("Failed to build skill matcher: {}", e)))?;

        Ok(Self { catalog, matcher })
    }

    /// Every catalog term present in `text`, deduplicated.
    pub fn extract(&self, text: &str) -> SkillSet {
        let bytes = text.as_bytes();
        let mut found = SkillSet::new();

        for mat in self.matcher.find_overlapping_iter(text) {
            let term = &self.catalog.terms()[mat.pattern().as_usize()];
            if found.contains(term) {
                continue;
            }

            let left_ok = mat.start() == 0 || !is_word_byte(bytes[mat.start() - 1]);
            let right_ok = mat.end() == bytes.len() || !is_word_byte(bytes[mat.end()]);
            if left_ok && right_ok {
                found.insert(term.clone());
            }
        }

        debug!("Found {} catalog skills in {} bytes of text", found.len(), bytes.len());
        found
    }
}

fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_lowercase() || byte.is_ascii_digit()
}

/// One-shot extraction for callers that do not keep an extractor around.
pub fn extract_skills(text: &str, catalog: &SkillCatalog) -> Result<SkillSet> {
    Ok(SkillExtractor::new(catalog)?.extract(text))
}
