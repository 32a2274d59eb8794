//! TF-IDF vectorization and cosine similarity

use crate::processing::text_processor::TextProcessor;
use log::debug;
use std::collections::{BTreeMap, HashMap};

/// Term-weight vectors for a small corpus over one shared vocabulary.
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    /// Vocabulary in lexicographic order; column `i` of every row is `vocabulary[i]`.
    pub vocabulary: Vec<String>,
    /// One L2-normalized row per input document.
    pub rows: Vec<Vec<f64>>,
}

impl TfidfMatrix {
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }
}

/// Fits a vocabulary on the documents it is given and weights every term by
/// raw count times smoothed inverse document frequency
/// `ln((1 + n) / (1 + df)) + 1`, then L2-normalizes each row.
pub struct TfidfVectorizer {
    processor: TextProcessor,
    max_features: usize,
}

impl TfidfVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self {
            processor: TextProcessor::new(),
            max_features,
        }
    }

    pub fn fit_transform(&self, documents: &[&str]) -> TfidfMatrix {
        let counts: Vec<HashMap<String, usize>> = documents
            .iter()
            .map(|doc| {
                let mut freq = HashMap::new();
                for token in self.processor.tokenize(doc) {
                    *freq.entry(token).or_insert(0) += 1;
                }
                freq
            })
            .collect();

        let vocabulary = self.build_vocabulary(&counts);

        let n_docs = documents.len() as f64;
        let idf: Vec<f64> = vocabulary
            .iter()
            .map(|term| {
                let df = counts.iter().filter(|doc| doc.contains_key(term)).count() as f64;
                ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let rows = counts
            .iter()
            .map(|doc| {
                let mut row: Vec<f64> = vocabulary
                    .iter()
                    .zip(&idf)
                    .map(|(term, weight)| doc.get(term).copied().unwrap_or(0) as f64 * weight)
                    .collect();
                l2_normalize(&mut row);
                row
            })
            .collect();

        debug!("TF-IDF vocabulary: {} terms over {} documents", vocabulary.len(), documents.len());

        TfidfMatrix { vocabulary, rows }
    }

    /// Terms ranked by total count across the corpus, capped at
    /// `max_features`, returned in lexicographic order.
    fn build_vocabulary(&self, counts: &[HashMap<String, usize>]) -> Vec<String> {
        let mut totals: BTreeMap<&str, usize> = BTreeMap::new();
        for doc in counts {
            for (term, count) in doc {
                *totals.entry(term.as_str()).or_insert(0) += count;
            }
        }

        let mut ranked: Vec<(&str, usize)> = totals.into_iter().collect();
        if ranked.len() > self.max_features {
            // Stable sort keeps lexicographic order among equal counts.
            ranked.sort_by(|a, b| b.1.cmp(&a.1));
            ranked.truncate(self.max_features);
        }

        let mut vocabulary: Vec<String> = ranked.into_iter().map(|(term, _)| term.to_string()).collect();
        vocabulary.sort();
        vocabulary
    }
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for value in row.iter_mut() {
            *value /= norm;
        }
    }
}

/// Cosine similarity of two equal-length vectors. A zero vector on either
/// side gives 0 rather than an error.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        (dot_product / (norm_a * norm_b)).clamp(0.0, 1.0)
    }
}

/// Similarity in `[0, 1]` between two texts vectorized over a joint vocabulary.
pub fn text_similarity(resume: &str, job: &str, max_features: usize) -> f64 {
    let matrix = TfidfVectorizer::new(max_features).fit_transform(&[resume, job]);
    match (matrix.row(0), matrix.row(1)) {
        (Some(a), Some(b)) => cosine_similarity(a, b),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_identical_texts_score_one() {
        let sim = text_similarity("rust systems programming", "rust systems programming", 5000);
        assert!((sim - 1.0).abs() < EPS);
    }

    #[test]
    fn test_disjoint_texts_score_zero() {
        let sim = text_similarity("python pandas", "kubernetes helm", 5000);
        assert_eq!(sim, 0.0);
    }

    #[test]
    fn test_empty_or_stop_word_only_texts_score_zero() {
        assert_eq!(text_similarity("", "", 5000), 0.0);
        assert_eq!(text_similarity("", "python developer", 5000), 0.0);
        assert_eq!(text_similarity("the and of", "python developer", 5000), 0.0);
    }

    #[test]
    fn test_weights_match_smoothed_idf() {
        // Shared terms get idf 1, terms unique to one document ln(1.5) + 1.
        let sim = text_similarity(
            "experienced python sql developer",
            "looking for python sql aws expert",
            5000,
        );

        let unique = 1.5f64.ln() + 1.0;
        let norm_resume = (2.0 + 2.0 * unique * unique).sqrt();
        let norm_job = (2.0 + 3.0 * unique * unique).sqrt();
        let expected = 2.0 / (norm_resume * norm_job);

        assert!((sim - expected).abs() < EPS, "got {}, expected {}", sim, expected);
    }

    #[test]
    fn test_rows_are_unit_length() {
        let matrix = TfidfVectorizer::new(5000).fit_transform(&["rust rust go", "go java"]);
        assert_eq!(matrix.vocabulary, vec!["go", "java", "rust"]);
        for row in &matrix.rows {
            let norm: f64 = row.iter().map(|x| x * x).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_max_features_keeps_most_frequent_terms() {
        let matrix = TfidfVectorizer::new(2).fit_transform(&["rust rust rust go go", "java go"]);
        assert_eq!(matrix.vocabulary, vec!["go", "rust"]);
    }

    #[test]
    fn test_max_features_ties_break_lexicographically() {
        let matrix = TfidfVectorizer::new(2).fit_transform(&["delta alpha", "charlie bravo"]);
        assert_eq!(matrix.vocabulary, vec!["alpha", "bravo"]);
    }

    #[test]
    fn test_cosine_handles_zero_vectors() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
        assert!((cosine_similarity(&[1.0, 1.0], &[2.0, 2.0]) - 1.0).abs() < EPS);
    }
}
