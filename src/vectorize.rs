//! TF-IDF text feature generation.
//!
//! The vocabulary is fitted on the column being transformed and scoped to
//! the run: it is never persisted, and refitting on different data yields
//! different columns.

use std::collections::{BTreeSet, HashMap};

use indexmap::IndexMap;

use crate::constants::vectorizer;
use crate::errors::PrepError;
use crate::table::{CellValue, Table};
use crate::types::Term;

/// Lowercase the text and split it into maximal runs of alphanumeric or
/// underscore characters, keeping runs of at least two characters.
pub fn tokenize(text: &str) -> Vec<Term> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= vectorizer::MIN_TOKEN_CHARS)
        .map(ToOwned::to_owned)
        .collect()
}

struct TermStats {
    count: usize,
    document_frequency: usize,
}

/// Smoothed inverse document frequency.
fn inverse_document_frequency(document_count: usize, document_frequency: usize) -> f64 {
    ((1 + document_count) as f64 / (1 + document_frequency) as f64).ln() + 1.0
}

/// Fit a bounded vocabulary on a text column and append one weight column
/// per kept term, in alphabetical term order, each named exactly the term.
///
/// Terms are ranked by corpus-wide count descending with alphabetical
/// tie-break and capped at `max_vocabulary`. Row weights are raw term
/// count times smoothed IDF, L2-normalized per row; all-zero rows stay
/// all-zero. Sentinel text is ordinary text. Returns the fitted
/// vocabulary size; an absent column appends nothing and returns zero.
pub fn append_tfidf_features(
    table: &mut Table,
    name: &str,
    max_vocabulary: usize,
) -> Result<usize, PrepError> {
    let Some(column) = table.column(name) else {
        return Ok(0);
    };
    let mut row_tokens = Vec::with_capacity(column.cells.len());
    for cell in &column.cells {
        match cell {
            CellValue::Text(text) => row_tokens.push(tokenize(text)),
            other => {
                return Err(PrepError::ColumnShape {
                    column: name.to_owned(),
                    expected: "text".to_owned(),
                    found: other.type_name().to_owned(),
                });
            }
        }
    }

    let document_count = row_tokens.len();
    let mut stats: IndexMap<Term, TermStats> = IndexMap::new();
    for tokens in &row_tokens {
        for token in tokens {
            let entry = stats.entry(token.clone()).or_insert(TermStats {
                count: 0,
                document_frequency: 0,
            });
            entry.count += 1;
        }
        for token in tokens.iter().collect::<BTreeSet<_>>() {
            if let Some(entry) = stats.get_mut(token.as_str()) {
                entry.document_frequency += 1;
            }
        }
    }

    let mut ranked: Vec<(&Term, &TermStats)> = stats.iter().collect();
    ranked.sort_by(|a, b| b.1.count.cmp(&a.1.count).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(max_vocabulary);
    let mut vocabulary: Vec<(Term, f64)> = ranked
        .into_iter()
        .map(|(term, term_stats)| {
            (
                term.clone(),
                inverse_document_frequency(document_count, term_stats.document_frequency),
            )
        })
        .collect();
    vocabulary.sort_by(|a, b| a.0.cmp(&b.0));

    let mut feature_rows = Vec::with_capacity(document_count);
    for tokens in &row_tokens {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for token in tokens {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }
        let mut weights: Vec<f64> = vocabulary
            .iter()
            .map(|(term, idf)| counts.get(term.as_str()).copied().unwrap_or(0) as f64 * idf)
            .collect();
        let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for weight in &mut weights {
                *weight /= norm;
            }
        }
        feature_rows.push(weights);
    }

    for (index, (term, _)) in vocabulary.iter().enumerate() {
        let cells = feature_rows
            .iter()
            .map(|row| CellValue::Float(row[index]))
            .collect();
        table.push_column(term.clone(), cells);
    }
    Ok(vocabulary.len())
}
