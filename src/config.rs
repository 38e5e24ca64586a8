use std::path::PathBuf;

use crate::constants::{columns, fill, io, preview, scaler, vectorizer};
use crate::types::ColumnName;

/// A date-valued column and whether year/month parts are derived from it.
#[derive(Clone, Debug)]
pub struct DateColumnRule {
    /// Dotted column name holding the date value.
    pub column: ColumnName,
    /// Whether to append derived integer year/month columns.
    pub derive_parts: bool,
}

impl DateColumnRule {
    /// Rule that coerces the column without deriving parts.
    pub fn coerce_only(column: impl Into<ColumnName>) -> Self {
        Self {
            column: column.into(),
            derive_parts: false,
        }
    }

    /// Rule that coerces the column and appends year/month columns.
    pub fn with_parts(column: impl Into<ColumnName>) -> Self {
        Self {
            column: column.into(),
            derive_parts: true,
        }
    }
}

/// Top-level pipeline configuration.
///
/// The defaults reproduce the fixed paths and column names of the batch
/// run; there are no command-line flags and no environment variables.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Path to the line-delimited JSON input file.
    pub input_path: PathBuf,
    /// Path the final CSV table is written to.
    pub output_path: PathBuf,
    /// Placeholder substituted for every missing cell.
    pub sentinel: String,
    /// Date columns to coerce, in order, with their derived-part rules.
    pub date_columns: Vec<DateColumnRule>,
    /// Free-text column fed to length derivation and TF-IDF.
    pub text_column: ColumnName,
    /// Cap on the fitted TF-IDF vocabulary; must be at least 1.
    pub max_vocabulary: usize,
    /// Columns min-max scaled into `[0.0, 1.0]` when present.
    pub scaled_columns: Vec<ColumnName>,
    /// Number of leading rows rendered in the run report preview.
    pub preview_rows: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(io::DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(io::DEFAULT_OUTPUT_PATH),
            sentinel: fill::SENTINEL.to_owned(),
            date_columns: vec![
                DateColumnRule::with_parts(columns::DATE_ISSUED),
                DateColumnRule::coerce_only(columns::DATE_AVAILABLE),
            ],
            text_column: columns::DESCRIPTION.to_owned(),
            max_vocabulary: vectorizer::MAX_VOCABULARY,
            scaled_columns: scaler::SCALED_COLUMNS
                .iter()
                .map(|name| (*name).to_owned())
                .collect(),
            preview_rows: preview::PREVIEW_ROWS,
        }
    }
}

impl PipelineConfig {
    /// Override the input path.
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Override the output path.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Override the missing-value sentinel.
    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into();
        self
    }

    /// Override the free-text column name.
    pub fn with_text_column(mut self, column: impl Into<ColumnName>) -> Self {
        self.text_column = column.into();
        self
    }

    /// Override the vocabulary cap.
    pub fn with_max_vocabulary(mut self, max_vocabulary: usize) -> Self {
        self.max_vocabulary = max_vocabulary;
        self
    }

    /// Override the number of preview rows.
    pub fn with_preview_rows(mut self, preview_rows: usize) -> Self {
        self.preview_rows = preview_rows;
        self
    }
}
