use std::io;

use thiserror::Error;

use crate::types::ColumnName;

/// Error type for loading, table-shape, and output failures.
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("column '{column}' holds an unexpected value: expected {expected}, found {found}")]
    ColumnShape {
        column: ColumnName,
        expected: String,
        found: String,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("configuration error: {0}")]
    Configuration(String),
}
