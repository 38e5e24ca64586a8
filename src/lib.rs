#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Stage that cleans and enriches table columns.
pub mod clean;
/// Pipeline configuration types.
pub mod config;
/// Centralized constants used across stages.
pub mod constants;
/// Flexible date parsing helpers.
pub mod dates;
/// Flattening of nested records into the working table.
pub mod flatten;
/// Line-delimited JSON loading.
pub mod loader;
/// CSV output writing.
pub mod output;
/// Fixed-order batch pipeline and run report.
pub mod pipeline;
/// Min-max scaling of numeric columns.
pub mod scale;
/// The working table and cell value types.
pub mod table;
/// Shared type aliases.
pub mod types;
/// TF-IDF text feature generation.
pub mod vectorize;

mod errors;

pub use config::{DateColumnRule, PipelineConfig};
pub use errors::PrepError;
pub use loader::Record;
pub use pipeline::{run, PipelineReport};
pub use table::{CellValue, Column, Table};
pub use types::{ColumnName, Term};
