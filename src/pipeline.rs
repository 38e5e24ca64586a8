//! Fixed-order batch pipeline and run report.

use tracing::info;

use crate::clean;
use crate::config::PipelineConfig;
use crate::errors::PrepError;
use crate::flatten;
use crate::loader;
use crate::output;
use crate::scale;
use crate::vectorize;

/// Summary of a completed pipeline run.
#[derive(Clone, Debug)]
pub struct PipelineReport {
    /// Number of rows in the final table (records that survived loading).
    pub row_count: usize,
    /// Number of columns in the final table, duplicates included.
    pub column_count: usize,
    /// Size of the fitted TF-IDF vocabulary.
    pub vocabulary_size: usize,
    /// Rendered preview of the leading rows of the flattened table.
    pub preview: String,
}

/// Run the pipeline end to end: load, flatten, fill, coerce dates, derive
/// parts, join and measure text, append TF-IDF features, min-max scale,
/// and write the CSV.
///
/// Every stage past loading assumes well-formed input from the prior
/// stage; the first shape error aborts the run before the output file is
/// written.
pub fn run(config: &PipelineConfig) -> Result<PipelineReport, PrepError> {
    if config.max_vocabulary == 0 {
        return Err(PrepError::Configuration(
            "max_vocabulary must be at least 1".to_owned(),
        ));
    }

    let records = loader::read_records(&config.input_path)?;
    let mut table = flatten::flatten_records(&records);
    info!(
        rows = table.row_count(),
        columns = table.column_count(),
        "flattened records into table"
    );
    let preview = table.preview(config.preview_rows);

    clean::fill_missing(&mut table, &config.sentinel);
    for rule in &config.date_columns {
        clean::coerce_date_column(&mut table, &rule.column);
        if rule.derive_parts {
            clean::derive_date_parts(&mut table, &rule.column);
        }
    }
    clean::join_text_column(&mut table, &config.text_column)?;
    clean::append_text_length(&mut table, &config.text_column)?;

    let vocabulary_size =
        vectorize::append_tfidf_features(&mut table, &config.text_column, config.max_vocabulary)?;
    info!(vocabulary_size, "fitted text-feature vocabulary");

    scale::min_max_scale(&mut table, &config.scaled_columns)?;

    output::write_csv(&table, &config.output_path)?;
    info!(
        rows = table.row_count(),
        columns = table.column_count(),
        output = %config.output_path.display(),
        "pipeline completed"
    );

    Ok(PipelineReport {
        row_count: table.row_count(),
        column_count: table.column_count(),
        vocabulary_size,
        preview,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_vocabulary_cap_is_a_configuration_error() {
        let config = PipelineConfig::default().with_max_vocabulary(0);
        let error = run(&config).unwrap_err();
        assert!(matches!(error, PrepError::Configuration(_)));
    }
}
