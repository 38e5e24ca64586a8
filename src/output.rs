//! CSV output writing.

use std::path::Path;

use crate::errors::PrepError;
use crate::table::Table;

/// Write the table to a CSV file: one header row with all final column
/// names (duplicates included, in table order), then one row per record in
/// input order. A table with no columns produces an empty file.
pub fn write_csv(table: &Table, path: &Path) -> Result<(), PrepError> {
    let mut writer = csv::Writer::from_path(path)?;
    if table.column_count() > 0 {
        writer.write_record(table.column_names())?;
        for row in 0..table.row_count() {
            writer.write_record(
                table
                    .columns()
                    .iter()
                    .map(|column| column.cells[row].render()),
            )?;
        }
    }
    writer.flush().map_err(PrepError::Io)?;
    Ok(())
}
