//! Min-max scaling of numeric columns.

use crate::errors::PrepError;
use crate::table::{CellValue, Table};
use crate::types::ColumnName;

/// Rescale each listed column independently so its observed minimum maps
/// to 0.0 and its observed maximum maps to 1.0.
///
/// Absent columns are skipped. Null cells pass through unscaled and do not
/// contribute to the observed range; a column whose numeric cells share a
/// single value maps them all to 0.0. The range is fitted and applied on
/// the same data. A non-numeric cell in a listed column is a shape error.
pub fn min_max_scale(table: &mut Table, columns: &[ColumnName]) -> Result<(), PrepError> {
    for name in columns {
        let Some(column) = table.column_mut(name) else {
            continue;
        };
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for cell in &column.cells {
            let value = match cell {
                CellValue::Int(value) => *value as f64,
                CellValue::Float(value) => *value,
                CellValue::Null => continue,
                other => {
                    return Err(PrepError::ColumnShape {
                        column: name.clone(),
                        expected: "a numeric value".to_owned(),
                        found: other.type_name().to_owned(),
                    });
                }
            };
            min = min.min(value);
            max = max.max(value);
        }
        if !min.is_finite() {
            // all cells null, nothing to scale
            continue;
        }
        let range = max - min;
        for cell in &mut column.cells {
            let value = match cell {
                CellValue::Int(value) => *value as f64,
                CellValue::Float(value) => *value,
                _ => continue,
            };
            let scaled = if range == 0.0 { 0.0 } else { (value - min) / range };
            *cell = CellValue::Float(scaled);
        }
    }
    Ok(())
}
