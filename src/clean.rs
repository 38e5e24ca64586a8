//! Stage that cleans and enriches table columns.
//!
//! Every step here is conditional on column existence: an absent column is
//! a no-op, never an error. Later stages rely on the column names these
//! steps produce, so the stage ordering in [`crate::pipeline::run`] is
//! fixed.

use chrono::Datelike;
use serde_json::Value;

use crate::constants::columns;
use crate::dates::parse_flexible_datetime;
use crate::errors::PrepError;
use crate::table::{CellValue, Table};

/// Replace every missing marker across the whole table with the sentinel
/// text. Runs before all column-specific steps, so formerly-missing date
/// cells hold the sentinel and later coerce to null dates rather than
/// erroring. Idempotent.
pub fn fill_missing(table: &mut Table, sentinel: &str) {
    for column in table.columns_mut() {
        for cell in &mut column.cells {
            if matches!(cell, CellValue::Null) {
                *cell = CellValue::Text(sentinel.to_owned());
            }
        }
    }
}

/// Coerce a column's cells to parsed dates.
///
/// A list cell contributes its first element (an empty list coerces to a
/// null date); string values go through the flexible parsing ladder.
/// Unparseable values, the sentinel included, and non-string scalars all
/// become null dates, never an error.
pub fn coerce_date_column(table: &mut Table, name: &str) {
    let Some(column) = table.column_mut(name) else {
        return;
    };
    for cell in &mut column.cells {
        let parsed = match cell {
            CellValue::List(items) => items
                .first()
                .and_then(Value::as_str)
                .and_then(parse_flexible_datetime),
            CellValue::Text(text) => parse_flexible_datetime(text),
            CellValue::Date(date) => Some(*date),
            _ => None,
        };
        *cell = match parsed {
            Some(date) => CellValue::Date(date),
            None => CellValue::Null,
        };
    }
}

/// Append integer year and month columns derived from a coerced date
/// column. Column names take the last dotted segment of the source name
/// (`date.issued` yields `year_issued` and `month_issued`); null dates
/// yield null parts.
pub fn derive_date_parts(table: &mut Table, name: &str) {
    let Some(column) = table.column(name) else {
        return;
    };
    let tail = name.rsplit('.').next().unwrap_or(name);
    let mut years = Vec::with_capacity(column.cells.len());
    let mut months = Vec::with_capacity(column.cells.len());
    for cell in &column.cells {
        match cell {
            CellValue::Date(date) => {
                years.push(CellValue::Int(i64::from(date.year())));
                months.push(CellValue::Int(i64::from(date.month())));
            }
            _ => {
                years.push(CellValue::Null);
                months.push(CellValue::Null);
            }
        }
    }
    table.push_column(format!("{}{tail}", columns::YEAR_PREFIX), years);
    table.push_column(format!("{}{tail}", columns::MONTH_PREFIX), months);
}

/// Join list-valued text cells with a single space, in place.
///
/// Non-list cells pass through untouched; a list element that is not a
/// JSON string is a shape error that aborts the run.
pub fn join_text_column(table: &mut Table, name: &str) -> Result<(), PrepError> {
    let Some(column) = table.column_mut(name) else {
        return Ok(());
    };
    for cell in &mut column.cells {
        if let CellValue::List(items) = cell {
            let mut parts = Vec::with_capacity(items.len());
            for item in items.iter() {
                match item.as_str() {
                    Some(text) => parts.push(text),
                    None => {
                        return Err(PrepError::ColumnShape {
                            column: name.to_owned(),
                            expected: "a list of strings".to_owned(),
                            found: format!("list element {item}"),
                        });
                    }
                }
            }
            *cell = CellValue::Text(parts.join(" "));
        }
    }
    Ok(())
}

/// Append a column holding the character count of each text cell, named
/// `<name>_length`. The sentinel counts as ordinary text; any non-text
/// cell is a shape error.
pub fn append_text_length(table: &mut Table, name: &str) -> Result<(), PrepError> {
    let Some(column) = table.column(name) else {
        return Ok(());
    };
    let mut lengths = Vec::with_capacity(column.cells.len());
    for cell in &column.cells {
        match cell {
            CellValue::Text(text) => {
                lengths.push(CellValue::Int(text.chars().count() as i64));
            }
            other => {
                return Err(PrepError::ColumnShape {
                    column: name.to_owned(),
                    expected: "text".to_owned(),
                    found: other.type_name().to_owned(),
                });
            }
        }
    }
    table.push_column(format!("{name}{}", columns::LENGTH_SUFFIX), lengths);
    Ok(())
}
