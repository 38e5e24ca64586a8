//! The working table threaded through all pipeline stages.

use chrono::{NaiveDateTime, NaiveTime};
use serde_json::Value;

use crate::types::ColumnName;

/// A single cell in the working table.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    /// The missing marker; also the null date and null derived value.
    Null,
    /// Boolean scalar taken verbatim from the source record.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// Text scalar (also the sentinel fill value).
    Text(String),
    /// Calendar date/time produced by date coercion.
    Date(NaiveDateTime),
    /// Unflattened JSON array, preserved verbatim.
    List(Vec<Value>),
}

impl CellValue {
    /// Short lowercase name of the cell variant, used in shape errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Null => "null",
            CellValue::Bool(_) => "bool",
            CellValue::Int(_) => "int",
            CellValue::Float(_) => "float",
            CellValue::Text(_) => "text",
            CellValue::Date(_) => "date",
            CellValue::List(_) => "list",
        }
    }

    /// Render the cell for CSV output and previews.
    ///
    /// `Null` renders empty; integral floats keep a trailing `.0`; dates at
    /// midnight render date-only; lists render as compact JSON.
    pub fn render(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Bool(value) => value.to_string(),
            CellValue::Int(value) => value.to_string(),
            CellValue::Float(value) => render_float(*value),
            CellValue::Text(value) => value.clone(),
            CellValue::Date(value) => {
                if value.time() == NaiveTime::MIN {
                    value.format("%Y-%m-%d").to_string()
                } else {
                    value.format("%Y-%m-%d %H:%M:%S").to_string()
                }
            }
            CellValue::List(items) => Value::Array(items.clone()).to_string(),
        }
    }
}

fn render_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// A named column of cells, one cell per table row.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    /// Column name; duplicates are allowed at the table level.
    pub name: ColumnName,
    /// Cell values in row order.
    pub cells: Vec<CellValue>,
}

/// The flattened working dataset.
///
/// Columns are stored positionally in first-appearance order. Duplicate
/// names are representable (an appended column keeps its name even when it
/// collides with an existing one) and by-name lookup resolves to the first
/// match. Every column holds exactly `row_count` cells and rows are never
/// reordered once built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Create a table from prebuilt columns of uniform length.
    pub fn new(columns: Vec<Column>, row_count: usize) -> Self {
        debug_assert!(columns.iter().all(|column| column.cells.len() == row_count));
        Self { columns, row_count }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns, duplicates included.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Whether a column with this name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column.name == name)
    }

    /// First column with this name, if any.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Mutable access to the first column with this name, if any.
    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.name == name)
    }

    /// All columns in table order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Mutable iterator over all columns; callers must keep every column at
    /// `row_count` cells.
    pub fn columns_mut(&mut self) -> impl Iterator<Item = &mut Column> {
        self.columns.iter_mut()
    }

    /// Column names in table order, duplicates included.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    /// Append a column; one cell per existing row.
    pub fn push_column(&mut self, name: impl Into<ColumnName>, cells: Vec<CellValue>) {
        debug_assert_eq!(cells.len(), self.row_count);
        self.columns.push(Column {
            name: name.into(),
            cells,
        });
    }

    /// Render the first `rows` rows as an aligned text block with a header.
    pub fn preview(&self, rows: usize) -> String {
        if self.columns.is_empty() {
            return String::from("(empty table)");
        }
        let shown = rows.min(self.row_count);
        let rendered: Vec<Vec<String>> = (0..shown)
            .map(|row| {
                self.columns
                    .iter()
                    .map(|column| column.cells[row].render())
                    .collect()
            })
            .collect();
        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|column| column.name.chars().count())
            .collect();
        for row in &rendered {
            for (index, cell) in row.iter().enumerate() {
                widths[index] = widths[index].max(cell.chars().count());
            }
        }
        let mut lines = Vec::with_capacity(shown + 1);
        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(column, width)| format!("{:<width$}", column.name, width = *width))
            .collect();
        lines.push(header.join("  ").trim_end().to_string());
        for row in &rendered {
            let fields: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
                .collect();
            lines.push(fields.join("  ").trim_end().to_string());
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn render_covers_all_variants() {
        assert_eq!(CellValue::Null.render(), "");
        assert_eq!(CellValue::Bool(true).render(), "true");
        assert_eq!(CellValue::Int(-3).render(), "-3");
        assert_eq!(CellValue::Float(1.0).render(), "1.0");
        assert_eq!(CellValue::Float(0.5).render(), "0.5");
        assert_eq!(CellValue::Text("Unknown".into()).render(), "Unknown");
        assert_eq!(CellValue::Date(date(2020, 5, 1, 0, 0, 0)).render(), "2020-05-01");
        assert_eq!(
            CellValue::Date(date(2020, 5, 1, 9, 30, 0)).render(),
            "2020-05-01 09:30:00"
        );
        assert_eq!(
            CellValue::List(vec![json!("a"), json!(1)]).render(),
            r#"["a",1]"#
        );
    }

    #[test]
    fn duplicate_names_resolve_to_first_column() {
        let mut table = Table::new(
            vec![Column {
                name: "engine".into(),
                cells: vec![CellValue::Int(1)],
            }],
            1,
        );
        table.push_column("engine", vec![CellValue::Float(0.5)]);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.column("engine").unwrap().cells, vec![CellValue::Int(1)]);
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["engine", "engine"]);
    }

    #[test]
    fn preview_truncates_and_aligns() {
        let table = Table::new(
            vec![
                Column {
                    name: "id".into(),
                    cells: vec![CellValue::Int(1), CellValue::Int(2), CellValue::Int(3)],
                },
                Column {
                    name: "description".into(),
                    cells: vec![
                        CellValue::Text("alpha".into()),
                        CellValue::Null,
                        CellValue::Text("gamma".into()),
                    ],
                },
            ],
            3,
        );
        let preview = table.preview(2);
        let lines: Vec<&str> = preview.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("id"));
        assert!(lines[0].contains("description"));
        assert!(lines[1].contains("alpha"));
        assert!(!preview.contains("gamma"));
    }

    #[test]
    fn preview_of_empty_table_is_marked() {
        assert_eq!(Table::default().preview(5), "(empty table)");
    }
}
