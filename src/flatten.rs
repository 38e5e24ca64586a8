//! Flattening of nested records into the working table.

use indexmap::IndexMap;
use serde_json::Value;

use crate::loader::Record;
use crate::table::{CellValue, Column, Table};
use crate::types::ColumnName;

/// Flatten one record into a single-level map where nested key paths
/// produce dotted column names (`date.issued`). JSON arrays stay as list
/// cells; JSON `null` becomes the missing marker; empty nested objects
/// contribute no columns.
pub fn flatten_record(record: &Record) -> IndexMap<ColumnName, CellValue> {
    let mut flat = IndexMap::new();
    for (key, value) in record {
        flatten_value(key.clone(), value, &mut flat);
    }
    flat
}

fn flatten_value(path: String, value: &Value, flat: &mut IndexMap<ColumnName, CellValue>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                flatten_value(format!("{path}.{key}"), nested, flat);
            }
        }
        scalar => {
            flat.insert(path, cell_from_scalar(scalar));
        }
    }
}

fn cell_from_scalar(value: &Value) -> CellValue {
    match value {
        Value::Null => CellValue::Null,
        Value::Bool(flag) => CellValue::Bool(*flag),
        Value::Number(number) => number
            .as_i64()
            .map(CellValue::Int)
            .or_else(|| number.as_f64().map(CellValue::Float))
            .unwrap_or(CellValue::Null),
        Value::String(text) => CellValue::Text(text.clone()),
        Value::Array(items) => CellValue::List(items.clone()),
        // objects recurse in flatten_value and never reach here
        Value::Object(_) => CellValue::Null,
    }
}

/// Flatten a record sequence into the working table.
///
/// Column order is first-appearance order across records; a field absent
/// from a record yields the missing marker in that row. Row `i` of the
/// table corresponds to record `i`.
pub fn flatten_records(records: &[Record]) -> Table {
    let mut columns: IndexMap<ColumnName, Vec<CellValue>> = IndexMap::new();
    for (row, record) in records.iter().enumerate() {
        for (name, cell) in flatten_record(record) {
            let cells = columns
                .entry(name)
                .or_insert_with(|| vec![CellValue::Null; row]);
            cells.push(cell);
        }
        for cells in columns.values_mut() {
            if cells.len() == row {
                cells.push(CellValue::Null);
            }
        }
    }
    let row_count = records.len();
    let columns = columns
        .into_iter()
        .map(|(name, cells)| Column { name, cells })
        .collect();
    Table::new(columns, row_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("fixture must be an object, got {other}"),
        }
    }

    #[test]
    fn nested_paths_become_dotted_columns() {
        let flat = flatten_record(&record(json!({
            "id": 7,
            "date": {"issued": ["2020-05-01"], "available": "2020-06-01"},
            "meta": {"source": {"name": "nasa"}},
        })));
        assert_eq!(
            flat.keys().collect::<Vec<_>>(),
            vec!["id", "date.issued", "date.available", "meta.source.name"]
        );
        assert_eq!(flat["id"], CellValue::Int(7));
        assert_eq!(flat["date.issued"], CellValue::List(vec![json!("2020-05-01")]));
        assert_eq!(flat["meta.source.name"], CellValue::Text("nasa".into()));
    }

    #[test]
    fn null_and_empty_objects_flatten_as_expected() {
        let flat = flatten_record(&record(json!({"a": null, "b": {}})));
        assert_eq!(flat.len(), 1);
        assert_eq!(flat["a"], CellValue::Null);
    }

    #[test]
    fn absent_fields_yield_missing_markers() {
        let records = vec![
            record(json!({"description": "first"})),
            record(json!({"description": "second", "date": {"issued": "2020-05-01"}})),
        ];
        let table = flatten_records(&records);
        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.column_names().collect::<Vec<_>>(),
            vec!["description", "date.issued"]
        );
        let issued = table.column("date.issued").unwrap();
        assert_eq!(issued.cells[0], CellValue::Null);
        assert_eq!(issued.cells[1], CellValue::Text("2020-05-01".into()));
    }

    #[test]
    fn scalar_and_nested_variants_of_a_key_coexist() {
        let records = vec![
            record(json!({"a": 1})),
            record(json!({"a": {"b": 2}})),
        ];
        let table = flatten_records(&records);
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["a", "a.b"]);
        assert_eq!(table.column("a").unwrap().cells[1], CellValue::Null);
        assert_eq!(table.column("a.b").unwrap().cells[1], CellValue::Int(2));
    }

    #[test]
    fn large_unsigned_numbers_fall_back_to_float() {
        let flat = flatten_record(&record(json!({"big": u64::MAX})));
        assert_eq!(flat["big"], CellValue::Float(u64::MAX as f64));
    }
}
