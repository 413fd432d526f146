//! JSON renderer implementation.

use crate::error::Result;
use crate::model::{Table, Tables};

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed with 2-space indentation
    #[default]
    Pretty,
}

/// Convert all tables of a workbook to a JSON object keyed by sheet name.
pub fn to_json(tables: &Tables, format: JsonFormat) -> Result<String> {
    render(tables, format)
}

/// Convert tables to JSON with default formatting.
pub fn to_json_default(tables: &Tables) -> Result<String> {
    to_json(tables, JsonFormat::Pretty)
}

/// Convert a single table to JSON.
pub fn table_to_json(table: &Table, format: JsonFormat) -> Result<String> {
    render(table, format)
}

fn render<T: serde::Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Compact => serde_json::to_string(value)?,
        JsonFormat::Pretty => serde_json::to_string_pretty(value)?,
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tables {
        vec![
            Table::with_rows("Sheet2", vec![vec![Some("1A".to_string()), None]]),
            Table::new("Sheet1"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert_eq!(json, r#"{"Sheet2":[["1A",null]],"Sheet1":[]}"#);
    }

    #[test]
    fn test_to_json_default() {
        let json = to_json_default(&sample()).unwrap();
        assert!(json.contains('\n')); // Default is pretty-printed
        assert!(json.find("Sheet2").unwrap() < json.find("Sheet1").unwrap());
    }

    #[test]
    fn test_table_roundtrip() {
        let table = Table::with_rows(
            "Data",
            vec![vec![Some("a".to_string()), None, Some("3".to_string())]],
        );

        let json = table_to_json(&table, JsonFormat::Pretty).unwrap();
        let parsed: Table = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, table);
    }
}
