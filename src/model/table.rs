//! Table model structures.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// A normalized cell. `None` when the source cell was empty.
pub type NormalizedCell = Option<String>;

/// One worksheet row, one cell per column of the used range.
pub type Row = Vec<NormalizedCell>;

/// Rows read from a single worksheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Worksheet name
    pub name: String,

    /// Rows in sheet order
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl Table {
    /// Create an empty table for a worksheet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Create a table from already read rows.
    pub fn with_rows(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, taken from the first row.
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.len()).unwrap_or(0)
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Tables of a workbook keyed by sheet name, in workbook order.
///
/// Serializes as a JSON object whose keys keep the sheet order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tables {
    tables: Vec<Table>,
}

impl Tables {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a table. A table with an existing name replaces it in place.
    pub fn insert(&mut self, table: Table) {
        match self.tables.iter_mut().find(|t| t.name == table.name) {
            Some(existing) => *existing = table,
            None => self.tables.push(table),
        }
    }

    /// Rows of the named sheet.
    pub fn get(&self, name: &str) -> Option<&[Row]> {
        self.tables
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.rows.as_slice())
    }

    /// Sheet names in workbook order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|t| t.name.as_str())
    }

    /// Iterate tables in workbook order.
    pub fn iter(&self) -> std::slice::Iter<'_, Table> {
        self.tables.iter()
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Check if there are no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl FromIterator<Table> for Tables {
    fn from_iter<I: IntoIterator<Item = Table>>(iter: I) -> Self {
        let mut tables = Tables::new();
        for table in iter {
            tables.insert(table);
        }
        tables
    }
}

impl IntoIterator for Tables {
    type Item = Table;
    type IntoIter = std::vec::IntoIter<Table>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tables {
    type Item = &'a Table;
    type IntoIter = std::slice::Iter<'a, Table>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.iter()
    }
}

impl Serialize for Tables {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tables.len()))?;
        for table in &self.tables {
            map.serialize_entry(&table.name, &table.rows)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[Option<&str>]) -> Row {
        cells.iter().map(|c| c.map(str::to_string)).collect()
    }

    #[test]
    fn test_table_dimensions() {
        let table = Table::with_rows(
            "Sheet1",
            vec![
                row(&[Some("1A"), Some("1B"), None]),
                row(&[Some("2A"), None, Some("2C")]),
            ],
        );
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 3);
        assert!(!table.is_empty());

        let empty = Table::new("Empty");
        assert_eq!(empty.column_count(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_tables_keep_order() {
        assert!(Tables::new().is_empty());

        let tables: Tables = vec![
            Table::new("Zeta"),
            Table::new("Alpha"),
            Table::new("Mid"),
        ]
        .into_iter()
        .collect();

        assert_eq!(tables.names().collect::<Vec<_>>(), vec!["Zeta", "Alpha", "Mid"]);
        assert_eq!(tables.len(), 3);
        assert!(!tables.is_empty());
    }

    #[test]
    fn test_tables_insert_replaces_same_name() {
        let mut tables = Tables::new();
        tables.insert(Table::new("Sheet1"));
        tables.insert(Table::new("Sheet2"));
        tables.insert(Table::with_rows("Sheet1", vec![row(&[Some("x")])]));

        assert_eq!(tables.len(), 2);
        assert_eq!(tables.names().next(), Some("Sheet1"));
        assert_eq!(tables.get("Sheet1").unwrap().len(), 1);
        assert!(tables.get("Missing").is_none());
    }
}
