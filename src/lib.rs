//! # sheetread
//!
//! Read tabular data out of Excel workbooks for import pipelines.
//!
//! Legacy `.xls` (BIFF in an OLE2 container) and modern `.xlsx`
//! (SpreadsheetML in a ZIP package) workbooks are read cell by cell and every
//! value is normalized to a string: dates become `YYYY-MM-DD`, whole numbers
//! lose their `.0`, text is trimmed and empty cells stay `None`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sheetread::{read_table, read_tables, sheet_names};
//!
//! // First worksheet
//! let rows = read_table("upload.xlsx", None)?;
//! println!("{} rows", rows.len());
//!
//! // A named worksheet (falls back to the first one if absent)
//! let rows = read_table("upload.xls", Some("Patients"))?;
//!
//! // Every worksheet, in workbook order
//! let tables = read_tables("upload.xlsx")?;
//! for table in &tables {
//!     println!("{}: {} rows", table.name, table.row_count());
//! }
//!
//! println!("{:?}", sheet_names("upload.xlsx")?);
//! # Ok::<(), sheetread::Error>(())
//! ```
//!
//! ## Custom casting
//!
//! ```no_run
//! use chrono::NaiveDateTime;
//! use sheetread::{ExcelReader, ValueCaster};
//!
//! struct UsDates;
//!
//! impl ValueCaster for UsDates {
//!     fn cast_datetime(&self, value: &NaiveDateTime) -> String {
//!         value.format("%m/%d/%Y").to_string()
//!     }
//! }
//!
//! let reader = ExcelReader::new().with_caster(UsDates);
//! let rows = reader.read_table("upload.xlsx", None)?;
//! # Ok::<(), sheetread::Error>(())
//! ```
//!
//! ## Mislabelled workbooks
//!
//! A `.xls` file that is really a `.xlsx` package is copied to
//! `<name>_amend.xlsx` next to the original and read from there. The copy is
//! not removed. See [`LoadOptions`] to turn this off.

pub mod backend;
pub mod cast;
pub mod detect;
pub mod error;
pub mod loader;
pub mod model;
pub mod options;
pub mod reader;
pub mod render;
pub mod workbook;

// Re-exports
pub use backend::Backend;
pub use cast::{DefaultCaster, RawValue, ValueCaster};
pub use detect::{detect_container_from_bytes, detect_container_from_path, ContainerKind};
pub use error::{Error, Result};
pub use loader::{load_workbook, WorkbookLoader};
pub use model::{NormalizedCell, Row, Table, Tables};
pub use options::LoadOptions;
pub use reader::ExcelReader;
pub use workbook::{Workbook, Worksheet};

use std::path::Path;

/// Read one worksheet with the default caster.
///
/// `sheet` names the worksheet to read; `None` or an unknown name reads the
/// first worksheet.
///
/// # Example
///
/// ```no_run
/// let rows = sheetread::read_table("upload.xlsx", Some("Sheet1"))?;
/// for row in rows {
///     println!("{:?}", row);
/// }
/// # Ok::<(), sheetread::Error>(())
/// ```
pub fn read_table(path: impl AsRef<Path>, sheet: Option<&str>) -> Result<Vec<Row>> {
    ExcelReader::new().read_table(path, sheet)
}

/// Read every worksheet with the default caster, in workbook order.
pub fn read_tables(path: impl AsRef<Path>) -> Result<Tables> {
    ExcelReader::new().read_tables(path)
}

/// List worksheet names in workbook order.
pub fn sheet_names(path: impl AsRef<Path>) -> Result<Vec<String>> {
    ExcelReader::new().sheet_names(path)
}

/// Read every worksheet and render it as JSON.
pub fn to_json(path: impl AsRef<Path>) -> Result<String> {
    let tables = read_tables(path)?;
    render::to_json_default(&tables)
}
