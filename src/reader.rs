//! Sheet reading service.

use log::debug;
use std::path::Path;

use crate::cast::{DefaultCaster, ValueCaster};
use crate::error::{Error, Result};
use crate::loader::WorkbookLoader;
use crate::model::{Row, Table, Tables};
use crate::options::LoadOptions;

/// Reads worksheets into rows of normalized strings.
///
/// Importers hold an `ExcelReader` and delegate to it. Every call opens the
/// workbook afresh.
///
/// # Example
///
/// ```no_run
/// use sheetread::ExcelReader;
///
/// let reader = ExcelReader::new();
/// for name in reader.sheet_names("upload.xlsx")? {
///     let rows = reader.read_table("upload.xlsx", Some(name.as_str()))?;
///     println!("{}: {} rows", name, rows.len());
/// }
/// # Ok::<(), sheetread::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExcelReader<C = DefaultCaster> {
    loader: WorkbookLoader,
    caster: C,
}

impl ExcelReader {
    /// Create a reader with the default caster and options.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: ValueCaster> ExcelReader<C> {
    /// Replace the loading options.
    pub fn with_options(mut self, options: LoadOptions) -> Self {
        self.loader = WorkbookLoader::new(options);
        self
    }

    /// Replace the caster.
    pub fn with_caster<D: ValueCaster>(self, caster: D) -> ExcelReader<D> {
        ExcelReader {
            loader: self.loader,
            caster,
        }
    }

    /// The caster in use.
    pub fn caster(&self) -> &C {
        &self.caster
    }

    /// Read one worksheet as rows.
    ///
    /// `sheet` selects the worksheet by name; `None` or a name the workbook
    /// does not have reads the first worksheet.
    pub fn read_table(&self, path: impl AsRef<Path>, sheet: Option<&str>) -> Result<Vec<Row>> {
        Ok(self.read_sheet(path, sheet)?.rows)
    }

    /// Like [`read_table`](Self::read_table), but also reports which sheet
    /// was read.
    pub fn read_sheet(&self, path: impl AsRef<Path>, sheet: Option<&str>) -> Result<Table> {
        let mut workbook = self.loader.load(path)?;
        let source = workbook.path().to_path_buf();
        let worksheet = match workbook.select_sheet(sheet) {
            Ok(worksheet) => worksheet,
            Err(Error::NoWorksheets { .. }) => return Ok(Table::default()),
            Err(e) => return Err(e),
        };

        debug!("reading sheet '{}' of '{}'", worksheet.name(), source.display());
        Ok(Table::with_rows(
            worksheet.name(),
            worksheet.rows(&self.caster),
        ))
    }

    /// Worksheet names in workbook order. No cell data is read.
    pub fn sheet_names(&self, path: impl AsRef<Path>) -> Result<Vec<String>> {
        let workbook = self.loader.load(path)?;
        Ok(workbook.sheet_names().to_vec())
    }

    /// Read every worksheet, keyed by name in workbook order.
    pub fn read_tables(&self, path: impl AsRef<Path>) -> Result<Tables> {
        let mut workbook = self.loader.load(path)?;
        let names = workbook.sheet_names().to_vec();

        let mut tables = Tables::new();
        for name in names {
            let worksheet = workbook.worksheet(&name)?;
            tables.insert(Table::with_rows(name, worksheet.rows(&self.caster)));
        }
        Ok(tables)
    }
}
