//! Open workbook handle and worksheet access.

use calamine::{Data, Range, Reader};
use std::path::{Path, PathBuf};

use crate::backend::{Backend, SheetsReader};
use crate::cast::{RawValue, ValueCaster};
use crate::error::{Error, Result};
use crate::model::Row;

/// An open workbook.
///
/// Created by [`WorkbookLoader`](crate::WorkbookLoader). Each load opens a
/// fresh handle; handles are not cached or shared.
pub struct Workbook {
    path: PathBuf,
    backend: Backend,
    reader: SheetsReader,
    sheet_names: Vec<String>,
    current: Option<Worksheet>,
}

impl Workbook {
    pub(crate) fn new(path: PathBuf, backend: Backend, reader: SheetsReader) -> Self {
        let sheet_names = reader.sheet_names();
        Self {
            path,
            backend,
            reader,
            sheet_names,
            current: None,
        }
    }

    /// Path the workbook was read from.
    ///
    /// After the `.xls` fallback this is the `_amend.xlsx` sibling.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Backend that opened the workbook.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Worksheet names in workbook order.
    pub fn sheet_names(&self) -> &[String] {
        &self.sheet_names
    }

    /// Resolve the sheet to read: `name` when the workbook has it, otherwise
    /// the first sheet.
    pub fn resolve_sheet_name(&self, name: Option<&str>) -> Option<&str> {
        name.and_then(|n| self.sheet_names.iter().find(|s| s.as_str() == n))
            .or_else(|| self.sheet_names.first())
            .map(String::as_str)
    }

    /// Make a worksheet current and return it.
    ///
    /// A missing or unknown name selects the first worksheet.
    pub fn select_sheet(&mut self, name: Option<&str>) -> Result<&Worksheet> {
        let name = self
            .resolve_sheet_name(name)
            .ok_or_else(|| Error::NoWorksheets {
                path: self.path.clone(),
            })?
            .to_string();

        if self.current.as_ref().map(|ws| ws.name()) != Some(name.as_str()) {
            let worksheet = self.worksheet(&name)?;
            self.current = Some(worksheet);
        }

        self.current.as_ref().ok_or_else(|| Error::NoWorksheets {
            path: self.path.clone(),
        })
    }

    /// The current worksheet, if one has been selected.
    pub fn current_sheet(&self) -> Option<&Worksheet> {
        self.current.as_ref()
    }

    /// Load a worksheet by exact name.
    pub fn worksheet(&mut self, name: &str) -> Result<Worksheet> {
        let range = self
            .reader
            .worksheet_range(name)
            .map_err(|e| Error::unreadable(&self.path, e))?;

        Ok(Worksheet {
            name: name.to_string(),
            range,
        })
    }
}

impl std::fmt::Debug for Workbook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workbook")
            .field("path", &self.path)
            .field("backend", &self.backend)
            .field("sheet_names", &self.sheet_names)
            .field("current", &self.current.as_ref().map(|ws| ws.name()))
            .finish()
    }
}

/// Cell data of one worksheet.
///
/// Row and column indices are 0-based and absolute, so a sheet whose data
/// starts at `B3` reports a first row of 2 and a first column of 1.
#[derive(Debug, Clone)]
pub struct Worksheet {
    name: String,
    range: Range<Data>,
}

impl Worksheet {
    /// Worksheet name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First used row, `None` for an empty sheet.
    pub fn first_row(&self) -> Option<u32> {
        self.range.start().map(|(row, _)| row)
    }

    /// Last used row, `None` for an empty sheet.
    pub fn last_row(&self) -> Option<u32> {
        self.range.end().map(|(row, _)| row)
    }

    /// First used column, `None` for an empty sheet.
    pub fn first_column(&self) -> Option<u32> {
        self.range.start().map(|(_, col)| col)
    }

    /// Last used column, `None` for an empty sheet.
    pub fn last_column(&self) -> Option<u32> {
        self.range.end().map(|(_, col)| col)
    }

    /// Number of rows in the used range.
    pub fn height(&self) -> usize {
        self.range.height()
    }

    /// Number of columns in the used range.
    pub fn width(&self) -> usize {
        self.range.width()
    }

    /// Raw value at an absolute position. Positions outside the used range
    /// are empty.
    pub fn cell(&self, row: u32, col: u32) -> RawValue {
        RawValue::from(self.range.get_value((row, col)))
    }

    /// Cast every cell of the used range, row by row.
    ///
    /// Every row has [`width`](Self::width) cells; empty cells are kept as
    /// `None` so columns stay aligned.
    pub fn rows<C: ValueCaster + ?Sized>(&self, caster: &C) -> Vec<Row> {
        let (Some((first_row, first_col)), Some((last_row, last_col))) =
            (self.range.start(), self.range.end())
        else {
            return Vec::new();
        };

        let mut rows = Vec::with_capacity(self.height());
        for row in first_row..=last_row {
            let mut line = Vec::with_capacity(self.width());
            for col in first_col..=last_col {
                line.push(caster.cast(&self.cell(row, col)));
            }
            rows.push(line);
        }
        rows
    }
}
