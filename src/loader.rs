//! Workbook loading with extension-based backend dispatch.
//!
//! The extension picks the backend. Some sources ship modern `.xlsx`
//! workbooks under a `.xls` name; when the legacy backend finds no OLE2
//! signature in a file whose name ends in `.xls`, the loader copies it to a
//! sibling `<name>_amend.xlsx` and opens that copy instead. The retry happens
//! at most once and the sibling is left on disk.
//!
//! Concurrent loads of the same mislabelled file write the same sibling and
//! may race.

use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::Backend;
use crate::error::{Error, Result};
use crate::options::LoadOptions;
use crate::workbook::Workbook;

/// Opens workbooks according to [`LoadOptions`].
#[derive(Debug, Clone, Default)]
pub struct WorkbookLoader {
    options: LoadOptions,
}

impl WorkbookLoader {
    /// Create a loader.
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    /// Options in effect.
    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Open the workbook at `path`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedExtension`] for anything but `.xls`/`.xlsx`
    /// - [`Error::MalformedContainer`] for a non-OLE2 file the fallback cannot
    ///   handle (fallback disabled, or a name not ending in lowercase `.xls`)
    /// - [`Error::UnreadableFile`] for every other failure, including a
    ///   sibling that cannot be written
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Workbook> {
        let path = path.as_ref();

        match open(path) {
            Err(Error::MalformedContainer { path: source, backend }) => {
                let amended = match self.amended_path(&source) {
                    Some(amended) => amended,
                    None => return Err(Error::MalformedContainer { path: source, backend }),
                };

                warn!(
                    "'{}' is not a {} file; retrying as '{}'",
                    source.display(),
                    backend,
                    amended.display()
                );
                fs::copy(&source, &amended).map_err(|e| Error::unreadable(&amended, e))?;

                // The sibling ends in .xlsx, so this cannot loop back here.
                open(&amended)
            }
            other => other,
        }
    }

    fn amended_path(&self, path: &Path) -> Option<PathBuf> {
        if !self.options.amend_fallback {
            return None;
        }
        amended_path(path, &self.options.amend_suffix)
    }
}

/// Open `path` with the default [`LoadOptions`].
pub fn load_workbook(path: impl AsRef<Path>) -> Result<Workbook> {
    WorkbookLoader::default().load(path)
}

/// Sibling path used for retrying a mislabelled `.xls` file.
///
/// `data/report.xls` becomes `data/report<suffix>.xlsx`. Returns `None`
/// unless the file name ends in exactly `.xls` (lowercase).
///
/// ```
/// use std::path::Path;
/// use sheetread::loader::amended_path;
///
/// assert_eq!(
///     amended_path(Path::new("in/report.xls"), "_amend").unwrap(),
///     Path::new("in/report_amend.xlsx")
/// );
/// assert!(amended_path(Path::new("in/report.XLS"), "_amend").is_none());
/// ```
pub fn amended_path(path: &Path, suffix: &str) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    let stem = name.strip_suffix(".xls")?;
    Some(path.with_file_name(format!("{}{}.xlsx", stem, suffix)))
}

fn open(path: &Path) -> Result<Workbook> {
    let backend = Backend::for_path(path)?;
    debug!("opening '{}' as {}", path.display(), backend);
    let reader = backend.open(path)?;
    Ok(Workbook::new(path.to_path_buf(), backend, reader))
}
