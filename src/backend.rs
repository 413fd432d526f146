//! Spreadsheet backends selected by file extension.

use calamine::{open_workbook, Sheets, Xls, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::detect::{detect_container_from_path, ContainerKind};
use crate::error::{Error, Result};

/// Reader type shared by both backends.
pub(crate) type SheetsReader = Sheets<BufReader<File>>;

/// Workbook format backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// BIFF workbook in an OLE2 container (.xls)
    Legacy,
    /// SpreadsheetML workbook in a ZIP package (.xlsx)
    OpenXml,
}

impl Backend {
    /// Look up the backend for an extension, ignoring case and a leading dot.
    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.strip_prefix('.').unwrap_or(extension);
        if extension.eq_ignore_ascii_case("xls") {
            Some(Backend::Legacy)
        } else if extension.eq_ignore_ascii_case("xlsx") {
            Some(Backend::OpenXml)
        } else {
            None
        }
    }

    /// Select the backend for a path from its extension.
    pub fn for_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self::from_extension(&extension).ok_or_else(|| Error::UnsupportedExtension {
            path: path.to_path_buf(),
            extension: if extension.is_empty() {
                extension
            } else {
                format!(".{}", extension)
            },
        })
    }

    /// Returns the canonical file extension for this backend.
    pub fn extension(&self) -> &'static str {
        match self {
            Backend::Legacy => "xls",
            Backend::OpenXml => "xlsx",
        }
    }

    /// Returns a human-readable name for this backend.
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Legacy => "Excel 97-2003 Workbook",
            Backend::OpenXml => "Excel Workbook",
        }
    }

    /// Returns the container this backend expects.
    pub fn container(&self) -> ContainerKind {
        match self {
            Backend::Legacy => ContainerKind::Ole,
            Backend::OpenXml => ContainerKind::Zip,
        }
    }

    /// Open `path` with this backend.
    ///
    /// The legacy backend rejects files without an OLE2 signature with
    /// [`Error::MalformedContainer`]. Every other failure is reported as
    /// [`Error::UnreadableFile`].
    pub(crate) fn open(self, path: &Path) -> Result<SheetsReader> {
        match self {
            Backend::Legacy => {
                let kind =
                    detect_container_from_path(path).map_err(|e| Error::unreadable(path, e))?;
                if kind != Some(ContainerKind::Ole) {
                    return Err(Error::MalformedContainer {
                        path: path.to_path_buf(),
                        backend: self,
                    });
                }
                let workbook: Xls<_> =
                    open_workbook(path).map_err(|e| Error::unreadable(path, e))?;
                Ok(Sheets::Xls(workbook))
            }
            Backend::OpenXml => {
                let workbook: Xlsx<_> =
                    open_workbook(path).map_err(|e| Error::unreadable(path, e))?;
                Ok(Sheets::Xlsx(workbook))
            }
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
