//! Container signature detection for Excel workbooks.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// OLE2 compound file magic bytes, used by BIFF `.xls` workbooks.
const OLE_MAGIC: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// ZIP file magic bytes: PK\x03\x04
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// Physical container a workbook file is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// OLE2 compound document (legacy `.xls`)
    Ole,
    /// ZIP package (SpreadsheetML `.xlsx`)
    Zip,
}

impl ContainerKind {
    /// Returns a human-readable name for this container.
    pub fn name(&self) -> &'static str {
        match self {
            ContainerKind::Ole => "OLE2 Compound Document",
            ContainerKind::Zip => "ZIP Package",
        }
    }
}

impl std::fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Detect the container kind from the leading bytes of a file.
///
/// Returns `None` when the data matches neither signature.
///
/// # Example
///
/// ```
/// use sheetread::detect::{detect_container_from_bytes, ContainerKind};
///
/// let kind = detect_container_from_bytes(b"PK\x03\x04rest-of-archive");
/// assert_eq!(kind, Some(ContainerKind::Zip));
/// ```
pub fn detect_container_from_bytes(data: &[u8]) -> Option<ContainerKind> {
    if is_ole_file(data) {
        Some(ContainerKind::Ole)
    } else if is_zip_file(data) {
        Some(ContainerKind::Zip)
    } else {
        None
    }
}

/// Detect the container kind of a file on disk.
///
/// Only the first eight bytes are read.
pub fn detect_container_from_path(path: impl AsRef<Path>) -> io::Result<Option<ContainerKind>> {
    let file = File::open(path.as_ref())?;
    let mut head = Vec::with_capacity(OLE_MAGIC.len());
    file.take(OLE_MAGIC.len() as u64).read_to_end(&mut head)?;
    Ok(detect_container_from_bytes(&head))
}

/// Check if data starts with the OLE2 compound file signature.
pub fn is_ole_file(data: &[u8]) -> bool {
    data.len() >= OLE_MAGIC.len() && data[..OLE_MAGIC.len()] == OLE_MAGIC
}

/// Check if data starts with ZIP magic bytes.
pub fn is_zip_file(data: &[u8]) -> bool {
    data.len() >= ZIP_MAGIC.len() && data[..ZIP_MAGIC.len()] == ZIP_MAGIC
}
