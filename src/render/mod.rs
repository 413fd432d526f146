//! Output rendering for tables.
//!
//! # Example
//!
//! ```no_run
//! use sheetread::{read_tables, render::*};
//!
//! let tables = read_tables("upload.xlsx")?;
//! let json = to_json(&tables, JsonFormat::Pretty)?;
//! # Ok::<(), sheetread::Error>(())
//! ```

mod json;

pub use json::{table_to_json, to_json, to_json_default, JsonFormat};
