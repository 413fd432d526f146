//! Output model for tables read from workbooks.
//!
//! A worksheet is read into a [`Table`]: an ordered list of [`Row`]s, each
//! holding one [`NormalizedCell`] per column of the sheet's used range.
//! Reading every sheet of a workbook yields [`Tables`], keyed by sheet name
//! in workbook order.

mod table;

pub use table::*;
