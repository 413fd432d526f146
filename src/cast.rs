//! Normalization of raw cell values into strings.
//!
//! Backends hand back typed cell values. Import pipelines want strings, so
//! every cell goes through a [`ValueCaster`] before it lands in a row:
//!
//! - empty cells stay empty (`None`)
//! - dates, date-times and times become `YYYY-MM-DD`
//! - whole floats lose their fractional part (`3.0` -> `"3"`)
//! - everything else is stringified and trimmed
//!
//! Each step is a trait hook, so an importer that needs a different date
//! layout only overrides [`ValueCaster::cast_datetime`].
//!
//! ```
//! use chrono::NaiveDateTime;
//! use sheetread::{RawValue, ValueCaster};
//!
//! struct DayFirst;
//!
//! impl ValueCaster for DayFirst {
//!     fn cast_datetime(&self, value: &NaiveDateTime) -> String {
//!         value.format("%d/%m/%Y").to_string()
//!     }
//! }
//!
//! let date = chrono::NaiveDate::from_ymd_opt(2023, 1, 5)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 0)
//!     .unwrap();
//! assert_eq!(DayFirst.cast(&RawValue::DateTime(date)), Some("05/01/2023".to_string()));
//! ```

use calamine::Data;
use chrono::{NaiveDate, NaiveDateTime};

use crate::model::NormalizedCell;

/// Raw cell value as produced by a spreadsheet backend.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Empty or missing cell
    Empty,
    /// Date, date-time or time-of-day
    DateTime(NaiveDateTime),
    /// Floating point number
    Float(f64),
    /// Any other value, already stringified
    Other(String),
}

impl RawValue {
    /// Check if this value is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, RawValue::Empty)
    }
}

impl From<&Data> for RawValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => RawValue::Empty,
            Data::Float(f) => RawValue::Float(*f),
            Data::Int(i) => RawValue::Other(i.to_string()),
            Data::Bool(b) => RawValue::Other(b.to_string()),
            Data::String(s) => RawValue::Other(s.clone()),
            Data::DateTime(dt) => {
                if dt.is_duration() {
                    return RawValue::Float(dt.as_f64());
                }
                match dt.as_datetime() {
                    Some(ndt) => RawValue::DateTime(ndt),
                    None => RawValue::Float(dt.as_f64()),
                }
            }
            Data::DateTimeIso(s) => match parse_iso_datetime(s) {
                Some(ndt) => RawValue::DateTime(ndt),
                None => RawValue::Other(s.clone()),
            },
            Data::DurationIso(s) => RawValue::Other(s.clone()),
            Data::Error(e) => RawValue::Other(e.to_string()),
        }
    }
}

impl From<Option<&Data>> for RawValue {
    fn from(data: Option<&Data>) -> Self {
        data.map(RawValue::from).unwrap_or(RawValue::Empty)
    }
}

/// Parse an ISO 8601 date or date-time string as stored in SpreadsheetML.
fn parse_iso_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim_end_matches('Z');
    if let Ok(ndt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ndt);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Strategy turning raw cell values into normalized strings.
///
/// All methods have defaults; override the hook you need.
pub trait ValueCaster {
    /// Cast a raw value. Empty values stay `None`.
    fn cast(&self, raw: &RawValue) -> NormalizedCell {
        match raw {
            RawValue::Empty => None,
            RawValue::DateTime(value) => Some(self.cast_datetime(value)),
            RawValue::Float(value) => Some(self.cast_float(*value)),
            RawValue::Other(value) => Some(self.cast_other(value)),
        }
    }

    /// Format a date-like value. The time of day is dropped.
    fn cast_datetime(&self, value: &NaiveDateTime) -> String {
        value.format("%Y-%m-%d").to_string()
    }

    /// Format a float, without a fractional part when it is a whole number.
    fn cast_float(&self, value: f64) -> String {
        format_float(value)
    }

    /// Format any other value.
    fn cast_other(&self, value: &str) -> String {
        value.trim().to_string()
    }
}

/// The stock caster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultCaster;

impl ValueCaster for DefaultCaster {}

impl<F> ValueCaster for F
where
    F: Fn(&RawValue) -> NormalizedCell,
{
    fn cast(&self, raw: &RawValue) -> NormalizedCell {
        self(raw)
    }
}

// 2^63: floats at or beyond this no longer fit an i64.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

fn format_float(value: f64) -> String {
    if value.is_finite() && value == value.trunc() {
        if value.abs() < I64_LIMIT {
            (value as i64).to_string()
        } else {
            format!("{:.0}", value)
        }
    } else {
        value.to_string()
    }
}
