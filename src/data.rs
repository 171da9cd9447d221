//! Typed cell values and per-kind coercion.
//!
//! Provides [`CellValue`], the typed representation of a single spreadsheet
//! cell, [`ValueKind`] describing what a column is declared to hold, and
//! [`coerce_cell()`] which turns raw cell text into a typed value.
//!
//! Coercion is deliberately lossy-but-total: a blank cell or unparseable
//! token yields `None` instead of an error, so one malformed cell never
//! aborts decoding of an entire sheet.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Declared kind of a column's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    String,
    Int,
    Decimal,
    Bool,
    /// Dates are carried as raw backend text; no calendar type is
    /// interposed between the sheet and the record.
    Date,
}

/// One typed cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellValue {
    Text(String),
    Int(i64),
    Decimal(Decimal),
    Bool(bool),
}

impl CellValue {
    /// Raw text form written back to the backend.
    pub fn as_display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Decimal(d) => d.to_string(),
            CellValue::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_display())
    }
}

/// Coerces raw cell text into a typed value per the declared kind.
///
/// Blank text is `None` for every kind. Text that fails to parse as its
/// declared kind is also `None`; callers that care about structural problems
/// use the validation functions instead.
pub fn coerce_cell(raw: &str, kind: ValueKind) -> Option<CellValue> {
    if raw.trim().is_empty() {
        return None;
    }
    match kind {
        ValueKind::String | ValueKind::Date => Some(CellValue::Text(raw.to_string())),
        ValueKind::Int => raw.trim().parse::<i64>().ok().map(CellValue::Int),
        ValueKind::Decimal => raw.trim().parse::<Decimal>().ok().map(CellValue::Decimal),
        ValueKind::Bool => match raw.trim().to_ascii_uppercase().as_str() {
            "TRUE" => Some(CellValue::Bool(true)),
            "FALSE" => Some(CellValue::Bool(false)),
            _ => None,
        },
    }
}
