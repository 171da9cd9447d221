//! Positional header diffing.
//!
//! Compares the header row a sheet actually has against the canonical one
//! a type expects, index by index. There is no fuzzy matching: a renamed
//! column is an unexpected column plus, possibly, a missing one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One positional discrepancy between observed and expected headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum HeaderMismatch {
    /// Both rows have a header at this position but they differ.
    #[error("Unexpected column [{observed}] should be [{expected}]")]
    Unexpected {
        position: usize,
        observed: String,
        expected: String,
    },

    /// The expected row is longer; this column is absent from the sheet.
    #[error("Missing column [{expected}]")]
    Missing { expected: String },
}

/// Walks `0..max(len)` over both rows and reports every positional
/// mismatch. Observed headers past the end of the expected row are ignored;
/// they are unmapped, not wrong.
pub fn check_sheet_headers(observed: &[String], expected: &[String]) -> Vec<HeaderMismatch> {
    let mut mismatches = Vec::new();
    for position in 0..observed.len().max(expected.len()) {
        match (observed.get(position), expected.get(position)) {
            (Some(obs), Some(exp)) if obs != exp => {
                mismatches.push(HeaderMismatch::Unexpected {
                    position,
                    observed: obs.clone(),
                    expected: exp.clone(),
                });
            }
            (None, Some(exp)) => {
                mismatches.push(HeaderMismatch::Missing {
                    expected: exp.clone(),
                });
            }
            _ => {}
        }
    }
    mismatches
}
