//! Validation diagnostics reported as values rather than thrown.
//!
//! Nothing in this crate returns `Err` or panics for malformed sheet input;
//! structural problems (missing columns, duplicate orders, duplicate sheet
//! names) surface only through the explicit `validate_*` functions as lists
//! of [`ValidationError`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A configuration- or mapping-time problem detected by a validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum ValidationError {
    /// A field's header name is absent from the available header set.
    #[error("Field '{field}' maps to column '{header}' which is not available")]
    MissingColumn { field: String, header: String },

    /// Two ordered groups claim the same explicit position.
    #[error("Order {order} is used multiple times")]
    DuplicateOrder { order: u32 },

    /// Two groups share a name.
    #[error("Sheet name '{name}' is used multiple times")]
    DuplicateSheetName { name: String },

    /// A declared group has no counterpart in the caller's available set.
    #[error("Sheet '{name}' is not available")]
    SheetNotAvailable { name: String },
}
