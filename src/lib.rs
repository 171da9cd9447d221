//! Bidirectional mapping between strongly-typed records and the flat
//! row/column model of a spreadsheet-like backend.
//!
//! The crate resolves the canonical order of columns (fields within an
//! entity type) and sheets (named groups) from declarative metadata, aligns
//! live header rows against the canonical order, and provides a typed
//! decode/encode codec that never writes into backend-computed columns.
//!
//! Everything here is synchronous and pure: no I/O, no network, no backend
//! client. An external sync layer fetches and writes the actual rows.
//!
//! ```
//! use sheetmap::{
//!     DescriptorRegistry, SheetEntity, TypeDescriptor, ValueKind,
//!     CellValue, columns, codec,
//! };
//!
//! #[derive(Default)]
//! struct Shift {
//!     pay: Option<rust_decimal::Decimal>,
//! }
//!
//! impl SheetEntity for Shift {
//!     fn descriptor() -> TypeDescriptor {
//!         TypeDescriptor::builder()
//!             .field("pay", ValueKind::Decimal)
//!             .build()
//!     }
//!
//!     fn value(&self, header: &str) -> Option<CellValue> {
//!         match header {
//!             "Pay" => self.pay.map(CellValue::Decimal),
//!             _ => None,
//!         }
//!     }
//!
//!     fn set_value(&mut self, header: &str, value: Option<CellValue>) {
//!         if let ("Pay", Some(CellValue::Decimal(d))) = (header, value) {
//!             self.pay = Some(d);
//!         }
//!     }
//! }
//!
//! let registry = DescriptorRegistry::new();
//! let order = columns::column_order(&registry.descriptor::<Shift>());
//! assert_eq!(order, vec!["Pay"]);
//!
//! let rows = vec![vec!["Pay".to_string()], vec!["2.50".to_string()]];
//! let shifts: Vec<Shift> = codec::decode_rows(&registry, &rows);
//! assert_eq!(shifts[0].pay.unwrap().to_string(), "2.50");
//! ```

pub mod codec;
pub mod columns;
pub mod data;
pub mod error;
pub mod headers;
pub mod metadata;
pub mod registry;
pub mod sheets;

pub use data::{CellValue, ValueKind, coerce_cell};
pub use error::ValidationError;
pub use headers::{HeaderMismatch, check_sheet_headers};
pub use metadata::{
    FieldDescriptor, GroupDescriptor, Role, TypeDescriptor, TypeDescriptorBuilder,
};
pub use registry::{DescriptorRegistry, SheetEntity};
