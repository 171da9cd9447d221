//! Decoding raw sheet rows into typed records and encoding records back
//! into rows.
//!
//! Decoding follows the sheet's live header row, not the canonical order,
//! so records survive any column arrangement the backend happens to have.
//! Encoding emits one cell per requested header, with `None` in every
//! position the application must not touch — Output columns and headers
//! the type does not declare — so backend formulas keep their positions.

use std::collections::HashMap;

use log::debug;

use crate::{
    data::coerce_cell,
    registry::{DescriptorRegistry, SheetEntity},
};

/// Decodes raw rows into records of `T`.
///
/// Row 0 is the header row and becomes a header-to-position map. A data
/// row whose first cell is blank is skipped entirely; its other cells are
/// never inspected. Cells that are blank or fail to coerce leave the field
/// unset. Every decoded record is marked as already persisted.
pub fn decode_rows<T: SheetEntity>(registry: &DescriptorRegistry, rows: &[Vec<String>]) -> Vec<T> {
    let Some((header_row, data_rows)) = rows.split_first() else {
        return Vec::new();
    };
    let descriptor = registry.descriptor::<T>();

    // First occurrence wins when the sheet repeats a header.
    let mut positions: HashMap<&str, usize> = HashMap::with_capacity(header_row.len());
    for (idx, name) in header_row.iter().enumerate() {
        positions.entry(name.as_str()).or_insert(idx);
    }

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for row in data_rows {
        let key_cell = row.first().map(String::as_str).unwrap_or_default();
        if key_cell.trim().is_empty() {
            skipped += 1;
            continue;
        }
        let mut record = T::default();
        for field in descriptor.fields() {
            let raw = positions
                .get(field.header.as_str())
                .and_then(|&pos| row.get(pos))
                .map(String::as_str)
                .unwrap_or_default();
            record.set_value(&field.header, coerce_cell(raw, field.kind));
        }
        record.mark_persisted();
        records.push(record);
    }
    debug!(
        "Decoded {} record(s), skipped {} blank-key row(s)",
        records.len(),
        skipped
    );
    records
}

/// Encodes records into rows aligned to `header_names`.
///
/// For each header, in the exact order given, the cell is the field's
/// formatted value when the type declares that header with `Role::Input`;
/// otherwise it is `None`. Every emitted row has exactly
/// `header_names.len()` cells, which is what keeps later Input columns at
/// their original positions when computed columns sit between them.
pub fn encode_records<T: SheetEntity>(
    registry: &DescriptorRegistry,
    records: &[T],
    header_names: &[String],
) -> Vec<Vec<Option<String>>> {
    let descriptor = registry.descriptor::<T>();
    records
        .iter()
        .map(|record| {
            header_names
                .iter()
                .map(|header| {
                    descriptor
                        .field(header)
                        .filter(|field| field.is_input())
                        .and_then(|_| record.value(header))
                        .map(|cell| cell.as_display())
                })
                .collect()
        })
        .collect()
}
