//! Canonical column ordering for entity types.
//!
//! The canonical order of a type's columns is exactly its
//! [`TypeDescriptor`] order. This module reorders live header rows to match
//! it, derives header lists for sheet creation, and validates that every
//! declared column can actually be found among the backend's headers.

use itertools::Itertools;
use log::debug;

use crate::{error::ValidationError, metadata::TypeDescriptor};

/// Canonical header names for a type, in descriptor order.
pub fn column_order(descriptor: &TypeDescriptor) -> Vec<String> {
    descriptor.headers()
}

/// Reorders `headers` in place to match the canonical order.
///
/// Headers the type declares move to the front in canonical order; headers
/// the type does not know about ("unmapped") are appended afterwards,
/// keeping their original relative order. Applying this twice yields the
/// same result as applying it once.
pub fn apply_column_order(descriptor: &TypeDescriptor, headers: &mut Vec<String>) {
    let mut reordered = Vec::with_capacity(headers.len());
    for canonical in descriptor.headers() {
        if headers.contains(&canonical) {
            reordered.push(canonical);
        }
    }
    let mapped = reordered.len();
    for header in headers.iter() {
        if descriptor.position_of(header).is_none() {
            reordered.push(header.clone());
        }
    }
    debug!(
        "Applied column order: {} mapped, {} unmapped header(s)",
        mapped,
        reordered.len() - mapped
    );
    *headers = reordered;
}

/// Canonical order followed by unmapped headers, de-duplicated.
///
/// Unmapped headers come from `headers`, or from `fallback` when one is
/// supplied, in their original order. Unlike [`apply_column_order`] the
/// full canonical list is always present, which makes the result suitable
/// for creating a sheet that does not exist yet.
pub fn column_order_with_fallback(
    descriptor: &TypeDescriptor,
    headers: &[String],
    fallback: Option<&[String]>,
) -> Vec<String> {
    let source = fallback.unwrap_or(headers);
    descriptor
        .headers()
        .into_iter()
        .chain(
            source
                .iter()
                .filter(|h| descriptor.position_of(h).is_none())
                .cloned(),
        )
        .unique()
        .collect()
}

/// One [`ValidationError::MissingColumn`] per declared field whose header
/// does not appear in `available`.
pub fn validate_header_mapping(
    descriptor: &TypeDescriptor,
    available: &[String],
) -> Vec<ValidationError> {
    descriptor
        .fields()
        .iter()
        .filter(|field| !available.iter().any(|h| *h == field.header))
        .map(|field| ValidationError::MissingColumn {
            field: field.field.clone(),
            header: field.header.clone(),
        })
        .collect()
}
