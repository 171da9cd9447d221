//! Sheet (named group) ordering.
//!
//! Merges explicitly-positioned and declaration-ordered groups into one
//! total order, and validates group sets for duplicate positions, duplicate
//! names, and availability against the backend's actual sheet list.

use itertools::Itertools;
use log::debug;

use crate::{error::ValidationError, metadata::GroupDescriptor};

/// Resolves the total order of a group set.
///
/// Groups without a real explicit position (including negative
/// declarations) come first, in declaration order. Ordered groups are then
/// inserted in ascending position order, each at index
/// `unordered_count + position`; a position past the current end of the
/// list is appended instead of leaving a gap.
pub fn resolve_sheet_order(groups: &[GroupDescriptor]) -> Vec<String> {
    let mut result: Vec<String> = groups
        .iter()
        .filter(|g| g.effective_order().is_none())
        .sorted_by_key(|g| g.declared_index)
        .map(|g| g.name.clone())
        .collect();
    let unordered_count = result.len();

    let ordered = groups
        .iter()
        .filter_map(|g| g.effective_order().map(|order| (order, g)))
        .sorted_by_key(|(order, _)| *order);
    for (order, group) in ordered {
        let slot = (unordered_count + order as usize).min(result.len());
        result.insert(slot, group.name.clone());
    }

    debug!(
        "Resolved sheet order for {} group(s): {} unordered, {} ordered",
        groups.len(),
        unordered_count,
        groups.len() - unordered_count
    );
    result
}

/// Detects configuration bugs within a group set: explicit positions or
/// names used more than once.
pub fn validate_groups(groups: &[GroupDescriptor]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let order_counts = groups
        .iter()
        .filter_map(GroupDescriptor::effective_order)
        .counts();
    for (order, count) in order_counts.into_iter().sorted() {
        if count > 1 {
            errors.push(ValidationError::DuplicateOrder { order });
        }
    }

    let name_counts = groups.iter().map(|g| g.name.as_str()).counts();
    for (name, count) in name_counts.into_iter().sorted() {
        if count > 1 {
            errors.push(ValidationError::DuplicateSheetName {
                name: name.to_string(),
            });
        }
    }

    errors
}

/// Reports every declared group whose name is absent from the caller's
/// available sheet set.
pub fn validate_sheet_availability(
    groups: &[GroupDescriptor],
    available: &[String],
) -> Vec<ValidationError> {
    groups
        .iter()
        .filter(|g| !available.iter().any(|name| *name == g.name))
        .map(|g| ValidationError::SheetNotAvailable {
            name: g.name.clone(),
        })
        .collect()
}
