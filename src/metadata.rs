//! Field and group descriptors: the declarative metadata this crate
//! resolves orders from.
//!
//! This module owns [`FieldDescriptor`] (one column of an entity),
//! [`TypeDescriptor`] (the full ordered column list for an entity type,
//! assembled base-first through [`TypeDescriptorBuilder`]), and
//! [`GroupDescriptor`] (one named sheet in the backend document).
//!
//! Descriptors are built once per type, are pure functions of declared
//! metadata, and are never mutated afterwards. Canonical column and sheet
//! orders are derived from them alone, independent of any live header row.

use std::collections::HashSet;

use heck::ToTitleCase;
use serde::{Deserialize, Serialize};

use crate::data::ValueKind;

/// Whether a column is written by the application or computed by the
/// backend.
///
/// `Output` columns are reserved: the codec never writes a value into them,
/// so backend formulas stay intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Input,
    Output,
}

/// Metadata for one entity field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field identifier on the record type.
    pub field: String,
    /// Column header as it appears in the sheet.
    pub header: String,
    /// Position within the flattened declaration order, base type first.
    pub declared_index: usize,
    /// Explicit column position, when one was declared.
    pub explicit_order: Option<u32>,
    pub role: Role,
    pub kind: ValueKind,
}

impl FieldDescriptor {
    /// A new Input-role descriptor. The header defaults to the title-cased
    /// field identifier (`first_trip` becomes "First Trip");
    /// `declared_index` is assigned when the descriptor joins a builder.
    pub fn new(field: &str, kind: ValueKind) -> Self {
        Self {
            field: field.to_string(),
            header: field.to_title_case(),
            declared_index: 0,
            explicit_order: None,
            role: Role::Input,
            kind,
        }
    }

    /// Overrides the derived header name.
    pub fn header(mut self, header: &str) -> Self {
        self.header = header.to_string();
        self
    }

    /// Declares an explicit column position.
    pub fn order(mut self, order: u32) -> Self {
        self.explicit_order = Some(order);
        self
    }

    /// Marks the column as backend-computed.
    pub fn output(mut self) -> Self {
        self.role = Role::Output;
        self
    }

    pub fn is_input(&self) -> bool {
        self.role == Role::Input
    }
}

/// The full ordered column list for one entity type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    pub fn builder() -> TypeDescriptorBuilder {
        TypeDescriptorBuilder::default()
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Canonical header names in declaration order.
    pub fn headers(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.header.clone()).collect()
    }

    /// Looks a descriptor up by its header name.
    pub fn field(&self, header: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.header == header)
    }

    /// Canonical position of a header, when the type declares it.
    pub fn position_of(&self, header: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.header == header)
    }
}

/// Assembles a [`TypeDescriptor`] by flattening an inheritance chain.
///
/// Call [`chain()`](Self::chain) with each ancestor's descriptor, base type
/// first, then add the type's own fields in declaration order. The first
/// occurrence of a header name wins; later duplicates are dropped, so a
/// derived type cannot displace a base column.
#[derive(Debug, Default)]
pub struct TypeDescriptorBuilder {
    fields: Vec<FieldDescriptor>,
    seen: HashSet<String>,
}

impl TypeDescriptorBuilder {
    /// Appends every field of an ancestor descriptor.
    pub fn chain(mut self, parent: &TypeDescriptor) -> Self {
        for field in &parent.fields {
            self = self.push(field.clone());
        }
        self
    }

    /// Appends one field, dropping it if its header was already declared.
    pub fn push(mut self, mut field: FieldDescriptor) -> Self {
        if self.seen.insert(field.header.clone()) {
            field.declared_index = self.fields.len();
            self.fields.push(field);
        }
        self
    }

    /// Shorthand for `push(FieldDescriptor::new(field, kind))`.
    pub fn field(self, field: &str, kind: ValueKind) -> Self {
        self.push(FieldDescriptor::new(field, kind))
    }

    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor {
            fields: self.fields,
        }
    }
}

/// Metadata for one named sheet in the backend document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDescriptor {
    pub name: String,
    /// Position within the caller's declaration order.
    pub declared_index: usize,
    /// Raw declared order; negative values mean "no explicit position".
    pub explicit_order: Option<i32>,
}

impl GroupDescriptor {
    pub fn unordered(declared_index: usize, name: &str) -> Self {
        Self {
            name: name.to_string(),
            declared_index,
            explicit_order: None,
        }
    }

    pub fn ordered(declared_index: usize, name: &str, order: i32) -> Self {
        Self {
            name: name.to_string(),
            declared_index,
            explicit_order: Some(order),
        }
    }

    /// The explicit position, with negative declarations collapsed to
    /// "unordered".
    pub fn effective_order(&self) -> Option<u32> {
        match self.explicit_order {
            Some(order) if order >= 0 => Some(order as u32),
            _ => None,
        }
    }
}
