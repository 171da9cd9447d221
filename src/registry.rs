//! Explicit descriptor registration and memoization.
//!
//! There is no runtime reflection in this crate: every record type that
//! maps onto a sheet implements [`SheetEntity`], which declares its
//! [`TypeDescriptor`] and exposes cell access by header name.
//! [`DescriptorRegistry`] memoizes the built descriptors per type.

use std::{
    any::{TypeId, type_name},
    collections::HashMap,
    sync::{Arc, RwLock},
};

use log::debug;

use crate::{data::CellValue, metadata::TypeDescriptor};

/// A record type that maps onto one sheet.
///
/// `descriptor()` must be a pure function of the type: deterministic,
/// side-effect free, and independent of any instance data. Cell access goes
/// through header names so the codec can follow whatever column order the
/// backend currently has.
pub trait SheetEntity: Default + 'static {
    /// Builds the ordered field metadata for this type.
    fn descriptor() -> TypeDescriptor;

    /// Current value of the field mapped to `header`, if any.
    fn value(&self, header: &str) -> Option<CellValue>;

    /// Stores a decoded value into the field mapped to `header`. Unknown
    /// headers and `None` values are ignored.
    fn set_value(&mut self, header: &str, value: Option<CellValue>);

    /// Called on every decoded record; the record came from the backend,
    /// so it already exists there.
    fn mark_persisted(&mut self) {}

    fn is_persisted(&self) -> bool {
        false
    }
}

/// Lazily-built, append-only cache of per-type descriptors.
///
/// Descriptor construction is deterministic, so two callers racing on the
/// same entry compute identical values; the cache only saves the repeated
/// work. Tests should create a fresh registry per test.
#[derive(Debug, Default)]
pub struct DescriptorRegistry {
    cache: RwLock<HashMap<TypeId, Arc<TypeDescriptor>>>,
}

impl DescriptorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the memoized descriptor for `T`, building it on first use.
    pub fn descriptor<T: SheetEntity>(&self) -> Arc<TypeDescriptor> {
        let key = TypeId::of::<T>();
        {
            let cache = self.cache.read().unwrap_or_else(|e| e.into_inner());
            if let Some(found) = cache.get(&key) {
                return Arc::clone(found);
            }
        }
        let built = Arc::new(T::descriptor());
        debug!(
            "Built descriptor for {} with {} column(s)",
            type_name::<T>(),
            built.len()
        );
        let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
        Arc::clone(cache.entry(key).or_insert(built))
    }

    /// Number of distinct types registered so far.
    pub fn len(&self) -> usize {
        self.cache.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ValueKind;

    #[derive(Default)]
    struct Probe;

    impl SheetEntity for Probe {
        fn descriptor() -> TypeDescriptor {
            TypeDescriptor::builder()
                .field("id", ValueKind::Int)
                .build()
        }

        fn value(&self, _header: &str) -> Option<CellValue> {
            None
        }

        fn set_value(&mut self, _header: &str, _value: Option<CellValue>) {}
    }

    #[test]
    fn descriptor_is_built_once_and_shared() {
        let registry = DescriptorRegistry::new();
        assert!(registry.is_empty());

        let first = registry.descriptor::<Probe>();
        let second = registry.descriptor::<Probe>();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.len(), 1);
    }
}
