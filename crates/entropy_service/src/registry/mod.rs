//! Type-keyed registry of typed randomizers.

use std::any::{Any, TypeId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::typed::TypedRandomizer;

/// Errors raised by [`RandomizerCollection`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No randomizer is registered for the requested type.
    #[error("no randomizer registered for type {type_name}")]
    NotRegistered {
        /// Name of the requested target type.
        type_name: &'static str,
    },

    /// A randomizer is already registered for the type.
    #[error("a randomizer is already registered for type {type_name}")]
    AlreadyRegistered {
        /// Name of the conflicting target type.
        type_name: &'static str,
    },
}

/// Registry resolving typed randomizers by their target type.
///
/// At most one randomizer is held per type; registering a second is an
/// error rather than a silent replacement, so a composition mistake
/// surfaces at wiring time instead of skewing draws at runtime.
///
/// Lookups clone the stored [`Arc`], so resolved randomizers outlive the
/// collection borrow.
#[derive(Default)]
pub struct RandomizerCollection {
    entries: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl RandomizerCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a randomizer for type `T`.
    ///
    /// # Errors
    /// [`RegistryError::AlreadyRegistered`] when the type already has a
    /// randomizer; the existing registration is kept.
    pub fn register<T: 'static>(
        &mut self,
        randomizer: Arc<dyn TypedRandomizer<T>>,
    ) -> Result<(), RegistryError> {
        match self.entries.entry(TypeId::of::<T>()) {
            Entry::Occupied(_) => Err(RegistryError::AlreadyRegistered {
                type_name: std::any::type_name::<T>(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(Box::new(randomizer));
                tracing::debug!(target_type = std::any::type_name::<T>(), "registered randomizer");
                Ok(())
            }
        }
    }

    /// Resolves the randomizer registered for type `T`.
    ///
    /// # Errors
    /// [`RegistryError::NotRegistered`] when the type has no randomizer.
    pub fn get<T: 'static>(&self) -> Result<Arc<dyn TypedRandomizer<T>>, RegistryError> {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<Arc<dyn TypedRandomizer<T>>>())
            .cloned()
            .ok_or(RegistryError::NotRegistered {
                type_name: std::any::type_name::<T>(),
            })
    }

    /// Whether a randomizer is registered for type `T`.
    pub fn contains<T: 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Number of registered randomizers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for RandomizerCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomizerCollection")
            .field("registered", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use entropy_core::RangeError;

    use super::*;

    struct FixedFive;

    impl TypedRandomizer<i32> for FixedFive {
        fn next(&self) -> i32 {
            5
        }

        fn next_in(&self, min: i32, max: i32) -> Result<i32, RangeError> {
            if min > max {
                return Err(RangeError::invalid(min, max));
            }
            Ok(min)
        }
    }

    #[test]
    fn register_then_resolve() {
        let mut collection = RandomizerCollection::new();
        collection.register::<i32>(Arc::new(FixedFive)).unwrap();
        assert!(collection.contains::<i32>());
        assert_eq!(collection.len(), 1);

        let randomizer = collection.get::<i32>().unwrap();
        assert_eq!(randomizer.next(), 5);
    }

    #[test]
    fn unregistered_type_is_an_error() {
        let collection = RandomizerCollection::new();
        assert!(collection.is_empty());
        let err = collection.get::<u64>().unwrap_err();
        assert_eq!(
            err,
            RegistryError::NotRegistered {
                type_name: std::any::type_name::<u64>()
            }
        );
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut collection = RandomizerCollection::new();
        collection.register::<i32>(Arc::new(FixedFive)).unwrap();
        let err = collection.register::<i32>(Arc::new(FixedFive)).unwrap_err();
        assert_eq!(
            err,
            RegistryError::AlreadyRegistered {
                type_name: std::any::type_name::<i32>()
            }
        );
        // The original registration survives.
        assert_eq!(collection.get::<i32>().unwrap().next(), 5);
    }

    #[test]
    fn registrations_are_per_type() {
        let mut collection = RandomizerCollection::new();
        collection.register::<i32>(Arc::new(FixedFive)).unwrap();
        assert!(!collection.contains::<i64>());
        assert!(collection.get::<i64>().is_err());
    }
}
