//! The consumer-facing random service.

mod builder;

pub use builder::RandomServiceBuilder;

use std::sync::Arc;

use entropy_core::RangeError;

use crate::registry::{RandomizerCollection, RegistryError};
use crate::typed::TypedRandomizer;

/// Errors surfaced by [`RandomService`].
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Randomizer resolution failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A bounded draw was given an invalid range.
    #[error(transparent)]
    Range(#[from] RangeError),
}

/// Facade resolving typed randomizers and drawing values by target type.
///
/// Built through [`RandomServiceBuilder`]; immutable once built, so it
/// can be shared freely behind an [`Arc`].
///
/// # Examples
///
/// ```rust
/// use entropy_service::RandomServiceBuilder;
///
/// let service = RandomServiceBuilder::new()
///     .with_pseudo_randomizers()?
///     .build();
///
/// let dice: u8 = service.next_in(1, 7)?;
/// assert!((1..7).contains(&dice));
/// # Ok::<(), entropy_service::ServiceError>(())
/// ```
#[derive(Debug)]
pub struct RandomService {
    collection: RandomizerCollection,
}

impl RandomService {
    pub(crate) fn new(collection: RandomizerCollection) -> Self {
        Self { collection }
    }

    /// Resolves the randomizer registered for type `T`.
    ///
    /// # Errors
    /// [`RegistryError::NotRegistered`] when no randomizer is registered
    /// for `T`.
    pub fn randomizer<T: 'static>(&self) -> Result<Arc<dyn TypedRandomizer<T>>, RegistryError> {
        self.collection.get::<T>()
    }

    /// Uniform draw over `T`'s default domain.
    ///
    /// # Errors
    /// [`ServiceError::Registry`] when no randomizer is registered for
    /// `T`.
    pub fn next<T: 'static>(&self) -> Result<T, ServiceError> {
        Ok(self.collection.get::<T>()?.next())
    }

    /// Uniform draw over `[min, max)`; `min == max` returns `min`.
    ///
    /// # Errors
    /// [`ServiceError::Registry`] when no randomizer is registered for
    /// `T`; [`ServiceError::Range`] when `min > max`.
    pub fn next_in<T: 'static>(&self, min: T, max: T) -> Result<T, ServiceError> {
        Ok(self.collection.get::<T>()?.next_in(min, max)?)
    }
}
