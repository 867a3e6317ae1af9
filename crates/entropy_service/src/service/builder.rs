//! Builder wiring typed randomizers into a [`RandomService`].

use std::sync::Arc;

use rust_decimal::Decimal;

use entropy_core::Randomizer;
use entropy_engines::{CryptoRandom, PseudoRandom};

use crate::registry::{RandomizerCollection, RegistryError};
use crate::service::RandomService;
use crate::typed::{RandomizerAdapter, TypedRandomizer};

/// Builder for [`RandomService`].
///
/// Registrations are validated as they are added; a duplicate target type
/// fails the builder call rather than the eventual draw. The two preset
/// methods register adapters for every supported type over a single
/// shared engine.
///
/// # Examples
///
/// Hand-wiring a single type over the crypto-secure engine:
///
/// ```rust
/// use std::sync::Arc;
///
/// use entropy_engines::CryptoRandom;
/// use entropy_service::{RandomServiceBuilder, RandomizerAdapter, TypedRandomizer};
///
/// let crypto = Arc::new(RandomizerAdapter::new(CryptoRandom::new()));
/// let service = RandomServiceBuilder::new()
///     .with::<u64>(crypto as Arc<dyn TypedRandomizer<u64>>)?
///     .build();
/// let token: u64 = service.next()?;
/// # let _ = token;
/// # Ok::<(), entropy_service::ServiceError>(())
/// ```
#[derive(Debug, Default)]
pub struct RandomServiceBuilder {
    collection: RandomizerCollection,
}

impl RandomServiceBuilder {
    /// Creates a builder with no registrations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a randomizer for type `T`.
    ///
    /// # Errors
    /// [`RegistryError::AlreadyRegistered`] when `T` already has a
    /// randomizer.
    pub fn with<T: 'static>(
        mut self,
        randomizer: Arc<dyn TypedRandomizer<T>>,
    ) -> Result<Self, RegistryError> {
        self.collection.register::<T>(randomizer)?;
        Ok(self)
    }

    /// Registers adapters over `engine` for every supported type.
    ///
    /// # Errors
    /// [`RegistryError::AlreadyRegistered`] on the first type that
    /// already has a randomizer. The builder is consumed, so a failed
    /// call discards the partially wired state.
    pub fn with_engine<R>(mut self, engine: R) -> Result<Self, RegistryError>
    where
        R: Randomizer + 'static,
    {
        let adapter = Arc::new(RandomizerAdapter::new(engine));
        self.collection
            .register::<i8>(Arc::clone(&adapter) as Arc<dyn TypedRandomizer<i8>>)?;
        self.collection
            .register::<u8>(Arc::clone(&adapter) as Arc<dyn TypedRandomizer<u8>>)?;
        self.collection
            .register::<i16>(Arc::clone(&adapter) as Arc<dyn TypedRandomizer<i16>>)?;
        self.collection
            .register::<u16>(Arc::clone(&adapter) as Arc<dyn TypedRandomizer<u16>>)?;
        self.collection
            .register::<i32>(Arc::clone(&adapter) as Arc<dyn TypedRandomizer<i32>>)?;
        self.collection
            .register::<u32>(Arc::clone(&adapter) as Arc<dyn TypedRandomizer<u32>>)?;
        self.collection
            .register::<i64>(Arc::clone(&adapter) as Arc<dyn TypedRandomizer<i64>>)?;
        self.collection
            .register::<u64>(Arc::clone(&adapter) as Arc<dyn TypedRandomizer<u64>>)?;
        self.collection
            .register::<f32>(Arc::clone(&adapter) as Arc<dyn TypedRandomizer<f32>>)?;
        self.collection
            .register::<f64>(Arc::clone(&adapter) as Arc<dyn TypedRandomizer<f64>>)?;
        self.collection
            .register::<Decimal>(adapter as Arc<dyn TypedRandomizer<Decimal>>)?;
        Ok(self)
    }

    /// Registers the pseudo-random engine for every supported type.
    ///
    /// # Errors
    /// [`RegistryError::AlreadyRegistered`] on the first type that
    /// already has a randomizer.
    pub fn with_pseudo_randomizers(self) -> Result<Self, RegistryError> {
        self.with_engine(PseudoRandom::new())
    }

    /// Registers the crypto-secure engine for every supported type.
    ///
    /// # Errors
    /// [`RegistryError::AlreadyRegistered`] on the first type that
    /// already has a randomizer.
    pub fn with_crypto_randomizers(self) -> Result<Self, RegistryError> {
        self.with_engine(CryptoRandom::new())
    }

    /// Finalises the service.
    pub fn build(self) -> RandomService {
        RandomService::new(self.collection)
    }
}
