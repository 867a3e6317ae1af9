//! Typed randomizer service over the Layer 2 engines.
//!
//! This crate maps the engine surface into per-type randomizers resolved
//! by target type:
//!
//! - [`TypedRandomizer`]: the per-type contract (`next`, `next_in`).
//! - [`RandomizerAdapter`]: derives a typed randomizer for every supported
//!   type from any [`entropy_core::Randomizer`] engine.
//! - [`RandomizerCollection`]: a type-keyed registry of typed randomizers.
//! - [`RandomService`] and [`RandomServiceBuilder`]: the consumer facade,
//!   with one-call presets for the pseudo-random and crypto-secure
//!   engines.
//!
//! # Examples
//!
//! ```rust
//! use entropy_service::RandomServiceBuilder;
//!
//! let service = RandomServiceBuilder::new()
//!     .with_pseudo_randomizers()?
//!     .build();
//!
//! let value: i32 = service.next_in(0, 100)?;
//! assert!((0..100).contains(&value));
//! # Ok::<(), entropy_service::ServiceError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod registry;
pub mod service;
pub mod typed;

pub use registry::{RandomizerCollection, RegistryError};
pub use service::{RandomService, RandomServiceBuilder, ServiceError};
pub use typed::{RandomizerAdapter, TypedRandomizer};
