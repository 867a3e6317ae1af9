//! Random engines implementing the Layer 1 randomizer contract.
//!
//! Two engines are provided:
//!
//! - [`PseudoRandom`]: a fast pseudo-random engine caching one platform
//!   generator per thread, seeded lazily from a shared [`SeedSource`].
//!   Shareable across threads with no locking on the draw path.
//! - [`CryptoRandom`]: a crypto-secure engine drawing from the operating
//!   system's entropy source on every call. Stateless and copyable.
//!
//! Both implement [`entropy_core::Randomizer`], so the extension surface
//! in [`entropy_core::RandomizerExt`] is available on either.
//!
//! # Examples
//!
//! ```rust
//! use entropy_core::{Randomizer, RandomizerExt};
//! use entropy_engines::PseudoRandom;
//!
//! let engine = PseudoRandom::new();
//! let value = engine.next_i32_in(0, 100)?;
//! assert!((0..100).contains(&value));
//!
//! let flag = engine.next_bool();
//! # let _ = flag;
//! # Ok::<(), entropy_core::RangeError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod crypto;
pub mod pseudo;
pub mod seed;

pub use crypto::CryptoRandom;
pub use pseudo::PseudoRandom;
pub use seed::SeedSource;
