//! # entropy_core: Sampling Foundation for the Entropy Library
//!
//! ## Layer 1 (Foundation) Role
//!
//! entropy_core is the bottom layer of the 3-layer architecture, providing:
//! - Raw entropy source abstraction (`source`)
//! - Unbiased bounded sampling over fixed-width integer domains (`sample`)
//! - The `Randomizer` contract and its typed extension surface (`randomizer`)
//! - Character sets and error types (`types`)
//!
//! ## Minimal Dependency Principle
//!
//! Layer 1 has no dependencies on other entropy_* crates, with minimal
//! external dependencies:
//! - rust_decimal: 96-bit decimal arithmetic for the decimal domain
//! - thiserror: structured error derives
//! - serde: serialisation support (optional)
//!
//! The platform generators themselves live in Layer 2 (`entropy_engines`);
//! everything here is expressed against the [`RawSource`] trait so the
//! algorithms can be tested against deterministic sources.
//!
//! ## Usage Example
//!
//! ```rust
//! use entropy_core::sample;
//! use entropy_core::source::SequenceSource;
//!
//! let mut source = SequenceSource::new(&[17, 29, 4]);
//!
//! // Bounded draw, free of modulo bias.
//! let value = sample::u64_in_range(&mut source, 10, 20).unwrap();
//! assert!((10..20).contains(&value));
//!
//! // Degenerate range returns the single representable value.
//! assert_eq!(sample::u64_in_range(&mut source, 5, 5).unwrap(), 5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod randomizer;
pub mod sample;
pub mod source;
pub mod types;

pub use randomizer::{Randomizer, RandomizerExt};
pub use source::RawSource;
pub use types::{CharSet, CharSetError, RangeError};
