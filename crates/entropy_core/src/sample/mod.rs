//! Unbiased bounded sampling over fixed-width integer domains.
//!
//! This module is the algorithmic core of the library. It converts a
//! [`RawSource`](crate::source::RawSource) producing uniformly distributed
//! fixed-width integers into samplers over arbitrary half-open ranges
//! `[min, max)`, free of modulo bias, for 32-bit and 64-bit signed and
//! unsigned domains, plus the decimal and Gaussian auxiliary samplers.
//!
//! ## Rejection sampling
//!
//! Mapping a power-of-two-sized raw domain onto an arbitrary range with a
//! plain `draw % range` favours smaller outputs whenever the raw domain
//! size is not an exact multiple of the range. Every bounded sampler here
//! instead discards draws that fall outside the largest range-aligned
//! acceptance zone and redraws. The expected iteration count is below 2 in
//! the worst case and almost exactly 1 in practice.
//!
//! ## Range policy
//!
//! All ranged samplers share one contract:
//! - `min > max` returns [`RangeError::InvalidRange`](crate::types::RangeError)
//!   before any entropy is consumed;
//! - `min == max` returns `min` (degenerate single-value range), for every
//!   domain including unsigned 64-bit;
//! - otherwise the result is uniform over `[min, max)`.

mod decimal;
mod gaussian;
mod uniform;

pub use decimal::{decimal_in_range, next_decimal_sample, DECIMAL_SAMPLE_SCALE};
pub use gaussian::box_muller;
pub use uniform::{
    i64_in_range, next_f64, next_u32, next_u64, raw_below, u32_in_range, u64_below, u64_in_range,
};
