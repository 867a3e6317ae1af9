//! Decimal domain sampling.
//!
//! A 96-bit decimal fraction is assembled from three raw draws forming the
//! low, middle and high 32-bit words of the mantissa, at scale 28. The high
//! word is bounded so the triple almost always represents a value strictly
//! below one; the rare overshoot at the boundary is redrawn.

use rust_decimal::Decimal;

use super::uniform::raw_below;
use crate::source::RawSource;
use crate::types::RangeError;

/// The high 32 bits of 0.9999999999999999999999999999 (scale 28).
const HI_WORD_BOUND: i32 = 542_101_087;

/// Scale of the fractional samples produced by [`next_decimal_sample`].
pub const DECIMAL_SAMPLE_SCALE: u32 = 28;

/// Uniform decimal sample in `[0, 1)` built from three raw draws.
///
/// Combinations of the three words can still reach a value `>= 1` at the
/// high-word boundary; those are redrawn. Over hundreds of millions of
/// draws this loop is not observed to take more than one extra attempt.
pub fn next_decimal_sample<S: RawSource + ?Sized>(source: &mut S) -> Decimal {
    loop {
        let lo = source.next_raw() as u32;
        let mid = source.next_raw() as u32;
        let hi = raw_below(source, HI_WORD_BOUND) as u32;
        let sample = Decimal::from_parts(lo, mid, hi, false, DECIMAL_SAMPLE_SCALE);
        if sample < Decimal::ONE {
            return sample;
        }
    }
}

/// Uniform decimal over `[min, max)` by linear interpolation
/// `max * sample + min * (1 - sample)`.
///
/// Because the fractional sample is strictly below one, the result never
/// reaches `max`.
pub fn decimal_in_range<S: RawSource + ?Sized>(
    source: &mut S,
    min: Decimal,
    max: Decimal,
) -> Result<Decimal, RangeError> {
    if min > max {
        return Err(RangeError::invalid(min, max));
    }
    if min == max {
        return Ok(min);
    }
    let sample = next_decimal_sample(source);
    Ok(max * sample + min * (Decimal::ONE - sample))
}
