//! Rejection-sampling primitives for the 32-bit and 64-bit domains.

use crate::source::RawSource;
use crate::types::RangeError;

/// Uniform draw over `[0, bound)` from the 31-bit raw domain.
///
/// Zone rejection: a raw draw is accepted only while it falls inside the
/// largest multiple of `bound` representable in `[0, i32::MAX)`, so the
/// final reduction cannot favour smaller outputs.
///
/// # Panics
/// Debug-asserts `bound > 0`; callers guarantee it.
pub fn raw_below<S: RawSource + ?Sized>(source: &mut S, bound: i32) -> i32 {
    debug_assert!(bound > 0, "bound must be positive");
    let zone = i32::MAX - i32::MAX % bound;
    loop {
        let draw = source.next_raw();
        if draw < zone {
            return draw % bound;
        }
    }
}

/// Full-domain `u32` assembled from a 30-bit and a 2-bit bounded raw draw.
///
/// The raw domain is 31 bits wide, so a single draw cannot cover `u32`;
/// two bounded draws combined as `high << 2 | low` do, uniformly.
pub fn next_u32<S: RawSource + ?Sized>(source: &mut S) -> u32 {
    (raw_below(source, 1 << 30) as u32) << 2 | raw_below(source, 1 << 2) as u32
}

/// Uniform `u32` over `[min, max)`.
///
/// Narrow ranges reduce through a single bounded raw draw; ranges wider
/// than the raw domain combine full-width draws and resample whenever the
/// combined value exceeds the acceptance zone.
pub fn u32_in_range<S: RawSource + ?Sized>(
    source: &mut S,
    min: u32,
    max: u32,
) -> Result<u32, RangeError> {
    if min > max {
        return Err(RangeError::invalid(min, max));
    }
    if min == max {
        return Ok(min);
    }
    let range = max - min;
    if range <= i32::MAX as u32 {
        return Ok(min + raw_below(source, range as i32) as u32);
    }
    let limit = u32::MAX - ((u32::MAX % range + 1) % range);
    loop {
        let draw = next_u32(source);
        if draw <= limit {
            return Ok(min + draw % range);
        }
    }
}

/// Full-domain `u64` from eight raw bytes, little-endian.
pub fn next_u64<S: RawSource + ?Sized>(source: &mut S) -> u64 {
    let mut bytes = [0u8; 8];
    source.fill_raw(&mut bytes);
    u64::from_le_bytes(bytes)
}

/// Uniform `u64` over `[0, bound)`.
///
/// The acceptance limit is `u64::MAX - ((u64::MAX % bound + 1) % bound)`:
/// the top of the largest bound-aligned region of the 64-bit domain. Draws
/// above it are discarded. In the worst case the expected number of draws
/// is 2, though usually it is much closer to 1.
///
/// # Panics
/// Debug-asserts `bound > 0`; callers guarantee it.
pub fn u64_below<S: RawSource + ?Sized>(source: &mut S, bound: u64) -> u64 {
    debug_assert!(bound > 0, "bound must be positive");
    let limit = u64::MAX - ((u64::MAX % bound + 1) % bound);
    loop {
        let draw = next_u64(source);
        if draw <= limit {
            return draw % bound;
        }
    }
}

/// Uniform `u64` over `[min, max)`.
pub fn u64_in_range<S: RawSource + ?Sized>(
    source: &mut S,
    min: u64,
    max: u64,
) -> Result<u64, RangeError> {
    if min > max {
        return Err(RangeError::invalid(min, max));
    }
    if min == max {
        return Ok(min);
    }
    Ok(min + u64_below(source, max - min))
}

/// Uniform `i64` over `[min, max)`.
///
/// The range width is computed in the unsigned domain (`wrapping_sub`) so
/// ranges spanning zero, up to the full signed width, reduce correctly.
pub fn i64_in_range<S: RawSource + ?Sized>(
    source: &mut S,
    min: i64,
    max: i64,
) -> Result<i64, RangeError> {
    if min > max {
        return Err(RangeError::invalid(min, max));
    }
    if min == max {
        return Ok(min);
    }
    let range = max.wrapping_sub(min) as u64;
    Ok(min.wrapping_add(u64_below(source, range) as i64))
}

/// Uniform `f64` over `[0, 1)` with 31-bit granularity, the platform
/// generator convention.
pub fn next_f64<S: RawSource + ?Sized>(source: &mut S) -> f64 {
    source.next_raw() as f64 / i32::MAX as f64
}
