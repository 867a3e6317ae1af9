//! Crypto-secure engine over the operating-system entropy source.

use rand::rngs::OsRng;
use rand::RngCore;

use entropy_core::source::RawSource;
use entropy_core::{sample, RangeError, Randomizer};

/// Adapts the operating-system generator to the raw-source contract.
///
/// A full 32-bit word is masked to 31 bits; the single excluded value
/// `i32::MAX` is redrawn so the raw domain stays `[0, i32::MAX)`.
#[derive(Debug, Default)]
struct OsSource(OsRng);

impl RawSource for OsSource {
    fn next_raw(&mut self) -> i32 {
        loop {
            let value = (self.0.next_u32() & i32::MAX as u32) as i32;
            if value < i32::MAX {
                return value;
            }
        }
    }

    fn fill_raw(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest);
    }
}

/// Crypto-secure random engine.
///
/// Every draw reaches the operating-system entropy source, so the engine
/// holds no state, needs no seeding and is freely copyable. Draws are
/// slower than [`PseudoRandom`](crate::PseudoRandom) by orders of
/// magnitude; reserve this engine for secrets, tokens and key material.
///
/// Bounded draws route through the rejection samplers, so they carry no
/// modulo bias.
///
/// # Examples
///
/// ```rust
/// use entropy_core::{Randomizer, RandomizerExt};
/// use entropy_engines::CryptoRandom;
///
/// let engine = CryptoRandom::new();
/// let token = engine.next_bytes(32);
/// assert_eq!(token.len(), 32);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CryptoRandom;

impl CryptoRandom {
    /// Creates the engine. Equivalent to the unit value; provided for
    /// symmetry with the pseudo-random engine.
    pub fn new() -> Self {
        Self
    }
}

impl Randomizer for CryptoRandom {
    fn next_i32(&self) -> i32 {
        OsSource::default().next_raw()
    }

    fn next_i32_in(&self, min: i32, max: i32) -> Result<i32, RangeError> {
        if min > max {
            return Err(RangeError::invalid(min, max));
        }
        let value = sample::i64_in_range(&mut OsSource::default(), min as i64, max as i64)?;
        Ok(value as i32)
    }

    fn next_f64(&self) -> f64 {
        // 53 uniform mantissa bits scaled into [0, 1).
        (OsRng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    fn fill_bytes(&self, dest: &mut [u8]) {
        OsRng.fill_bytes(dest);
    }
}
