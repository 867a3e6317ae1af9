//! The randomizer contract and its typed extension surface.
//!
//! [`Randomizer`] is the four-operation primitive contract every engine
//! implements; [`RandomizerExt`] derives the whole per-type surface
//! (8- to 64-bit integers, floats, decimal, boolean, Gaussian, strings,
//! picks) from those four operations, routing through the bounded samplers
//! in [`sample`](crate::sample) so every derived draw stays free of modulo
//! bias.
//!
//! ## Default domains
//!
//! Unbounded `next_*` draws follow the platform-generator convention for
//! signed types, `[0, TypeMax)`, and cover the full domain for unsigned
//! types. Callers needing a signed type's full domain request it
//! explicitly via `next_*_in`.

use rust_decimal::Decimal;

use crate::sample;
use crate::source::RawSource;
use crate::types::{CharSet, RangeError};

/// The primitive operations of a random engine.
///
/// All methods take `&self`: engines are internally thread-safe (the
/// pseudo-random engine through its per-thread generator cache, the
/// crypto-secure engine because the operating-system source is safe for
/// concurrent use).
pub trait Randomizer: Send + Sync {
    /// Uniform draw over `[0, i32::MAX)`.
    fn next_i32(&self) -> i32;

    /// Uniform draw over `[min, max)`; `min == max` returns `min`.
    ///
    /// # Errors
    /// [`RangeError::InvalidRange`] when `min > max`, before any entropy
    /// is consumed.
    fn next_i32_in(&self, min: i32, max: i32) -> Result<i32, RangeError>;

    /// Uniform draw over `[0, 1)`.
    fn next_f64(&self) -> f64;

    /// Fills `dest` with uniformly distributed bytes.
    fn fill_bytes(&self, dest: &mut [u8]);
}

/// Bridges a shared engine to the `&mut`-based raw-source samplers.
struct EngineSource<'a, R: Randomizer + ?Sized>(&'a R);

impl<R: Randomizer + ?Sized> RawSource for EngineSource<'_, R> {
    fn next_raw(&mut self) -> i32 {
        self.0.next_i32()
    }

    fn fill_raw(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }
}

/// Typed extension surface over any [`Randomizer`].
///
/// Blanket-implemented; bring the trait into scope and every engine gains
/// the full per-type API.
///
/// # Examples
/// ```
/// use entropy_core::types::RangeError;
/// use entropy_core::{Randomizer, RandomizerExt};
/// # use std::sync::Mutex;
/// # struct Fixed(Mutex<i32>);
/// # impl Randomizer for Fixed {
/// #     fn next_i32(&self) -> i32 {
/// #         let mut state = self.0.lock().unwrap();
/// #         *state = state.wrapping_mul(48271) & i32::MAX;
/// #         if *state == i32::MAX { *state -= 1; }
/// #         *state
/// #     }
/// #     fn next_i32_in(&self, min: i32, max: i32) -> Result<i32, RangeError> {
/// #         if min > max { return Err(RangeError::invalid(min, max)); }
/// #         if min == max { return Ok(min); }
/// #         Ok(min + self.next_i32() % (max - min))
/// #     }
/// #     fn next_f64(&self) -> f64 { self.next_i32() as f64 / i32::MAX as f64 }
/// #     fn fill_bytes(&self, dest: &mut [u8]) {
/// #         for b in dest { *b = (self.next_i32() & 0xFF) as u8; }
/// #     }
/// # }
/// let engine = Fixed(Mutex::new(7));
/// let value = engine.next_u64_in(10, 20)?;
/// assert!((10..20).contains(&value));
/// # Ok::<(), RangeError>(())
/// ```
pub trait RandomizerExt: Randomizer {
    // ----- 8-bit -----

    /// Uniform `i8` over `[0, i8::MAX)`.
    fn next_i8(&self) -> i8 {
        sample::raw_below(&mut EngineSource(self), i8::MAX as i32) as i8
    }

    /// Uniform `i8` over `[min, max)`.
    ///
    /// # Errors
    /// [`RangeError::InvalidRange`] when `min > max`.
    fn next_i8_in(&self, min: i8, max: i8) -> Result<i8, RangeError> {
        Ok(self.next_i32_in(min as i32, max as i32)? as i8)
    }

    /// Uniform `u8` over the full domain.
    fn next_u8(&self) -> u8 {
        sample::raw_below(&mut EngineSource(self), u8::MAX as i32 + 1) as u8
    }

    /// Uniform `u8` over `[min, max)`.
    ///
    /// # Errors
    /// [`RangeError::InvalidRange`] when `min > max`.
    fn next_u8_in(&self, min: u8, max: u8) -> Result<u8, RangeError> {
        Ok(self.next_i32_in(min as i32, max as i32)? as u8)
    }

    // ----- 16-bit -----

    /// Uniform `i16` over `[0, i16::MAX)`.
    fn next_i16(&self) -> i16 {
        sample::raw_below(&mut EngineSource(self), i16::MAX as i32) as i16
    }

    /// Uniform `i16` over `[min, max)`.
    ///
    /// # Errors
    /// [`RangeError::InvalidRange`] when `min > max`.
    fn next_i16_in(&self, min: i16, max: i16) -> Result<i16, RangeError> {
        Ok(self.next_i32_in(min as i32, max as i32)? as i16)
    }

    /// Uniform `u16` over the full domain.
    fn next_u16(&self) -> u16 {
        sample::raw_below(&mut EngineSource(self), u16::MAX as i32 + 1) as u16
    }

    /// Uniform `u16` over `[min, max)`.
    ///
    /// # Errors
    /// [`RangeError::InvalidRange`] when `min > max`.
    fn next_u16_in(&self, min: u16, max: u16) -> Result<u16, RangeError> {
        Ok(self.next_i32_in(min as i32, max as i32)? as u16)
    }

    // ----- 32-bit -----

    /// Uniform `u32` over the full domain, assembled from 30-bit and
    /// 2-bit raw chunks.
    fn next_u32(&self) -> u32 {
        sample::next_u32(&mut EngineSource(self))
    }

    /// Uniform `u32` over `[min, max)`, free of modulo bias.
    ///
    /// # Errors
    /// [`RangeError::InvalidRange`] when `min > max`.
    fn next_u32_in(&self, min: u32, max: u32) -> Result<u32, RangeError> {
        sample::u32_in_range(&mut EngineSource(self), min, max)
    }

    // ----- 64-bit -----

    /// Uniform `i64` over `[0, i64::MAX)`.
    fn next_i64(&self) -> i64 {
        sample::u64_below(&mut EngineSource(self), i64::MAX as u64) as i64
    }

    /// Uniform `i64` over `[min, max)`, free of modulo bias. Ranges
    /// spanning zero, up to the full signed width, are supported.
    ///
    /// # Errors
    /// [`RangeError::InvalidRange`] when `min > max`.
    fn next_i64_in(&self, min: i64, max: i64) -> Result<i64, RangeError> {
        sample::i64_in_range(&mut EngineSource(self), min, max)
    }

    /// Uniform `u64` over the full domain, from eight raw bytes.
    fn next_u64(&self) -> u64 {
        sample::next_u64(&mut EngineSource(self))
    }

    /// Uniform `u64` over `[min, max)`, free of modulo bias.
    ///
    /// # Errors
    /// [`RangeError::InvalidRange`] when `min > max`.
    fn next_u64_in(&self, min: u64, max: u64) -> Result<u64, RangeError> {
        sample::u64_in_range(&mut EngineSource(self), min, max)
    }

    // ----- Floating point -----

    /// Uniform `f64` over `[min, max)` via linear interpolation
    /// `max * sample + min * (1 - sample)`.
    ///
    /// # Errors
    /// [`RangeError::InvalidRange`] when `min > max`.
    fn next_f64_in(&self, min: f64, max: f64) -> Result<f64, RangeError> {
        if min > max {
            return Err(RangeError::invalid(min, max));
        }
        let sample = self.next_f64();
        Ok(max * sample + min * (1.0 - sample))
    }

    /// Uniform `f32` over `[0, 1)`.
    fn next_f32(&self) -> f32 {
        self.next_f64() as f32
    }

    /// Uniform `f32` over `[min, max)`.
    ///
    /// # Errors
    /// [`RangeError::InvalidRange`] when `min > max`.
    fn next_f32_in(&self, min: f32, max: f32) -> Result<f32, RangeError> {
        Ok(self.next_f64_in(min as f64, max as f64)? as f32)
    }

    // ----- Decimal -----

    /// Uniform decimal over `[0, Decimal::MAX)`.
    fn next_decimal(&self) -> Decimal {
        Decimal::MAX * sample::next_decimal_sample(&mut EngineSource(self))
    }

    /// Uniform decimal over `[min, max)`; never returns `max`.
    ///
    /// # Errors
    /// [`RangeError::InvalidRange`] when `min > max`.
    fn next_decimal_in(&self, min: Decimal, max: Decimal) -> Result<Decimal, RangeError> {
        sample::decimal_in_range(&mut EngineSource(self), min, max)
    }

    // ----- Boolean -----

    /// Fair coin flip from one full-width draw.
    fn next_bool(&self) -> bool {
        self.next_u32() & 1 == 0
    }

    /// `true` with the given probability (clamping is not applied; values
    /// outside `[0, 1]` degenerate to always-false or always-true).
    fn next_bool_with(&self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    // ----- Gaussian -----

    /// Normal draw with the given mean and standard deviation, via the
    /// Box-Muller transform over two uniform draws.
    fn next_gaussian(&self, mu: f64, sigma: f64) -> f64 {
        mu + sigma * sample::box_muller(self.next_f64(), self.next_f64())
    }

    // ----- Bytes -----

    /// A freshly allocated buffer of `len` uniform bytes.
    fn next_bytes(&self, len: usize) -> Vec<u8> {
        let mut buffer = vec![0u8; len];
        self.fill_bytes(&mut buffer);
        buffer
    }

    // ----- Characters and strings -----

    /// One uniformly drawn character from the set.
    fn next_char(&self, set: &CharSet) -> char {
        let index = sample::u64_below(&mut EngineSource(self), set.len() as u64) as usize;
        set.char_at(index)
    }

    /// A string of `len` characters drawn independently from the set.
    fn next_string(&self, len: usize, set: &CharSet) -> String {
        (0..len).map(|_| self.next_char(set)).collect()
    }

    // ----- Picks -----

    /// A uniformly drawn element, or `None` for an empty slice.
    fn pick<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = sample::u64_below(&mut EngineSource(self), items.len() as u64) as usize;
        Some(&items[index])
    }

    /// An element drawn with probability proportional to its weight.
    ///
    /// Negative weights count as zero. Returns `None` for an empty slice
    /// or when no weight is positive.
    fn pick_weighted<'a, T>(&self, items: &'a [(T, f64)]) -> Option<&'a T> {
        let total: f64 = items.iter().map(|(_, weight)| weight.max(0.0)).sum();
        if items.is_empty() || total <= 0.0 {
            return None;
        }
        let mut target = self.next_f64() * total;
        for (item, weight) in items {
            let weight = weight.max(0.0);
            if target < weight {
                return Some(item);
            }
            target -= weight;
        }
        // Floating-point accumulation can leave a sliver above the last
        // positive weight.
        items
            .iter()
            .rev()
            .find(|(_, weight)| *weight > 0.0)
            .map(|(item, _)| item)
    }

    /// Shuffles the slice in place with a Fisher-Yates walk, each swap
    /// index drawn free of modulo bias.
    fn shuffle<T>(&self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = sample::u64_below(&mut EngineSource(self), i as u64 + 1) as usize;
            items.swap(i, j);
        }
    }

    // ----- Signed conveniences -----

    /// Uniform `i32` over `[1, max)`.
    ///
    /// # Errors
    /// [`RangeError::InvalidRange`] when `max < 1`.
    fn next_positive_i32(&self, max: i32) -> Result<i32, RangeError> {
        self.next_i32_in(1, max)
    }

    /// Uniform `i32` over `[min, -1)`.
    ///
    /// # Errors
    /// [`RangeError::InvalidRange`] when `min > -1`.
    fn next_negative_i32(&self, min: i32) -> Result<i32, RangeError> {
        self.next_i32_in(min, -1)
    }

    /// Uniform `i64` over `[1, max)`.
    ///
    /// # Errors
    /// [`RangeError::InvalidRange`] when `max < 1`.
    fn next_positive_i64(&self, max: i64) -> Result<i64, RangeError> {
        self.next_i64_in(1, max)
    }

    /// Uniform `i64` over `[min, -1)`.
    ///
    /// # Errors
    /// [`RangeError::InvalidRange`] when `min > -1`.
    fn next_negative_i64(&self, min: i64) -> Result<i64, RangeError> {
        self.next_i64_in(min, -1)
    }
}

impl<R: Randomizer + ?Sized> RandomizerExt for R {}
