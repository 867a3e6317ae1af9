//! Per-type randomizer contract and the engine adapter.

use std::fmt;

use rust_decimal::Decimal;

use entropy_core::{RangeError, Randomizer, RandomizerExt};

/// A randomizer specialised to one target type.
///
/// Implementations exist for every supported domain: the fixed-width
/// integers from 8 to 64 bits, both floats and [`Decimal`]. The registry
/// stores and resolves randomizers through this trait.
pub trait TypedRandomizer<T>: Send + Sync {
    /// Uniform draw over the type's default domain.
    ///
    /// Signed integers draw over `[0, TypeMax)`; unsigned integers cover
    /// their full domain; floats and decimal draw over `[0, 1)` and
    /// `[0, Decimal::MAX)` respectively.
    fn next(&self) -> T;

    /// Uniform draw over `[min, max)`; `min == max` returns `min`.
    ///
    /// # Errors
    /// [`RangeError::InvalidRange`] when `min > max`.
    fn next_in(&self, min: T, max: T) -> Result<T, RangeError>;
}

impl<T> fmt::Debug for dyn TypedRandomizer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedRandomizer").finish_non_exhaustive()
    }
}

/// Derives the full set of typed randomizers from one engine.
///
/// One adapter value implements [`TypedRandomizer`] for every supported
/// type, delegating to the engine's extension surface. Wrapping the
/// adapter in an [`Arc`](std::sync::Arc) lets a single engine back all
/// registrations of a collection.
///
/// # Examples
///
/// ```rust
/// use entropy_engines::PseudoRandom;
/// use entropy_service::{RandomizerAdapter, TypedRandomizer};
///
/// let adapter = RandomizerAdapter::new(PseudoRandom::new());
/// let a: u16 = adapter.next();
/// let b: i64 = adapter.next_in(-10, 10)?;
/// assert!((-10..10).contains(&b));
/// # let _ = a;
/// # Ok::<(), entropy_core::RangeError>(())
/// ```
#[derive(Debug)]
pub struct RandomizerAdapter<R> {
    engine: R,
}

impl<R: Randomizer> RandomizerAdapter<R> {
    /// Wraps an engine.
    pub fn new(engine: R) -> Self {
        Self { engine }
    }

    /// Borrows the underlying engine.
    pub fn engine(&self) -> &R {
        &self.engine
    }
}

macro_rules! impl_typed_randomizer {
    ($($ty:ty => ($next:ident, $next_in:ident)),+ $(,)?) => {
        $(
            impl<R: Randomizer> TypedRandomizer<$ty> for RandomizerAdapter<R> {
                fn next(&self) -> $ty {
                    self.engine.$next()
                }

                fn next_in(&self, min: $ty, max: $ty) -> Result<$ty, RangeError> {
                    self.engine.$next_in(min, max)
                }
            }
        )+
    };
}

impl_typed_randomizer! {
    i8 => (next_i8, next_i8_in),
    u8 => (next_u8, next_u8_in),
    i16 => (next_i16, next_i16_in),
    u16 => (next_u16, next_u16_in),
    i32 => (next_i32, next_i32_in),
    u32 => (next_u32, next_u32_in),
    i64 => (next_i64, next_i64_in),
    u64 => (next_u64, next_u64_in),
    f32 => (next_f32, next_f32_in),
    f64 => (next_f64, next_f64_in),
    Decimal => (next_decimal, next_decimal_in),
}
