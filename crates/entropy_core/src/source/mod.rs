//! Raw entropy sources.
//!
//! A [`RawSource`] is the base primitive every sampling algorithm in this
//! crate consumes: a stream of uniformly distributed 31-bit integers plus a
//! byte fill for the 64-bit derivations. Layer 2 engines adapt the platform
//! generators to this trait; tests use [`SequenceSource`] for fully
//! deterministic draws.

/// An opaque source of uniformly distributed raw bits.
///
/// Implementations own their seed and counter state exclusively; the call
/// count observed by a source is non-deterministic from the caller's point
/// of view because rejection loops may redraw.
pub trait RawSource {
    /// Uniform draw over `[0, i32::MAX)`.
    fn next_raw(&mut self) -> i32;

    /// Fills `dest` with uniformly distributed bytes.
    fn fill_raw(&mut self, dest: &mut [u8]);
}

/// Deterministic scripted source for tests.
///
/// Cycles through a fixed slice of draws and counts how many were consumed,
/// so tests can assert both exact outputs and "no entropy consumed" on
/// validation failures.
///
/// # Examples
/// ```
/// use entropy_core::source::{RawSource, SequenceSource};
///
/// let mut source = SequenceSource::new(&[1, 2, 3]);
/// assert_eq!(source.next_raw(), 1);
/// assert_eq!(source.next_raw(), 2);
/// assert_eq!(source.next_raw(), 3);
/// assert_eq!(source.next_raw(), 1); // wraps around
/// assert_eq!(source.consumed(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct SequenceSource {
    draws: Vec<i32>,
    cursor: usize,
    consumed: usize,
}

impl SequenceSource {
    /// Builds a source from scripted draws.
    ///
    /// Draws are reduced into the raw domain `[0, i32::MAX)` modulo
    /// `i32::MAX`, so no script can produce the excluded value `i32::MAX`
    /// and stall a rejection loop.
    ///
    /// # Panics
    /// Panics when `draws` is empty; a source with nothing to draw from is
    /// a test-authoring mistake.
    pub fn new(draws: &[i32]) -> Self {
        assert!(
            !draws.is_empty(),
            "SequenceSource requires at least one scripted draw"
        );
        Self {
            draws: draws.iter().map(|d| d.rem_euclid(i32::MAX)).collect(),
            cursor: 0,
            consumed: 0,
        }
    }

    /// Number of raw draws handed out so far (byte fills count one draw
    /// per byte).
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RawSource for SequenceSource {
    fn next_raw(&mut self) -> i32 {
        let value = self.draws[self.cursor];
        self.cursor = (self.cursor + 1) % self.draws.len();
        self.consumed += 1;
        value
    }

    fn fill_raw(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = (self.next_raw() & 0xFF) as u8;
        }
    }
}
