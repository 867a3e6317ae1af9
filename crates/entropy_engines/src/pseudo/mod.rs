//! Fast pseudo-random engine with per-thread generator caching.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use entropy_core::{RangeError, Randomizer};

use crate::seed::SeedSource;

/// Monotonic counter distinguishing engine instances within the
/// per-thread cache.
static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(0);

thread_local! {
    /// One platform generator per (thread, engine instance) pair, created
    /// lazily on the thread's first draw.
    static LOCAL_GENERATORS: RefCell<HashMap<u64, StdRng>> = RefCell::new(HashMap::new());
}

/// Thread-safe pseudo-random engine.
///
/// Each thread that draws from the engine receives its own platform
/// generator, seeded once from the engine's shared [`SeedSource`]. After
/// that first draw the hot path touches only thread-local state, so
/// concurrent draws never contend on a lock and never degrade into the
/// constant-zero output a shared unsynchronised generator produces.
///
/// Clones share both the seed source and the instance identifier, so a
/// clone continues the same per-thread sequences as its original. A
/// fresh instance with independent sequences needs
/// [`with_seed_source`](PseudoRandom::with_seed_source) or
/// [`new`](PseudoRandom::new).
///
/// When the last clone of an instance drops, the dropping thread's cached
/// generator is evicted. Generators the instance seeded on other threads
/// live until those threads end.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::thread;
///
/// use entropy_core::Randomizer;
/// use entropy_engines::PseudoRandom;
///
/// let engine = Arc::new(PseudoRandom::new());
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let engine = Arc::clone(&engine);
///         thread::spawn(move || engine.next_i32())
///     })
///     .collect();
/// for handle in handles {
///     let value = handle.join().unwrap();
///     assert!(value >= 0);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PseudoRandom {
    id: u64,
    seeds: Arc<SeedSource>,
    /// Clone tracker; the last clone to drop evicts this thread's cached
    /// generator.
    liveness: Arc<()>,
}

impl PseudoRandom {
    /// Creates an engine seeded from operating-system entropy.
    pub fn new() -> Self {
        Self::with_seed_source(Arc::new(SeedSource::from_entropy()))
    }

    /// Creates an engine over an explicit seed source.
    ///
    /// A fixed-seed source makes every thread's sequence reproducible,
    /// which is the configuration the test suites use.
    pub fn with_seed_source(seeds: Arc<SeedSource>) -> Self {
        let id = NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(instance = id, "created pseudo-random engine");
        Self {
            id,
            seeds,
            liveness: Arc::new(()),
        }
    }

    /// Runs `f` against this thread's generator, creating and seeding it
    /// on the first call from this thread.
    fn with_local<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        LOCAL_GENERATORS.with(|cell| {
            let mut generators = cell.borrow_mut();
            let rng = generators.entry(self.id).or_insert_with(|| {
                let seed = self.seeds.mint();
                tracing::debug!(instance = self.id, "seeded thread-local generator");
                StdRng::seed_from_u64(seed)
            });
            f(rng)
        })
    }
}

impl Default for PseudoRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PseudoRandom {
    fn drop(&mut self) {
        // Only the last clone evicts, and only on its own thread; entries
        // seeded on other threads are reclaimed at thread teardown.
        if Arc::strong_count(&self.liveness) == 1 {
            let _ = LOCAL_GENERATORS.try_with(|cell| {
                cell.borrow_mut().remove(&self.id);
            });
        }
    }
}

impl Randomizer for PseudoRandom {
    fn next_i32(&self) -> i32 {
        self.with_local(|rng| rng.gen_range(0..i32::MAX))
    }

    fn next_i32_in(&self, min: i32, max: i32) -> Result<i32, RangeError> {
        if min > max {
            return Err(RangeError::invalid(min, max));
        }
        if min == max {
            return Ok(min);
        }
        Ok(self.with_local(|rng| rng.gen_range(min..max)))
    }

    fn next_f64(&self) -> f64 {
        self.with_local(|rng| rng.gen())
    }

    fn fill_bytes(&self, dest: &mut [u8]) {
        self.with_local(|rng| rng.fill_bytes(dest));
    }
}

#[cfg(test)]
fn local_cache_len() -> usize {
    LOCAL_GENERATORS.with(|cell| cell.borrow().len())
}

#[cfg(test)]
mod tests;
