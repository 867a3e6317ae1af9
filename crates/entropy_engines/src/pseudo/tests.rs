//! Tests for the pseudo-random engine.

use std::sync::Arc;

use proptest::prelude::*;
// Shadow the rand re-exports in proptest's prelude; the engine draws
// through rand 0.8 traits.
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use entropy_core::{Randomizer, RandomizerExt};

use super::*;

fn seeded(seed: u64) -> PseudoRandom {
    PseudoRandom::with_seed_source(Arc::new(SeedSource::from_seed(seed)))
}

#[test]
fn fixed_seed_is_reproducible_within_a_thread() {
    let first = seeded(42);
    let second = seeded(42);
    for _ in 0..256 {
        assert_eq!(first.next_i32(), second.next_i32());
    }
}

#[test]
fn distinct_seeds_diverge() {
    let first = seeded(1);
    let second = seeded(2);
    let agree = (0..16).all(|_| first.next_i32() == second.next_i32());
    assert!(!agree);
}

#[test]
fn unbounded_draw_domain() {
    let engine = seeded(3);
    for _ in 0..10_000 {
        let value = engine.next_i32();
        assert!((0..i32::MAX).contains(&value));
    }
}

#[test]
fn bounded_draw_containment() {
    let engine = seeded(4);
    for _ in 0..10_000 {
        let value = engine.next_i32_in(-50, 50).unwrap();
        assert!((-50..50).contains(&value));
    }
}

#[test]
fn degenerate_range_returns_min() {
    let engine = seeded(5);
    assert_eq!(engine.next_i32_in(7, 7).unwrap(), 7);
}

#[test]
fn invalid_range_is_rejected() {
    let engine = seeded(6);
    let err = engine.next_i32_in(10, 5).unwrap_err();
    assert!(err.to_string().contains("invalid range"));
}

#[test]
fn uniform_f64_half_open() {
    let engine = seeded(7);
    for _ in 0..10_000 {
        let value = engine.next_f64();
        assert!((0.0..1.0).contains(&value));
    }
}

#[test]
fn fill_bytes_varies() {
    let engine = seeded(8);
    let mut buffer = [0u8; 64];
    engine.fill_bytes(&mut buffer);
    assert!(buffer.iter().any(|&b| b != buffer[0]));
}

#[test]
fn extension_surface_is_available() {
    let engine = seeded(9);
    assert!((10..20).contains(&engine.next_u64_in(10, 20).unwrap()));
    assert!(engine.next_decimal_in(Decimal::ZERO, Decimal::ONE).unwrap() < Decimal::ONE);
    assert!(engine.next_gaussian(0.0, 1.0).is_finite());
}

#[test]
fn clones_continue_the_same_sequence() {
    let engine = seeded(10);
    let clone = engine.clone();
    // Clones share the instance identifier, so on one thread they drain
    // the same per-thread generator.
    let seed = SeedSource::from_seed(10).mint();
    let mut reference = StdRng::seed_from_u64(seed);
    assert_eq!(engine.next_i32(), reference.gen_range(0..i32::MAX));
    assert_eq!(clone.next_i32(), reference.gen_range(0..i32::MAX));
}

#[test]
fn fresh_instances_over_one_source_draw_distinct_seeds() {
    let seeds = Arc::new(SeedSource::from_seed(11));
    let first = PseudoRandom::with_seed_source(Arc::clone(&seeds));
    let second = PseudoRandom::with_seed_source(seeds);
    let reference = SeedSource::from_seed(11);
    let expected_first = reference.mint();
    let expected_second = reference.mint();
    assert_eq!(
        first.next_i32(),
        StdRng::seed_from_u64(expected_first).gen_range(0..i32::MAX)
    );
    assert_eq!(
        second.next_i32(),
        StdRng::seed_from_u64(expected_second).gen_range(0..i32::MAX)
    );
}

#[test]
fn dropped_engines_evict_their_thread_entry() {
    let baseline = local_cache_len();
    for seed in 0..100 {
        let engine = seeded(seed);
        let _ = engine.next_i32();
    }
    assert_eq!(local_cache_len(), baseline);
}

#[test]
fn clones_keep_the_thread_entry_alive() {
    let baseline = local_cache_len();
    let engine = seeded(200);
    let _ = engine.next_i32();
    let clone = engine.clone();
    drop(engine);
    assert_eq!(local_cache_len(), baseline + 1);
    let _ = clone.next_i32();
    drop(clone);
    assert_eq!(local_cache_len(), baseline);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_bounded_draw_containment(a in any::<i32>(), b in any::<i32>(), seed in any::<u64>()) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let engine = seeded(seed);
        let value = engine.next_i32_in(min, max).unwrap();
        if min == max {
            prop_assert_eq!(value, min);
        } else {
            prop_assert!(value >= min && value < max);
        }
    }
}
