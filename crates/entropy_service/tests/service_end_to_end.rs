//! End-to-end tests for the random service facade.

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;

use entropy_core::RangeError;
use entropy_service::{
    RandomService, RandomServiceBuilder, RegistryError, ServiceError, TypedRandomizer,
};

fn pseudo_service() -> RandomService {
    RandomServiceBuilder::new()
        .with_pseudo_randomizers()
        .unwrap()
        .build()
}

#[test]
fn pseudo_preset_serves_every_type() {
    let service = pseudo_service();
    let _: i8 = service.next().unwrap();
    let _: u8 = service.next().unwrap();
    let _: i16 = service.next().unwrap();
    let _: u16 = service.next().unwrap();
    let _: i32 = service.next().unwrap();
    let _: u32 = service.next().unwrap();
    let _: i64 = service.next().unwrap();
    let _: u64 = service.next().unwrap();
    let _: f32 = service.next().unwrap();
    let _: f64 = service.next().unwrap();
    let _: Decimal = service.next().unwrap();
}

#[test]
fn crypto_preset_serves_every_type() {
    let service = RandomServiceBuilder::new()
        .with_crypto_randomizers()
        .unwrap()
        .build();
    let _: i32 = service.next().unwrap();
    let _: u64 = service.next().unwrap();
    let _: f64 = service.next().unwrap();
    let _: Decimal = service.next().unwrap();
}

#[test]
fn bounded_draws_stay_contained() {
    let service = pseudo_service();
    let mut seen = std::collections::HashSet::new();
    for _ in 0..1_000 {
        let value: i32 = service.next_in(0, 100).unwrap();
        assert!((0..100).contains(&value));
        seen.insert(value);
    }
    assert!(seen.len() >= 2, "constant output indicates a broken pipeline");
}

#[test]
fn degenerate_range_returns_min() {
    let service = pseudo_service();
    let value: u64 = service.next_in(9, 9).unwrap();
    assert_eq!(value, 9);
}

#[test]
fn invalid_range_surfaces_as_range_error() {
    let service = pseudo_service();
    let err = service.next_in::<i32>(10, 5).unwrap_err();
    match err {
        ServiceError::Range(RangeError::InvalidRange { min, max }) => {
            assert_eq!(min, "10");
            assert_eq!(max, "5");
        }
        other => panic!("expected a range error, got {other:?}"),
    }
}

#[test]
fn missing_registration_surfaces_as_registry_error() {
    let service = RandomServiceBuilder::new().build();
    let err = service.next::<i32>().unwrap_err();
    match err {
        ServiceError::Registry(RegistryError::NotRegistered { type_name }) => {
            assert_eq!(type_name, std::any::type_name::<i32>());
        }
        other => panic!("expected a registry error, got {other:?}"),
    }
}

#[test]
fn duplicate_preset_is_rejected() {
    let err = RandomServiceBuilder::new()
        .with_pseudo_randomizers()
        .unwrap()
        .with_crypto_randomizers()
        .unwrap_err();
    assert!(matches!(err, RegistryError::AlreadyRegistered { .. }));
}

#[test]
fn resolved_randomizer_outlives_the_lookup() {
    let service = pseudo_service();
    let randomizer: Arc<dyn TypedRandomizer<u32>> = service.randomizer::<u32>().unwrap();
    drop(service);
    let value = randomizer.next_in(10, 20).unwrap();
    assert!((10..20).contains(&value));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_bounded_draws_contained(a in any::<i64>(), b in any::<i64>()) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let service = pseudo_service();
        let value: i64 = service.next_in(min, max).unwrap();
        if min == max {
            prop_assert_eq!(value, min);
        } else {
            prop_assert!(value >= min && value < max);
        }
    }
}

#[test]
fn service_is_shareable_across_threads() {
    let service = Arc::new(pseudo_service());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = Arc::clone(&service);
            std::thread::spawn(move || {
                for _ in 0..1_000 {
                    let value: i64 = service.next_in(-500, 500).unwrap();
                    assert!((-500..500).contains(&value));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
