//! 동시성 테스트 - 병렬 등록/조회, freeze 경합

use keystone_core::{EntryMetadata, Error, UniversalRegistry, UserExecutionContext};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

type Registry = UniversalRegistry<String>;

#[test]
fn test_parallel_distinct_registrations_lose_nothing() {
    const WRITERS: usize = 48;
    let registry = Registry::new("R");
    let barrier = Barrier::new(WRITERS);

    thread::scope(|s| {
        for i in 0..WRITERS {
            let registry = &registry;
            let barrier = &barrier;
            s.spawn(move || {
                barrier.wait();
                registry
                    .register(
                        format!("key{:02}", i),
                        Arc::new(i.to_string()),
                        EntryMetadata::new().with_tag(if i % 2 == 0 { "even" } else { "odd" }),
                    )
                    .unwrap();
            });
        }
    });

    assert_eq!(registry.len(), WRITERS);
    assert_eq!(registry.list_by_tag("even").len(), WRITERS / 2);
    assert_eq!(registry.list_by_tag("odd").len(), WRITERS / 2);

    let counters = registry.get_metrics().metrics;
    assert_eq!(counters.total_registrations, WRITERS as u64);
    assert_eq!(counters.successful_registrations, WRITERS as u64);
}

#[test]
fn test_same_key_race_has_single_winner() {
    const WRITERS: usize = 16;
    let registry = Registry::new("R");
    let barrier = Barrier::new(WRITERS);
    let winners = AtomicUsize::new(0);

    thread::scope(|s| {
        for i in 0..WRITERS {
            let (registry, barrier, winners) = (&registry, &barrier, &winners);
            s.spawn(move || {
                barrier.wait();
                match registry.register_simple("contended", Arc::new(i.to_string())) {
                    Ok(()) => {
                        winners.fetch_add(1, Ordering::SeqCst);
                    }
                    Err(e) => assert!(matches!(e, Error::DuplicateKey { .. })),
                }
            });
        }
    });

    assert_eq!(winners.load(Ordering::SeqCst), 1);
    let counters = registry.get_metrics().metrics;
    assert_eq!(counters.successful_registrations, 1);
    assert_eq!(counters.failed_registrations, (WRITERS - 1) as u64);
}

#[test]
fn test_freeze_during_registration_storm() {
    const WRITERS: usize = 24;
    let registry = Registry::new("R");
    let barrier = Barrier::new(WRITERS + 1);

    thread::scope(|s| {
        for i in 0..WRITERS {
            let (registry, barrier) = (&registry, &barrier);
            s.spawn(move || {
                barrier.wait();
                match registry.register_simple(format!("k{}", i), Arc::new(String::new())) {
                    Ok(()) => {}
                    Err(e) => assert!(matches!(e, Error::Frozen { .. })),
                }
            });
        }

        let (registry, barrier) = (&registry, &barrier);
        s.spawn(move || {
            barrier.wait();
            registry.freeze();
        });
    });

    assert!(registry.is_frozen());
    let frozen_len = registry.len();
    assert!(registry.register_simple("late", Arc::new(String::new())).is_err());
    assert_eq!(registry.len(), frozen_len);
    assert_eq!(
        registry.get_metrics().metrics.successful_registrations,
        frozen_len as u64
    );
}

#[test]
fn test_concurrent_factory_reads_are_isolated() {
    let registry = Registry::new("R");
    registry
        .register_factory(
            "session",
            |ctx: &UserExecutionContext| Ok(Arc::new(ctx.user_id.clone())),
            EntryMetadata::new(),
        )
        .unwrap();
    registry.freeze();

    thread::scope(|s| {
        for i in 0..16 {
            let registry = &registry;
            s.spawn(move || {
                let ctx = UserExecutionContext::new(format!("user{}", i));
                let value = registry.get("session", Some(&ctx)).unwrap().unwrap();
                assert_eq!(*value, format!("user{}", i));
            });
        }
    });

    assert_eq!(registry.get_metrics().metrics.factory_creations, 16);
    assert_eq!(registry.entry_info("session").unwrap().access_count, 16);
}
