//! Concurrent measurement and cache population.

use cellwidth::{WidthCache, WidthConfig, default_tables, match_version, wcswidth_str, wcwidth};
use std::sync::Arc;
use std::thread;

mod common;

const TEXTS: &[&str] = &[
    "Hello, 世界! 🎉",
    "\u{2764}\u{FE0F} \u{1F468}\u{200D}\u{1F469}",
    "cafe\u{0301} ＡＢＣ",
    "plain ascii only",
];

#[test]
fn parallel_wcswidth_matches_serial() {
    common::setup_test_logging();
    let expected: Vec<isize> = TEXTS
        .iter()
        .map(|t| wcswidth_str(t, None, "14.0.0"))
        .collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                (0..200)
                    .flat_map(|_| TEXTS.iter().map(|t| wcswidth_str(t, None, "14.0.0")))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        let widths = handle.join().expect("worker panicked");
        for chunk in widths.chunks(TEXTS.len()) {
            assert_eq!(chunk, expected.as_slice());
        }
    }
}

#[test]
fn default_version_is_computed_once() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| std::ptr::from_ref(default_tables()) as usize))
        .collect();
    let addrs: Vec<usize> = handles
        .into_iter()
        .map(|h| h.join().expect("worker panicked"))
        .collect();
    assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    assert!(std::ptr::eq(default_tables(), match_version("auto")));
}

#[test]
fn shared_cache_under_contention() {
    let cache = Arc::new(WidthCache::new(64));
    let config = WidthConfig::latest();

    let handles: Vec<_> = (0..8u32)
        .map(|worker| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for ucs in (0x3040u32..0x3100).chain(0x1F300..0x1F400) {
                    let ucs = ucs + worker % 2;
                    assert_eq!(cache.wcwidth_with(ucs, &config), config.wcwidth(ucs));
                    assert_eq!(cache.wcwidth(ucs, "8.0.0"), wcwidth(ucs, "8.0.0"));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }
    assert!(cache.len() <= cache.capacity());
}
