//! Width calculation performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use cellwidth::{WidthCache, WidthConfig, wcswidth_str, wcwidth};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn width_ascii(c: &mut Criterion) {
    let ascii_text = "Hello, World! This is a test string.";

    c.bench_function("wcswidth_ascii_short", |b| {
        b.iter(|| wcswidth_str(black_box(ascii_text), None, "auto"));
    });

    let ascii_long = "x".repeat(1000);
    c.bench_function("wcswidth_ascii_1000", |b| {
        b.iter(|| wcswidth_str(black_box(&ascii_long), None, "auto"));
    });
}

fn width_unicode(c: &mut Criterion) {
    // Mixed ASCII and wide characters
    let mixed = "Hello, 世界! こんにちは";

    c.bench_function("wcswidth_mixed", |b| {
        b.iter(|| wcswidth_str(black_box(mixed), None, "auto"));
    });

    // All wide characters
    let cjk = "中文测试字符串这是一个很长的中文文本";

    c.bench_function("wcswidth_cjk", |b| {
        b.iter(|| wcswidth_str(black_box(cjk), None, "auto"));
    });

    // Emoji with joiners and presentation selectors
    let emoji = "🎉🎊🎁 \u{2764}\u{FE0F} \u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";

    c.bench_function("wcswidth_emoji", |b| {
        b.iter(|| wcswidth_str(black_box(emoji), None, "auto"));
    });

    let combining = "e\u{0301}\u{0303}n\u{0303} cafe\u{0301} nai\u{0308}ve";

    c.bench_function("wcswidth_combining", |b| {
        b.iter(|| wcswidth_str(black_box(combining), None, "auto"));
    });
}

fn width_char(c: &mut Criterion) {
    c.bench_function("wcwidth_ascii", |b| {
        b.iter(|| wcwidth(black_box('A'), "auto"));
    });

    c.bench_function("wcwidth_cjk", |b| {
        b.iter(|| wcwidth(black_box('中'), "auto"));
    });

    c.bench_function("wcwidth_cjk_explicit_version", |b| {
        b.iter(|| wcwidth(black_box('中'), "14.0.0"));
    });

    let cache = WidthCache::default();
    c.bench_function("wcwidth_cjk_cached", |b| {
        b.iter(|| cache.wcwidth(black_box('中'), "auto"));
    });
}

fn width_config(c: &mut Criterion) {
    let mixed = "Hello, 世界! 🎉";
    let config = WidthConfig::new("14.0.0");

    c.bench_function("config_wcswidth_mixed", |b| {
        b.iter(|| config.wcswidth_str(black_box(mixed), None));
    });

    c.bench_function("selector_wcswidth_mixed", |b| {
        b.iter(|| wcswidth_str(black_box(mixed), None, "14.0.0"));
    });
}

criterion_group!(benches, width_ascii, width_unicode, width_char, width_config);
criterion_main!(benches);
