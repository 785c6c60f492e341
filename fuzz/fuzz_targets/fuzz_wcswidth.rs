//! Fuzz target for string width measurement.
//!
//! Tests that wcswidth handles arbitrary strings and version selectors
//! without panicking and stays within its documented range.

#![no_main]

use cellwidth::{WidthConfig, wcswidth_str, wcwidth};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, &str, Option<u8>)| {
    let (text, selector, limit) = input;
    let n = limit.map(usize::from);

    let width = wcswidth_str(text, n, selector);
    assert!(width >= -1);

    let config = WidthConfig::new(selector);
    assert_eq!(config.wcswidth_str(text, n), width);

    for c in text.chars() {
        let w = wcwidth(c, selector);
        assert!((-1..=2).contains(&w));
    }
});
