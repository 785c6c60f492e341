//! Property-based tests for codepoint and string width.
//!
//! Uses proptest to verify invariants that must hold across all valid inputs.

use cellwidth::{
    VS16, WidthCache, WidthConfig, ZWJ, list_versions, match_version, wcswidth, wcswidth_str,
    wcwidth,
};
use proptest::prelude::*;
use unicode_width::UnicodeWidthChar;

// ============================================================================
// Strategies
// ============================================================================

/// Any selector the resolver might be handed, valid or not.
fn selector() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("auto".to_string()),
        Just("latest".to_string()),
        prop::sample::select(list_versions()),
        (0u32..30, 0u32..5, 0u32..5).prop_map(|(a, b, c)| format!("{a}.{b}.{c}")),
        (0u32..30).prop_map(|a| a.to_string()),
        "\\PC{0,8}",
    ]
}

/// Generate arbitrary UTF-8 strings (proptest default).
fn utf8_string() -> impl Strategy<Value = String> {
    "\\PC{0,64}"
}

/// Strings without C0/C1 controls, with joiners and selectors mixed in.
fn printable_string() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(
        prop_oneof![
            4 => any::<char>().prop_filter("no controls", |c| {
                let u = u32::from(*c);
                u >= 0xA0 || (0x20..0x7F).contains(&u)
            }),
            1 => Just('\u{200D}'),
            1 => Just('\u{FE0F}'),
            1 => prop::sample::select(vec!['漢', '❤', '#', 'e', '\u{0301}']),
        ],
        0..48,
    )
}

// ============================================================================
// Single codepoint properties
// ============================================================================

proptest! {
    /// Every codepoint maps to exactly one of -1, 0, 1, 2.
    #[test]
    fn wcwidth_in_range(c in any::<char>(), v in selector()) {
        let w = wcwidth(c, &v);
        prop_assert!((-1..=2).contains(&w), "{c:?} -> {w}");
    }

    /// Printable ASCII is always one cell, in every version.
    #[test]
    fn printable_ascii_is_one(b in 0x20u8..0x7F, v in selector()) {
        prop_assert_eq!(wcwidth(char::from(b), &v), 1);
    }

    /// C0 and C1 controls are always -1.
    #[test]
    fn controls_are_negative(
        u in prop_oneof![1u32..0x20, 0x7Fu32..0xA0],
        v in selector(),
    ) {
        prop_assert_eq!(wcwidth(u, &v), -1);
    }

    /// Out-of-range codepoints behave like the absent character.
    #[test]
    fn invalid_codepoints_are_one(u in 0x11_0000u32..=u32::MAX, v in selector()) {
        prop_assert_eq!(wcwidth(u, &v), 1);
    }

    /// Resolution is total and lands on an available version.
    #[test]
    fn resolve_total(v in selector()) {
        let resolved = match_version(&v).version.to_string();
        prop_assert!(list_versions().contains(&resolved));
    }

    /// CJK unified ideographs agree with unicode-width in every version.
    #[test]
    fn cjk_ideographs_wide(u in 0x4E00u32..=0x9FA5, v in selector()) {
        let c = char::from_u32(u).unwrap();
        prop_assert_eq!(c.width(), Some(2));
        prop_assert_eq!(wcwidth(c, &v), 2);
    }

    /// Cached and uncached lookups agree.
    #[test]
    fn cache_is_transparent(cs in prop::collection::vec(any::<char>(), 0..64), v in selector()) {
        let cache = WidthCache::new(16);
        for c in cs {
            prop_assert_eq!(cache.wcwidth(c, &v), wcwidth(c, &v));
        }
    }
}

// ============================================================================
// Sequence properties
// ============================================================================

proptest! {
    /// Width is deterministic: same input gives the same output.
    #[test]
    fn wcswidth_deterministic(s in utf8_string(), v in selector()) {
        prop_assert_eq!(wcswidth_str(&s, None, &v), wcswidth_str(&s, None, &v));
    }

    /// The result is never below -1.
    #[test]
    fn wcswidth_at_least_minus_one(s in utf8_string(), v in selector()) {
        prop_assert!(wcswidth_str(&s, None, &v) >= -1);
    }

    /// A control character anywhere poisons the sequence.
    #[test]
    fn control_poisons(
        prefix in printable_string(),
        ctrl in prop_oneof![1u32..0x20, 0x7Fu32..0xA0],
        suffix in printable_string(),
    ) {
        // A joiner directly before the control would hide it
        let mut text: Vec<u32> = prefix
            .iter()
            .map(|&c| u32::from(c))
            .filter(|&u| u != ZWJ)
            .collect();
        text.push(ctrl);
        text.extend(suffix.iter().map(|&c| u32::from(c)));
        prop_assert_eq!(wcswidth(&text, None, "latest"), -1);
    }

    /// Without controls, width is non-negative and bounded by two cells per
    /// element.
    #[test]
    fn printable_bounds(s in printable_string(), v in selector()) {
        let w = wcswidth(&s, None, &v);
        prop_assert!(w >= 0);
        prop_assert!(w <= 2 * s.len() as isize);
    }

    /// Measuring the first n elements equals measuring a trimmed input.
    #[test]
    fn limit_equals_trim(s in printable_string(), n in 0usize..64) {
        let trimmed = &s[..n.min(s.len())];
        prop_assert_eq!(
            wcswidth(&s, Some(n), "latest"),
            wcswidth(trimmed, None, "latest")
        );
    }

    /// Without joiners or selectors, width is the sum of character widths.
    #[test]
    fn plain_sum(s in printable_string(), v in selector()) {
        let plain: Vec<char> = s
            .into_iter()
            .filter(|&c| u32::from(c) != ZWJ && u32::from(c) != VS16)
            .collect();
        let sum: isize = plain.iter().map(|&c| isize::from(wcwidth(c, &v))).sum();
        prop_assert_eq!(wcswidth(&plain, None, &v), sum);
    }

    /// A WidthConfig measures exactly like the selector it was built from.
    #[test]
    fn config_agrees(s in utf8_string(), v in selector()) {
        let config = WidthConfig::new(&v);
        prop_assert_eq!(config.wcswidth_str(&s, None), wcswidth_str(&s, None, &v));
    }
}
