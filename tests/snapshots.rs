//! Snapshot tests for width reports across Unicode versions.

use cellwidth::{Membership, WidthConfig, list_versions};
use std::fmt::Write as _;

const SAMPLES: &[(&str, &str)] = &[
    ("ascii", "hello"),
    ("cjk", "コンニチハ"),
    ("combining", "cafe\u{0301}"),
    ("hangul_jamo", "\u{1100}\u{1161}\u{11A8}"),
    ("fullwidth", "ＡＢＣ"),
    ("emoji", "\u{1F389}\u{1F38A}"),
    ("heart_vs16", "\u{2764}\u{FE0F}"),
    ("keycap", "1\u{FE0F}\u{20E3}"),
    ("family_zwj", "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}"),
    ("zwsp", "a\u{200B}b"),
    ("control", "tab\there"),
    ("nul", "a\0b"),
];

fn width_report() -> String {
    let configs: Vec<WidthConfig> = ["4.1.0", "8.0.0", "9.0.0", "14.0.0", "17.0.0"]
        .into_iter()
        .map(WidthConfig::new)
        .collect();
    let mut out = String::new();
    for (label, text) in SAMPLES {
        write!(out, "{label:<12}").unwrap();
        for config in &configs {
            write!(out, " {:>3}", config.wcswidth_str(text, None)).unwrap();
        }
        out.push('\n');
    }
    out
}

#[test]
fn snapshot_width_report() {
    insta::assert_snapshot!(width_report(), @r"
    ascii          5   5   5   5   5
    cjk           10  10  10  10  10
    combining      4   4   4   4   4
    hangul_jamo    2   2   2   2   2
    fullwidth      6   6   6   6   6
    emoji          2   2   4   4   4
    heart_vs16     1   1   2   2   2
    keycap         1   1   2   2   2
    family_zwj     1   1   2   2   2
    zwsp           2   2   2   2   2
    control       -1  -1  -1  -1  -1
    nul            3   3   3   3   3
    ");
}

#[test]
fn snapshot_versions() {
    insta::assert_debug_snapshot!(list_versions(), @r#"
    [
        "4.1.0",
        "5.0.0",
        "5.1.0",
        "5.2.0",
        "6.0.0",
        "6.1.0",
        "6.2.0",
        "6.3.0",
        "7.0.0",
        "8.0.0",
        "9.0.0",
        "10.0.0",
        "11.0.0",
        "12.0.0",
        "12.1.0",
        "13.0.0",
        "14.0.0",
        "15.0.0",
        "15.1.0",
        "17.0.0",
    ]
    "#);
}

#[test]
fn snapshot_membership() {
    let latest = WidthConfig::latest();
    let mut out = String::new();
    for ucs in [0x0301u32, 0x6F22, 0x2764, 0x1F600, 0x200D, 0xFE0F] {
        let flags: Membership = latest.tables().membership(ucs);
        writeln!(out, "U+{ucs:04X} {flags:?}").unwrap();
    }
    insta::assert_snapshot!(out, @r"
    U+0301 Membership(ZERO_WIDTH)
    U+6F22 Membership(WIDE)
    U+2764 Membership(VS16_WIDE)
    U+1F600 Membership(WIDE)
    U+200D Membership(ZERO_WIDTH)
    U+FE0F Membership(ZERO_WIDTH)
    ");
}
