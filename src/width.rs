//! Terminal cell width of codepoints and codepoint sequences.
//!
//! Widths follow POSIX `wcwidth`/`wcswidth` conventions: `-1` for C0/C1
//! control characters, `0` for characters that occupy no cell, and `1` or `2`
//! for narrow and wide characters.

use crate::resolve::match_version;
use crate::tables::TableSet;
use crate::version::UnicodeVersion;

/// ZERO WIDTH JOINER.
pub const ZWJ: u32 = 0x200D;
/// VARIATION SELECTOR-16 (emoji presentation).
pub const VS16: u32 = 0xFE0F;

/// Anything that names a single codepoint.
///
/// Absent characters and values that are not Unicode scalar values map to
/// codepoint 0.
pub trait Codepoint: Copy {
    fn codepoint(self) -> u32;
}

impl Codepoint for char {
    #[inline]
    fn codepoint(self) -> u32 {
        u32::from(self)
    }
}

impl Codepoint for u32 {
    #[inline]
    fn codepoint(self) -> u32 {
        char::from_u32(self).map_or(0, u32::from)
    }
}

impl Codepoint for Option<char> {
    #[inline]
    fn codepoint(self) -> u32 {
        self.map_or(0, u32::from)
    }
}

impl<T: Codepoint> Codepoint for &T {
    #[inline]
    fn codepoint(self) -> u32 {
        (*self).codepoint()
    }
}

/// Width decided without consulting any table.
#[inline]
pub(crate) fn fast_path(ucs: u32) -> Option<i8> {
    match ucs {
        // Absent character. Reported as 1, not 0, for compatibility.
        0 => Some(1),
        0x20..0x7F => Some(1),
        0x01..0x20 | 0x7F..0xA0 => Some(-1),
        _ => None,
    }
}

#[inline]
fn table_width(ucs: u32, tables: &TableSet) -> i8 {
    if tables.is_zero_width(ucs) {
        0
    } else if tables.is_wide(ucs) {
        2
    } else {
        1
    }
}

/// Width of one codepoint against an already resolved table set.
#[inline]
pub(crate) fn width_in(ucs: u32, tables: &TableSet) -> i8 {
    fast_path(ucs).unwrap_or_else(|| table_width(ucs, tables))
}

/// Width of a single character, in terminal cells.
///
/// Returns `-1` for C0/C1 control characters, `0` for zero-width characters,
/// and `1` or `2` otherwise. `unicode_version` is `"auto"`, `"latest"` or a
/// dotted version; any string is accepted and the nearest available tables
/// are used.
///
/// ```
/// use cellwidth::wcwidth;
///
/// assert_eq!(wcwidth('a', "auto"), 1);
/// assert_eq!(wcwidth('漢', "latest"), 2);
/// assert_eq!(wcwidth('\u{0301}', "latest"), 0);
/// assert_eq!(wcwidth('\n', "latest"), -1);
/// ```
#[must_use]
pub fn wcwidth(wc: impl Codepoint, unicode_version: &str) -> i8 {
    let ucs = wc.codepoint();
    fast_path(ucs).unwrap_or_else(|| table_width(ucs, match_version(unicode_version)))
}

/// Width of a codepoint sequence, in terminal cells.
///
/// Only the first `n` elements are measured when `n` is given. Returns `-1`
/// if any measured element is a control character.
///
/// A ZERO WIDTH JOINER hides itself and the element after it. A VS16 after a
/// measured character widens that character by one cell when the tables
/// (Unicode 9.0.0 or later) list it as narrow-to-wide.
///
/// ```
/// use cellwidth::wcswidth;
///
/// assert_eq!(wcswidth("hello".chars(), None, "auto"), 5);
/// assert_eq!(wcswidth("漢字".chars(), None, "latest"), 4);
/// assert_eq!(wcswidth("hello".chars(), Some(2), "auto"), 2);
/// assert_eq!(wcswidth("a\tb".chars(), None, "auto"), -1);
/// ```
#[must_use]
pub fn wcswidth<I>(pwcs: I, n: Option<usize>, unicode_version: &str) -> isize
where
    I: IntoIterator,
    I::Item: Codepoint,
{
    let mut resolved: Option<&'static TableSet> = None;
    scan(pwcs, n, || {
        *resolved.get_or_insert_with(|| match_version(unicode_version))
    })
}

/// [`wcswidth`] over the characters of a string slice.
#[must_use]
pub fn wcswidth_str(pwcs: &str, n: Option<usize>, unicode_version: &str) -> isize {
    wcswidth(pwcs.chars(), n, unicode_version)
}

/// Left-to-right width scan. `tables` is called only when a lookup is needed.
pub(crate) fn scan<I, F>(pwcs: I, n: Option<usize>, mut tables: F) -> isize
where
    I: IntoIterator,
    I::Item: Codepoint,
    F: FnMut() -> &'static TableSet,
{
    let mut chars = pwcs
        .into_iter()
        .take(n.unwrap_or(usize::MAX))
        .map(Codepoint::codepoint);
    let mut width: isize = 0;
    let mut last_measured: Option<u32> = None;

    while let Some(ucs) = chars.next() {
        if ucs == ZWJ {
            // Neither the joiner nor the joined character is measured.
            chars.next();
            continue;
        }
        if ucs == VS16 {
            if let Some(base) = last_measured {
                let set = tables();
                if set.version >= UnicodeVersion::EMOJI_PRESENTATION {
                    if set.is_vs16_wide(base) {
                        width += 1;
                    }
                    last_measured = None;
                }
                continue;
            }
        }

        let wcw = match fast_path(ucs) {
            Some(w) => w,
            None => table_width(ucs, tables()),
        };
        if wcw < 0 {
            return -1;
        }
        if wcw > 0 {
            last_measured = Some(ucs);
        }
        width += isize::from(wcw);
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        assert_eq!(wcwidth('a', "latest"), 1);
        assert_eq!(wcwidth(' ', "latest"), 1);
        assert_eq!(wcwidth('~', "4.1.0"), 1);
        assert_eq!(wcswidth_str("hello", None, "latest"), 5);
    }

    #[test]
    fn test_absent_is_one() {
        assert_eq!(wcwidth(None::<char>, "latest"), 1);
        assert_eq!(wcwidth('\0', "latest"), 1);
        assert_eq!(wcwidth(0u32, "4.1.0"), 1);
    }

    #[test]
    fn test_invalid_codepoints_are_absent() {
        assert_eq!(0xD800u32.codepoint(), 0);
        assert_eq!(0x110000u32.codepoint(), 0);
        assert_eq!(wcwidth(0x110000u32, "latest"), 1);
        assert_eq!(0x10FFFFu32.codepoint(), 0x10FFFF);
    }

    #[test]
    fn test_control_characters() {
        assert_eq!(wcwidth('\x01', "latest"), -1);
        assert_eq!(wcwidth('\x1b', "latest"), -1);
        assert_eq!(wcwidth('\x7f', "latest"), -1);
        assert_eq!(wcwidth('\u{9f}', "latest"), -1);
        // NO-BREAK SPACE is the first character past C1
        assert_eq!(wcwidth('\u{a0}', "latest"), 1);
    }

    #[test]
    fn test_cjk_width() {
        assert_eq!(wcwidth('漢', "latest"), 2);
        assert_eq!(wcwidth('字', "4.1.0"), 2);
        assert_eq!(wcswidth_str("漢字", None, "latest"), 4);
    }

    #[test]
    fn test_zero_width() {
        assert_eq!(wcwidth('\u{0301}', "latest"), 0); // combining acute
        assert_eq!(wcwidth('\u{200B}', "latest"), 0); // zero width space
        assert_eq!(wcwidth('\u{1160}', "latest"), 0); // hangul jungseong filler
    }

    #[test]
    fn test_emoji_width_depends_on_version() {
        // GRINNING FACE is unassigned in 4.1.0 and narrow until 9.0.0
        assert_eq!(wcwidth('\u{1F600}', "4.1.0"), 1);
        assert_eq!(wcwidth('\u{1F600}', "8.0.0"), 1);
        assert_eq!(wcwidth('\u{1F600}', "9.0.0"), 2);
        assert_eq!(wcwidth('\u{1F600}', "13.0.0"), 2);
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(wcswidth_str("", None, "latest"), 0);
        assert_eq!(wcswidth(std::iter::empty::<char>(), None, "latest"), 0);
    }

    #[test]
    fn test_limit() {
        assert_eq!(wcswidth_str("abcdef", Some(3), "latest"), 3);
        assert_eq!(wcswidth_str("abc", Some(0), "latest"), 0);
        assert_eq!(wcswidth_str("abc", Some(99), "latest"), 3);
        // Control character past the limit is never seen
        assert_eq!(wcswidth_str("ab\n", Some(2), "latest"), 2);
    }

    #[test]
    fn test_zwj_skips_next() {
        assert_eq!(wcswidth_str("漢\u{200D}漢", None, "latest"), 2);
        // Trailing joiner
        assert_eq!(wcswidth_str("a\u{200D}", None, "latest"), 1);
        // The skipped character is not classified, even a control
        assert_eq!(wcswidth_str("a\u{200D}\n", None, "latest"), 1);
    }

    #[test]
    fn test_vs16_upgrade() {
        assert_eq!(wcswidth_str("\u{2764}\u{FE0F}", None, "latest"), 2);
        assert_eq!(wcswidth_str("\u{2764}\u{FE0F}", None, "14.0.0"), 2);
        assert_eq!(wcswidth_str("\u{2764}\u{FE0F}", None, "4.1.0"), 1);
        // Second VS16 does not apply twice
        assert_eq!(wcswidth_str("\u{2764}\u{FE0F}\u{FE0F}", None, "latest"), 2);
    }

    #[test]
    fn test_vs16_emoji_presentation_boundary() {
        let heart = "\u{2764}\u{FE0F}";
        assert_eq!(wcswidth_str(heart, None, "8.0.0"), 1);
        assert_eq!(wcswidth_str(heart, None, "8.9"), 1);
        assert_eq!(wcswidth_str(heart, None, "9.0.0"), 2);
        assert_eq!(wcswidth_str(heart, None, "9"), 2);
        assert_eq!(wcswidth_str(heart, None, "12.1.0"), 2);
    }

    #[test]
    fn test_vs16_on_non_upgradeable() {
        assert_eq!(wcswidth_str("a\u{FE0F}", None, "latest"), 1);
        assert_eq!(wcswidth_str("漢\u{FE0F}", None, "latest"), 2);
    }

    #[test]
    fn test_vs16_without_base() {
        assert_eq!(wcswidth_str("\u{FE0F}", None, "latest"), 0);
        assert_eq!(wcswidth_str("\u{0301}\u{FE0F}", None, "latest"), 0);
    }

    #[test]
    fn test_control_poisons_sequence() {
        assert_eq!(wcswidth_str("abc\x1b[0m", None, "latest"), -1);
        assert_eq!(wcswidth_str("漢字\n", None, "latest"), -1);
    }

    #[test]
    fn test_scan_resolves_lazily() {
        let mut calls = 0;
        let width = scan("plain ascii".chars(), None, || {
            calls += 1;
            crate::tables::latest()
        });
        assert_eq!(width, 11);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_width_in() {
        let set = crate::tables::latest();
        assert_eq!(width_in(u32::from('a'), set), 1);
        assert_eq!(width_in(0x6F22, set), 2);
        assert_eq!(width_in(0x0301, set), 0);
        assert_eq!(width_in(0x07, set), -1);
    }
}
