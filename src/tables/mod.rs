//! Versioned codepoint range tables.
//!
//! Each supported Unicode release has one [`TableSet`]: sorted, disjoint,
//! inclusive ranges of zero-width and wide codepoints, plus the narrow
//! codepoints that VS16 widens. The data is static and never mutated.

mod vs16;
mod wide;
mod zero_width;

use crate::version::UnicodeVersion;
use bitflags::bitflags;

/// Inclusive `(low, high)` codepoint range.
pub type CodepointRange = (u32, u32);

/// Range tables for one Unicode release.
#[derive(Debug, PartialEq, Eq)]
pub struct TableSet {
    pub version: UnicodeVersion,
    /// `version` as written in selectors, e.g. `"14.0.0"`.
    pub name: &'static str,
    pub zero_width: &'static [CodepointRange],
    pub wide: &'static [CodepointRange],
    pub vs16_narrow_to_wide: &'static [CodepointRange],
}

bitflags! {
    /// Which range lists of a [`TableSet`] contain a codepoint.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct Membership: u8 {
        /// Occupies no cell.
        const ZERO_WIDTH = 0x01;
        /// East Asian wide or fullwidth.
        const WIDE       = 0x02;
        /// Narrow, but widened by a following VS16.
        const VS16_WIDE  = 0x04;
    }
}

impl TableSet {
    #[must_use]
    pub fn is_zero_width(&self, ucs: u32) -> bool {
        bisearch(ucs, self.zero_width).is_some()
    }

    #[must_use]
    pub fn is_wide(&self, ucs: u32) -> bool {
        bisearch(ucs, self.wide).is_some()
    }

    /// Whether a following VS16 upgrades `ucs` from narrow to wide.
    ///
    /// Always false before Unicode 9.0.0.
    #[must_use]
    pub fn is_vs16_wide(&self, ucs: u32) -> bool {
        self.version >= UnicodeVersion::EMOJI_PRESENTATION
            && bisearch(ucs, self.vs16_narrow_to_wide).is_some()
    }

    #[must_use]
    pub fn membership(&self, ucs: u32) -> Membership {
        let mut flags = Membership::empty();
        flags.set(Membership::ZERO_WIDTH, self.is_zero_width(ucs));
        flags.set(Membership::WIDE, self.is_wide(ucs));
        flags.set(Membership::VS16_WIDE, self.is_vs16_wide(ucs));
        flags
    }
}

/// All table sets, ascending by version.
pub static TABLES: &[TableSet] = &[
    TableSet {
        version: UnicodeVersion::new(4, 1, 0),
        name: "4.1.0",
        zero_width: zero_width::ZERO_WIDTH_4_1_0,
        wide: wide::WIDE_EASTASIAN_4_1_0,
        vs16_narrow_to_wide: &[],
    },
    TableSet {
        version: UnicodeVersion::new(5, 0, 0),
        name: "5.0.0",
        zero_width: zero_width::ZERO_WIDTH_5_0_0,
        wide: wide::WIDE_EASTASIAN_5_0_0,
        vs16_narrow_to_wide: &[],
    },
    TableSet {
        version: UnicodeVersion::new(5, 1, 0),
        name: "5.1.0",
        zero_width: zero_width::ZERO_WIDTH_5_1_0,
        wide: wide::WIDE_EASTASIAN_5_1_0,
        vs16_narrow_to_wide: &[],
    },
    TableSet {
        version: UnicodeVersion::new(5, 2, 0),
        name: "5.2.0",
        zero_width: zero_width::ZERO_WIDTH_5_2_0,
        wide: wide::WIDE_EASTASIAN_5_2_0,
        vs16_narrow_to_wide: &[],
    },
    TableSet {
        version: UnicodeVersion::new(6, 0, 0),
        name: "6.0.0",
        zero_width: zero_width::ZERO_WIDTH_6_0_0,
        wide: wide::WIDE_EASTASIAN_6_0_0,
        vs16_narrow_to_wide: &[],
    },
    TableSet {
        version: UnicodeVersion::new(6, 1, 0),
        name: "6.1.0",
        zero_width: zero_width::ZERO_WIDTH_6_1_0,
        wide: wide::WIDE_EASTASIAN_6_1_0,
        vs16_narrow_to_wide: &[],
    },
    TableSet {
        version: UnicodeVersion::new(6, 2, 0),
        name: "6.2.0",
        zero_width: zero_width::ZERO_WIDTH_6_2_0,
        wide: wide::WIDE_EASTASIAN_6_2_0,
        vs16_narrow_to_wide: &[],
    },
    TableSet {
        version: UnicodeVersion::new(6, 3, 0),
        name: "6.3.0",
        zero_width: zero_width::ZERO_WIDTH_6_3_0,
        wide: wide::WIDE_EASTASIAN_6_3_0,
        vs16_narrow_to_wide: &[],
    },
    TableSet {
        version: UnicodeVersion::new(7, 0, 0),
        name: "7.0.0",
        zero_width: zero_width::ZERO_WIDTH_7_0_0,
        wide: wide::WIDE_EASTASIAN_7_0_0,
        vs16_narrow_to_wide: &[],
    },
    TableSet {
        version: UnicodeVersion::new(8, 0, 0),
        name: "8.0.0",
        zero_width: zero_width::ZERO_WIDTH_8_0_0,
        wide: wide::WIDE_EASTASIAN_8_0_0,
        vs16_narrow_to_wide: &[],
    },
    TableSet {
        version: UnicodeVersion::new(9, 0, 0),
        name: "9.0.0",
        zero_width: zero_width::ZERO_WIDTH_9_0_0,
        wide: wide::WIDE_EASTASIAN_9_0_0,
        vs16_narrow_to_wide: vs16::VS16_NARROW_TO_WIDE_9_0_0,
    },
    TableSet {
        version: UnicodeVersion::new(10, 0, 0),
        name: "10.0.0",
        zero_width: zero_width::ZERO_WIDTH_10_0_0,
        wide: wide::WIDE_EASTASIAN_10_0_0,
        vs16_narrow_to_wide: vs16::VS16_NARROW_TO_WIDE_9_0_0,
    },
    TableSet {
        version: UnicodeVersion::new(11, 0, 0),
        name: "11.0.0",
        zero_width: zero_width::ZERO_WIDTH_11_0_0,
        wide: wide::WIDE_EASTASIAN_11_0_0,
        vs16_narrow_to_wide: vs16::VS16_NARROW_TO_WIDE_9_0_0,
    },
    TableSet {
        version: UnicodeVersion::new(12, 0, 0),
        name: "12.0.0",
        zero_width: zero_width::ZERO_WIDTH_12_0_0,
        wide: wide::WIDE_EASTASIAN_12_0_0,
        vs16_narrow_to_wide: vs16::VS16_NARROW_TO_WIDE_9_0_0,
    },
    TableSet {
        version: UnicodeVersion::new(12, 1, 0),
        name: "12.1.0",
        zero_width: zero_width::ZERO_WIDTH_12_1_0,
        wide: wide::WIDE_EASTASIAN_12_1_0,
        vs16_narrow_to_wide: vs16::VS16_NARROW_TO_WIDE_9_0_0,
    },
    TableSet {
        version: UnicodeVersion::new(13, 0, 0),
        name: "13.0.0",
        zero_width: zero_width::ZERO_WIDTH_13_0_0,
        wide: wide::WIDE_EASTASIAN_13_0_0,
        vs16_narrow_to_wide: vs16::VS16_NARROW_TO_WIDE_9_0_0,
    },
    TableSet {
        version: UnicodeVersion::new(14, 0, 0),
        name: "14.0.0",
        zero_width: zero_width::ZERO_WIDTH_14_0_0,
        wide: wide::WIDE_EASTASIAN_14_0_0,
        vs16_narrow_to_wide: vs16::VS16_NARROW_TO_WIDE_9_0_0,
    },
    TableSet {
        version: UnicodeVersion::new(15, 0, 0),
        name: "15.0.0",
        zero_width: zero_width::ZERO_WIDTH_15_0_0,
        wide: wide::WIDE_EASTASIAN_15_0_0,
        vs16_narrow_to_wide: vs16::VS16_NARROW_TO_WIDE_9_0_0,
    },
    TableSet {
        version: UnicodeVersion::new(15, 1, 0),
        name: "15.1.0",
        zero_width: zero_width::ZERO_WIDTH_15_1_0,
        wide: wide::WIDE_EASTASIAN_15_1_0,
        vs16_narrow_to_wide: vs16::VS16_NARROW_TO_WIDE_9_0_0,
    },
    TableSet {
        version: UnicodeVersion::new(17, 0, 0),
        name: "17.0.0",
        zero_width: zero_width::ZERO_WIDTH_17_0_0,
        wide: wide::WIDE_EASTASIAN_17_0_0,
        vs16_narrow_to_wide: vs16::VS16_NARROW_TO_WIDE_9_0_0,
    },
];

/// Oldest available table set.
#[must_use]
pub fn earliest() -> &'static TableSet {
    &TABLES[0]
}

/// Newest available table set.
#[must_use]
pub fn latest() -> &'static TableSet {
    &TABLES[TABLES.len() - 1]
}

/// Supported Unicode versions, ascending.
#[must_use]
pub fn list_versions() -> Vec<String> {
    TABLES.iter().map(|t| t.name.to_string()).collect()
}

/// Find the range containing `ucs`.
///
/// Locates the first range whose `high >= ucs`, then checks its lower bound.
/// Returns the range index when `ucs` falls inside it.
#[must_use]
pub fn bisearch(ucs: u32, table: &[CodepointRange]) -> Option<usize> {
    let idx = table.partition_point(|&(_, high)| high < ucs);
    match table.get(idx) {
        Some(&(low, _)) if low <= ucs => Some(idx),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted_disjoint(name: &str, table: &[CodepointRange]) {
        for (i, &(low, high)) in table.iter().enumerate() {
            assert!(low <= high, "{name}[{i}]: low {low:#x} > high {high:#x}");
            assert!(high <= 0x10FFFF, "{name}[{i}]: {high:#x} beyond U+10FFFF");
            if i > 0 {
                let prev_high = table[i - 1].1;
                assert!(
                    prev_high < low,
                    "{name}[{i}]: {low:#x} overlaps previous range ending {prev_high:#x}"
                );
            }
        }
    }

    #[test]
    fn test_tables_are_sorted_and_disjoint() {
        for set in TABLES {
            let v = set.version;
            assert_sorted_disjoint(&format!("zero_width {v}"), set.zero_width);
            assert_sorted_disjoint(&format!("wide {v}"), set.wide);
            assert_sorted_disjoint(&format!("vs16 {v}"), set.vs16_narrow_to_wide);
        }
    }

    #[test]
    fn test_versions_ascending() {
        for pair in TABLES.windows(2) {
            assert!(pair[0].version < pair[1].version);
        }
        for set in TABLES {
            assert_eq!(set.name, set.version.to_string());
        }
        let versions = list_versions();
        assert_eq!(versions.len(), 20);
        assert_eq!(versions.first().map(String::as_str), Some("4.1.0"));
        assert!(versions.iter().any(|v| v == "9.0.0"));
        assert!(versions.iter().any(|v| v == "12.1.0"));
        assert_eq!(earliest().version, UnicodeVersion::new(4, 1, 0));
        assert_eq!(latest().version, UnicodeVersion::new(17, 0, 0));
    }

    #[test]
    fn test_bisearch_boundaries() {
        let table: &[CodepointRange] = &[(0x10, 0x20), (0x30, 0x30), (0x40, 0x4F)];
        assert_eq!(bisearch(0x0F, table), None);
        assert_eq!(bisearch(0x10, table), Some(0));
        assert_eq!(bisearch(0x20, table), Some(0));
        assert_eq!(bisearch(0x21, table), None);
        assert_eq!(bisearch(0x30, table), Some(1));
        assert_eq!(bisearch(0x45, table), Some(2));
        assert_eq!(bisearch(0x50, table), None);
        assert_eq!(bisearch(0x10FFFF, table), None);
    }

    #[test]
    fn test_bisearch_empty_table() {
        assert_eq!(bisearch(0, &[]), None);
        assert_eq!(bisearch(0x4E00, &[]), None);
    }

    #[test]
    fn test_membership() {
        let set = latest();
        assert_eq!(set.membership(0x0301), Membership::ZERO_WIDTH);
        assert_eq!(set.membership(0x6F22), Membership::WIDE);
        // HEAVY BLACK HEART: narrow, widened by VS16
        assert_eq!(set.membership(0x2764), Membership::VS16_WIDE);
        assert_eq!(set.membership(u32::from('a')), Membership::empty());
    }

    #[test]
    fn test_vs16_needs_emoji_presentation_version() {
        let old = earliest();
        assert!(old.version < UnicodeVersion::EMOJI_PRESENTATION);
        assert!(!old.is_vs16_wide(0x2764));
        assert!(latest().is_vs16_wide(0x2764));
    }

    #[test]
    fn test_vs16_list_starts_at_emoji_presentation() {
        for set in TABLES {
            let has_list = !set.vs16_narrow_to_wide.is_empty();
            assert_eq!(has_list, set.version >= UnicodeVersion::EMOJI_PRESENTATION, "{}", set.name);
        }
    }

    #[test]
    fn test_emoji_wide_from_9_0_0() {
        // GRINNING FACE: assigned in 6.1.0, East Asian Wide from 9.0.0
        let grinning = 0x1F600;
        for set in TABLES {
            let expected = set.version >= UnicodeVersion::EMOJI_PRESENTATION;
            assert_eq!(set.is_wide(grinning), expected, "{}", set.name);
        }
    }

    #[test]
    fn test_zero_width_space_in_every_version() {
        for set in TABLES {
            assert!(set.is_zero_width(0x200B), "{}", set.name);
            assert!(!set.is_zero_width(0x0600), "{}", set.name);
        }
    }
}
