//! Explicit measurement configuration.
//!
//! [`WidthConfig`] resolves its table set once, at construction, so repeated
//! measurements skip selector matching and never touch the process-wide
//! default unless built from it.

use crate::resolve::{self, UNICODE_VERSION_ENV, match_version, tables_from_env_value};
use crate::tables::{self, TableSet};
use crate::version::UnicodeVersion;
use crate::width::{Codepoint, scan, width_in};
use std::env;

/// A resolved Unicode table version to measure against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidthConfig {
    tables: &'static TableSet,
}

impl Default for WidthConfig {
    /// The process-wide default (see [`resolve::default_tables`]).
    fn default() -> Self {
        Self {
            tables: resolve::default_tables(),
        }
    }
}

impl WidthConfig {
    /// Resolve `unicode_version` (`"auto"`, `"latest"` or dotted) now.
    #[must_use]
    pub fn new(unicode_version: &str) -> Self {
        Self {
            tables: match_version(unicode_version),
        }
    }

    /// Newest available tables.
    #[must_use]
    pub fn latest() -> Self {
        Self {
            tables: tables::latest(),
        }
    }

    /// Read `UNICODE_VERSION` now, bypassing the process-wide default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_value(env::var(UNICODE_VERSION_ENV).ok().as_deref())
    }

    /// Resolve as if `UNICODE_VERSION` held `value`.
    #[must_use]
    pub fn from_env_value(value: Option<&str>) -> Self {
        Self {
            tables: tables_from_env_value(value),
        }
    }

    /// Nearest available tables not newer than `version`.
    #[must_use]
    pub fn for_version(version: UnicodeVersion) -> Self {
        Self::new(&version.to_string())
    }

    /// The resolved Unicode version.
    #[must_use]
    pub fn version(&self) -> UnicodeVersion {
        self.tables.version
    }

    #[must_use]
    pub fn tables(&self) -> &'static TableSet {
        self.tables
    }

    /// [`crate::wcwidth`] against this configuration's tables.
    #[must_use]
    pub fn wcwidth(&self, wc: impl Codepoint) -> i8 {
        width_in(wc.codepoint(), self.tables)
    }

    /// [`crate::wcswidth`] against this configuration's tables.
    #[must_use]
    pub fn wcswidth<I>(&self, pwcs: I, n: Option<usize>) -> isize
    where
        I: IntoIterator,
        I::Item: Codepoint,
    {
        let tables = self.tables;
        scan(pwcs, n, || tables)
    }

    /// [`crate::wcswidth_str`] against this configuration's tables.
    #[must_use]
    pub fn wcswidth_str(&self, pwcs: &str, n: Option<usize>) -> isize {
        self.wcswidth(pwcs.chars(), n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::width::{wcswidth_str, wcwidth};

    #[test]
    fn test_new_resolves_nearest() {
        assert_eq!(WidthConfig::new("14.2").version(), UnicodeVersion::new(14, 0, 0));
        assert_eq!(WidthConfig::new("16").version(), UnicodeVersion::new(15, 1, 0));
        assert_eq!(WidthConfig::new("latest"), WidthConfig::latest());
        assert_eq!(WidthConfig::new("2.0").version(), UnicodeVersion::new(4, 1, 0));
    }

    #[test]
    fn test_from_env_value() {
        assert_eq!(WidthConfig::from_env_value(None), WidthConfig::latest());
        assert_eq!(
            WidthConfig::from_env_value(Some("14.0.0")).version(),
            UnicodeVersion::new(14, 0, 0)
        );
    }

    #[test]
    fn test_for_version() {
        let config = WidthConfig::for_version(UnicodeVersion::new(9, 0, 0));
        assert_eq!(config.version(), UnicodeVersion::new(9, 0, 0));
        let config = WidthConfig::for_version(UnicodeVersion::new(11, 5, 0));
        assert_eq!(config.version(), UnicodeVersion::new(11, 0, 0));
        let config = WidthConfig::for_version(UnicodeVersion::new(1, 0, 0));
        assert_eq!(config.version(), UnicodeVersion::new(4, 1, 0));
    }

    #[test]
    fn test_default_matches_auto() {
        let config = WidthConfig::default();
        assert!(std::ptr::eq(config.tables(), match_version("auto")));
    }

    #[test]
    fn test_matches_free_functions() {
        let samples = ["hello", "漢字", "e\u{0301}", "\u{2764}\u{FE0F}", "a\u{200D}b", "x\ty", ""];
        for version in ["4.1.0", "8.0.0", "9.0.0", "14.0.0", "latest"] {
            let config = WidthConfig::new(version);
            for s in samples {
                assert_eq!(
                    config.wcswidth_str(s, None),
                    wcswidth_str(s, None, version),
                    "{s:?} at {version}"
                );
                for c in s.chars() {
                    assert_eq!(config.wcwidth(c), wcwidth(c, version), "{c:?} at {version}");
                }
            }
        }
    }

    #[test]
    fn test_codepoint_slice() {
        let config = WidthConfig::latest();
        let cps: [u32; 3] = [0x6F22, 0x200D, 0x6F22];
        assert_eq!(config.wcswidth(&cps, None), 2);
        assert_eq!(config.wcswidth(cps, Some(1)), 2);
    }
}
