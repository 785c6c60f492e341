//! Bounded memoization of single-codepoint widths.
//!
//! Purely a performance layer: every cached value equals what
//! [`crate::wcwidth`] returns for the same codepoint and resolved version.

use crate::config::WidthConfig;
use crate::resolve::match_version;
use crate::tables::TableSet;
use crate::version::UnicodeVersion;
use crate::width::{Codepoint, fast_path, width_in};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Default number of cached entries.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Thread-safe `(codepoint, version) -> width` cache.
///
/// ASCII and control characters bypass the cache. When full, the cache is
/// emptied before the next insert.
#[derive(Debug)]
pub struct WidthCache {
    capacity: usize,
    entries: RwLock<HashMap<(u32, UnicodeVersion), i8>>,
}

impl Default for WidthCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl WidthCache {
    /// Create a cache holding at most `capacity` entries. Zero disables
    /// caching.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: RwLock::new(HashMap::with_capacity(capacity.min(DEFAULT_CAPACITY))),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Cached [`crate::wcwidth`].
    #[must_use]
    pub fn wcwidth(&self, wc: impl Codepoint, unicode_version: &str) -> i8 {
        let ucs = wc.codepoint();
        match fast_path(ucs) {
            Some(width) => width,
            None => self.lookup(ucs, match_version(unicode_version)),
        }
    }

    /// Cached [`WidthConfig::wcwidth`].
    #[must_use]
    pub fn wcwidth_with(&self, wc: impl Codepoint, config: &WidthConfig) -> i8 {
        self.lookup(wc.codepoint(), config.tables())
    }

    fn lookup(&self, ucs: u32, tables: &'static TableSet) -> i8 {
        if let Some(width) = fast_path(ucs) {
            return width;
        }
        if self.capacity == 0 {
            return width_in(ucs, tables);
        }
        let key = (ucs, tables.version);
        if let Some(&width) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return width;
        }

        let width = width_in(ucs, tables);
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.len() >= self.capacity && !entries.contains_key(&key) {
            entries.clear();
        }
        entries.insert(key, width);
        width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::width::wcwidth;

    #[test]
    fn test_matches_uncached() {
        let cache = WidthCache::default();
        for c in ['a', '\n', '\0', '漢', '\u{0301}', '\u{1F600}', '\u{2764}'] {
            for version in ["4.1.0", "9.0.0", "14.0.0", "latest"] {
                assert_eq!(cache.wcwidth(c, version), wcwidth(c, version), "{c:?} {version}");
                // Second read comes from the cache
                assert_eq!(cache.wcwidth(c, version), wcwidth(c, version), "{c:?} {version}");
            }
        }
    }

    #[test]
    fn test_ascii_bypasses_cache() {
        let cache = WidthCache::default();
        let _ = cache.wcwidth('a', "latest");
        let _ = cache.wcwidth('\x1b', "latest");
        assert!(cache.is_empty());
    }

    #[test]
    fn test_keyed_by_resolved_version() {
        let cache = WidthCache::default();
        // Both selectors resolve to 14.0.0 and share one entry
        let _ = cache.wcwidth('\u{1F600}', "14.0.0");
        let _ = cache.wcwidth('\u{1F600}', "14.2");
        assert_eq!(cache.len(), 1);
        let _ = cache.wcwidth('\u{1F600}', "4.1.0");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_bounded() {
        let cache = WidthCache::new(4);
        for ucs in 0x4E00u32..0x4E10 {
            assert_eq!(cache.wcwidth(ucs, "latest"), 2);
            assert!(cache.len() <= 4);
        }
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_zero_capacity_disables() {
        let cache = WidthCache::new(0);
        assert_eq!(cache.wcwidth('漢', "latest"), 2);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_with_config() {
        let cache = WidthCache::default();
        let config = WidthConfig::new("8.0.0");
        assert_eq!(cache.wcwidth_with('\u{1F600}', &config), 1);
        assert_eq!(cache.len(), 1);
    }
}
