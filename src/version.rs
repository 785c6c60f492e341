//! Unicode version tags.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A Unicode Standard release, compared as a `(major, minor, patch)` triple.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnicodeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl UnicodeVersion {
    /// First release with emoji presentation sequences (VS16 widening).
    pub const EMOJI_PRESENTATION: Self = Self::new(9, 0, 0);

    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a dotted version string, returning `None` when it is malformed.
    ///
    /// Accepts one to three numeric components; missing components are 0, so
    /// `"6"` and `"6.0"` both parse as 6.0.0.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = [0u32; 3];
        let mut count = 0;
        for piece in s.split('.') {
            if count == parts.len() {
                return None;
            }
            if piece.is_empty() || !piece.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            parts[count] = piece.parse().ok()?;
            count += 1;
        }
        let [major, minor, patch] = parts;
        Some(Self::new(major, minor, patch))
    }
}

impl fmt::Display for UnicodeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for UnicodeVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| Error::InvalidVersion(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_and_partial() {
        assert_eq!(UnicodeVersion::parse("6.0.0"), Some(UnicodeVersion::new(6, 0, 0)));
        assert_eq!(UnicodeVersion::parse("6.1"), Some(UnicodeVersion::new(6, 1, 0)));
        assert_eq!(UnicodeVersion::parse("6"), Some(UnicodeVersion::new(6, 0, 0)));
        assert_eq!(
            UnicodeVersion::parse("15.1.0"),
            Some(UnicodeVersion::new(15, 1, 0))
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "latest", "6.", ".6", "6..0", "1.2.3.4", "x.1", "-1", "+1", " 6"] {
            assert_eq!(UnicodeVersion::parse(bad), None, "{bad:?} should not parse");
        }
        // Overflowing component
        assert_eq!(UnicodeVersion::parse("99999999999"), None);
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let a = UnicodeVersion::new(9, 0, 0);
        let b = UnicodeVersion::new(10, 0, 0);
        let c = UnicodeVersion::new(9, 1, 0);
        assert!(a < b);
        assert!(a < c);
        assert!(c < b);
        assert!(UnicodeVersion::new(3, 2, 0) < UnicodeVersion::EMOJI_PRESENTATION);
    }

    #[test]
    fn test_display_round_trip() {
        let v = UnicodeVersion::new(14, 0, 0);
        assert_eq!(v.to_string(), "14.0.0");
        assert_eq!("14.0.0".parse::<UnicodeVersion>().unwrap(), v);
    }

    #[test]
    fn test_from_str_error() {
        let err = "not-a-version".parse::<UnicodeVersion>().unwrap_err();
        assert!(matches!(err, Error::InvalidVersion(ref s) if s == "not-a-version"));
    }
}
