//! Error types for cellwidth.
//!
//! Width measurement itself never fails; these cover the configuration
//! surface (strict version parsing and the process-wide default).

use crate::version::UnicodeVersion;
use std::fmt;

/// Result type alias for cellwidth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for cellwidth operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Version string is not one to three dot-separated integers.
    InvalidVersion(String),
    /// The process-wide default version was already initialized.
    DefaultAlreadySet { current: UnicodeVersion },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidVersion(s) => write!(f, "invalid unicode version: {s:?}"),
            Self::DefaultAlreadySet { current } => {
                write!(f, "default unicode version already set to {current}")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidVersion("x.y".to_string());
        assert!(err.to_string().contains("invalid unicode version"));
        assert!(err.to_string().contains("\"x.y\""));

        let err = Error::DefaultAlreadySet {
            current: UnicodeVersion::new(14, 0, 0),
        };
        assert!(err.to_string().contains("14.0.0"));
    }
}
