//! Version selector resolution.
//!
//! Maps `"auto"`, `"latest"` or a dotted version string to the nearest
//! available [`TableSet`]. Resolution never fails: a request newer than any
//! table gets the newest table not exceeding it, a request older than every
//! table gets the oldest, and an unparsable request gets the latest.

use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log, log_enabled};
use crate::tables::{self, TABLES, TableSet};
use crate::version::UnicodeVersion;
use std::collections::HashSet;
use std::env;
use std::sync::{Mutex, OnceLock, PoisonError};

/// Environment variable consulted by the `"auto"` selector.
pub const UNICODE_VERSION_ENV: &str = "UNICODE_VERSION";

/// Distinct degraded selectors remembered for warning deduplication.
const MAX_WARNED_SELECTORS: usize = 256;

/// A request for a Unicode table version.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VersionSelector<'a> {
    /// The process-wide default (environment, else latest).
    #[default]
    Auto,
    /// The newest available tables.
    Latest,
    /// A dotted version string such as `"6.0.0"` or `"9"`.
    Explicit(&'a str),
}

impl<'a> From<&'a str> for VersionSelector<'a> {
    fn from(s: &'a str) -> Self {
        match s {
            "auto" => Self::Auto,
            "latest" => Self::Latest,
            other => Self::Explicit(other),
        }
    }
}

impl VersionSelector<'_> {
    /// Resolve to a table set.
    #[must_use]
    pub fn resolve(self) -> &'static TableSet {
        match self {
            Self::Auto => default_tables(),
            Self::Latest => tables::latest(),
            Self::Explicit(given) => match_explicit(given),
        }
    }
}

/// Resolve a version selector string to the nearest available table set.
#[must_use]
pub fn match_version(given: &str) -> &'static TableSet {
    VersionSelector::from(given).resolve()
}

fn match_explicit(given: &str) -> &'static TableSet {
    if let Some(exact) = TABLES.iter().find(|t| t.name == given) {
        return exact;
    }
    let Some(requested) = UnicodeVersion::parse(given) else {
        let latest = tables::latest();
        warn_once(given, || {
            format!(
                "unicode version {given:?} is invalid, expected integer[.integer[.integer]]; \
                 using latest {}",
                latest.version
            )
        });
        return latest;
    };
    nearest_not_exceeding(given, requested)
}

/// Greatest table version `<= requested`, floored at the earliest table.
fn nearest_not_exceeding(given: &str, requested: UnicodeVersion) -> &'static TableSet {
    let idx = TABLES.partition_point(|t| t.version <= requested);
    if idx == 0 {
        let earliest = tables::earliest();
        warn_once(given, || {
            format!(
                "unicode version {requested} is lower than any available; using earliest {}",
                earliest.version
            )
        });
        return earliest;
    }
    &TABLES[idx - 1]
}

/// Emit a `Warn` the first time `selector` degrades.
///
/// Lock-free when no log callback is installed. After
/// `MAX_WARNED_SELECTORS` distinct selectors, further ones go unreported.
fn warn_once(selector: &str, message: impl FnOnce() -> String) {
    static WARNED: OnceLock<Mutex<HashSet<String>>> = OnceLock::new();
    if !log_enabled() {
        return;
    }
    let first = {
        let mut warned = WARNED
            .get_or_init(|| Mutex::new(HashSet::new()))
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if warned.contains(selector) || warned.len() >= MAX_WARNED_SELECTORS {
            false
        } else {
            warned.insert(selector.to_owned())
        }
    };
    if first {
        emit_log(LogLevel::Warn, &message());
    }
}

/// Tables selected by an environment value; unset, empty, `"auto"` and
/// `"latest"` all mean latest.
pub(crate) fn tables_from_env_value(value: Option<&str>) -> &'static TableSet {
    match value.map(str::trim) {
        None | Some("" | "auto" | "latest") => tables::latest(),
        Some(given) => match_explicit(given),
    }
}

fn default_cell() -> &'static OnceLock<&'static TableSet> {
    static DEFAULT: OnceLock<&'static TableSet> = OnceLock::new();
    &DEFAULT
}

/// The process-wide default table set used by the `"auto"` selector.
///
/// Computed on first use from `UNICODE_VERSION`; fixed afterwards.
#[must_use]
pub fn default_tables() -> &'static TableSet {
    default_cell().get_or_init(|| {
        let value = env::var(UNICODE_VERSION_ENV).ok();
        let tables = tables_from_env_value(value.as_deref());
        let source = if value.is_some() {
            UNICODE_VERSION_ENV
        } else {
            "latest"
        };
        emit_log(
            LogLevel::Debug,
            &format!("default unicode version {} (from {source})", tables.version),
        );
        tables
    })
}

/// Pin the process-wide default before first use.
///
/// Fails once a default exists, either from an earlier call or because
/// `"auto"` was already resolved.
pub fn init_default_version(selector: &str) -> Result<&'static TableSet> {
    let wanted = match VersionSelector::from(selector) {
        VersionSelector::Auto => {
            tables_from_env_value(env::var(UNICODE_VERSION_ENV).ok().as_deref())
        }
        other => other.resolve(),
    };
    match default_cell().set(wanted) {
        Ok(()) => Ok(wanted),
        Err(_) => Err(Error::DefaultAlreadySet {
            current: default_tables().version,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(major: u32, minor: u32, patch: u32) -> UnicodeVersion {
        UnicodeVersion::new(major, minor, patch)
    }

    #[test]
    fn test_selector_from_str() {
        assert_eq!(VersionSelector::from("auto"), VersionSelector::Auto);
        assert_eq!(VersionSelector::from("latest"), VersionSelector::Latest);
        assert_eq!(VersionSelector::from("9.0"), VersionSelector::Explicit("9.0"));
        assert_eq!(VersionSelector::default(), VersionSelector::Auto);
    }

    #[test]
    fn test_latest() {
        assert_eq!(match_version("latest").version, v(17, 0, 0));
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(match_version("4.1.0").version, v(4, 1, 0));
        assert_eq!(match_version("9.0.0").version, v(9, 0, 0));
        assert_eq!(match_version("12.1.0").version, v(12, 1, 0));
        assert_eq!(match_version("14.0.0").version, v(14, 0, 0));
        assert_eq!(match_version("17.0.0").version, v(17, 0, 0));
    }

    #[test]
    fn test_floor_between_versions() {
        assert_eq!(match_version("8.9").version, v(8, 0, 0));
        assert_eq!(match_version("9.0.1").version, v(9, 0, 0));
        assert_eq!(match_version("12.0.5").version, v(12, 0, 0));
        assert_eq!(match_version("13.99").version, v(13, 0, 0));
        assert_eq!(match_version("14.1").version, v(14, 0, 0));
        assert_eq!(match_version("16").version, v(15, 1, 0));
    }

    #[test]
    fn test_above_latest_uses_latest() {
        assert_eq!(match_version("99.0.0").version, v(17, 0, 0));
        assert_eq!(match_version("17.0.1").version, v(17, 0, 0));
    }

    #[test]
    fn test_below_earliest_uses_earliest() {
        assert_eq!(match_version("1.0.0").version, v(4, 1, 0));
        assert_eq!(match_version("3").version, v(4, 1, 0));
        assert_eq!(match_version("4.0.9").version, v(4, 1, 0));
        assert_eq!(match_version("0").version, v(4, 1, 0));
    }

    #[test]
    fn test_partial_versions_default_missing_components_to_zero() {
        assert_eq!(match_version("9").version, v(9, 0, 0));
        assert_eq!(match_version("13.0").version, v(13, 0, 0));
        assert_eq!(match_version("14").version, v(14, 0, 0));
        assert_eq!(match_version("17.0").version, v(17, 0, 0));
    }

    #[test]
    fn test_unparsable_uses_latest() {
        for bad in ["", "x", "1.2.3.4", "v14", "14.0.0-beta", "LATEST"] {
            assert_eq!(match_version(bad).version, v(17, 0, 0), "{bad:?}");
        }
    }

    #[test]
    fn test_env_value() {
        assert_eq!(tables_from_env_value(None).version, v(17, 0, 0));
        assert_eq!(tables_from_env_value(Some("")).version, v(17, 0, 0));
        assert_eq!(tables_from_env_value(Some("auto")).version, v(17, 0, 0));
        assert_eq!(tables_from_env_value(Some("latest")).version, v(17, 0, 0));
        assert_eq!(tables_from_env_value(Some("14.0.0")).version, v(14, 0, 0));
        assert_eq!(tables_from_env_value(Some(" 8.0 ")).version, v(8, 0, 0));
        assert_eq!(tables_from_env_value(Some("garbage")).version, v(17, 0, 0));
    }

    #[test]
    fn test_default_is_stable() {
        let first = default_tables();
        let second = match_version("auto");
        assert!(std::ptr::eq(first, second));
        assert!(init_default_version("4.1.0").is_err());
    }
}
