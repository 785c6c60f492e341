//! `cellwidth` - terminal cell widths for Unicode text
//!
//! Versioned `wcwidth`/`wcswidth`: how many monospace terminal cells a
//! codepoint or string occupies, following terminal-emulator conventions
//! (zero-width combining marks, wide East Asian characters, VS16 emoji
//! presentation) for a selectable Unicode release.
//!
//! ```
//! use cellwidth::{WidthConfig, wcswidth_str, wcwidth};
//!
//! assert_eq!(wcwidth('コ', "auto"), 2);
//! assert_eq!(wcswidth_str("コンニチハ", None, "auto"), 10);
//!
//! let config = WidthConfig::new("14.0.0");
//! assert_eq!(config.wcswidth_str("\u{2764}\u{FE0F}", None), 2);
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // WidthConfig, WidthCache
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_possible_wrap)] // Widths are tiny
#![allow(clippy::must_use_candidate)] // Explicit where it matters

pub mod cache;
pub mod config;
pub mod error;
pub mod event;
pub mod resolve;
pub mod tables;
pub mod version;
pub mod width;

// Re-export core types at crate root
pub use cache::WidthCache;
pub use config::WidthConfig;
pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, log_enabled, set_log_callback};
pub use resolve::{
    UNICODE_VERSION_ENV, VersionSelector, default_tables, init_default_version, match_version,
};
pub use tables::{CodepointRange, Membership, TableSet, list_versions};
pub use version::UnicodeVersion;
pub use width::{Codepoint, VS16, ZWJ, wcswidth, wcswidth_str, wcwidth};
