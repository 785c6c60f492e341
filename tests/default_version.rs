//! Pinning the process-wide default version.
//!
//! Kept in its own test binary so nothing resolves `"auto"` first.

use cellwidth::{Error, UnicodeVersion, WidthConfig, init_default_version, match_version, wcwidth};

#[test]
fn init_default_version_pins_auto() {
    let pinned = init_default_version("8.0.0").expect("first init succeeds");
    assert_eq!(pinned.version, UnicodeVersion::new(8, 0, 0));

    assert_eq!(match_version("auto").version, UnicodeVersion::new(8, 0, 0));
    assert_eq!(WidthConfig::default().version(), UnicodeVersion::new(8, 0, 0));
    // GRINNING FACE is narrow before 9.0.0
    assert_eq!(wcwidth('\u{1F600}', "auto"), 1);
    assert_eq!(wcwidth('\u{1F600}', "latest"), 2);

    let err = init_default_version("latest").unwrap_err();
    assert_eq!(
        err,
        Error::DefaultAlreadySet {
            current: UnicodeVersion::new(8, 0, 0)
        }
    );
}
