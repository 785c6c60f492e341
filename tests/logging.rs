//! Resolver diagnostics reach the log callback.

use cellwidth::{
    LogLevel, UnicodeVersion, log_enabled, match_version, set_log_callback, wcswidth_str, wcwidth,
};
use std::sync::{Arc, Mutex};
use std::thread;

#[test]
fn resolver_warnings_are_logged_once_per_selector() {
    let seen: Arc<Mutex<Vec<(LogLevel, String)>>> = Arc::default();
    let sink = Arc::clone(&seen);
    set_log_callback(move |level, message| {
        sink.lock().unwrap().push((level, message.to_string()));
    });
    assert!(log_enabled());

    assert_eq!(match_version("not-a-version").version, UnicodeVersion::new(17, 0, 0));
    assert_eq!(match_version("1.1").version, UnicodeVersion::new(4, 1, 0));
    // Exact and in-range requests are silent
    let _ = match_version("14.0.0");
    let _ = match_version("15");
    // ASCII never resolves a version, so a bad selector goes unreported
    assert_eq!(wcwidth('a', "also-bad"), 1);

    // Repeating a degraded selector does not warn again, from any thread
    for _ in 0..100 {
        assert_eq!(wcwidth('漢', "not-a-version"), 2);
        assert_eq!(wcwidth('漢', "1.1"), 2);
    }
    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| {
                for _ in 0..50 {
                    let _ = wcswidth_str("漢字", None, "1.1");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker panicked");
    }

    let warnings: Vec<String> = seen
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, _)| *level == LogLevel::Warn)
        .map(|(_, message)| message.clone())
        .collect();
    assert_eq!(warnings.len(), 2, "{warnings:?}");
    assert!(warnings[0].contains("\"not-a-version\""));
    assert!(warnings[0].contains("17.0.0"));
    assert!(warnings[1].contains("1.1.0"));
    assert!(warnings[1].contains("4.1.0"));

    // A different degraded selector still gets its own warning
    let _ = match_version("2.0");
    let count = seen
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, _)| *level == LogLevel::Warn)
        .count();
    assert_eq!(count, 3);
}
