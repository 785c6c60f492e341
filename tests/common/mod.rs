#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry
#![allow(dead_code)]

pub mod harness;

use cellwidth::LogLevel;
use std::sync::Once;

/// Route resolver diagnostics into `tracing`, visible with `--nocapture`.
pub fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
        cellwidth::set_log_callback(|level, message| match level {
            LogLevel::Debug => tracing::debug!(target: "cellwidth", "{message}"),
            LogLevel::Info => tracing::info!(target: "cellwidth", "{message}"),
            LogLevel::Warn => tracing::warn!(target: "cellwidth", "{message}"),
            LogLevel::Error => tracing::error!(target: "cellwidth", "{message}"),
        });
    });
}
