#![deny(missing_docs)]
//! Shared logging utilities for the review carousel workspace.
//!
//! This crate provides the `carousel_*` logging macros used across the
//! codebase and a minimal test initializer for the global logger.

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! carousel_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! carousel_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! carousel_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! carousel_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! carousel_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Environment variable overriding the log level used by test loggers.
pub const TEST_LOG_ENV: &str = "CAROUSEL_TEST_LOG";

/// Initializes a simple terminal logger for use in tests.
///
/// The level comes from `CAROUSEL_TEST_LOG` (`trace`, `debug`, ...), falling
/// back to debug in debug builds and info in release builds. This safely
/// no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = std::env::var(TEST_LOG_ENV)
        .ok()
        .and_then(|raw| raw.parse::<log::LevelFilter>().ok())
        .unwrap_or(if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        });

    // Ignore the error if a logger was already set by another test binary.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )]);
}

/// Runs [`initialize_for_tests`] at most once per process.
pub fn init_test_logging_once() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(initialize_for_tests);
}
