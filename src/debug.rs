//! Cross-platform debug logging for the benchmark harness.
//!
//! Provides structured debug output that works identically on Linux and macOS.
//! Enabled via `--debug` flag or the `MEDIR_DEBUG` environment variable.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

/// Global debug mode flag.
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Start time stored as millis since UNIX epoch (atomic-safe).
static START_TIME_MS: AtomicU64 = AtomicU64::new(0);

/// Enables debug mode globally.
pub fn enable() {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    START_TIME_MS.store(now, Ordering::SeqCst);
    DEBUG_ENABLED.store(true, Ordering::SeqCst);
}

/// Disables debug mode globally.
pub fn disable() {
    DEBUG_ENABLED.store(false, Ordering::SeqCst);
}

/// Enables debug mode if the `MEDIR_DEBUG` environment variable is set.
pub fn init_from_env() {
    if std::env::var("MEDIR_DEBUG").is_ok() {
        enable();
    }
}

/// Returns true if debug mode is enabled.
#[inline]
pub fn is_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Gets elapsed time since debug was enabled.
fn elapsed_ms() -> u64 {
    let start = START_TIME_MS.load(Ordering::Relaxed);
    if start == 0 {
        return 0;
    }
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    now.saturating_sub(start)
}

/// Debug log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Tracing entry/exit of functions
    Trace,
    /// Debug information
    Debug,
    /// Informational messages
    Info,
    /// Warnings
    Warn,
    /// Errors
    Error,
}

impl Level {
    fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    fn color_code(&self) -> &'static str {
        match self {
            Level::Trace => "\x1b[90m", // Gray
            Level::Debug => "\x1b[36m", // Cyan
            Level::Info => "\x1b[32m",  // Green
            Level::Warn => "\x1b[33m",  // Yellow
            Level::Error => "\x1b[31m", // Red
        }
    }
}

/// Logs a debug message if debug mode is enabled.
pub fn log(level: Level, component: &str, message: &str) {
    if !is_enabled() {
        return;
    }

    let elapsed = elapsed_ms();
    let reset = "\x1b[0m";
    let color = level.color_code();

    // Format: [+0000ms] [LEVEL] [component] message
    let _ = writeln!(
        io::stderr(),
        "[+{:04}ms] {}[{:5}]{} [{}] {}",
        elapsed,
        color,
        level.as_str(),
        reset,
        component,
        message
    );
}

/// Logs with format arguments.
#[macro_export]
macro_rules! debug_log {
    ($level:expr, $component:expr, $($arg:tt)*) => {
        if $crate::debug::is_enabled() {
            $crate::debug::log($level, $component, &format!($($arg)*));
        }
    };
}

/// Convenience macro for trace level.
#[macro_export]
macro_rules! trace {
    ($component:expr, $($arg:tt)*) => {
        $crate::debug_log!($crate::debug::Level::Trace, $component, $($arg)*)
    };
}

/// Convenience macro for debug level.
#[macro_export]
macro_rules! debug {
    ($component:expr, $($arg:tt)*) => {
        $crate::debug_log!($crate::debug::Level::Debug, $component, $($arg)*)
    };
}

/// Convenience macro for info level.
#[macro_export]
macro_rules! info {
    ($component:expr, $($arg:tt)*) => {
        $crate::debug_log!($crate::debug::Level::Info, $component, $($arg)*)
    };
}

/// Convenience macro for warn level.
#[macro_export]
macro_rules! warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::debug_log!($crate::debug::Level::Warn, $component, $($arg)*)
    };
}

/// Convenience macro for error level.
#[macro_export]
macro_rules! error {
    ($component:expr, $($arg:tt)*) => {
        $crate::debug_log!($crate::debug::Level::Error, $component, $($arg)*)
    };
}

/// RAII guard for timing a scope.
pub struct TimingGuard {
    component: &'static str,
    operation: String,
    start: Instant,
}

impl TimingGuard {
    /// Creates a new timing guard.
    pub fn new(component: &'static str, operation: impl Into<String>) -> Self {
        let operation = operation.into();
        if is_enabled() {
            log(Level::Trace, component, &format!("-> {operation}"));
        }
        Self { component, operation, start: Instant::now() }
    }
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        if is_enabled() {
            let elapsed = self.start.elapsed();
            log(
                Level::Trace,
                self.component,
                &format!("<- {} ({:.2}ms)", self.operation, elapsed.as_secs_f64() * 1000.0),
            );
        }
    }
}

/// Creates a timing guard for a scope.
#[macro_export]
macro_rules! time_scope {
    ($component:expr, $operation:expr) => {
        let _guard = $crate::debug::TimingGuard::new($component, $operation);
    };
}
