//! Logging macros for ergonomic log message formatting.
//!
//! These macros format the message like `format!` and can attach
//! structured fields after a `;`.
//!
//! # Examples
//!
//! ```
//! use rust_custom_logger::prelude::*;
//! use rust_custom_logger::{info, warn};
//!
//! let logger = Logger::builder().build();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // With structured fields
//! warn!(logger, "Slow request"; "path" => "/api/users", "latency_ms" => 912);
//! ```

/// Log a message with automatic formatting and optional fields.
///
/// # Examples
///
/// ```
/// # use rust_custom_logger::prelude::*;
/// # let logger = Logger::builder().build();
/// use rust_custom_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// log!(logger, LogLevel::Info, "User {} signed in", "alice"; "user" => "alice");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $fmt:literal $(, $arg:expr)* ; $($key:expr => $value:expr),+ $(,)?) => {
        $logger.log_with_context(
            $level,
            format!($fmt $(, $arg)*),
            $crate::LogContext::new()$(.with_field($key, $value))+,
        )
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_custom_logger::prelude::*;
/// # let logger = Logger::builder().min_level(LogLevel::Debug).build();
/// use rust_custom_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message. The record carries a stack trace when the
/// logger was built by the factory.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message. Does not exit the process.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
