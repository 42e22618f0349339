//! Main logger implementation

use super::{
    encoder::Encoder,
    encoder_config::EncoderConfig,
    error::{LoggerError, Result},
    log_context::{FieldValue, LogContext},
    log_entry::{Caller, LogEntry},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    write_target::WriteTarget,
};
use crate::encoders::JsonEncoder;
use crate::sinks::MultiSink;
use std::panic::Location;
use std::sync::Arc;

/// State shared by a logger and every child derived from it
struct LoggerCore {
    min_level: LogLevel,
    encoder: Box<dyn Encoder>,
    target: Box<dyn WriteTarget>,
    add_caller: bool,
    stacktrace_level: Option<LogLevel>,
    metrics: LoggerMetrics,
}

impl LoggerCore {
    fn write(&self, entry: &LogEntry) {
        let result = self
            .encoder
            .encode_entry(entry)
            .and_then(|record| self.target.write_record(record.as_bytes()));

        match result {
            Ok(()) => {
                self.metrics.record_logged();
            }
            Err(LoggerError::LoggerClosed) => {
                self.metrics.record_dropped();
            }
            Err(e) => {
                self.metrics.record_write_error();
                eprintln!(
                    "[LOGGER ERROR] Sink '{}' failed to write record: {}",
                    self.target.name(),
                    e
                );
            }
        }
    }
}

impl Drop for LoggerCore {
    fn drop(&mut self) {
        if let Err(e) = self.target.sync() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

/// An immutable, cheaply cloneable logging handle
///
/// Child loggers made with [`Logger::with`] or [`Logger::named`] share the
/// parent's encoder, sink and threshold; only their extra context differs.
///
/// # Example
/// ```
/// use rust_custom_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .add_caller(true)
///     .build();
///
/// let requests = logger.named("http").with_field("request_id", "abc-123");
/// requests.info("request accepted");
/// ```
#[derive(Clone)]
pub struct Logger {
    core: Arc<LoggerCore>,
    name: String,
    context: LogContext,
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Minimum level this logger writes
    pub fn level(&self) -> LogLevel {
        self.core.min_level
    }

    /// Whether a record at `level` would be written
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.core.min_level.enables(level)
    }

    /// Dotted logger name, empty for the root logger
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields this handle adds to every record, beyond the encoder's static ones
    pub fn context(&self) -> &LogContext {
        &self.context
    }

    /// Derive a child logger carrying extra fields
    #[must_use]
    pub fn with(&self, context: LogContext) -> Logger {
        let mut child = self.clone();
        child.context.extend(&context);
        child
    }

    /// Derive a child logger carrying one extra field
    #[must_use]
    pub fn with_field<K, V>(&self, key: K, value: V) -> Logger
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.with(LogContext::new().with_field(key, value))
    }

    /// Derive a child logger with `name` appended to this logger's name
    #[must_use]
    pub fn named(&self, name: &str) -> Logger {
        let mut child = self.clone();
        if name.is_empty() {
            return child;
        }
        child.name = if self.name.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.name, name)
        };
        child
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        self.log_with_context(level, message, LogContext::new());
    }

    /// Log with structured context fields
    #[track_caller]
    pub fn log_with_context(&self, level: LogLevel, message: impl AsRef<str>, context: LogContext) {
        if !self.enabled(level) {
            return;
        }

        let location = Location::caller();
        let core = &self.core;

        let fields = if self.context.is_empty() {
            context
        } else {
            let mut merged = self.context.clone();
            merged.extend(&context);
            merged
        };

        let mut entry = LogEntry::new(level, message)
            .with_logger_name(self.name.as_str())
            .with_context(fields);

        if core.add_caller {
            entry = entry.with_caller(Caller::from(location));
        }
        if core.stacktrace_level.is_some_and(|threshold| threshold.enables(level)) {
            entry = entry.with_stacktrace();
        }

        core.write(&entry);
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    /// Record at FATAL severity. The process keeps running.
    #[inline]
    #[track_caller]
    pub fn fatal(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Fatal, message);
    }

    #[track_caller]
    pub fn debug_with_context(&self, message: impl AsRef<str>, context: LogContext) {
        self.log_with_context(LogLevel::Debug, message, context);
    }

    /// Helper for structured info logging
    #[track_caller]
    pub fn info_with_context(&self, message: impl AsRef<str>, context: LogContext) {
        self.log_with_context(LogLevel::Info, message, context);
    }

    #[track_caller]
    pub fn warn_with_context(&self, message: impl AsRef<str>, context: LogContext) {
        self.log_with_context(LogLevel::Warn, message, context);
    }

    /// Helper for structured error logging
    #[track_caller]
    pub fn error_with_context(&self, message: impl AsRef<str>, context: LogContext) {
        self.log_with_context(LogLevel::Error, message, context);
    }

    #[track_caller]
    pub fn fatal_with_context(&self, message: impl AsRef<str>, context: LogContext) {
        self.log_with_context(LogLevel::Fatal, message, context);
    }

    /// Flush every sink
    pub fn sync(&self) -> Result<()> {
        self.core.target.sync()
    }

    /// Flush and close the sinks shared by this logger and all its children
    ///
    /// Only the first call does any work. Records logged afterwards are
    /// discarded and counted in [`LoggerMetrics::dropped_count`].
    pub fn close(&self) -> Result<()> {
        self.core.target.close()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.core.metrics
    }

    /// Number of records that failed to reach at least one sink
    pub fn error_count(&self) -> u64 {
        self.core.metrics.write_errors()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.core.min_level)
            .field("encoder", &self.core.encoder.name())
            .field("target", &self.core.target.name())
            .field("context", &self.context)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Without an explicit encoder the logger renders JSON with the default
/// [`EncoderConfig`]; without an explicit target it writes to stdout.
/// Caller annotation and stack traces are off until enabled.
///
/// # Example
/// ```
/// use rust_custom_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Warn)
///     .encoder(ConsoleEncoder::new(EncoderConfig::default()))
///     .target(MultiSink::stdout())
///     .add_caller(true)
///     .stacktrace_level(LogLevel::Error)
///     .build();
///
/// assert!(!logger.enabled(LogLevel::Info));
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    encoder: Option<Box<dyn Encoder>>,
    target: Option<Box<dyn WriteTarget>>,
    add_caller: bool,
    stacktrace_level: Option<LogLevel>,
    name: String,
    context: LogContext,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            encoder: None,
            target: None,
            add_caller: false,
            stacktrace_level: None,
            name: String::new(),
            context: LogContext::new(),
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn encoder<E: Encoder + 'static>(self, encoder: E) -> Self {
        self.boxed_encoder(Box::new(encoder))
    }

    #[must_use = "builder methods return a new value"]
    pub fn boxed_encoder(mut self, encoder: Box<dyn Encoder>) -> Self {
        self.encoder = Some(encoder);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn target<T: WriteTarget + 'static>(mut self, target: T) -> Self {
        self.target = Some(Box::new(target));
        self
    }

    /// Annotate every record with the call site
    #[must_use = "builder methods return a new value"]
    pub fn add_caller(mut self, enabled: bool) -> Self {
        self.add_caller = enabled;
        self
    }

    /// Capture a stack trace for records at or above `level`
    #[must_use = "builder methods return a new value"]
    pub fn stacktrace_level(mut self, level: LogLevel) -> Self {
        self.stacktrace_level = Some(level);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.context.add_field(key, value);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let encoder = self
            .encoder
            .unwrap_or_else(|| Box::new(JsonEncoder::new(EncoderConfig::default())));
        let target = self
            .target
            .unwrap_or_else(|| Box::new(MultiSink::stdout()));

        Logger {
            core: Arc::new(LoggerCore {
                min_level: self.min_level,
                encoder,
                target,
                add_caller: self.add_caller,
                stacktrace_level: self.stacktrace_level,
                metrics: LoggerMetrics::new(),
            }),
            name: self.name,
            context: self.context,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
