//! # Rust Custom Logger
//!
//! A logger factory that writes every record to a log file and to stdout
//! at once, as structured JSON or human-readable text.
//!
//! ## Features
//!
//! - **Two encodings**: JSON lines or tab-separated console text, with the
//!   same field names in both
//! - **Static fields**: key/value pairs stamped on every record
//! - **Annotations**: call site on every record, stack trace from ERROR up
//! - **Thread Safe**: one lock per record, so records never interleave
//!
//! ## Example
//!
//! ```no_run
//! use rust_custom_logger::prelude::*;
//!
//! let logger = new_custom_logger(
//!     LogLevel::Info,
//!     OutputFormat::Json,
//!     "app.log",
//!     &[CustomField::new("service", "billing")],
//! )?;
//!
//! logger.info("started");
//! logger
//!     .with_field("user", "alice")
//!     .warn("password expires soon");
//! logger.close()?;
//! # Ok::<(), LoggerError>(())
//! ```

pub mod config;
pub mod core;
pub mod encoders;
pub mod factory;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::config::LoggerConfig;
    pub use crate::core::{
        Caller, CustomField, Encoder, EncoderConfig, FieldValue, LogContext, LogEntry, LogLevel,
        Logger, LoggerBuilder, LoggerError, LoggerMetrics, OutputFormat, Result, TimestampFormat,
        WriteTarget,
    };
    pub use crate::encoders::{ConsoleEncoder, JsonEncoder};
    pub use crate::factory::{
        add_fields, build_logger, new_custom_encoder, new_custom_logger,
        new_custom_logger_or_stdout,
    };
    pub use crate::sinks::{open_sink, MultiSink};
}

pub use config::LoggerConfig;
pub use self::core::{
    Caller, CallerEncoding, CustomField, DurationEncoding, Encoder, EncoderConfig, FieldValue,
    LevelEncoding, LogContext, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerError,
    LoggerMetrics, OutputFormat, Result, TimestampFormat, WriteTarget,
};
pub use encoders::{ConsoleEncoder, JsonEncoder};
pub use factory::{
    add_fields, build_logger, new_custom_encoder, new_custom_logger, new_custom_logger_or_stdout,
    STACKTRACE_LEVEL,
};
pub use sinks::{open_sink, MultiSink, SharedBuffer};
