//! Core logger types and traits

pub mod encoder;
pub mod encoder_config;
pub mod error;
pub mod log_context;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod timestamp;
pub mod write_target;

pub use encoder::Encoder;
pub use encoder_config::{CallerEncoding, DurationEncoding, EncoderConfig, LevelEncoding};
pub use error::{LoggerError, Result};
pub use log_context::{CustomField, FieldValue, LogContext};
pub use log_entry::{Caller, LogEntry};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use output_format::OutputFormat;
pub use timestamp::TimestampFormat;
pub use write_target::WriteTarget;
