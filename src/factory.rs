//! One-call construction of a file + stdout logger
//!
//! [`new_custom_logger`] is the usual entry point. The steps it is made of
//! are public too, for callers that want to swap one of them out:
//!
//! 1. [`new_custom_encoder`] picks the encoder for an [`OutputFormat`]
//! 2. [`add_fields`] bakes static fields into that encoder
//! 3. [`open_sink`] opens the file and pairs it with stdout
//! 4. [`build_logger`] binds level, encoder and sink, with call-site and
//!    stack-trace annotation switched on

use crate::core::{
    CustomField, Encoder, EncoderConfig, LogLevel, Logger, LoggerError, OutputFormat, Result,
    WriteTarget,
};
use crate::encoders::{ConsoleEncoder, JsonEncoder};
use crate::sinks::{open_sink, MultiSink};
use std::path::Path;

/// Records at or above this level carry a stack trace
pub const STACKTRACE_LEVEL: LogLevel = LogLevel::Error;

/// Encoder for `format`, configured with [`EncoderConfig::default`]
pub fn new_custom_encoder(format: OutputFormat) -> Box<dyn Encoder> {
    let config = EncoderConfig::default();
    match format {
        OutputFormat::Json => Box::new(JsonEncoder::new(config)),
        OutputFormat::Console => Box::new(ConsoleEncoder::new(config)),
    }
}

/// Add every field to `encoder` as a permanent string field, in order
pub fn add_fields(mut encoder: Box<dyn Encoder>, fields: &[CustomField]) -> Box<dyn Encoder> {
    for field in fields {
        encoder.add_string(&field.key, &field.value);
    }
    encoder
}

/// Bind level, encoder and sink into a logger
///
/// Every record gets its call site; records at [`STACKTRACE_LEVEL`] and
/// above also get a stack trace.
pub fn build_logger<T>(level: LogLevel, encoder: Box<dyn Encoder>, sink: T) -> Logger
where
    T: WriteTarget + 'static,
{
    Logger::builder()
        .min_level(level)
        .boxed_encoder(encoder)
        .target(sink)
        .add_caller(true)
        .stacktrace_level(STACKTRACE_LEVEL)
        .build()
}

/// Build a logger writing `format` records to `log_file` and stdout
///
/// # Errors
///
/// Returns [`LoggerError::SinkOpen`] when `log_file` cannot be created or
/// opened for append. Nothing is logged in that case.
///
/// # Example
///
/// ```no_run
/// use rust_custom_logger::prelude::*;
///
/// let logger = new_custom_logger(
///     LogLevel::Info,
///     OutputFormat::Console,
///     "zap.log",
///     &[CustomField::new("name", "TwelveBoyZ")],
/// )?;
/// logger.info("started");
/// # Ok::<(), LoggerError>(())
/// ```
pub fn new_custom_logger(
    level: LogLevel,
    format: OutputFormat,
    log_file: impl AsRef<Path>,
    fields: &[CustomField],
) -> Result<Logger> {
    let encoder = add_fields(new_custom_encoder(format), fields);
    let sink = open_sink(log_file)?;
    Ok(build_logger(level, encoder, sink))
}

/// Like [`new_custom_logger`], but degrades to stdout only when the file
/// cannot be opened
///
/// The open failure is handed back next to the logger so the caller can
/// tell the degraded mode apart.
pub fn new_custom_logger_or_stdout(
    level: LogLevel,
    format: OutputFormat,
    log_file: impl AsRef<Path>,
    fields: &[CustomField],
) -> (Logger, Option<LoggerError>) {
    let encoder = add_fields(new_custom_encoder(format), fields);
    match open_sink(log_file) {
        Ok(sink) => (build_logger(level, encoder, sink), None),
        Err(e) => (build_logger(level, encoder, MultiSink::stdout()), Some(e)),
    }
}
