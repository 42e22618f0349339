//! Field naming and value rendering rules shared by all encoders
//!
//! `EncoderConfig::default()` is the table every factory-built logger uses,
//! so a record has the same shape whichever encoder renders it.

use super::log_context::float_value;
use super::log_entry::Caller;
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How the call site is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallerEncoding {
    /// Last directory and file name: `core/logger.rs:42`
    #[default]
    Short,
    /// Path exactly as the compiler recorded it
    Full,
}

impl CallerEncoding {
    pub fn encode(&self, caller: &Caller) -> String {
        match self {
            CallerEncoding::Short => format!("{}:{}", trim_path(caller.file), caller.line),
            CallerEncoding::Full => format!("{}:{}", caller.file, caller.line),
        }
    }
}

fn trim_path(file: &str) -> &str {
    let is_sep = |c: char| c == '/' || c == '\\';
    let Some(last) = file.rfind(is_sep) else {
        return file;
    };
    match file[..last].rfind(is_sep) {
        Some(prev) => &file[prev + 1..],
        None => file,
    }
}

/// How `Duration` field values are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationEncoding {
    /// Floating-point seconds
    #[default]
    Seconds,
    /// Floating-point milliseconds
    Millis,
    /// Integer nanoseconds
    Nanos,
    /// Debug text such as `1.5s`
    String,
}

impl DurationEncoding {
    pub fn encode(&self, duration: &Duration) -> serde_json::Value {
        match self {
            DurationEncoding::Seconds => float_value(duration.as_secs_f64()),
            DurationEncoding::Millis => float_value(duration.as_secs_f64() * 1_000.0),
            DurationEncoding::Nanos => {
                let nanos = u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX);
                serde_json::Value::Number(nanos.into())
            }
            DurationEncoding::String => serde_json::Value::String(format!("{:?}", duration)),
        }
    }
}

/// How the severity is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelEncoding {
    /// `INFO`
    #[default]
    Capital,
    /// `INFO` wrapped in ANSI color codes
    CapitalColor,
    /// `info`
    Lowercase,
}

impl LevelEncoding {
    pub fn encode(&self, level: LogLevel) -> String {
        self.encode_padded(level, 0)
    }

    /// Encode, left-aligned to `width` visible characters
    pub fn encode_padded(&self, level: LogLevel, width: usize) -> String {
        match self {
            LevelEncoding::Capital => format!("{:<width$}", level.to_str()),
            LevelEncoding::Lowercase => format!("{:<width$}", level.to_lowercase_str()),
            LevelEncoding::CapitalColor => colorize(level, format!("{:<width$}", level.to_str())),
        }
    }
}

#[cfg(feature = "console")]
fn colorize(level: LogLevel, text: String) -> String {
    use colored::Colorize;
    text.color(level.color_code()).to_string()
}

#[cfg(not(feature = "console"))]
fn colorize(_level: LogLevel, text: String) -> String {
    text
}

/// Record field keys and value rendering rules
///
/// A `None` key omits that field from every record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    pub message_key: Option<String>,
    pub level_key: Option<String>,
    pub time_key: Option<String>,
    pub name_key: Option<String>,
    pub caller_key: Option<String>,
    pub stacktrace_key: Option<String>,
    pub encode_caller: CallerEncoding,
    pub encode_duration: DurationEncoding,
    pub encode_time: TimestampFormat,
    pub encode_level: LevelEncoding,
    pub line_ending: String,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            message_key: Some("message".to_string()),
            level_key: Some("level".to_string()),
            time_key: Some("time".to_string()),
            name_key: Some("Logger".to_string()),
            caller_key: Some("caller".to_string()),
            stacktrace_key: Some("stacktrace".to_string()),
            encode_caller: CallerEncoding::Short,
            encode_duration: DurationEncoding::Seconds,
            encode_time: TimestampFormat::Layout,
            encode_level: LevelEncoding::Capital,
            line_ending: "\n".to_string(),
        }
    }
}

impl EncoderConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys a caller-supplied field may shadow
    pub fn reserved_keys(&self) -> impl Iterator<Item = &str> {
        [
            &self.message_key,
            &self.level_key,
            &self.time_key,
            &self.name_key,
            &self.caller_key,
            &self.stacktrace_key,
        ]
        .into_iter()
        .filter_map(|key| key.as_deref())
    }
}
