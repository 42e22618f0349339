//! Console encoder for human-readable output

use super::insert_fields;
use crate::core::{Encoder, EncoderConfig, LevelEncoding, LogContext, LogEntry, Result};
use serde_json::{Map, Value};

/// Width the level column is padded to
const LEVEL_WIDTH: usize = 5;

/// Escape the characters that would split a column or a line
///
/// Free-text columns go through this so one call always yields one header
/// line with a fixed column count.
fn escape_column(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Renders entries as tab-separated text
///
/// Layout: `time  LEVEL  [logger]  caller  message  {fields}`, followed by
/// the stack trace on the next lines when one was captured. Structured
/// fields are kept as a compact JSON object in the last column.
#[derive(Debug, Clone)]
pub struct ConsoleEncoder {
    config: EncoderConfig,
    fields: LogContext,
}

impl ConsoleEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self {
            config,
            fields: LogContext::new(),
        }
    }

    /// Toggle ANSI colors on the level column
    ///
    /// # Example
    ///
    /// ```
    /// use rust_custom_logger::encoders::ConsoleEncoder;
    /// use rust_custom_logger::EncoderConfig;
    ///
    /// let encoder = ConsoleEncoder::new(EncoderConfig::default()).with_colors(true);
    /// ```
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.config.encode_level = if use_colors {
            LevelEncoding::CapitalColor
        } else {
            LevelEncoding::Capital
        };
        self
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    pub fn fields(&self) -> &LogContext {
        &self.fields
    }
}

impl Encoder for ConsoleEncoder {
    fn add_string(&mut self, key: &str, value: &str) {
        self.fields.add_field(key, value);
    }

    fn encode_entry(&self, entry: &LogEntry) -> Result<String> {
        let config = &self.config;
        let mut columns: Vec<String> = Vec::with_capacity(6);

        if config.time_key.is_some() {
            columns.push(config.encode_time.format(&entry.timestamp));
        }
        if config.level_key.is_some() {
            columns.push(config.encode_level.encode_padded(entry.level, LEVEL_WIDTH));
        }
        if config.name_key.is_some() && !entry.logger_name.is_empty() {
            columns.push(escape_column(&entry.logger_name));
        }
        if let (Some(_), Some(caller)) = (&config.caller_key, &entry.caller) {
            columns.push(config.encode_caller.encode(caller));
        }
        if config.message_key.is_some() {
            columns.push(escape_column(&entry.message));
        }

        let mut fields = Map::new();
        insert_fields(&mut fields, &self.fields, config.encode_duration);
        insert_fields(&mut fields, &entry.context, config.encode_duration);
        if !fields.is_empty() {
            columns.push(serde_json::to_string(&Value::Object(fields))?);
        }

        let mut record = columns.join("\t");
        if let (Some(_), Some(stack)) = (&config.stacktrace_key, &entry.stack) {
            record.push('\n');
            record.push_str(stack.trim_end());
        }
        record.push_str(&config.line_ending);
        Ok(record)
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Caller, LogLevel};
    use chrono::{Local, TimeZone};

    fn fixed_entry(level: LogLevel, message: &str) -> LogEntry {
        let at = Local
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .single()
            .expect("valid datetime");
        LogEntry::new(level, message)
            .with_timestamp(at)
            .with_caller(Caller::new("/src/pkg/file.rs", 42))
    }

    #[test]
    fn test_text_layout() {
        let mut encoder = ConsoleEncoder::new(EncoderConfig::default());
        encoder.add_string("name", "TwelveBoyZ");

        let record = encoder
            .encode_entry(&fixed_entry(LogLevel::Info, "started"))
            .unwrap();

        assert_eq!(
            record,
            "2024-01-02T03:04:05.0000\tINFO \tpkg/file.rs:42\tstarted\t{\"name\":\"TwelveBoyZ\"}\n"
        );
    }

    #[test]
    fn test_logger_name_column() {
        let encoder = ConsoleEncoder::new(EncoderConfig::default());
        let entry = fixed_entry(LogLevel::Error, "failed").with_logger_name("worker");

        let record = encoder.encode_entry(&entry).unwrap();
        let columns: Vec<&str> = record.trim_end().split('\t').collect();
        assert_eq!(
            columns,
            vec![
                "2024-01-02T03:04:05.0000",
                "ERROR",
                "worker",
                "pkg/file.rs:42",
                "failed"
            ]
        );
    }

    #[test]
    fn test_no_fields_column_when_empty() {
        let encoder = ConsoleEncoder::new(EncoderConfig::default());
        let record = encoder
            .encode_entry(&fixed_entry(LogLevel::Debug, "plain"))
            .unwrap();
        assert!(record.ends_with("\tplain\n"));
        assert!(!record.contains('{'));
    }

    #[test]
    fn test_stacktrace_on_following_lines() {
        let encoder = ConsoleEncoder::new(EncoderConfig::default());
        let entry = fixed_entry(LogLevel::Error, "boom").with_stacktrace();

        let record = encoder.encode_entry(&entry).unwrap();
        let mut lines = record.lines();
        assert!(lines.next().unwrap().ends_with("\tboom"));
        assert!(lines.next().is_some());
        assert!(record.ends_with('\n'));
    }

    #[test]
    fn test_uppercase_level() {
        let encoder = ConsoleEncoder::new(EncoderConfig::default()).with_colors(false);
        let record = encoder
            .encode_entry(&fixed_entry(LogLevel::Warn, "careful"))
            .unwrap();
        assert!(record.contains("\tWARN \t"));
    }

    #[test]
    fn test_message_cannot_forge_lines() {
        let encoder = ConsoleEncoder::new(EncoderConfig::default());
        let entry = fixed_entry(LogLevel::Info, "login\nERROR\tfake\\n");

        let record = encoder.encode_entry(&entry).unwrap();
        assert_eq!(record.lines().count(), 1);
        assert!(record.ends_with("\tlogin\\nERROR\\tfake\\\\n\n"));
    }

    #[test]
    fn test_logger_name_cannot_forge_columns() {
        let encoder = ConsoleEncoder::new(EncoderConfig::default());
        let entry = fixed_entry(LogLevel::Info, "ok").with_logger_name("svc\nFAKE\tERROR");

        let record = encoder.encode_entry(&entry).unwrap();
        assert_eq!(record.lines().count(), 1);
        let columns: Vec<&str> = record.trim_end().split('\t').collect();
        assert_eq!(columns.len(), 5);
        assert_eq!(columns[2], "svc\\nFAKE\\tERROR");
    }
}
