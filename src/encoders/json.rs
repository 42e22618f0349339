//! JSON encoder for structured logging

use super::insert_fields;
use crate::core::{Encoder, EncoderConfig, LogContext, LogEntry, Result};
use serde_json::{Map, Value};

/// Renders each entry as a single-line JSON object (JSONL format)
///
/// Keys appear in a fixed order: level, time, logger name, caller,
/// message, static fields, per-record fields, stack trace. A field whose
/// key repeats a reserved key replaces that value in place.
#[derive(Debug, Clone)]
pub struct JsonEncoder {
    config: EncoderConfig,
    fields: LogContext,
}

impl JsonEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self {
            config,
            fields: LogContext::new(),
        }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Static fields added so far
    pub fn fields(&self) -> &LogContext {
        &self.fields
    }

    /// Build the JSON object for one entry
    pub fn to_object(&self, entry: &LogEntry) -> Map<String, Value> {
        let config = &self.config;
        let mut object = Map::new();

        if let Some(key) = &config.level_key {
            object.insert(key.clone(), Value::String(config.encode_level.encode(entry.level)));
        }
        if let Some(key) = &config.time_key {
            object.insert(key.clone(), config.encode_time.to_json_value(&entry.timestamp));
        }
        if let Some(key) = &config.name_key {
            if !entry.logger_name.is_empty() {
                object.insert(key.clone(), Value::String(entry.logger_name.clone()));
            }
        }
        if let (Some(key), Some(caller)) = (&config.caller_key, &entry.caller) {
            object.insert(key.clone(), Value::String(config.encode_caller.encode(caller)));
        }
        if let Some(key) = &config.message_key {
            object.insert(key.clone(), Value::String(entry.message.clone()));
        }

        insert_fields(&mut object, &self.fields, config.encode_duration);
        insert_fields(&mut object, &entry.context, config.encode_duration);

        if let (Some(key), Some(stack)) = (&config.stacktrace_key, &entry.stack) {
            object.insert(key.clone(), Value::String(stack.clone()));
        }

        object
    }
}

impl Encoder for JsonEncoder {
    fn add_string(&mut self, key: &str, value: &str) {
        self.fields.add_field(key, value);
    }

    fn encode_entry(&self, entry: &LogEntry) -> Result<String> {
        let mut record = serde_json::to_string(&Value::Object(self.to_object(entry)))?;
        record.push_str(&self.config.line_ending);
        Ok(record)
    }

    fn name(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Caller, LogLevel};
    use chrono::{Local, TimeZone};
    use std::time::Duration;

    fn fixed_entry(level: LogLevel, message: &str) -> LogEntry {
        let at = Local
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(100);
        LogEntry::new(level, message)
            .with_timestamp(at)
            .with_caller(Caller::new("/src/pkg/file.rs", 42))
    }

    #[test]
    fn test_record_shape() {
        let mut encoder = JsonEncoder::new(EncoderConfig::default());
        encoder.add_string("custom-key", "custom-value");

        let record = encoder
            .encode_entry(&fixed_entry(LogLevel::Info, "started"))
            .unwrap();

        assert_eq!(
            record,
            "{\"level\":\"INFO\",\"time\":\"2024-01-02T03:04:05.0001\",\
             \"caller\":\"pkg/file.rs:42\",\"message\":\"started\",\
             \"custom-key\":\"custom-value\"}\n"
        );
    }

    #[test]
    fn test_logger_name_and_context() {
        let encoder = JsonEncoder::new(EncoderConfig::default());
        let entry = fixed_entry(LogLevel::Warn, "slow")
            .with_logger_name("db")
            .with_context(
                LogContext::new()
                    .with_field("elapsed", Duration::from_millis(1500))
                    .with_field("retries", 2),
            );

        let record = encoder.encode_entry(&entry).unwrap();
        let parsed: Value = serde_json::from_str(&record).unwrap();
        assert_eq!(parsed["Logger"], "db");
        assert_eq!(parsed["elapsed"], 1.5);
        assert_eq!(parsed["retries"], 2);
    }

    #[test]
    fn test_static_fields_keep_order() {
        let mut encoder = JsonEncoder::new(EncoderConfig::default());
        encoder.add_string("zone", "b");
        encoder.add_string("app", "a");

        let object = encoder.to_object(&fixed_entry(LogLevel::Info, "hi"));
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["level", "time", "caller", "message", "zone", "app"]);
    }

    #[test]
    fn test_reserved_key_collision_is_last_write_wins() {
        let mut encoder = JsonEncoder::new(EncoderConfig::default());
        encoder.add_string("level", "custom");

        let object = encoder.to_object(&fixed_entry(LogLevel::Info, "hi"));
        assert_eq!(object["level"], "custom");
        assert_eq!(object.len(), 4);
    }

    #[test]
    fn test_stacktrace_is_last() {
        let encoder = JsonEncoder::new(EncoderConfig::default());
        let entry = fixed_entry(LogLevel::Error, "boom").with_stacktrace();

        let object = encoder.to_object(&entry);
        assert_eq!(object.keys().last().map(String::as_str), Some("stacktrace"));
    }

    #[test]
    fn test_omitted_keys() {
        let config = EncoderConfig {
            caller_key: None,
            time_key: None,
            ..EncoderConfig::default()
        };
        let encoder = JsonEncoder::new(config);

        let object = encoder.to_object(&fixed_entry(LogLevel::Debug, "quiet"));
        assert!(object.get("caller").is_none());
        assert!(object.get("time").is_none());
        assert_eq!(object["level"], "DEBUG");
    }

    #[test]
    fn test_multiline_message_round_trips() {
        let encoder = JsonEncoder::new(EncoderConfig::default());
        let record = encoder
            .encode_entry(&fixed_entry(LogLevel::Info, "line one\nline two\\n"))
            .unwrap();

        assert_eq!(record.lines().count(), 1);
        let parsed: Value = serde_json::from_str(&record).unwrap();
        assert_eq!(parsed["message"], "line one\nline two\\n");
    }

    #[test]
    fn test_unrenderable_time_format_uses_layout() {
        let config: EncoderConfig =
            serde_json::from_str(r#"{"encode_time":{"Custom":"%Q"}}"#).unwrap();
        let encoder = JsonEncoder::new(config);

        let object = encoder.to_object(&fixed_entry(LogLevel::Info, "hello"));
        assert_eq!(object["time"], "2024-01-02T03:04:05.0001");
    }
}
