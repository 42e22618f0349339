//! Encoder trait for turning log entries into text

use super::{error::Result, log_entry::LogEntry};

/// Renders entries into complete, newline-terminated records
///
/// String fields added with `add_string` become part of the encoder and
/// appear on every record it renders afterwards.
pub trait Encoder: Send + Sync {
    fn add_string(&mut self, key: &str, value: &str);
    fn encode_entry(&self, entry: &LogEntry) -> Result<String>;
    fn name(&self) -> &str;
}
