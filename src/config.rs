//! Serializable logger configuration
//!
//! ```
//! use rust_custom_logger::{LoggerConfig, LogLevel, OutputFormat};
//!
//! let config = LoggerConfig::from_json(r#"{
//!     "level": "debug",
//!     "format": "console",
//!     "path": "app.log",
//!     "fields": [{"key": "service", "value": "billing"}]
//! }"#)?;
//!
//! assert_eq!(config.level, LogLevel::Debug);
//! assert_eq!(config.format, OutputFormat::Console);
//! # Ok::<(), rust_custom_logger::LoggerError>(())
//! ```

use crate::core::{CustomField, LogLevel, Logger, LoggerError, OutputFormat, Result};
use crate::factory::{new_custom_logger, new_custom_logger_or_stdout};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: LogLevel,
    /// Unknown names fall back to JSON
    pub format: OutputFormat,
    pub path: PathBuf,
    pub fields: Vec<CustomField>,
    /// Log to stdout alone when the file cannot be opened
    pub fallback_to_stdout: bool,
}

impl LoggerConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(CustomField::new(key, value));
        self
    }

    #[must_use]
    pub fn with_stdout_fallback(mut self, enabled: bool) -> Self {
        self.fallback_to_stdout = enabled;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(LoggerError::config("LoggerConfig", "log file path is empty"));
        }
        if let Some(field) = self.fields.iter().find(|f| f.key.is_empty()) {
            return Err(LoggerError::config(
                "LoggerConfig",
                format!("static field with value '{}' has an empty key", field.value),
            ));
        }
        Ok(())
    }

    /// Validate and build the logger
    ///
    /// With `fallback_to_stdout` set, an unopenable file is reported on
    /// stderr and the logger writes to stdout only.
    pub fn build(&self) -> Result<Logger> {
        self.validate()?;

        if !self.fallback_to_stdout {
            return new_custom_logger(self.level, self.format, &self.path, &self.fields);
        }

        let (logger, open_error) =
            new_custom_logger_or_stdout(self.level, self.format, &self.path, &self.fields);
        if let Some(e) = open_error {
            eprintln!("[LOGGER WARNING] {}. Logging to stdout only.", e);
        }
        Ok(logger)
    }
}
