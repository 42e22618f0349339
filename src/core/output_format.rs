//! Output format selection for log records
//!
//! - Json: one JSON object per line (default)
//! - Console: tab-separated human-readable text

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format for log records
///
/// Parsing never fails: any name other than `console` selects `Json`,
/// so a misconfigured format still produces machine-readable output.
///
/// ```
/// use rust_custom_logger::OutputFormat;
///
/// assert_eq!(OutputFormat::from_name("console"), OutputFormat::Console);
/// assert_eq!(OutputFormat::from_name("yaml"), OutputFormat::Json);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OutputFormat {
    /// Example: `{"level":"INFO","time":"2024-01-02T03:04:05.0001","caller":"src/main.rs:42","message":"started"}`
    #[default]
    Json,

    /// Example: `2024-01-02T03:04:05.0001	INFO 	src/main.rs:42	started	{"user":"alice"}`
    Console,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "console" | "text" => OutputFormat::Console,
            _ => OutputFormat::Json,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Console => "console",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(OutputFormat::from_name(s))
    }
}

impl From<String> for OutputFormat {
    fn from(name: String) -> Self {
        OutputFormat::from_name(&name)
    }
}

impl From<OutputFormat> for String {
    fn from(format: OutputFormat) -> Self {
        format.as_str().to_string()
    }
}
