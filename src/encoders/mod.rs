//! Encoder implementations

pub mod console;
pub mod json;

pub use console::ConsoleEncoder;
pub use json::JsonEncoder;

// Re-export trait for convenience
pub use crate::core::Encoder;

use crate::core::{DurationEncoding, LogContext};
use serde_json::{Map, Value};

/// Insert fields in order; a repeated key overwrites the earlier value
fn insert_fields(object: &mut Map<String, Value>, fields: &LogContext, durations: DurationEncoding) {
    for (key, value) in fields.iter() {
        object.insert(key.clone(), value.to_json_value(durations));
    }
}
