//! Timestamp formatting utilities
//!
//! Records are stamped with the local wall clock. The default layout is
//! `YYYY-MM-DDTHH:MM:SS.ffff` (four fractional digits, no offset).

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Write};

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use rust_custom_logger::core::TimestampFormat;
/// use chrono::{Local, TimeZone};
///
/// let at = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
/// assert_eq!(TimestampFormat::Layout.format(&at), "2024-01-02T03:04:05.0000");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2024-01-02T03:04:05.0001`
    #[default]
    Layout,

    /// RFC 3339 format: `2024-01-02T03:04:05.000123+00:00`
    Rfc3339,

    /// Unix timestamp in milliseconds, emitted as a JSON number
    UnixMillis,

    /// Custom strftime format
    ///
    /// ```
    /// use rust_custom_logger::core::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a timestamp according to this format
    ///
    /// A custom format chrono cannot render falls back to [`TimestampFormat::Layout`].
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match self {
            TimestampFormat::Layout => {
                // leap seconds report >= 1e9 nanos
                let ten_thousandths = (datetime.timestamp_subsec_nanos() / 100_000).min(9_999);
                format!(
                    "{}.{:04}",
                    datetime.format("%Y-%m-%dT%H:%M:%S"),
                    ten_thousandths
                )
            }
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut out = String::new();
                match write!(out, "{}", datetime.format(format_str)) {
                    Ok(()) => out,
                    Err(_) => TimestampFormat::Layout.format(datetime),
                }
            }
        }
    }

    /// Render for a JSON record; numeric formats become numbers
    #[must_use]
    pub fn to_json_value<Tz>(&self, datetime: &DateTime<Tz>) -> serde_json::Value
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match self {
            TimestampFormat::UnixMillis => {
                serde_json::Value::Number(datetime.timestamp_millis().into())
            }
            _ => serde_json::Value::String(self.format(datetime)),
        }
    }

    /// Check if this is a Unix-based numeric format
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TimestampFormat::UnixMillis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fixed_datetime() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123_456)
    }

    #[test]
    fn test_layout_has_four_fraction_digits() {
        let result = TimestampFormat::Layout.format(&fixed_datetime());
        assert_eq!(result, "2024-01-02T03:04:05.1234");
    }

    #[test]
    fn test_layout_pads_small_fractions() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
            + chrono::Duration::microseconds(100);
        assert_eq!(TimestampFormat::Layout.format(&at), "2024-01-02T03:04:05.0001");
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime());
        assert!(result.starts_with("2024-01-02T03:04:05"));
        assert!(result.contains("+00:00") || result.ends_with('Z'));
    }

    #[test]
    fn test_unix_millis_json_is_number() {
        let value = TimestampFormat::UnixMillis.to_json_value(&fixed_datetime());
        assert!(value.is_number());
        assert!(TimestampFormat::UnixMillis.is_numeric());
        assert!(!TimestampFormat::Layout.is_numeric());
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2024/01/02 03:04");
    }

    #[test]
    fn test_invalid_custom_format_falls_back_to_layout() {
        let format = TimestampFormat::Custom("%Q".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2024-01-02T03:04:05.1234");

        let value = format.to_json_value(&fixed_datetime());
        assert_eq!(value, serde_json::json!("2024-01-02T03:04:05.1234"));
    }

    #[test]
    fn test_default_is_layout() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::Layout);
    }

    #[test]
    fn test_deserialization() {
        let format: TimestampFormat = serde_json::from_str("\"Layout\"").expect("deserialize");
        assert_eq!(format, TimestampFormat::Layout);

        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%Y-%m-%d"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));
    }
}
