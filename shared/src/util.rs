//! Serde helpers for backend payloads
//!
//! The backend is loose about shapes: dates arrive as `YYYY-MM-DD` or full
//! ISO timestamps, prices as numbers or numeric strings, lists as `null`.
//! These helpers turn that into typed fields at the parse boundary.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Wire format used when timestamps are written back out
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a backend timestamp into hotel-local wall-clock time
///
/// Accepts RFC 3339 (offset kept as local time), ISO date-times with or
/// without fractional seconds, and bare dates (midnight).
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    const FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
    ];
    for fmt in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Read a JSON number or numeric string as a finite f64
pub fn value_to_f64(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|f| f.is_finite())
}

/// Deserialize `null` as `T::default()`
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `Option<NaiveDateTime>` from any of the formats [`parse_timestamp`] knows
///
/// Unparseable strings become `None` rather than failing the whole payload.
pub mod opt_datetime {
    use super::{DATETIME_FORMAT, parse_timestamp};
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.format(DATETIME_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse_timestamp))
    }
}

/// `Option<f64>` from a number, a numeric string, or null
pub mod opt_f64 {
    use super::value_to_f64;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(raw.as_ref().and_then(value_to_f64))
    }
}

/// `Option<u32>` from a non-negative integer, a numeric string, or null
pub mod opt_u32 {
    use super::value_to_f64;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(value: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(raw
            .as_ref()
            .and_then(value_to_f64)
            .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u32::MAX as f64)
            .map(|f| f as u32))
    }
}

/// `Option<String>` that also accepts numbers (floors come as `3` or `"3"`)
pub mod opt_text {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(match raw {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
    }
}

/// Normalize a status label for comparison: drop spaces, `_` and `-`, lowercase
pub fn normalize_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Status enums that keep unknown backend values verbatim
///
/// Matching is case-insensitive and ignores spaces, `_` and `-`, so
/// `"Checked Out"`, `"checked_out"` and `"CheckedOut"` are the same value.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Value not known to this client, kept as sent
            Other(String),
        }

        impl $name {
            /// Canonical wire label
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Other(s) => s.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                let key = $crate::util::normalize_key(&raw);
                $(
                    if key == $crate::util::normalize_key($wire) {
                        return Self::$variant;
                    }
                )+
                Self::Other(raw)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::from(raw.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.as_str().to_string()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::Other(String::new())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use wire_enum;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_parse_timestamp_formats() {
        let date_only = parse_timestamp("2025-12-12").unwrap();
        assert_eq!(date_only.date(), NaiveDate::from_ymd_opt(2025, 12, 12).unwrap());
        assert_eq!(date_only.hour(), 0);

        let iso = parse_timestamp("2025-12-12T14:30:00").unwrap();
        assert_eq!(iso.hour(), 14);
        assert_eq!(iso.minute(), 30);

        let fractional = parse_timestamp("2025-12-12T14:30:00.1234567").unwrap();
        assert_eq!(fractional.minute(), 30);

        let rfc = parse_timestamp("2025-12-12T14:30:00+05:30").unwrap();
        assert_eq!(rfc.hour(), 14);

        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("not a date").is_none());
    }

    #[test]
    fn test_value_to_f64() {
        assert_eq!(value_to_f64(&serde_json::json!(2000)), Some(2000.0));
        assert_eq!(value_to_f64(&serde_json::json!("1500.50")), Some(1500.5));
        assert_eq!(value_to_f64(&serde_json::json!("abc")), None);
        assert_eq!(value_to_f64(&serde_json::json!(null)), None);
        assert_eq!(value_to_f64(&serde_json::json!(true)), None);
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("Checked Out"), "checkedout");
        assert_eq!(normalize_key("checked_out"), "checkedout");
        assert_eq!(normalize_key("IN-PROGRESS"), "inprogress");
    }
}
