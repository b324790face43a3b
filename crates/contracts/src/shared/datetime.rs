//! Serde helper for the two timestamp shapes found in incident payloads.
//!
//! Upstream batch exporters send `2024-12-01 10:00:00` while newer feeds
//! send RFC 3339 (`2025-01-14T09:38:37.843Z`). Both deserialize; output is
//! always RFC 3339 with millisecond precision.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

const LEGACY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a timestamp string in either accepted format.
pub fn parse(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, LEGACY_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse(&s).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {s}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_legacy_format() {
        let dt = parse("2024-12-01 10:05:00").unwrap();
        assert_eq!(dt.hour(), 10);
        assert_eq!(dt.minute(), 5);
    }

    #[test]
    fn parses_rfc3339_with_millis() {
        let dt = parse("2025-01-14T09:38:37.843Z").unwrap();
        assert_eq!(dt.second(), 37);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse("not a date").is_none());
        assert!(parse("2024-13-45 99:00:00").is_none());
        assert!(parse("").is_none());
    }
}
