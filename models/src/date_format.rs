//! `YYYY-MM-DD` codec for calendar dates.
//!
//! Decoding accepts plain dates and date-time strings whose first ten
//! characters are a date (refunds carry `"2024-01-15 10:30:00"`). Encoding
//! always writes the date only.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse the leading calendar date of an API date or date-time string.
pub fn parse_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    let trimmed = raw.trim();
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT)
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_date(date))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(|e| serde::de::Error::custom(format!("invalid date '{raw}': {e}")))
}

/// Same codec for optional fields. Null and empty strings decode as `None`.
pub mod option {
    use super::{format_date, parse_date};

    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&format_date(date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.trim().is_empty() => parse_date(&raw)
                .map(Some)
                .map_err(|e| serde::de::Error::custom(format!("invalid date '{raw}': {e}"))),
            _ => Ok(None),
        }
    }
}
