//! Serde helpers for the portal's wire layout.
//!
//! Form submissions send empty strings for unset fields, and times of day
//! travel as `HH:MM`. These helpers map empty strings to `None` and keep the
//! minute-resolution format on the way out.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serializer};

const TIME_FORMAT: &str = "%H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a time of day, accepting `HH:MM` or `HH:MM:SS`.
pub fn parse_time(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s, TIME_FORMAT).or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
}

/// Parses a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
}

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize an optional NaiveDate, treating empty strings as None.
/// Expects format: YYYY-MM-DD
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => parse_date(s.trim())
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// `HH:MM` (de)serialization for `NaiveTime`.
pub mod hhmm {
    use super::*;

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&time.format(TIME_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_time(s.trim()).map_err(serde::de::Error::custom)
    }
}

/// `HH:MM` (de)serialization for `Option<NaiveTime>`, with empty strings as None.
pub mod hhmm_option {
    use super::*;

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(time) => serializer.collect_str(&time.format(TIME_FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: Option<String> = Option::deserialize(deserializer)?;
        match s {
            Some(s) if !s.trim().is_empty() => parse_time(s.trim())
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}
