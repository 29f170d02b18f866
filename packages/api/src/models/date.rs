//! Calendar dates as the backend sends them.
//!
//! Project dates arrive either as plain `YYYY-MM-DD` strings or as full
//! RFC 3339 timestamps (`2024-03-01T00:00:00.000Z`). Only the calendar day
//! matters to the console, so both forms collapse to a [`NaiveDate`].

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

const WIRE_FORMAT: &str = "%Y-%m-%d";

/// Parse the leading `YYYY-MM-DD` of a date or timestamp string.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let day = s.trim().get(..10)?;
    NaiveDate::parse_from_str(day, WIRE_FORMAT).ok()
}

/// Format for display, e.g. `Fri Mar 01 2024`.
pub fn display_date(date: &NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Format for `<input type="date">` values and request bodies.
pub fn input_value(date: &NaiveDate) -> String {
    date.format(WIRE_FORMAT).to_string()
}

pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&input_value(date))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw}")))
}
