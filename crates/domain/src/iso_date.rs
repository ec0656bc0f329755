// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar date helpers using the `YYYY-MM-DD` form.
//!
//! Usable as a serde `with` module for `time::Date` fields.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serializer};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses a `YYYY-MM-DD` date string.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid calendar date.
pub fn parse(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, DATE_FORMAT).map_err(|err| DomainError::DateParseError {
        date_string: value.to_string(),
        error: err.to_string(),
    })
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format(date: Date) -> String {
    // Years beyond four digits fall back to the Display form.
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// Serializes a date as a `YYYY-MM-DD` string.
///
/// # Errors
///
/// Propagates serializer errors.
pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(*date))
}

/// Deserializes a date from a `YYYY-MM-DD` string.
///
/// # Errors
///
/// Returns a deserializer error if the string is not a valid calendar date.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
    let value: String = String::deserialize(deserializer)?;
    parse(&value).map_err(serde::de::Error::custom)
}
