//! Calendar date handling
//!
//! Coverage intervals, claim dates and query dates are all plain calendar
//! dates (`NaiveDate`). This module provides:
//! - `DateRange`: an inclusive `[start, end]` interval
//! - the supported query range (1900-01-01 to 2100-12-31)
//! - `Timezone`: the jurisdiction used to decide what "today" is

use chrono::{DateTime, Days, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use thiserror::Error;

/// Timezone wrapper used to resolve the current calendar day
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for Timezone {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tz::from_str(s)
            .map(Timezone)
            .map_err(|_| TemporalError::InvalidTimezone(s.to_string()))
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Converts a UTC instant to the local calendar day
    pub fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.0).date_naive()
    }

    /// The current calendar day in this timezone
    pub fn today(&self) -> NaiveDate {
        self.date_of(Utc::now())
    }

    /// The calendar day before `date`
    pub fn day_before(date: NaiveDate) -> Option<NaiveDate> {
        date.checked_sub_days(Days::new(1))
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::UTC)
    }
}

/// Errors related to calendar dates
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must not be after end {end}")]
    InvalidPeriod {
        start: String,
        end: String,
    },

    #[error("Invalid date format. Use ISO YYYY-MM-DD.")]
    InvalidDateFormat(String),

    #[error("Date out of supported range (1900-01-01 to 2100-12-31).")]
    DateOutOfRange(NaiveDate),

    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),
}

/// Represents an inclusive date range, e.g. a policy's coverage interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `start > end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start > end {
            return Err(TemporalError::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Both bounds are inclusive
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// The range of dates accepted by the validity query
    pub fn supported() -> Self {
        Self {
            start: supported_min(),
            end: supported_max(),
        }
    }
}

fn supported_min() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn supported_max() -> NaiveDate {
    NaiveDate::from_ymd_opt(2100, 12, 31).unwrap_or(NaiveDate::MAX)
}

/// Parses an ISO `YYYY-MM-DD` date
///
/// Only the exact ten-character shape is accepted: no surrounding
/// whitespace, no sign, and zero-padded month and day.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, TemporalError> {
    let invalid = || TemporalError::InvalidDateFormat(input.to_string());

    if !has_iso_shape(input) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| invalid())
}

fn has_iso_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parses an ISO date and checks it lies within [`DateRange::supported`]
pub fn parse_supported_date(input: &str) -> Result<NaiveDate, TemporalError> {
    let date = parse_iso_date(input)?;
    if !DateRange::supported().contains(date) {
        return Err(TemporalError::DateOutOfRange(date));
    }
    Ok(date)
}
