//! Request and response bodies
//!
//! All bodies use camelCase field names. Monetary amounts are written as
//! JSON numbers with their exact decimal digits.

pub mod cars;
pub mod claims;
pub mod history;
pub mod policies;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use core_kernel::temporal::parse_iso_date;

/// Reads an optional ISO date, treating an empty string like an absent one
///
/// Absence is reported by validation with the field's own message, so
/// `"claimDate": ""` and a missing `claimDate` fail the same way.
pub(crate) fn optional_iso_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(text) if !text.trim().is_empty() => parse_iso_date(&text)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
