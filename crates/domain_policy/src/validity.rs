//! Insurance validity evaluation
//!
//! A car is insured on a day if at least one of its policies covers that
//! day. Callers pass the policies already filtered to one car and a date
//! that has already been checked against the supported query range.

use chrono::NaiveDate;

use crate::policy::InsurancePolicy;

/// Returns true if any policy's inclusive interval contains `date`
///
/// Overlapping policies are not merged; the scan stops at the first policy
/// that covers the day. An empty slice is never valid.
pub fn is_insurance_valid(policies: &[InsurancePolicy], date: NaiveDate) -> bool {
    policies.iter().any(|policy| policy.covers(date))
}
