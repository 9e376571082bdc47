//! Property-Based Test Generators
//!
//! Proptest strategies for dates, policies and claims that respect the
//! domain's invariants.

use chrono::{Duration, NaiveDate};
use core_kernel::{CarId, ClaimId, DateRange, PolicyId};
use domain_claims::InsuranceClaim;
use domain_policy::InsurancePolicy;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for dates inside the supported query range (1900-01-01 to 2100-12-31)
pub fn supported_date_strategy() -> impl Strategy<Value = NaiveDate> {
    let range = DateRange::supported();
    (0..=range.days()).prop_map(move |offset| range.start + Duration::days(offset))
}

/// Strategy for dates within a decade, where overlaps are likely
pub fn recent_date_strategy() -> impl Strategy<Value = NaiveDate> {
    let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or(NaiveDate::MIN);
    (0i64..3650).prop_map(move |offset| base + Duration::days(offset))
}

/// Strategy for ordered `(start, end)` coverage intervals of one day to two years
pub fn policy_interval_strategy() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (recent_date_strategy(), 0i64..730).prop_map(|(start, length)| (start, start + Duration::days(length)))
}

/// Strategy for positive claim amounts with two decimal places
pub fn claim_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for a policy on car 1
pub fn policy_strategy() -> impl Strategy<Value = InsurancePolicy> {
    (1i64..10_000, policy_interval_strategy(), "[A-Z][a-z]{2,10}").prop_map(|(id, (start, end), provider)| {
        InsurancePolicy {
            id: PolicyId::new(id),
            car_id: CarId::new(1),
            provider,
            start_date: start,
            end_date: end,
        }
    })
}

/// Strategy for a claim on car 1
pub fn claim_strategy() -> impl Strategy<Value = InsuranceClaim> {
    (1i64..10_000, recent_date_strategy(), "[a-z ]{0,20}", claim_amount_strategy()).prop_map(
        |(id, claim_date, description, amount)| InsuranceClaim {
            id: ClaimId::new(id),
            car_id: CarId::new(1),
            claim_date,
            description,
            amount,
        },
    )
}

/// Strategy for a car's policy set
pub fn policies_strategy(max: usize) -> impl Strategy<Value = Vec<InsurancePolicy>> {
    prop::collection::vec(policy_strategy(), 0..=max)
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn prop_supported_dates_in_range(date in supported_date_strategy()) {
            prop_assert!(DateRange::supported().contains(date));
        }

        #[test]
        fn prop_intervals_are_ordered((start, end) in policy_interval_strategy()) {
            prop_assert!(start <= end);
        }

        #[test]
        fn prop_claim_amounts_positive(amount in claim_amount_strategy()) {
            prop_assert!(amount > Decimal::ZERO);
        }
    }
}
