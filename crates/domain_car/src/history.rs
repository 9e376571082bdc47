//! Car event history
//!
//! Merges a car's policies and claims into one timeline. Policies are dated
//! by their start date, claims by their claim date.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use domain_claims::InsuranceClaim;
use domain_policy::InsurancePolicy;

/// A dated entry in a car's history
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarEvent {
    Policy {
        start_date: NaiveDate,
        end_date: NaiveDate,
        provider: String,
    },
    Claim {
        date: NaiveDate,
        description: String,
        amount: Decimal,
    },
}

impl CarEvent {
    /// The date the event is ordered by
    pub fn comparison_date(&self) -> NaiveDate {
        match self {
            CarEvent::Policy { start_date, .. } => *start_date,
            CarEvent::Claim { date, .. } => *date,
        }
    }

    pub fn is_policy(&self) -> bool {
        matches!(self, CarEvent::Policy { .. })
    }
}

impl From<&InsurancePolicy> for CarEvent {
    fn from(policy: &InsurancePolicy) -> Self {
        CarEvent::Policy {
            start_date: policy.start_date,
            end_date: policy.end_date,
            provider: policy.provider.clone(),
        }
    }
}

impl From<&InsuranceClaim> for CarEvent {
    fn from(claim: &InsuranceClaim) -> Self {
        CarEvent::Claim {
            date: claim.claim_date,
            description: claim.description.clone(),
            amount: claim.amount,
        }
    }
}

/// Builds a car's history, oldest event first
///
/// Events with the same comparison date keep their input order, policies
/// before claims.
pub fn build_history(policies: &[InsurancePolicy], claims: &[InsuranceClaim]) -> Vec<CarEvent> {
    let mut events: Vec<CarEvent> = policies
        .iter()
        .map(CarEvent::from)
        .chain(claims.iter().map(CarEvent::from))
        .collect();

    // sort_by_key is stable
    events.sort_by_key(CarEvent::comparison_date);
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{CarId, ClaimId, PolicyId};
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn policy(id: i64, provider: &str, start: NaiveDate, end: NaiveDate) -> InsurancePolicy {
        InsurancePolicy {
            id: PolicyId::new(id),
            car_id: CarId::new(1),
            provider: provider.to_string(),
            start_date: start,
            end_date: end,
        }
    }

    fn claim(id: i64, on: NaiveDate, description: &str) -> InsuranceClaim {
        InsuranceClaim {
            id: ClaimId::new(id),
            car_id: CarId::new(1),
            claim_date: on,
            description: description.to_string(),
            amount: dec!(100),
        }
    }

    #[test]
    fn test_policy_then_claim() {
        let policies = vec![policy(1, "ProviderX", date(2025, 1, 1), date(2025, 12, 31))];
        let claims = vec![InsuranceClaim {
            amount: dec!(1200.50),
            ..claim(1, date(2025, 9, 6), "Accident")
        }];

        let history = build_history(&policies, &claims);

        assert_eq!(
            history,
            vec![
                CarEvent::Policy {
                    start_date: date(2025, 1, 1),
                    end_date: date(2025, 12, 31),
                    provider: "ProviderX".to_string(),
                },
                CarEvent::Claim {
                    date: date(2025, 9, 6),
                    description: "Accident".to_string(),
                    amount: dec!(1200.50),
                },
            ]
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert!(build_history(&[], &[]).is_empty());
    }

    #[test]
    fn test_claim_before_policy() {
        let policies = vec![policy(1, "ProviderX", date(2025, 6, 1), date(2026, 5, 31))];
        let claims = vec![claim(1, date(2025, 2, 14), "Hail")];

        let history = build_history(&policies, &claims);

        assert!(!history[0].is_policy());
        assert!(history[1].is_policy());
    }

    #[test]
    fn test_same_day_policy_precedes_claim() {
        let day = date(2025, 3, 1);
        let claims = vec![claim(1, day, "Windscreen")];
        let policies = vec![policy(1, "ProviderX", day, date(2025, 12, 31))];

        let history = build_history(&policies, &claims);

        assert!(history[0].is_policy());
        assert_eq!(history[1].comparison_date(), day);
    }

    #[test]
    fn test_same_day_claims_keep_input_order() {
        let day = date(2025, 3, 1);
        let claims = vec![claim(2, day, "second"), claim(1, day, "first")];

        let descriptions: Vec<_> = build_history(&[], &claims)
            .into_iter()
            .filter_map(|e| match e {
                CarEvent::Claim { description, .. } => Some(description),
                CarEvent::Policy { .. } => None,
            })
            .collect();

        assert_eq!(descriptions, vec!["second", "first"]);
    }

    fn arb_date() -> impl Strategy<Value = NaiveDate> {
        (0i64..3650).prop_map(|offset| date(2020, 1, 1) + chrono::Duration::days(offset))
    }

    proptest! {
        #[test]
        fn prop_history_is_sorted_and_complete(
            starts in prop::collection::vec(arb_date(), 0..8),
            claim_dates in prop::collection::vec(arb_date(), 0..8),
        ) {
            let policies: Vec<_> = starts
                .iter()
                .enumerate()
                .map(|(i, s)| policy(i as i64, "P", *s, *s + chrono::Duration::days(365)))
                .collect();
            let claims: Vec<_> = claim_dates
                .iter()
                .enumerate()
                .map(|(i, d)| claim(i as i64, *d, "C"))
                .collect();

            let history = build_history(&policies, &claims);

            prop_assert_eq!(history.len(), policies.len() + claims.len());
            prop_assert!(history
                .windows(2)
                .all(|w| w[0].comparison_date() <= w[1].comparison_date()));
            prop_assert_eq!(history.iter().filter(|e| e.is_policy()).count(), policies.len());
        }
    }
}
