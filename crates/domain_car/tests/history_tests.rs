//! Tests for car history through the public API

use chrono::NaiveDate;
use core_kernel::{CarId, ClaimId, PolicyId};
use domain_car::{build_history, CarEvent};
use domain_claims::NewClaim;
use domain_policy::NewPolicy;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_renewals_and_claims_interleave_by_date() {
    let car = CarId::new(3);
    let policies = vec![
        NewPolicy::new(car, "ProviderX", date(2024, 1, 1), date(2024, 12, 31))
            .into_policy(PolicyId::new(1)),
        NewPolicy::new(car, "ProviderY", date(2025, 1, 1), date(2025, 12, 31))
            .into_policy(PolicyId::new(2)),
    ];
    let claims = vec![
        NewClaim::new(car, date(2024, 7, 15), "Parking damage", dec!(350))
            .unwrap()
            .into_claim(ClaimId::new(1)),
        NewClaim::new(car, date(2025, 9, 6), "Accident", dec!(1200.50))
            .unwrap()
            .into_claim(ClaimId::new(2)),
    ];

    let dates: Vec<_> = build_history(&policies, &claims)
        .iter()
        .map(CarEvent::comparison_date)
        .collect();

    assert_eq!(
        dates,
        vec![date(2024, 1, 1), date(2024, 7, 15), date(2025, 1, 1), date(2025, 9, 6)]
    );
}

#[test]
fn test_policy_event_carries_provider_and_interval() {
    let policy = NewPolicy::new(CarId::new(1), "ProviderX", date(2025, 1, 1), date(2025, 12, 31))
        .into_policy(PolicyId::new(1));

    let history = build_history(&[policy], &[]);

    match &history[..] {
        [CarEvent::Policy { start_date, end_date, provider }] => {
            assert_eq!(*start_date, date(2025, 1, 1));
            assert_eq!(*end_date, date(2025, 12, 31));
            assert_eq!(provider, "ProviderX");
        }
        other => panic!("unexpected history: {other:?}"),
    }
}
