//! Pre-built Test Fixtures
//!
//! Consistent, predictable data for unit and HTTP tests. The values mirror
//! the demo data the migrations seed.

use chrono::NaiveDate;
use core_kernel::{CarId, OwnerId};
use domain_car::{Car, Owner};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for calendar dates
pub struct DateFixtures;

impl DateFixtures {
    /// First covered day of the standard policy (2025-01-01)
    pub fn policy_start() -> NaiveDate {
        date(2025, 1, 1)
    }

    /// Last covered day of the standard policy (2025-12-31)
    pub fn policy_end() -> NaiveDate {
        date(2025, 12, 31)
    }

    /// Date of the standard accident claim (2025-09-06)
    pub fn accident_day() -> NaiveDate {
        date(2025, 9, 6)
    }

    /// A day inside the standard policy (2025-09-07)
    pub fn covered_day() -> NaiveDate {
        date(2025, 9, 7)
    }
}

/// Fixture for owners and cars
pub struct CarFixtures;

impl CarFixtures {
    pub fn ana_pop() -> Owner {
        Owner {
            id: OwnerId::new(1),
            name: "Ana Pop".to_string(),
            email: "ana.pop@example.com".to_string(),
        }
    }

    /// Car 1: a 2018 Dacia Logan owned by Ana Pop
    pub fn dacia_logan() -> Car {
        Car {
            id: CarId::new(1),
            vin: "VIN12345".to_string(),
            make: "Dacia".to_string(),
            model: "Logan".to_string(),
            year_of_manufacture: 2018,
            owner: Some(Self::ana_pop()),
        }
    }

    /// Car 2: a 2021 VW Golf without a registered owner
    pub fn unowned_golf() -> Car {
        Car {
            id: CarId::new(2),
            vin: "VIN67890".to_string(),
            make: "VW".to_string(),
            model: "Golf".to_string(),
            year_of_manufacture: 2021,
            owner: None,
        }
    }
}

/// Fixture for claim amounts
pub struct AmountFixtures;

impl AmountFixtures {
    pub fn accident() -> Decimal {
        dec!(1200.50)
    }

    pub fn scratch() -> Decimal {
        dec!(150.00)
    }
}

/// Builds a date from known-valid components
///
/// # Panics
///
/// Panics if the components do not form a calendar date
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid fixture date {year}-{month}-{day}"))
}
