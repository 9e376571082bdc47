//! Test Data Builders
//!
//! Builders with sensible defaults so tests only spell out the fields they
//! care about.

use chrono::NaiveDate;
use core_kernel::{CarId, ClaimId, OwnerId, PolicyId};
use domain_car::{Car, Owner};
use domain_claims::{InsuranceClaim, NewClaim};
use domain_policy::{InsurancePolicy, NewPolicy};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use rust_decimal::Decimal;

use crate::fixtures::{AmountFixtures, DateFixtures};

/// Builder for cars
pub struct CarBuilder {
    id: CarId,
    vin: String,
    make: String,
    model: String,
    year_of_manufacture: i32,
    owner: Option<Owner>,
}

impl CarBuilder {
    /// Creates a builder for car `id` with a generated VIN and no owner
    pub fn new(id: i64) -> Self {
        Self {
            id: CarId::new(id),
            vin: format!("TESTVIN{id:010}"),
            make: "Dacia".to_string(),
            model: "Logan".to_string(),
            year_of_manufacture: 2018,
            owner: None,
        }
    }

    pub fn with_vin(mut self, vin: impl Into<String>) -> Self {
        self.vin = vin.into();
        self
    }

    pub fn with_make_and_model(mut self, make: impl Into<String>, model: impl Into<String>) -> Self {
        self.make = make.into();
        self.model = model.into();
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year_of_manufacture = year;
        self
    }

    pub fn with_owner(mut self, owner: Owner) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Attaches an owner with a fake name and email
    pub fn with_fake_owner(mut self, owner_id: i64) -> Self {
        self.owner = Some(Owner {
            id: OwnerId::new(owner_id),
            name: Name().fake(),
            email: SafeEmail().fake(),
        });
        self
    }

    pub fn build(self) -> Car {
        Car {
            id: self.id,
            vin: self.vin,
            make: self.make,
            model: self.model,
            year_of_manufacture: self.year_of_manufacture,
            owner: self.owner,
        }
    }
}

/// Builder for insurance policies
///
/// Defaults to "ProviderX" covering the whole of 2025 for car 1.
pub struct PolicyBuilder {
    id: PolicyId,
    car_id: CarId,
    provider: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self {
            id: PolicyId::new(1),
            car_id: CarId::new(1),
            provider: "ProviderX".to_string(),
            start_date: DateFixtures::policy_start(),
            end_date: DateFixtures::policy_end(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = PolicyId::new(id);
        self
    }

    pub fn for_car(mut self, car_id: i64) -> Self {
        self.car_id = CarId::new(car_id);
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    /// Sets the inclusive coverage interval
    pub fn covering(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn ending_on(mut self, end: NaiveDate) -> Self {
        self.end_date = end;
        self
    }

    pub fn build(self) -> InsurancePolicy {
        InsurancePolicy {
            id: self.id,
            car_id: self.car_id,
            provider: self.provider,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }

    /// Builds creation data, dropping the id
    pub fn build_new(self) -> NewPolicy {
        NewPolicy::new(self.car_id, self.provider, self.start_date, self.end_date)
    }
}

/// Builder for insurance claims
///
/// Defaults to the 1200.50 accident of 2025-09-06 on car 1.
pub struct ClaimBuilder {
    id: ClaimId,
    car_id: CarId,
    claim_date: NaiveDate,
    description: String,
    amount: Decimal,
}

impl Default for ClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimBuilder {
    pub fn new() -> Self {
        Self {
            id: ClaimId::new(1),
            car_id: CarId::new(1),
            claim_date: DateFixtures::accident_day(),
            description: "Accident".to_string(),
            amount: AmountFixtures::accident(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = ClaimId::new(id);
        self
    }

    pub fn for_car(mut self, car_id: i64) -> Self {
        self.car_id = CarId::new(car_id);
        self
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.claim_date = date;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    pub fn build(self) -> InsuranceClaim {
        InsuranceClaim {
            id: self.id,
            car_id: self.car_id,
            claim_date: self.claim_date,
            description: self.description,
            amount: self.amount,
        }
    }

    /// Builds registration data, dropping the id
    ///
    /// # Panics
    ///
    /// Panics if the amount is not positive
    pub fn build_new(self) -> NewClaim {
        NewClaim::new(self.car_id, self.claim_date, self.description, self.amount)
            .unwrap_or_else(|e| panic!("invalid test claim: {e}"))
    }
}
