//! Insurance policy model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{CarId, DateRange, PolicyId};

/// An insurance policy covering one car
///
/// The coverage interval is `[start_date, end_date]`, both ends inclusive.
/// `end_date >= start_date` is expected but not enforced; a reversed
/// interval simply covers no day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsurancePolicy {
    pub id: PolicyId,
    pub car_id: CarId,
    pub provider: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl InsurancePolicy {
    /// Returns the coverage interval
    pub fn coverage(&self) -> DateRange {
        DateRange {
            start: self.start_date,
            end: self.end_date,
        }
    }

    /// Returns true if the policy covers the given day
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.coverage().contains(date)
    }

    /// Returns true if the last covered day is `date`
    pub fn ends_on(&self, date: NaiveDate) -> bool {
        self.end_date == date
    }

    /// Replaces every field except the identifier
    pub fn apply(&mut self, changes: NewPolicy) {
        self.car_id = changes.car_id;
        self.provider = changes.provider;
        self.start_date = changes.start_date;
        self.end_date = changes.end_date;
    }
}

/// Data for creating or fully replacing a policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPolicy {
    pub car_id: CarId,
    pub provider: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl NewPolicy {
    /// Creates policy data
    ///
    /// The provider is stored as given; an empty name is allowed.
    pub fn new(
        car_id: CarId,
        provider: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            car_id,
            provider: provider.into(),
            start_date,
            end_date,
        }
    }

    /// Attaches the store-assigned identifier
    pub fn into_policy(self, id: PolicyId) -> InsurancePolicy {
        InsurancePolicy {
            id,
            car_id: self.car_id,
            provider: self.provider,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}
