//! Car insurance service
//!
//! Orchestrates the car, policy and claim ports behind the operations the
//! HTTP layer exposes. Every operation addressed to a car checks that the
//! car exists before touching policies or claims.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, instrument};

use core_kernel::{CarId, HealthCheckResult, PolicyId};
use domain_claims::{ClaimPort, InsuranceClaim, NewClaim};
use domain_policy::{is_insurance_valid, InsurancePolicy, NewPolicy, PolicyPort};

use crate::car::Car;
use crate::error::CarError;
use crate::history::{build_history, CarEvent};
use crate::ports::CarPort;

/// Result of an insurance validity query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsuranceValidity {
    pub car_id: CarId,
    pub date: NaiveDate,
    pub valid: bool,
}

/// Service combining the storage ports of the car insurance domain
#[derive(Clone)]
pub struct CarInsuranceService {
    cars: Arc<dyn CarPort>,
    policies: Arc<dyn PolicyPort>,
    claims: Arc<dyn ClaimPort>,
}

impl CarInsuranceService {
    /// Creates a service over the given ports
    pub fn new(
        cars: Arc<dyn CarPort>,
        policies: Arc<dyn PolicyPort>,
        claims: Arc<dyn ClaimPort>,
    ) -> Self {
        Self { cars, policies, claims }
    }

    /// The policy port, shared with the expiry notifier
    pub fn policy_port(&self) -> Arc<dyn PolicyPort> {
        Arc::clone(&self.policies)
    }

    /// Lists every car with its owner
    pub async fn list_cars(&self) -> Result<Vec<Car>, CarError> {
        Ok(self.cars.list_cars().await?)
    }

    /// Checks whether a car is insured on `date`
    ///
    /// # Errors
    ///
    /// `CarError::CarNotFound` if the car does not exist
    #[instrument(skip(self))]
    pub async fn insurance_validity(&self, car_id: CarId, date: NaiveDate) -> Result<InsuranceValidity, CarError> {
        self.require_car(car_id).await?;
        let policies = self.policies.list_policies_for_car(car_id).await?;

        Ok(InsuranceValidity {
            car_id,
            date,
            valid: is_insurance_valid(&policies, date),
        })
    }

    /// Returns the car's policies and claims as one timeline, oldest first
    #[instrument(skip(self))]
    pub async fn history(&self, car_id: CarId) -> Result<Vec<CarEvent>, CarError> {
        self.require_car(car_id).await?;
        let policies = self.policies.list_policies_for_car(car_id).await?;
        let claims = self.claims.list_claims_for_car(car_id).await?;

        Ok(build_history(&policies, &claims))
    }

    /// Registers a claim against the car it names
    #[instrument(skip(self, claim), fields(car_id = %claim.car_id))]
    pub async fn register_claim(&self, claim: NewClaim) -> Result<InsuranceClaim, CarError> {
        self.require_car(claim.car_id).await?;
        let created = self.claims.create_claim(claim).await?;

        info!(claim_id = %created.id, car_id = %created.car_id, amount = %created.amount, "Claim registered");
        Ok(created)
    }

    /// Creates a policy
    ///
    /// # Errors
    ///
    /// `CarError::PolicyCarNotFound` if the referenced car does not exist
    #[instrument(skip(self, policy), fields(car_id = %policy.car_id))]
    pub async fn create_policy(&self, policy: NewPolicy) -> Result<InsurancePolicy, CarError> {
        self.require_policy_car(policy.car_id).await?;
        let created = self.policies.create_policy(policy).await?;

        info!(policy_id = %created.id, car_id = %created.car_id, "Policy created");
        Ok(created)
    }

    /// Replaces every field of an existing policy
    ///
    /// The policy is looked up before the referenced car is checked.
    ///
    /// # Errors
    ///
    /// - `CarError::PolicyNotFound` if the policy does not exist
    /// - `CarError::PolicyCarNotFound` if the referenced car does not exist
    #[instrument(skip(self, policy), fields(car_id = %policy.car_id))]
    pub async fn update_policy(&self, id: PolicyId, policy: NewPolicy) -> Result<InsurancePolicy, CarError> {
        match self.policies.get_policy(id).await {
            Ok(_) => {}
            Err(e) if e.is_not_found() => return Err(CarError::PolicyNotFound(id)),
            Err(e) => return Err(e.into()),
        }
        self.require_policy_car(policy.car_id).await?;

        let updated = match self.policies.update_policy(id, policy).await {
            Ok(updated) => updated,
            Err(e) if e.is_not_found() => return Err(CarError::PolicyNotFound(id)),
            Err(e) => return Err(e.into()),
        };

        info!(policy_id = %updated.id, car_id = %updated.car_id, "Policy updated");
        Ok(updated)
    }

    /// Runs the health check of every storage port
    pub async fn health_checks(&self) -> Vec<HealthCheckResult> {
        vec![
            self.cars.health_check().await,
            self.policies.health_check().await,
            self.claims.health_check().await,
        ]
    }

    async fn require_car(&self, car_id: CarId) -> Result<(), CarError> {
        if self.cars.car_exists(car_id).await? {
            Ok(())
        } else {
            Err(CarError::CarNotFound(car_id))
        }
    }

    async fn require_policy_car(&self, car_id: CarId) -> Result<(), CarError> {
        if self.cars.car_exists(car_id).await? {
            Ok(())
        } else {
            Err(CarError::PolicyCarNotFound(car_id))
        }
    }
}
