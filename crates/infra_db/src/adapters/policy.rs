//! PostgreSQL Policy Adapter

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{CarId, DomainPort, HealthCheckResult, HealthCheckable, PolicyId, PortError};
use domain_policy::{InsurancePolicy, NewPolicy, PolicyPort};

use crate::repositories::policy::{NewPolicyRow, PolicyRepository, PolicyRow};

/// PostgreSQL-backed implementation of the PolicyPort trait
#[derive(Debug, Clone)]
pub struct PostgresPolicyAdapter {
    repository: PolicyRepository,
    pool: PgPool,
}

impl PostgresPolicyAdapter {
    /// Creates a new PostgreSQL policy adapter
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PolicyRepository::new(pool.clone()),
            pool,
        }
    }
}

impl DomainPort for PostgresPolicyAdapter {}

#[async_trait]
impl HealthCheckable for PostgresPolicyAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        super::ping(&self.pool, "postgres-policy-adapter").await
    }
}

#[async_trait]
impl PolicyPort for PostgresPolicyAdapter {
    #[instrument(skip(self))]
    async fn list_policies(&self) -> Result<Vec<InsurancePolicy>, PortError> {
        let rows = self.repository.list().await?;
        debug!(count = rows.len(), "Listed policies");
        Ok(rows.into_iter().map(row_to_policy).collect())
    }

    #[instrument(skip(self), fields(car_id = %car_id))]
    async fn list_policies_for_car(&self, car_id: CarId) -> Result<Vec<InsurancePolicy>, PortError> {
        let rows = self.repository.find_by_car(car_id.value()).await?;
        Ok(rows.into_iter().map(row_to_policy).collect())
    }

    #[instrument(skip(self), fields(policy_id = %id))]
    async fn get_policy(&self, id: PolicyId) -> Result<InsurancePolicy, PortError> {
        let row = self.repository.get_by_id(id.value()).await?;
        Ok(row_to_policy(row))
    }

    #[instrument(skip(self, policy), fields(car_id = %policy.car_id))]
    async fn create_policy(&self, policy: NewPolicy) -> Result<InsurancePolicy, PortError> {
        let row = self.repository.insert(new_row(policy)).await?;
        Ok(row_to_policy(row))
    }

    #[instrument(skip(self, policy), fields(policy_id = %id))]
    async fn update_policy(&self, id: PolicyId, policy: NewPolicy) -> Result<InsurancePolicy, PortError> {
        let row = self.repository.update(id.value(), new_row(policy)).await?;
        Ok(row_to_policy(row))
    }
}

fn row_to_policy(row: PolicyRow) -> InsurancePolicy {
    InsurancePolicy {
        id: PolicyId::new(row.id),
        car_id: CarId::new(row.car_id),
        provider: row.provider,
        start_date: row.start_date,
        end_date: row.end_date,
    }
}

fn new_row(policy: NewPolicy) -> NewPolicyRow {
    NewPolicyRow {
        car_id: policy.car_id.value(),
        provider: policy.provider,
        start_date: policy.start_date,
        end_date: policy.end_date,
    }
}
