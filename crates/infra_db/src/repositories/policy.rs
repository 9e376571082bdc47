//! Policy repository implementation
//!
//! All listings are ordered by id so callers see policies in creation order.

use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

use crate::error::DatabaseError;

/// Repository for insurance policies
///
/// # Example
///
/// ```rust,ignore
/// use infra_db::repositories::PolicyRepository;
///
/// let repo = PolicyRepository::new(pool);
/// let policies = repo.find_by_car(1).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PolicyRepository {
    pool: PgPool,
}

impl PolicyRepository {
    /// Creates a new PolicyRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists every policy
    pub async fn list(&self) -> Result<Vec<PolicyRow>, DatabaseError> {
        let policies = sqlx::query_as::<_, PolicyRow>(
            r#"
            SELECT id, car_id, provider, start_date, end_date
            FROM insurance_policies
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(policies)
    }

    /// Lists the policies of one car
    pub async fn find_by_car(&self, car_id: i64) -> Result<Vec<PolicyRow>, DatabaseError> {
        let policies = sqlx::query_as::<_, PolicyRow>(
            r#"
            SELECT id, car_id, provider, start_date, end_date
            FROM insurance_policies
            WHERE car_id = $1
            ORDER BY id
            "#,
        )
        .bind(car_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(policies)
    }

    /// Retrieves a policy by id
    ///
    /// # Returns
    ///
    /// The policy row or `DatabaseError::NotFound`
    pub async fn get_by_id(&self, id: i64) -> Result<PolicyRow, DatabaseError> {
        sqlx::query_as::<_, PolicyRow>(
            r#"
            SELECT id, car_id, provider, start_date, end_date
            FROM insurance_policies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("InsurancePolicy", id))
    }

    /// Inserts a policy and returns it with its generated id
    pub async fn insert(&self, policy: NewPolicyRow) -> Result<PolicyRow, DatabaseError> {
        let row = sqlx::query_as::<_, PolicyRow>(
            r#"
            INSERT INTO insurance_policies (car_id, provider, start_date, end_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, car_id, provider, start_date, end_date
            "#,
        )
        .bind(policy.car_id)
        .bind(policy.provider)
        .bind(policy.start_date)
        .bind(policy.end_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Replaces every column of an existing policy
    ///
    /// # Returns
    ///
    /// The updated row or `DatabaseError::NotFound`
    pub async fn update(&self, id: i64, policy: NewPolicyRow) -> Result<PolicyRow, DatabaseError> {
        sqlx::query_as::<_, PolicyRow>(
            r#"
            UPDATE insurance_policies
            SET car_id = $2, provider = $3, start_date = $4, end_date = $5
            WHERE id = $1
            RETURNING id, car_id, provider, start_date, end_date
            "#,
        )
        .bind(id)
        .bind(policy.car_id)
        .bind(policy.provider)
        .bind(policy.start_date)
        .bind(policy.end_date)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("InsurancePolicy", id))
    }
}

/// Database row for an insurance policy
#[derive(Debug, Clone, FromRow)]
pub struct PolicyRow {
    pub id: i64,
    pub car_id: i64,
    pub provider: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Column values for inserting or updating a policy
#[derive(Debug, Clone)]
pub struct NewPolicyRow {
    pub car_id: i64,
    pub provider: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
