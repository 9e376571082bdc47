//! Claims repository implementation

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::error::DatabaseError;

/// Repository for insurance claims
#[derive(Debug, Clone)]
pub struct ClaimsRepository {
    pool: PgPool,
}

impl ClaimsRepository {
    /// Creates a new ClaimsRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists the claims of one car ordered by claim date, then id
    pub async fn find_by_car(&self, car_id: i64) -> Result<Vec<ClaimRow>, DatabaseError> {
        let claims = sqlx::query_as::<_, ClaimRow>(
            r#"
            SELECT id, car_id, claim_date, description, amount
            FROM insurance_claims
            WHERE car_id = $1
            ORDER BY claim_date ASC, id ASC
            "#,
        )
        .bind(car_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(claims)
    }

    /// Inserts a claim and returns it with its generated id
    pub async fn insert(&self, claim: NewClaimRow) -> Result<ClaimRow, DatabaseError> {
        let row = sqlx::query_as::<_, ClaimRow>(
            r#"
            INSERT INTO insurance_claims (car_id, claim_date, description, amount)
            VALUES ($1, $2, $3, $4)
            RETURNING id, car_id, claim_date, description, amount
            "#,
        )
        .bind(claim.car_id)
        .bind(claim.claim_date)
        .bind(claim.description)
        .bind(claim.amount)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}

/// Database row for an insurance claim
#[derive(Debug, Clone, FromRow)]
pub struct ClaimRow {
    pub id: i64,
    pub car_id: i64,
    pub claim_date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
}

/// Column values for inserting a claim
#[derive(Debug, Clone)]
pub struct NewClaimRow {
    pub car_id: i64,
    pub claim_date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
}
