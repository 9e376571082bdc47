//! Car repository implementation

use sqlx::{FromRow, PgPool};

use crate::error::DatabaseError;

const SELECT_CARS: &str = r#"
    SELECT
        c.id,
        c.vin,
        c.make,
        c.model,
        c.year_of_manufacture,
        o.id AS owner_id,
        o.name AS owner_name,
        o.email AS owner_email
    FROM cars c
    LEFT JOIN owners o ON o.id = c.owner_id
"#;

/// Repository for cars and their owners
#[derive(Debug, Clone)]
pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    /// Creates a new CarRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists every car joined with its owner, ordered by id
    pub async fn list(&self) -> Result<Vec<CarRow>, DatabaseError> {
        let sql = format!("{SELECT_CARS} ORDER BY c.id");
        let cars = sqlx::query_as::<_, CarRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(cars)
    }

    /// Retrieves a car by id
    ///
    /// # Returns
    ///
    /// The car row or `DatabaseError::NotFound`
    pub async fn get_by_id(&self, id: i64) -> Result<CarRow, DatabaseError> {
        let sql = format!("{SELECT_CARS} WHERE c.id = $1");
        sqlx::query_as::<_, CarRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Car", id))
    }

    /// Returns true if a car with this id exists
    pub async fn exists(&self, id: i64) -> Result<bool, DatabaseError> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM cars WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }
}

/// Database row for a car with its optional owner
#[derive(Debug, Clone, FromRow)]
pub struct CarRow {
    pub id: i64,
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year_of_manufacture: i32,
    pub owner_id: Option<i64>,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
}
