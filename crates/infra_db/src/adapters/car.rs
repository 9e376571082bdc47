//! PostgreSQL Car Adapter

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{CarId, DomainPort, HealthCheckResult, HealthCheckable, OwnerId, PortError};
use domain_car::{Car, CarPort, Owner};

use crate::repositories::car::{CarRepository, CarRow};

/// PostgreSQL-backed implementation of the CarPort trait
#[derive(Debug, Clone)]
pub struct PostgresCarAdapter {
    repository: CarRepository,
    pool: PgPool,
}

impl PostgresCarAdapter {
    /// Creates a new PostgreSQL car adapter
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CarRepository::new(pool.clone()),
            pool,
        }
    }
}

impl DomainPort for PostgresCarAdapter {}

#[async_trait]
impl HealthCheckable for PostgresCarAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        super::ping(&self.pool, "postgres-car-adapter").await
    }
}

#[async_trait]
impl CarPort for PostgresCarAdapter {
    #[instrument(skip(self))]
    async fn list_cars(&self) -> Result<Vec<Car>, PortError> {
        debug!("Listing cars");
        let rows = self.repository.list().await?;
        Ok(rows.into_iter().map(row_to_car).collect())
    }

    #[instrument(skip(self), fields(car_id = %id))]
    async fn get_car(&self, id: CarId) -> Result<Car, PortError> {
        let row = self.repository.get_by_id(id.value()).await?;
        Ok(row_to_car(row))
    }

    #[instrument(skip(self), fields(car_id = %id))]
    async fn car_exists(&self, id: CarId) -> Result<bool, PortError> {
        Ok(self.repository.exists(id.value()).await?)
    }
}

/// Converts a joined car row to a domain Car
///
/// The owner is present only when all three owner columns are.
fn row_to_car(row: CarRow) -> Car {
    let owner = match (row.owner_id, row.owner_name, row.owner_email) {
        (Some(id), Some(name), Some(email)) => Some(Owner {
            id: OwnerId::new(id),
            name,
            email,
        }),
        _ => None,
    };

    Car {
        id: CarId::new(row.id),
        vin: row.vin,
        make: row.make,
        model: row.model,
        year_of_manufacture: row.year_of_manufacture,
        owner,
    }
}
