//! Car Domain Ports
//!
//! `CarPort` is implemented by `infra_db::adapters::PostgresCarAdapter`
//! and by the in-memory `mock::MockCarPort` used in tests.

use async_trait::async_trait;

use core_kernel::{CarId, DomainPort, HealthCheckable, PortError};

use crate::car::Car;

/// Read access to cars and their owners
#[async_trait]
pub trait CarPort: DomainPort + HealthCheckable {
    /// Lists every car with its owner, ordered by car id
    async fn list_cars(&self) -> Result<Vec<Car>, PortError>;

    /// Retrieves a car by ID
    ///
    /// # Returns
    ///
    /// The car if found, or `PortError::NotFound`
    async fn get_car(&self, id: CarId) -> Result<Car, PortError>;

    /// Returns true if a car with this id exists
    async fn car_exists(&self, id: CarId) -> Result<bool, PortError> {
        match self.get_car(id).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// Mock implementation of CarPort for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::RwLock;

    use core_kernel::{AdapterHealth, HealthCheckResult};

    /// In-memory mock implementation of CarPort
    #[derive(Debug, Default)]
    pub struct MockCarPort {
        cars: RwLock<BTreeMap<CarId, Car>>,
        unavailable: AtomicBool,
    }

    impl MockCarPort {
        /// Creates a new mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with cars for testing
        pub async fn with_cars(cars: Vec<Car>) -> Self {
            let port = Self::new();
            {
                let mut stored = port.cars.write().await;
                for car in cars {
                    stored.insert(car.id, car);
                }
            }
            port
        }

        /// Makes every subsequent call fail with a connection error
        pub fn set_unavailable(&self, unavailable: bool) {
            self.unavailable.store(unavailable, Ordering::SeqCst);
        }

        fn check_available(&self) -> Result<(), PortError> {
            if self.unavailable.load(Ordering::SeqCst) {
                return Err(PortError::connection("mock car store unavailable"));
            }
            Ok(())
        }
    }

    impl DomainPort for MockCarPort {}

    #[async_trait]
    impl HealthCheckable for MockCarPort {
        async fn health_check(&self) -> HealthCheckResult {
            let mut result = HealthCheckResult::healthy("mock-car-port");
            if self.unavailable.load(Ordering::SeqCst) {
                result.status = AdapterHealth::Unhealthy;
                result.message = Some("Mock adapter marked unavailable".to_string());
            }
            result
        }
    }

    #[async_trait]
    impl CarPort for MockCarPort {
        async fn list_cars(&self) -> Result<Vec<Car>, PortError> {
            self.check_available()?;
            Ok(self.cars.read().await.values().cloned().collect())
        }

        async fn get_car(&self, id: CarId) -> Result<Car, PortError> {
            self.check_available()?;
            self.cars
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Car", id))
        }
    }
}
