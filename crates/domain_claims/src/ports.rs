//! Claims Domain Ports
//!
//! `ClaimPort` is implemented by `infra_db::adapters::PostgresClaimAdapter`
//! and, for tests, by the in-memory `mock::MockClaimPort`.

use async_trait::async_trait;

use core_kernel::{CarId, DomainPort, HealthCheckable, PortError};

use crate::claim::{InsuranceClaim, NewClaim};

/// Storage operations for insurance claims
#[async_trait]
pub trait ClaimPort: DomainPort + HealthCheckable {
    /// Lists a car's claims ordered by claim date ascending
    ///
    /// Claims sharing a date keep the order they were registered in.
    async fn list_claims_for_car(&self, car_id: CarId) -> Result<Vec<InsuranceClaim>, PortError>;

    /// Stores a new claim and returns it with its assigned identifier
    async fn create_claim(&self, claim: NewClaim) -> Result<InsuranceClaim, PortError>;
}

/// Mock implementation of ClaimPort for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use tokio::sync::RwLock;

    use core_kernel::{ClaimId, HealthCheckResult};

    /// In-memory mock implementation of ClaimPort
    #[derive(Debug)]
    pub struct MockClaimPort {
        claims: RwLock<BTreeMap<ClaimId, InsuranceClaim>>,
        next_id: AtomicI64,
    }

    impl Default for MockClaimPort {
        fn default() -> Self {
            Self {
                claims: RwLock::new(BTreeMap::new()),
                next_id: AtomicI64::new(1),
            }
        }
    }

    impl MockClaimPort {
        /// Creates a new mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with claims for testing
        pub async fn with_claims(claims: Vec<InsuranceClaim>) -> Self {
            let port = Self::new();
            {
                let mut stored = port.claims.write().await;
                for claim in claims {
                    port.next_id.fetch_max(claim.id.value() + 1, Ordering::SeqCst);
                    stored.insert(claim.id, claim);
                }
            }
            port
        }

        /// Sets the identifier the next created claim receives
        pub fn set_next_id(&self, id: i64) {
            self.next_id.store(id, Ordering::SeqCst);
        }
    }

    impl DomainPort for MockClaimPort {}

    #[async_trait]
    impl HealthCheckable for MockClaimPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy("mock-claim-port")
        }
    }

    #[async_trait]
    impl ClaimPort for MockClaimPort {
        async fn list_claims_for_car(&self, car_id: CarId) -> Result<Vec<InsuranceClaim>, PortError> {
            let mut claims: Vec<_> = self
                .claims
                .read()
                .await
                .values()
                .filter(|c| c.car_id == car_id)
                .cloned()
                .collect();
            claims.sort_by_key(|c| c.claim_date);
            Ok(claims)
        }

        async fn create_claim(&self, claim: NewClaim) -> Result<InsuranceClaim, PortError> {
            let id = ClaimId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
            let created = claim.into_claim(id);
            self.claims.write().await.insert(id, created.clone());
            Ok(created)
        }
    }
}
