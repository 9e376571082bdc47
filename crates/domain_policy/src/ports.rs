//! Policy Domain Ports
//!
//! The `PolicyPort` trait defines what the policy domain needs from its
//! data source. Adapters:
//!
//! - **PostgreSQL Adapter**: `infra_db::adapters::PostgresPolicyAdapter`
//! - **Mock Adapter**: in-memory, for tests (`mock` feature)
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_policy::PolicyPort;
//! use std::sync::Arc;
//!
//! let port: Arc<dyn PolicyPort> = Arc::new(PostgresPolicyAdapter::new(pool));
//! let policies = port.list_policies_for_car(car_id).await?;
//! ```

use async_trait::async_trait;

use core_kernel::{CarId, DomainPort, HealthCheckable, PolicyId, PortError};

use crate::policy::{InsurancePolicy, NewPolicy};

/// Storage operations for insurance policies
///
/// All listing operations return policies in ascending id order, which is
/// the order they were created in.
#[async_trait]
pub trait PolicyPort: DomainPort + HealthCheckable {
    /// Lists every policy on record
    async fn list_policies(&self) -> Result<Vec<InsurancePolicy>, PortError>;

    /// Lists the policies attached to one car
    async fn list_policies_for_car(&self, car_id: CarId) -> Result<Vec<InsurancePolicy>, PortError>;

    /// Retrieves a policy by ID
    ///
    /// # Returns
    ///
    /// The policy if found, or `PortError::NotFound`
    async fn get_policy(&self, id: PolicyId) -> Result<InsurancePolicy, PortError>;

    /// Stores a new policy and returns it with its assigned identifier
    async fn create_policy(&self, policy: NewPolicy) -> Result<InsurancePolicy, PortError>;

    /// Replaces every field of an existing policy
    ///
    /// # Returns
    ///
    /// The updated policy, or `PortError::NotFound`
    async fn update_policy(&self, id: PolicyId, policy: NewPolicy) -> Result<InsurancePolicy, PortError>;
}

/// Mock implementation of PolicyPort for testing
///
/// Stores policies in memory and assigns sequential identifiers.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
    use tokio::sync::RwLock;

    use core_kernel::{AdapterHealth, HealthCheckResult};

    /// In-memory mock implementation of PolicyPort
    #[derive(Debug)]
    pub struct MockPolicyPort {
        policies: RwLock<BTreeMap<PolicyId, InsurancePolicy>>,
        next_id: AtomicI64,
        unavailable: AtomicBool,
    }

    impl Default for MockPolicyPort {
        fn default() -> Self {
            Self {
                policies: RwLock::new(BTreeMap::new()),
                next_id: AtomicI64::new(1),
                unavailable: AtomicBool::new(false),
            }
        }
    }

    impl MockPolicyPort {
        /// Creates a new mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with policies for testing
        pub async fn with_policies(policies: Vec<InsurancePolicy>) -> Self {
            let port = Self::new();
            port.insert_all(policies).await;
            port
        }

        /// Inserts policies keeping their identifiers
        pub async fn insert_all(&self, policies: Vec<InsurancePolicy>) {
            let mut stored = self.policies.write().await;
            for policy in policies {
                self.next_id.fetch_max(policy.id.value() + 1, Ordering::SeqCst);
                stored.insert(policy.id, policy);
            }
        }

        /// Makes every subsequent call fail with a connection error
        pub fn set_unavailable(&self, unavailable: bool) {
            self.unavailable.store(unavailable, Ordering::SeqCst);
        }

        fn check_available(&self) -> Result<(), PortError> {
            if self.unavailable.load(Ordering::SeqCst) {
                return Err(PortError::connection("mock policy store unavailable"));
            }
            Ok(())
        }
    }

    impl DomainPort for MockPolicyPort {}

    #[async_trait]
    impl HealthCheckable for MockPolicyPort {
        async fn health_check(&self) -> HealthCheckResult {
            let mut result = HealthCheckResult::healthy("mock-policy-port");
            if self.unavailable.load(Ordering::SeqCst) {
                result.status = AdapterHealth::Unhealthy;
                result.message = Some("Mock adapter marked unavailable".to_string());
            }
            result
        }
    }

    #[async_trait]
    impl PolicyPort for MockPolicyPort {
        async fn list_policies(&self) -> Result<Vec<InsurancePolicy>, PortError> {
            self.check_available()?;
            Ok(self.policies.read().await.values().cloned().collect())
        }

        async fn list_policies_for_car(&self, car_id: CarId) -> Result<Vec<InsurancePolicy>, PortError> {
            self.check_available()?;
            Ok(self
                .policies
                .read()
                .await
                .values()
                .filter(|p| p.car_id == car_id)
                .cloned()
                .collect())
        }

        async fn get_policy(&self, id: PolicyId) -> Result<InsurancePolicy, PortError> {
            self.check_available()?;
            self.policies
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("InsurancePolicy", id))
        }

        async fn create_policy(&self, policy: NewPolicy) -> Result<InsurancePolicy, PortError> {
            self.check_available()?;
            let id = PolicyId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
            let created = policy.into_policy(id);
            self.policies.write().await.insert(id, created.clone());
            Ok(created)
        }

        async fn update_policy(&self, id: PolicyId, policy: NewPolicy) -> Result<InsurancePolicy, PortError> {
            self.check_available()?;
            let mut policies = self.policies.write().await;
            let stored = policies
                .get_mut(&id)
                .ok_or_else(|| PortError::not_found("InsurancePolicy", id))?;
            stored.apply(policy);
            Ok(stored.clone())
        }
    }
}
