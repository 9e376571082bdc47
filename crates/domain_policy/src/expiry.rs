//! Policy expiry notification
//!
//! A background scan that logs every policy whose last covered day was
//! yesterday. Each policy id is reported at most once for the lifetime of
//! the notifier; the notified set lives in memory only and starts empty on
//! every process start.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use core_kernel::{CarId, PolicyId, Timezone};

use crate::ports::PolicyPort;

/// A policy reported by a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiredPolicy {
    pub policy_id: PolicyId,
    pub car_id: CarId,
    pub end_date: NaiveDate,
}

/// Logs policies that expired the previous day
///
/// The notifier owns its notified set. Scans hold the set's lock for the
/// whole list-and-mark step, so overlapping scans cannot report the same
/// policy twice.
pub struct PolicyExpiryNotifier {
    policies: Arc<dyn PolicyPort>,
    notified: Mutex<HashSet<PolicyId>>,
}

impl PolicyExpiryNotifier {
    /// Creates a notifier with an empty notified set
    pub fn new(policies: Arc<dyn PolicyPort>) -> Self {
        Self {
            policies,
            notified: Mutex::new(HashSet::new()),
        }
    }

    /// Runs one scan relative to `today`
    ///
    /// Emits one `info` record per newly expired policy and returns those
    /// policies. A storage failure is logged and yields an empty report; the
    /// next scan retries.
    pub async fn scan(&self, today: NaiveDate) -> Vec<ExpiredPolicy> {
        let Some(yesterday) = Timezone::day_before(today) else {
            return Vec::new();
        };

        let mut notified = self.notified.lock().await;

        let policies = match self.policies.list_policies().await {
            Ok(policies) => policies,
            Err(e) => {
                warn!(error = %e, "Failed to list policies for expiry scan");
                return Vec::new();
            }
        };

        let mut reported = Vec::new();
        for policy in policies {
            if !policy.ends_on(yesterday) || !notified.insert(policy.id) {
                continue;
            }

            info!(
                policy_id = %policy.id,
                car_id = %policy.car_id,
                end_date = %policy.end_date,
                "Policy {} for car {} expired on {}",
                policy.id,
                policy.car_id,
                policy.end_date
            );

            reported.push(ExpiredPolicy {
                policy_id: policy.id,
                car_id: policy.car_id,
                end_date: policy.end_date,
            });
        }

        reported
    }

    /// Number of policies reported so far
    pub async fn notified_count(&self) -> usize {
        self.notified.lock().await.len()
    }

    /// Returns true if the policy has already been reported
    pub async fn was_notified(&self, id: PolicyId) -> bool {
        self.notified.lock().await.contains(&id)
    }

    /// Spawns the periodic scan on the tokio runtime
    ///
    /// The first scan runs immediately, then once per `period`. "Today" is
    /// resolved in `timezone` at each tick. Missed ticks are skipped rather
    /// than replayed.
    pub fn spawn(self: Arc<Self>, period: Duration, timezone: Timezone) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                let today = timezone.today();
                let reported = self.scan(today).await;
                debug!(%today, reported = reported.len(), "Policy expiry scan complete");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::InsurancePolicy;
    use crate::ports::mock::MockPolicyPort;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn policy(id: i64, car: i64, end: NaiveDate) -> InsurancePolicy {
        InsurancePolicy {
            id: PolicyId::new(id),
            car_id: CarId::new(car),
            provider: "ProviderX".to_string(),
            start_date: date(2024, 1, 1),
            end_date: end,
        }
    }

    #[tokio::test]
    async fn test_reports_once_across_scans() {
        let today = date(2025, 9, 8);
        let port = MockPolicyPort::with_policies(vec![policy(42, 7, date(2025, 9, 7))]).await;
        let notifier = PolicyExpiryNotifier::new(Arc::new(port));

        let first = notifier.scan(today).await;
        let second = notifier.scan(today).await;

        assert_eq!(
            first,
            vec![ExpiredPolicy {
                policy_id: PolicyId::new(42),
                car_id: CarId::new(7),
                end_date: date(2025, 9, 7),
            }]
        );
        assert!(second.is_empty());
        assert_eq!(notifier.notified_count().await, 1);
    }

    /// Collects the formatted message of every `info` event
    #[derive(Clone, Default)]
    struct InfoMessages(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

    impl InfoMessages {
        fn take(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    struct MessageVisitor(String);

    impl tracing::field::Visit for MessageVisitor {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            if field.name() == "message" {
                self.0 = format!("{value:?}");
            }
        }
    }

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for InfoMessages {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::INFO {
                let mut visitor = MessageVisitor(String::new());
                event.record(&mut visitor);
                self.0.lock().unwrap().push(visitor.0);
            }
        }
    }

    #[tokio::test]
    async fn test_two_scans_log_exactly_one_expiry() {
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;

        let messages = InfoMessages::default();
        let _guard = tracing_subscriber::registry().with(messages.clone()).set_default();

        let today = date(2025, 9, 8);
        let port = MockPolicyPort::with_policies(vec![policy(42, 7, date(2025, 9, 7))]).await;
        let notifier = PolicyExpiryNotifier::new(Arc::new(port));

        notifier.scan(today).await;
        notifier.scan(today).await;

        assert_eq!(messages.take(), vec!["Policy 42 for car 7 expired on 2025-09-07".to_string()]);
    }

    #[tokio::test]
    async fn test_ignores_policies_not_ending_yesterday() {
        let today = date(2025, 9, 8);
        let port = MockPolicyPort::with_policies(vec![
            policy(1, 1, date(2025, 9, 8)),
            policy(2, 1, date(2025, 9, 6)),
            policy(3, 2, date(2026, 9, 7)),
        ])
        .await;
        let notifier = PolicyExpiryNotifier::new(Arc::new(port));

        assert!(notifier.scan(today).await.is_empty());
        assert_eq!(notifier.notified_count().await, 0);
    }

    #[tokio::test]
    async fn test_next_day_reports_newly_expired_only() {
        let port = MockPolicyPort::with_policies(vec![
            policy(1, 1, date(2025, 9, 7)),
            policy(2, 1, date(2025, 9, 8)),
        ])
        .await;
        let notifier = PolicyExpiryNotifier::new(Arc::new(port));

        let monday = notifier.scan(date(2025, 9, 8)).await;
        let tuesday = notifier.scan(date(2025, 9, 9)).await;

        assert_eq!(monday.len(), 1);
        assert_eq!(monday[0].policy_id, PolicyId::new(1));
        assert_eq!(tuesday.len(), 1);
        assert_eq!(tuesday[0].policy_id, PolicyId::new(2));
    }

    #[tokio::test]
    async fn test_storage_failure_is_retried_on_next_scan() {
        let today = date(2025, 9, 8);
        let port = Arc::new(MockPolicyPort::with_policies(vec![policy(5, 3, date(2025, 9, 7))]).await);
        let notifier = PolicyExpiryNotifier::new(port.clone());

        port.set_unavailable(true);
        assert!(notifier.scan(today).await.is_empty());

        port.set_unavailable(false);
        assert_eq!(notifier.scan(today).await.len(), 1);
        assert!(notifier.was_notified(PolicyId::new(5)).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawned_task_scans_on_each_tick() {
        let yesterday = Timezone::day_before(Timezone::default().today()).unwrap();
        let port = MockPolicyPort::with_policies(vec![policy(9, 4, yesterday)]).await;
        let notifier = Arc::new(PolicyExpiryNotifier::new(Arc::new(port)));

        let handle = notifier.clone().spawn(Duration::from_secs(3600), Timezone::default());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(notifier.notified_count().await, 1);

        tokio::time::sleep(Duration::from_secs(3600)).await;
        assert_eq!(notifier.notified_count().await, 1);

        handle.abort();
    }
}
