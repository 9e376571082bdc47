//! HTTP contract tests against in-memory adapters

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use domain_car::ports::mock::MockCarPort;
use domain_car::CarInsuranceService;
use domain_claims::ports::mock::MockClaimPort;
use domain_policy::ports::mock::MockPolicyPort;
use interface_api::config::ApiConfig;
use interface_api::{create_router, AppState};
use test_utils::{CarFixtures, PolicyBuilder};

struct TestApp {
    server: TestServer,
    cars: Arc<MockCarPort>,
    policies: Arc<MockPolicyPort>,
    claims: Arc<MockClaimPort>,
}

async fn test_app() -> TestApp {
    let cars = Arc::new(MockCarPort::with_cars(vec![CarFixtures::dacia_logan(), CarFixtures::unowned_golf()]).await);
    let policies = Arc::new(MockPolicyPort::new());
    let claims = Arc::new(MockClaimPort::new());

    let service = CarInsuranceService::new(cars.clone(), policies.clone(), claims.clone());
    let app = create_router(AppState::new(service, ApiConfig::default()));

    TestApp {
        server: TestServer::new(app).unwrap(),
        cars,
        policies,
        claims,
    }
}

/// Amounts are written with their exact digits, so compare the raw number
fn amount_text(body: &Value) -> String {
    body["amount"].to_string()
}

fn claim_body(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap()
}

mod cars {
    use super::*;

    #[tokio::test]
    async fn test_list_cars_includes_owner_fields() {
        let app = test_app().await;

        let response = app.server.get("/api/cars").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(
            body[0],
            json!({
                "id": 1,
                "vin": "VIN12345",
                "make": "Dacia",
                "model": "Logan",
                "year": 2018,
                "ownerId": 1,
                "ownerName": "Ana Pop",
                "ownerEmail": "ana.pop@example.com"
            })
        );
        assert_eq!(body[1]["ownerId"], Value::Null);
        assert_eq!(body[1]["ownerName"], Value::Null);
    }
}

mod insurance_validity {
    use super::*;

    #[tokio::test]
    async fn test_missing_car_is_404() {
        let app = test_app().await;

        let response = app.server.get("/api/cars/999/insurance-valid?date=2025-09-07").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.text(), "Car not found");
    }

    #[tokio::test]
    async fn test_invalid_date_format_is_400() {
        let app = test_app().await;

        let response = app.server.get("/api/cars/1/insurance-valid?date=not-a-date").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Invalid date format. Use ISO YYYY-MM-DD.");
    }

    #[tokio::test]
    async fn test_non_iso_dates_are_format_errors() {
        let app = test_app().await;

        for date in ["2025-9-7", "+2025-09-07", "25-09-07", "%202025-09-07%20"] {
            let response = app
                .server
                .get(&format!("/api/cars/1/insurance-valid?date={date}"))
                .await;

            response.assert_status(StatusCode::BAD_REQUEST);
            assert_eq!(response.text(), "Invalid date format. Use ISO YYYY-MM-DD.", "date {date}");
        }
    }

    #[tokio::test]
    async fn test_date_is_checked_before_car_lookup() {
        let app = test_app().await;

        let response = app.server.get("/api/cars/999/insurance-valid?date=not-a-date").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_impossible_date_is_400() {
        let app = test_app().await;

        let response = app.server.get("/api/cars/1/insurance-valid?date=1800-01-01").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.text(),
            "Date out of supported range (1900-01-01 to 2100-12-31)."
        );
    }

    #[tokio::test]
    async fn test_missing_date_is_400() {
        let app = test_app().await;

        let response = app.server.get("/api/cars/1/insurance-valid").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_covered_date_is_valid() {
        let app = test_app().await;
        app.policies.insert_all(vec![PolicyBuilder::new().build()]).await;

        let response = app.server.get("/api/cars/1/insurance-valid?date=2025-09-07").await;

        response.assert_status_ok();
        response.assert_json(&json!({"carId": 1, "date": "2025-09-07", "valid": true}));
    }

    #[tokio::test]
    async fn test_uncovered_date_is_not_valid() {
        let app = test_app().await;
        app.policies.insert_all(vec![PolicyBuilder::new().build()]).await;

        let response = app.server.get("/api/cars/1/insurance-valid?date=2026-01-01").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["valid"], false);
    }
}

mod claims {
    use super::*;

    #[tokio::test]
    async fn test_valid_claim_is_created() {
        let app = test_app().await;
        app.claims.set_next_id(100);

        let response = app
            .server
            .post("/api/cars/1/claims")
            .json(&claim_body(r#"{"claimDate": "2025-09-06", "description": "Accident", "amount": 1200.50}"#))
            .await;

        response.assert_status(StatusCode::CREATED);
        assert_eq!(response.header("location"), "/api/cars/1/claims/100");
        let body: Value = response.json();
        assert_eq!(body["id"], 100);
        assert_eq!(body["carId"], 1);
        assert_eq!(body["claimDate"], "2025-09-06");
        assert_eq!(body["description"], "Accident");
        assert_eq!(amount_text(&body), "1200.50");
    }

    #[tokio::test]
    async fn test_large_amount_keeps_cents() {
        let app = test_app().await;

        let response = app
            .server
            .post("/api/cars/1/claims")
            .json(&claim_body(
                r#"{"claimDate": "2025-09-06", "description": "Fleet", "amount": 12345678901234567.89}"#,
            ))
            .await;

        response.assert_status(StatusCode::CREATED);
        assert_eq!(amount_text(&response.json()), "12345678901234567.89");
        assert!(response.text().contains(r#""amount":12345678901234567.89"#));

        let history: Value = app.server.get("/api/cars/1/history").await.json();
        assert_eq!(amount_text(&history[0]), "12345678901234567.89");
    }

    #[tokio::test]
    async fn test_empty_claim_date_reported_as_missing() {
        let app = test_app().await;

        let response = app
            .server
            .post("/api/cars/1/claims")
            .json(&json!({"claimDate": "", "description": "Accident", "amount": 10}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Claim date is required");
    }

    #[tokio::test]
    async fn test_missing_fields_report_first_in_order() {
        let app = test_app().await;

        let response = app
            .server
            .post("/api/cars/1/claims")
            .json(&json!({"description": "Accident"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Claim date is required");
    }

    #[tokio::test]
    async fn test_missing_amount() {
        let app = test_app().await;

        let response = app
            .server
            .post("/api/cars/1/claims")
            .json(&json!({"claimDate": "2025-09-06", "description": "Accident"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Amount is required");
    }

    #[tokio::test]
    async fn test_non_positive_amount() {
        let app = test_app().await;

        let response = app
            .server
            .post("/api/cars/1/claims")
            .json(&json!({"claimDate": "2025-09-06", "description": "Accident", "amount": 0}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Amount must be positive");
    }

    #[tokio::test]
    async fn test_validation_precedes_car_lookup() {
        let app = test_app().await;

        let response = app
            .server
            .post("/api/cars/999/claims")
            .json(&json!({"description": "Accident", "amount": 10}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let app = test_app().await;

        let response = app
            .server
            .post("/api/cars/1/claims")
            .text("{\"claimDate\": ")
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_date_is_400() {
        let app = test_app().await;

        let response = app
            .server
            .post("/api/cars/1/claims")
            .json(&json!({"claimDate": "06/09/2025", "description": "Accident", "amount": 10}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_car_is_404() {
        let app = test_app().await;

        let response = app
            .server
            .post("/api/cars/999/claims")
            .json(&claim_body(r#"{"claimDate": "2025-09-06", "description": "Accident", "amount": 1200.50}"#))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.text(), "Car not found");
    }
}

mod history {
    use super::*;

    #[tokio::test]
    async fn test_missing_car_is_404() {
        let app = test_app().await;

        let response = app.server.get("/api/cars/999/history").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.text(), "Car not found");
    }

    #[tokio::test]
    async fn test_events_are_chronological() {
        let app = test_app().await;
        app.policies.insert_all(vec![PolicyBuilder::new().build()]).await;
        app.server
            .post("/api/cars/1/claims")
            .json(&claim_body(r#"{"claimDate": "2025-09-06", "description": "Accident", "amount": 1200.50}"#))
            .await
            .assert_status(StatusCode::CREATED);

        let response = app.server.get("/api/cars/1/history").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(
            body[0],
            json!({"type": "POLICY", "startDate": "2025-01-01", "endDate": "2025-12-31", "provider": "ProviderX"})
        );
        assert_eq!(body[1]["type"], "CLAIM");
        assert_eq!(body[1]["date"], "2025-09-06");
        assert_eq!(body[1]["description"], "Accident");
        assert_eq!(amount_text(&body[1]), "1200.50");
        assert_eq!(body.as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_car_without_records_has_empty_history() {
        let app = test_app().await;

        let response = app.server.get("/api/cars/2/history").await;

        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn test_other_cars_records_are_excluded() {
        let app = test_app().await;
        app.policies
            .insert_all(vec![PolicyBuilder::new().with_id(1).for_car(2).build()])
            .await;
        app.server
            .post("/api/cars/2/claims")
            .json(&json!({"claimDate": "2025-02-01", "description": "Hail", "amount": 50}))
            .await
            .assert_status(StatusCode::CREATED);

        let body: Value = app.server.get("/api/cars/1/history").await.json();

        assert_eq!(body, json!([]));
    }
}

mod policies {
    use super::*;

    fn policy_body(car_id: i64, provider: &str, start: &str, end: &str) -> Value {
        json!({"carId": car_id, "provider": provider, "startDate": start, "endDate": end})
    }

    #[tokio::test]
    async fn test_create_policy() {
        let app = test_app().await;

        let response = app
            .server
            .post("/api/policies")
            .json(&policy_body(1, "ProviderX", "2025-01-01", "2025-12-31"))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "id": 1,
            "carId": 1,
            "provider": "ProviderX",
            "startDate": "2025-01-01",
            "endDate": "2025-12-31"
        }));
    }

    #[tokio::test]
    async fn test_create_policy_for_missing_car_is_400() {
        let app = test_app().await;

        let response = app
            .server
            .post("/api/policies")
            .json(&policy_body(999, "ProviderX", "2025-01-01", "2025-12-31"))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Car not found");
    }

    #[tokio::test]
    async fn test_create_policy_validation_messages() {
        let app = test_app().await;

        let missing_car = app
            .server
            .post("/api/policies")
            .json(&json!({"provider": "ProviderX", "startDate": "2025-01-01"}))
            .await;
        missing_car.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(missing_car.text(), "Car ID is required");

        let missing_end = app
            .server
            .post("/api/policies")
            .json(&json!({"carId": 1, "provider": "ProviderX", "startDate": "2025-01-01"}))
            .await;
        missing_end.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(missing_end.text(), "End date is required");

        let missing_provider = app
            .server
            .post("/api/policies")
            .json(&json!({"carId": 1, "startDate": "2025-01-01", "endDate": "2025-12-31"}))
            .await;
        missing_provider.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(missing_provider.text(), "Provider is required");

        let empty_start = app
            .server
            .post("/api/policies")
            .json(&policy_body(1, "ProviderX", "", "2025-12-31"))
            .await;
        empty_start.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(empty_start.text(), "Start date is required");
    }

    #[tokio::test]
    async fn test_empty_provider_is_accepted() {
        let app = test_app().await;

        let response = app
            .server
            .post("/api/policies")
            .json(&policy_body(1, "", "2025-01-01", "2025-12-31"))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["provider"], "");
    }

    #[tokio::test]
    async fn test_update_policy() {
        let app = test_app().await;
        app.policies
            .insert_all(vec![PolicyBuilder::new().with_id(10).build()])
            .await;

        let response = app
            .server
            .put("/api/policies/10")
            .json(&policy_body(1, "ProviderY", "2026-01-01", "2026-12-31"))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["id"], 10);
        assert_eq!(body["provider"], "ProviderY");
        assert_eq!(body["startDate"], "2026-01-01");
        assert_eq!(body["endDate"], "2026-12-31");
    }

    #[tokio::test]
    async fn test_update_missing_policy_is_404() {
        let app = test_app().await;

        let response = app
            .server
            .put("/api/policies/99")
            .json(&policy_body(1, "ProviderY", "2026-01-01", "2026-12-31"))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.text(), "");
    }

    #[tokio::test]
    async fn test_update_to_missing_car_is_400() {
        let app = test_app().await;
        app.policies
            .insert_all(vec![PolicyBuilder::new().with_id(10).build()])
            .await;

        let response = app
            .server
            .put("/api/policies/10")
            .json(&policy_body(999, "ProviderY", "2026-01-01", "2026-12-31"))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Car not found");
    }
}

mod health {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let app = test_app().await;

        let response = app.server.get("/health").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "healthy");
    }

    #[tokio::test]
    async fn test_readiness_reports_unhealthy_port() {
        let app = test_app().await;

        app.server.get("/health/ready").await.assert_status_ok();

        app.cars.set_unavailable(true);
        let response = app.server.get("/health/ready").await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.json::<Value>()["status"], "unavailable");
    }

    #[tokio::test]
    async fn test_storage_failure_is_500() {
        let app = test_app().await;
        app.cars.set_unavailable(true);

        let response = app.server.get("/api/cars").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.json::<Value>()["error"], "database_error");
    }
}
