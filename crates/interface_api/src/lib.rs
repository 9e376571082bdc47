//! HTTP API Layer
//!
//! REST API for car insurance tracking using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for cars, claims, policies and health
//! - **Middleware**: Request logging; tracing, CORS and request ids via tower-http
//! - **DTOs**: camelCase request/response bodies
//! - **Error Handling**: Consistent `{error, message}` error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::new(service, config));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{
    Router,
    routing::{get, post, put},
    middleware as axum_middleware,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_car::CarInsuranceService;

use crate::config::ApiConfig;
use crate::middleware::request_logging_middleware;
use crate::handlers::{cars, claims, health, policies};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: CarInsuranceService,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(service: CarInsuranceService, config: ApiConfig) -> Self {
        Self { service, config }
    }
}

/// Creates the main API router
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let car_routes = Router::new()
        .route("/", get(cars::list_cars))
        .route("/:car_id/claims", post(claims::register_claim))
        .route("/:car_id/history", get(cars::car_history))
        .route("/:car_id/insurance-valid", get(cars::insurance_validity));

    let policy_routes = Router::new()
        .route("/", post(policies::create_policy))
        .route("/:id", put(policies::update_policy));

    let api_routes = Router::new()
        .nest("/cars", car_routes)
        .nest("/policies", policy_routes)
        .layer(axum_middleware::from_fn(request_logging_middleware));

    Router::new()
        .merge(health_routes)
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
