//! HTTP gateway (Axum) for the evaluation endpoint.
//!
//! This module is primarily used by the `promptgauge` server binary.

pub mod error;
pub mod handler;
pub mod state;


use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use handler::{EvaluateResponse, evaluate_handler};
pub use state::HandlerState;

use crate::provider::ScoreModel;

/// Largest multipart body accepted (prompt plus image upload).
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Builds the application router: evaluation endpoint, liveness endpoint,
/// permissive CORS on every route (browser clients upload directly), and
/// per-request tracing.
pub fn create_router_with_state<M>(state: HandlerState<M>) -> Router
where
    M: ScoreModel + Clone + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(health_handler))
        .route("/evaluate", post(evaluate_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Liveness only: answers regardless of model-provider availability.
#[tracing::instrument]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Backend is running",
    })
}
