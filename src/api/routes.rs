//! API route configuration

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::binding::InvokeRequest;

use super::handlers::{self, AppState};

/// Build the complete API router.
///
/// `max_body_size` of 0 leaves request bodies unbounded.
pub fn build_router(app_state: AppState, max_body_size: usize) -> Router {
    let public_routes = Router::new()
        .route("/", get(root_handler))
        .route("/health/live", get(liveness_handler))
        .route("/health/ready", get(readiness_handler))
        .with_state(app_state.clone());

    let mut api_routes = Router::new()
        .route("/v1/invoke", post(handlers::invoke))
        .route("/v1/operations", get(handlers::list_operations))
        .route("/v1/metadata", get(handlers::component_metadata))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state);

    if max_body_size > 0 {
        api_routes = api_routes.layer(RequestBodyLimitLayer::new(max_body_size));
    }

    public_routes.merge(api_routes)
}

/// Root handler
async fn root_handler() -> impl IntoResponse {
    Json(json!({
        "service": "Chroma Binding",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

/// Liveness probe handler - always returns 200
async fn liveness_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "alive"})))
}

/// Readiness probe handler - ready once Chroma answers a heartbeat
async fn readiness_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.binding.invoke(&InvokeRequest::new("heartbeat")).await {
        Ok(_) => (StatusCode::OK, Json(json!({"status": "ready"}))),
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"status": "not_ready", "error": e.to_string()})),
            )
        }
    }
}
