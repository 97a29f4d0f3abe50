use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::db::store::Connector;
use crate::router::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub host: String,
    pub version: &'static str,
}

/// GET /health -> liveness for the load balancer. Does not touch the database.
pub async fn health_handler<C: Connector>(State(state): State<AppState<C>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        host: state.hostname.to_string(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
