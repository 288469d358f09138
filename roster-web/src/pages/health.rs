//! Health Check Handler
//!
//! Liveness endpoint for load balancers. It does not touch the users API,
//! so an upstream outage never takes the front-end out of rotation.

use axum::{
    http::{StatusCode, header},
    response::IntoResponse,
};

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, [(header::CACHE_CONTROL, "no-store")], "OK")
}
