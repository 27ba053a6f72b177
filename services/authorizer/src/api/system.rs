//! System/health API handlers.
//!
//! # Purpose and responsibility
//! Lightweight probe endpoints for operators and automation.
//!
//! # Key invariants and assumptions
//! - Health checks must be fast and side-effect free; the authorizer keeps no
//!   backing store, so health is purely liveness.
use crate::api::types::HealthStatus;
use axum::Json;

#[utoipa::path(
    get,
    path = "/v1/system/health",
    tag = "system",
    responses(
        (status = 200, description = "Authorizer health", body = HealthStatus)
    )
)]
/// Return authorizer health status.
///
/// # What it does
/// Reports `ok` whenever the process is serving requests.
///
/// # Why it exists
/// Supports readiness/liveness checks and operational monitoring.
///
/// # Errors
/// - Does not return errors.
pub(crate) async fn system_health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
    })
}
