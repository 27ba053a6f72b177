//! Authorization hook handler.
//!
//! # Purpose and responsibility
//! Accepts the gateway's request descriptor and returns the allow/deny policy
//! decision for it.
//!
//! # Key invariants and assumptions
//! - The handler is infallible at the HTTP layer: verification failures are
//!   expressed as Deny decisions with status 200, never as error responses,
//!   so the gateway always receives a policy it can enforce.
//!
//! # Security considerations
//! - The request body is attacker-controlled; it only influences the decision
//!   through the verification pipeline.
use crate::api::types::AuthorizerRequest;
use crate::app::AppState;
use axum::Json;
use axum::extract::State;
use warden_authz::Decision;

#[utoipa::path(
    post,
    path = "/v1/authorize",
    tag = "authorize",
    request_body = AuthorizerRequest,
    responses(
        (status = 200, description = "Allow or deny policy decision", body = Decision)
    )
)]
/// Decide whether the described invocation may proceed.
///
/// # What it does
/// Runs the full decision pipeline: session cookie extraction, signing-key
/// retrieval, token verification, policy assembly.
///
/// # Why it exists
/// This is the hook the gateway calls before forwarding any gated request.
///
/// # Errors
/// - Does not return errors; every failure mode maps to a Deny decision.
pub(crate) async fn authorize(
    State(state): State<AppState>,
    Json(request): Json<AuthorizerRequest>,
) -> Json<Decision> {
    Json(state.authorizer.authorize(&request).await)
}
