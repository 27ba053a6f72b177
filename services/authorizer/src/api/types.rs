//! Boundary types exchanged with the gateway.
//!
//! # Purpose
//! Typed request/response schemas for the authorization hook, deserialized
//! strictly at the edge so handlers never touch loose JSON.
//!
//! # Key invariants
//! - Header names are preserved verbatim; cookie extraction downstream is
//!   case-sensitive on the map keys exactly as the gateway delivers them.
//! - `method_arn` is treated as an opaque resource identifier and echoed into
//!   the decision unchanged.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// The request descriptor the gateway posts for each invocation it gates.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorizerRequest {
    /// Raw request headers as delivered by the gateway.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// ARN of the method invocation being authorized.
    #[serde(rename = "methodArn")]
    pub method_arn: String,
    /// HTTP verb of the gated invocation, informational only.
    #[serde(rename = "httpMethod", default, skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,
}

/// Simple health status payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
}
