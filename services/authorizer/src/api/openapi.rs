//! OpenAPI schema aggregation for the authorizer API.
//!
//! # Purpose
//! Collects all routes and schema types into a single OpenAPI document for
//! docs and client generation.
use crate::api::{
    authorize, system,
    types::{AuthorizerRequest, HealthStatus},
};
use utoipa::OpenApi;
use warden_authz::{Decision, Effect, PolicyDocument, PolicyStatement};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "warden-authorizer",
        version = "v1",
        description = "Gateway request authorizer HTTP API"
    ),
    paths(authorize::authorize, system::system_health),
    components(schemas(
        AuthorizerRequest,
        HealthStatus,
        Decision,
        PolicyDocument,
        PolicyStatement,
        Effect
    )),
    tags(
        (name = "authorize", description = "Authorization decisions"),
        (name = "system", description = "System and health endpoints")
    )
)]
pub struct ApiDoc;
