//! Authorizer HTTP API module.
//!
//! # Purpose
//! Exposes the route handler modules and the boundary types the gateway
//! exchanges with this service.
pub mod authorize;
pub mod openapi;
pub mod system;
pub mod types;
