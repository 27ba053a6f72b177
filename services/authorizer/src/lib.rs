//! Gateway authorizer service library crate.
//!
//! # Purpose
//! Exposes the decision pipeline, HTTP hook surface, configuration, and
//! observability wiring for use by the binary and the integration tests.
//!
//! # Notes
//! The `auth` module owns everything that touches the network; `api` owns the
//! wire schemas the gateway sees.
pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod observability;
