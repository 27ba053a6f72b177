//! Authn/authz primitives shared by the warden authorizer service.
//!
//! # Purpose
//! Centralizes credential extraction, the JWKS data model, bearer-token
//! verification, and gateway decision assembly.
//!
//! # How it fits
//! The authorizer service fetches the trust domain's key set over the network
//! and hands it to this crate for verification; this crate never performs I/O
//! of its own, which keeps every check deterministic and unit-testable.
//!
//! # Key invariants
//! - Only the RSA signature family is accepted; HS/EdDSA tokens are rejected
//!   before any key material is touched.
//! - An Allow decision always carries a non-empty principal; Deny always
//!   carries an empty one. The constructors make the other combinations
//!   unrepresentable.
//!
//! # Examples
//! ```rust
//! use warden_authz::Decision;
//!
//! let decision = Decision::deny("arn:aws:execute-api:us-east-1:123:api/*/GET/paintings");
//! assert!(!decision.is_allow());
//! assert!(decision.principal_id.is_empty());
//! ```
//!
//! # Common pitfalls
//! - Treating "no cookie header" and "no token cookie" as different outcomes;
//!   both must resolve to a Deny with an empty principal.
//! - Verifying against a stale key set after rotation; callers are expected
//!   to refresh and retry once when the token names an unknown `kid`.

mod cookies;
mod decision;
mod errors;
mod jwks;
mod verify;

pub use cookies::{COOKIE_HEADER, TOKEN_COOKIE, parse_cookies, session_token};
pub use decision::{Decision, Effect, INVOKE_ACTION, POLICY_VERSION, PolicyDocument, PolicyStatement};
pub use errors::{AuthzError, AuthzResult};
pub use jwks::{Jwk, Jwks, KeyUse};
pub use verify::{TokenVerifier, VerifiedClaims};
