//! Authorizer decision pipeline and key-set retrieval.
//!
//! # Purpose
//! Groups the network-facing half of authorization: fetching the trust
//! domain's key set and assembling fail-closed decisions from it.
pub mod authorizer;
pub mod keyset;
