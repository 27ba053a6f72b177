//! Cookie extraction from gateway request headers.
//!
//! # Purpose
//! Locates the bearer credential in the `Cookie` header of an inbound request
//! descriptor without trusting any of its contents.
//!
//! # Key invariants
//! - The header lookup is case-sensitive on the canonical `Cookie` name; the
//!   gateway forwards it in that exact casing.
//! - Malformed pairs (no `=`, empty name, empty value) are skipped, never
//!   errors. An attacker controls this header end to end.
//! - "No cookie header" (`None`) is distinct from "cookies present but no
//!   token"; callers treat both as a missing credential.
use std::collections::HashMap;

/// Canonical request header carrying cookies.
pub const COOKIE_HEADER: &str = "Cookie";

/// Cookie entry holding the signed session token.
pub const TOKEN_COOKIE: &str = "token";

/// Parse the `Cookie` header into a name/value map.
///
/// Returns `None` when the header is absent. Entries that do not form a
/// non-empty `name=value` pair are dropped silently; later duplicates win.
pub fn parse_cookies(headers: &HashMap<String, String>) -> Option<HashMap<String, String>> {
    let raw = headers.get(COOKIE_HEADER)?;
    let mut cookies = HashMap::new();
    for pair in raw.split(';') {
        let pair = pair.trim();
        // Split on the first '=' only; token values may themselves be opaque.
        let Some((name, value)) = pair.split_once('=') else {
            continue;
        };
        if name.is_empty() || value.is_empty() {
            continue;
        }
        cookies.insert(name.to_string(), value.to_string());
    }
    Some(cookies)
}

/// Extract the session token cookie, if any.
pub fn session_token(headers: &HashMap<String, String>) -> Option<String> {
    parse_cookies(headers)?.remove(TOKEN_COOKIE)
}
