//! Data model of the trust domain's published signing-key set.
//!
//! # Purpose
//! serde schema for the `jwks.json` document served at the pool's discovery
//! path (`/<pool>/.well-known/jwks.json`). The pool publishes RSA signature
//! keys only, so the model carries exactly what verification needs: the key
//! id tokens name in their header, and the `n`/`e` components the decoding
//! key is built from.
//!
//! # Key invariants
//! - `use` is constrained to `sig` at the type level; a document carrying an
//!   encryption key fails deserialization instead of reaching key selection.
//! - Components stay base64url strings end to end; decoding them is the
//!   verifier's job, never this module's.
//! - Publication order is preserved. During rotation the pool lists the
//!   current key first, which the no-`kid` fallback in key selection relies
//!   on.
use serde::{Deserialize, Serialize};

/// Declared purpose of a published key. The pool signs; it never encrypts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyUse {
    Sig,
}

/// One RSA signing key as the pool publishes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Jwk {
    /// Key family; `RSA` for every key the pool serves.
    pub kty: String,
    /// Key id, matched against the token header during selection.
    pub kid: String,
    /// Algorithm the key is published for, e.g. `RS256`.
    pub alg: String,
    #[serde(rename = "use")]
    pub use_field: KeyUse,
    /// Modulus, base64url.
    pub n: String,
    /// Public exponent, base64url (`AQAB` in practice).
    pub e: String,
}

/// The key set document exactly as fetched from the discovery path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Jwks {
    pub keys: Vec<Jwk>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_discovery_document_with_rotation_in_progress() {
        // Two keys, current one first, as the pool serves mid-rotation.
        let document = json!({
            "keys": [
                {
                    "alg": "RS256",
                    "e": "AQAB",
                    "kid": "zgkvyC26pU1234example=",
                    "kty": "RSA",
                    "n": "lsjhglskjhgslkjgh43lj5h34lkjh34lkjht3example",
                    "use": "sig"
                },
                {
                    "alg": "RS256",
                    "e": "AQAB",
                    "kid": "fgjhlkhjlkhexample=",
                    "kty": "RSA",
                    "n": "sgjhlk6jp98ugp98up34hpexample",
                    "use": "sig"
                }
            ]
        });

        let jwks: Jwks = serde_json::from_value(document).expect("deserialize");
        assert_eq!(jwks.keys.len(), 2);
        // Publication order carries the rotation contract.
        assert!(jwks.keys[0].kid.ends_with("1234example="));
        assert_eq!(jwks.keys[1].e, "AQAB");
        assert_eq!(jwks.keys[1].kty, "RSA");
    }

    #[test]
    fn rejects_encryption_keys() {
        let document = json!({
            "keys": [{
                "alg": "RSA-OAEP",
                "e": "AQAB",
                "kid": "fgjhlkhjlkhexample=",
                "kty": "RSA",
                "n": "sgjhlk6jp98ugp98up34hpexample",
                "use": "enc"
            }]
        });

        assert!(serde_json::from_value::<Jwks>(document).is_err());
    }

    #[test]
    fn key_use_serializes_under_its_wire_name() {
        let jwks = Jwks {
            keys: vec![Jwk {
                kty: "RSA".to_string(),
                kid: "fgjhlkhjlkhexample=".to_string(),
                alg: "RS256".to_string(),
                use_field: KeyUse::Sig,
                n: "sgjhlk6jp98ugp98up34hpexample".to_string(),
                e: "AQAB".to_string(),
            }],
        };

        let serialized = serde_json::to_string(&jwks).expect("serialize");
        assert!(serialized.contains("\"use\":\"sig\""));
    }
}
