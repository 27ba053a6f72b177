//! Key-set retrieval from the trust domain's discovery endpoint.
//!
//! # Purpose
//! Fetches `https://<issuer-host>/<pool-id>/.well-known/jwks.json` and serves
//! it through a TTL-bounded read-through cache.
//!
//! # Architectural role
//! The only network dependency of the decision pipeline. Verification waits
//! on this fetch; it never proceeds with a partial key set.
//!
//! # Key invariants
//! - The HTTP client carries a bounded timeout; an unreachable trust domain
//!   fails a decision, it does not hang it.
//! - Cache entries expire after the configured TTL, so a rotated key is
//!   picked up within one TTL at worst and immediately when a caller forces
//!   [`KeySetClient::refresh`].
//! - Network errors, non-2xx statuses, and malformed JSON all collapse into
//!   [`AuthzError::KeySetUnavailable`]; no retry is attempted here.
//!
//! # Concurrency model
//! The cache is a `DashMap` shared across concurrent decisions; readers never
//! block each other and a racing refresh simply overwrites with equal data.
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use warden_authz::{AuthzError, AuthzResult, Jwks};

#[derive(Debug, Clone)]
pub struct KeySetClient {
    url: String,
    client: reqwest::Client,
    cache: Arc<DashMap<String, CachedKeys>>,
    ttl: Duration,
}

#[derive(Debug, Clone)]
struct CachedKeys {
    keys: Jwks,
    expires_at: Instant,
}

/// Build the discovery URL for a user pool.
///
/// Without an override the issuer host is derived from the region the way the
/// trust domain publishes it; an override base replaces scheme and host for
/// non-AWS issuers and tests.
pub fn discovery_url(pool_id: &str, region: &str, base_override: Option<&str>) -> String {
    let base = match base_override {
        Some(base) => base.trim_end_matches('/').to_string(),
        None => format!("https://cognito-idp.{region}.amazonaws.com"),
    };
    format!("{base}/{pool_id}/.well-known/jwks.json")
}

impl KeySetClient {
    pub fn new(
        pool_id: &str,
        region: &str,
        base_override: Option<&str>,
        ttl: Duration,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| anyhow::anyhow!("build jwks http client: {err}"))?;
        Ok(Self {
            url: discovery_url(pool_id, region, base_override),
            client,
            cache: Arc::new(DashMap::new()),
            ttl,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Return the key set, fetching it when the cache is cold or expired.
    pub async fn get(&self) -> AuthzResult<Jwks> {
        // Step 1: Serve the cached key set when it hasn't expired.
        if let Some(entry) = self.cache.get(&self.url)
            && entry.expires_at > Instant::now()
        {
            return Ok(entry.keys.clone());
        }
        // Step 2: Refresh on cache miss or expiry.
        self.refresh().await
    }

    /// Force a network fetch and re-prime the cache.
    ///
    /// Callers use this when a token names a `kid` the cached set lacks,
    /// which is the rotation signal.
    pub async fn refresh(&self) -> AuthzResult<Jwks> {
        let keys: Jwks = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|err| AuthzError::KeySetUnavailable(err.to_string()))?
            .error_for_status()
            .map_err(|err| AuthzError::KeySetUnavailable(err.to_string()))?
            .json()
            .await
            .map_err(|err| AuthzError::KeySetUnavailable(err.to_string()))?;
        self.cache.insert(
            self.url.clone(),
            CachedKeys {
                keys: keys.clone(),
                expires_at: Instant::now() + self.ttl,
            },
        );
        Ok(keys)
    }

    #[cfg(test)]
    pub(crate) fn prime(&self, keys: Jwks) {
        self.cache.insert(
            self.url.clone(),
            CachedKeys {
                keys,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discovery_url_derives_issuer_host_from_region() {
        let url = discovery_url("us-east-1_Example", "us-east-1", None);
        assert_eq!(
            url,
            "https://cognito-idp.us-east-1.amazonaws.com/us-east-1_Example/.well-known/jwks.json"
        );
    }

    #[test]
    fn discovery_url_honors_base_override() {
        let url = discovery_url("pool-1", "us-east-1", Some("http://127.0.0.1:9/"));
        assert_eq!(url, "http://127.0.0.1:9/pool-1/.well-known/jwks.json");
    }

    #[tokio::test]
    async fn unreachable_issuer_is_key_set_unavailable() {
        let client = KeySetClient::new(
            "pool-1",
            "us-east-1",
            Some("http://127.0.0.1:1"),
            Duration::from_secs(300),
            Duration::from_millis(200),
        )
        .expect("client");
        let err = client.get().await.expect_err("unreachable");
        assert!(matches!(err, AuthzError::KeySetUnavailable(_)));
    }

    #[tokio::test]
    async fn cached_keys_are_served_without_network() {
        // The base points at a closed port, so any fetch attempt would fail;
        // a successful get proves the cache was used.
        let client = KeySetClient::new(
            "pool-1",
            "us-east-1",
            Some("http://127.0.0.1:1"),
            Duration::from_secs(300),
            Duration::from_millis(200),
        )
        .expect("client");
        client.prime(Jwks { keys: Vec::new() });
        let keys = client.get().await.expect("cached");
        assert!(keys.keys.is_empty());
    }

    #[tokio::test]
    async fn expired_cache_entries_trigger_refetch() {
        let client = KeySetClient::new(
            "pool-1",
            "us-east-1",
            Some("http://127.0.0.1:1"),
            Duration::from_secs(0),
            Duration::from_millis(200),
        )
        .expect("client");
        client.prime(Jwks { keys: Vec::new() });
        let err = client.get().await.expect_err("expired entry");
        assert!(matches!(err, AuthzError::KeySetUnavailable(_)));
    }
}
