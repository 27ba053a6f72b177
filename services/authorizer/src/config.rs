use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_JWKS_TTL_SECS: u64 = 300;
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 3_000;
pub const DEFAULT_CLOCK_SKEW_SECS: u64 = 60;

// Authorizer configuration sourced from environment variables.
#[derive(Debug, Clone)]
pub struct AuthorizerConfig {
    pub bind_addr: SocketAddr,
    pub metrics_bind: SocketAddr,
    /// Trust-domain identifier. `None` is a recognized misconfiguration: the
    /// service still starts and denies every request while logging it.
    pub user_pool_id: Option<String>,
    pub region: String,
    /// Full JWKS URL base override; replaces the derived issuer host.
    pub jwks_url: Option<String>,
    pub jwks_ttl: Duration,
    pub http_timeout: Duration,
    pub clock_skew_seconds: u64,
}

#[derive(Debug, Deserialize)]
struct AuthorizerConfigOverride {
    bind_addr: Option<String>,
    metrics_bind: Option<String>,
    user_pool_id: Option<String>,
    region: Option<String>,
    jwks_url: Option<String>,
    jwks_ttl_secs: Option<u64>,
    http_timeout_ms: Option<u64>,
    clock_skew_secs: Option<u64>,
}

fn non_empty(value: std::result::Result<String, std::env::VarError>) -> Option<String> {
    value.ok().filter(|value| !value.trim().is_empty())
}

impl AuthorizerConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = std::env::var("AUTHORIZER_BIND")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .with_context(|| "parse AUTHORIZER_BIND")?;
        let metrics_bind = std::env::var("AUTHORIZER_METRICS_BIND")
            .unwrap_or_else(|_| "0.0.0.0:9090".to_string())
            .parse()
            .with_context(|| "parse AUTHORIZER_METRICS_BIND")?;
        // Blank is treated the same as unset so a stray empty export does not
        // produce a pool id that can never match an issuer.
        let user_pool_id = non_empty(std::env::var("USER_POOL_ID"));
        let region = std::env::var("REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());
        let jwks_url = non_empty(std::env::var("AUTHORIZER_JWKS_URL"));
        let jwks_ttl_secs = match std::env::var("AUTHORIZER_JWKS_TTL_SECS") {
            Ok(value) => value
                .parse()
                .with_context(|| "parse AUTHORIZER_JWKS_TTL_SECS")?,
            Err(_) => DEFAULT_JWKS_TTL_SECS,
        };
        let http_timeout_ms = match std::env::var("AUTHORIZER_HTTP_TIMEOUT_MS") {
            Ok(value) => value
                .parse()
                .with_context(|| "parse AUTHORIZER_HTTP_TIMEOUT_MS")?,
            Err(_) => DEFAULT_HTTP_TIMEOUT_MS,
        };
        let clock_skew_seconds = match std::env::var("AUTHORIZER_CLOCK_SKEW_SECS") {
            Ok(value) => value
                .parse()
                .with_context(|| "parse AUTHORIZER_CLOCK_SKEW_SECS")?,
            Err(_) => DEFAULT_CLOCK_SKEW_SECS,
        };
        Ok(Self {
            bind_addr,
            metrics_bind,
            user_pool_id,
            region,
            jwks_url,
            jwks_ttl: Duration::from_secs(jwks_ttl_secs),
            http_timeout: Duration::from_millis(http_timeout_ms),
            clock_skew_seconds,
        })
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var("AUTHORIZER_CONFIG") {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("read AUTHORIZER_CONFIG: {path}"))?;
            let override_cfg: AuthorizerConfigOverride =
                serde_yaml::from_str(&contents).with_context(|| "parse authorizer config yaml")?;
            if let Some(value) = override_cfg.bind_addr {
                config.bind_addr = value.parse().with_context(|| "parse bind_addr")?;
            }
            if let Some(value) = override_cfg.metrics_bind {
                config.metrics_bind = value.parse().with_context(|| "parse metrics_bind")?;
            }
            // Blank means unset here too, so an override file cannot smuggle
            // an empty pool segment into the discovery URL.
            if let Some(value) = override_cfg.user_pool_id {
                let value = value.trim();
                config.user_pool_id = (!value.is_empty()).then(|| value.to_string());
            }
            if let Some(value) = override_cfg.region {
                config.region = value;
            }
            if let Some(value) = override_cfg.jwks_url {
                config.jwks_url = Some(value);
            }
            if let Some(value) = override_cfg.jwks_ttl_secs {
                config.jwks_ttl = Duration::from_secs(value);
            }
            if let Some(value) = override_cfg.http_timeout_ms {
                config.http_timeout = Duration::from_millis(value);
            }
            if let Some(value) = override_cfg.clock_skew_secs {
                config.clock_skew_seconds = value;
            }
        }
        Ok(config)
    }
}
