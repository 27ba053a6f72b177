//! Gateway request authorizer HTTP service entry point.
//!
//! # Purpose
//! Wires configuration, the decision pipeline, and the HTTP router, then
//! starts the API server and the metrics endpoint.
//!
//! # Notes
//! The `run_with_shutdown` helper keeps startup testable and minimizes main
//! setup logic.
use authorizer::app::{build_router, build_state};
use authorizer::{config, observability};
use std::future::Future;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::AuthorizerConfig::from_env_or_yaml()?;
    run_with_shutdown(config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run_with_shutdown<F>(config: config::AuthorizerConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let metrics_handle = observability::init_observability("warden-authorizer");
    let state = build_state(&config)?;
    let metrics_task = tokio::spawn(observability::serve_metrics(
        metrics_handle,
        config.metrics_bind,
    ));

    let app = build_router(state);

    let addr = config.bind_addr;
    tracing::info!(%addr, "authorizer listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tokio::pin!(shutdown);
    tokio::select! {
        result = axum::serve(listener, app.into_make_service()) => {
            result?;
        }
        _ = &mut shutdown => {}
    }

    metrics_task.abort();
    let _ = metrics_task.await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use authorizer::config::AuthorizerConfig;
    use serial_test::serial;
    use std::time::Duration;

    fn test_config() -> AuthorizerConfig {
        AuthorizerConfig {
            bind_addr: "127.0.0.1:0".parse().expect("bind"),
            metrics_bind: "127.0.0.1:0".parse().expect("metrics"),
            user_pool_id: Some("pool-1".to_string()),
            region: "us-east-1".to_string(),
            jwks_url: None,
            jwks_ttl: Duration::from_secs(300),
            http_timeout: Duration::from_millis(500),
            clock_skew_seconds: 60,
        }
    }

    #[tokio::test]
    #[serial]
    async fn run_with_shutdown_starts_and_stops() {
        run_with_shutdown(test_config(), async {
            tokio::time::sleep(Duration::from_millis(100)).await;
        })
        .await
        .expect("run should stop cleanly");
    }

    #[tokio::test]
    #[serial]
    async fn run_with_shutdown_starts_without_user_pool() {
        let config = AuthorizerConfig {
            user_pool_id: None,
            ..test_config()
        };
        run_with_shutdown(config, async {
            tokio::time::sleep(Duration::from_millis(100)).await;
        })
        .await
        .expect("run should stop cleanly");
    }
}
