//! HTTP server initialization and runtime setup.
//!
//! Builds the provider client and record service, then runs the Axum server
//! until SIGINT/SIGTERM, draining in-flight requests for a bounded window.

use crate::application::services::RecordService;
use crate::config::Config;
use crate::infrastructure::porkbun::PorkbunClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::extract::Request;
use axum::{Router, ServiceExt};
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::normalize_path::NormalizePath;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Porkbun API client (connection pool, timeout, retry policy)
/// - Record service
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The provider URL or HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client = PorkbunClient::new(
        config.provider_url()?,
        config.upstream_timeout(),
        config.retry_policy(),
    )
    .context("Failed to build Porkbun client")?;
    tracing::info!(base_url = %client.base_url(), "Porkbun client ready");

    let record_service = Arc::new(RecordService::new(Arc::new(client), config.record_ttl));
    let state = AppState::new(record_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    serve(listener, app, shutdown_signal(), config.shutdown_grace()).await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Serves `app` on `listener` until `shutdown` resolves.
///
/// Once `shutdown` fires no new connections are accepted. In-flight requests
/// get up to `grace` to finish; after that the server task is aborted and
/// this function returns. Connections still open at that point are dropped
/// when the runtime shuts down.
///
/// # Errors
///
/// Returns an error if the server fails or its task panics.
pub async fn serve<F>(
    listener: TcpListener,
    app: NormalizePath<Router>,
    shutdown: F,
    grace: Duration,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (signal_tx, signal_rx) = oneshot::channel::<()>();
    let serve = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(async move {
            shutdown.await;
            let _ = signal_tx.send(());
        });
    let mut handle = tokio::spawn(serve.into_future());

    tokio::select! {
        result = &mut handle => {
            result.context("Server task panicked")??;
            return Ok(());
        }
        _ = signal_rx => {}
    }

    tracing::info!(
        grace_ms = u64::try_from(grace.as_millis()).unwrap_or(u64::MAX),
        "Shutdown signal received, draining requests"
    );

    match tokio::time::timeout(grace, &mut handle).await {
        Ok(result) => result.context("Server task panicked")??,
        Err(_) => {
            tracing::warn!("Grace period elapsed, aborting remaining connections");
            handle.abort();
        }
    }

    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
