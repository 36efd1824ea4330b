use axum::{Router, routing::get};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::runtime::Runtime;
use tokio::sync::{Notify, oneshot};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use porkbun_ddns::server::serve;

/// A router whose only route signals `started` and then sleeps for `delay`.
fn slow_app(delay: Duration, started: Arc<Notify>) -> NormalizePath<Router> {
    let router = Router::new().route(
        "/slow",
        get(move || {
            let started = started.clone();
            async move {
                started.notify_one();
                tokio::time::sleep(delay).await;
                "done"
            }
        }),
    );
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

#[tokio::test]
async fn test_in_flight_request_completes_after_shutdown_starts() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let started = Arc::new(Notify::new());
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(serve(
        listener,
        slow_app(Duration::from_millis(300), started.clone()),
        async move {
            let _ = shutdown_rx.await;
        },
        Duration::from_secs(5),
    ));

    let request = tokio::spawn(reqwest::get(format!("http://{addr}/slow")));
    started.notified().await;
    shutdown_tx.send(()).unwrap();

    let response = request.await.unwrap().unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "done");

    tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server should stop once drained")
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn test_new_connections_are_refused_after_shutdown() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(serve(
        listener,
        slow_app(Duration::ZERO, Arc::new(Notify::new())),
        async move {
            let _ = shutdown_rx.await;
        },
        Duration::from_secs(5),
    ));

    shutdown_tx.send(()).unwrap();
    tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("idle server should stop immediately")
        .unwrap()
        .unwrap();

    assert!(reqwest::get(format!("http://{addr}/slow")).await.is_err());
}

#[test]
fn test_request_longer_than_grace_is_cut_off() {
    let server_rt = Runtime::new().unwrap();
    let client_rt = Runtime::new().unwrap();

    let listener = server_rt
        .block_on(TcpListener::bind("127.0.0.1:0"))
        .unwrap();
    let addr = listener.local_addr().unwrap();
    let started = Arc::new(Notify::new());
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let app = slow_app(Duration::from_secs(30), started.clone());

    let request = client_rt.spawn(async move {
        reqwest::Client::new()
            .get(format!("http://{addr}/slow"))
            .timeout(Duration::from_secs(20))
            .send()
            .await
    });

    let stopped = server_rt.block_on(async move {
        let server = tokio::spawn(serve(
            listener,
            app,
            async move {
                let _ = shutdown_rx.await;
            },
            Duration::from_millis(100),
        ));

        started.notified().await;
        shutdown_tx.send(()).unwrap();
        tokio::time::timeout(Duration::from_secs(5), server).await
    });

    stopped
        .expect("server should stop after the grace period")
        .unwrap()
        .unwrap();

    // Process exit: dropping the runtime drops the remaining connection.
    drop(server_rt);

    let result = client_rt.block_on(request).unwrap();
    let err = result.expect_err("request should not complete");
    assert!(!err.is_timeout(), "connection should be closed, got {err:?}");
}
