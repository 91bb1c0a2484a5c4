//! Startup and shutdown behavior of the service.

use address_service::config::ServiceConfig;
use address_service::lifecycle::{self, StartupError};
use tokio::net::TcpListener;

mod common;

#[tokio::test]
async fn test_stop_releases_port() {
    let (handle, base) = common::start_service().await;
    let addr = handle.local_addr();

    // The service answers while running.
    let client = reqwest::Client::new();
    let res = client.get(format!("{base}/addresses")).send().await.unwrap();
    assert!(res.status().is_success());

    handle.stop().await;

    // Once stop resolves, no further requests are accepted...
    let fresh_client = reqwest::Client::new();
    assert!(fresh_client
        .get(format!("{base}/addresses"))
        .send()
        .await
        .is_err());

    // ...and the port can be bound again.
    TcpListener::bind(addr)
        .await
        .expect("port still held after stop");
}

#[tokio::test]
async fn test_start_fails_when_port_taken() {
    let occupied = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = occupied.local_addr().unwrap();

    let mut config = ServiceConfig::default();
    config.listener.bind_address = addr.to_string();

    let err = lifecycle::start(config)
        .await
        .expect_err("start must fail on an occupied port");
    assert!(matches!(err, StartupError::Bind(_)));
}

#[tokio::test]
async fn test_store_is_rebuilt_on_restart() {
    let (handle, base) = common::start_service().await;
    let client = reqwest::Client::new();
    client
        .put(format!("{base}/address/1"))
        .body("ephemeral")
        .send()
        .await
        .unwrap();
    handle.stop().await;

    // A fresh instance starts with an empty store.
    let (handle, base) = common::start_service().await;
    let records: Vec<serde_json::Value> = client
        .get(format!("{base}/addresses"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(records.is_empty());

    handle.stop().await;
}
