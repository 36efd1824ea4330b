#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use porkbun_ddns::application::services::{DEFAULT_RECORD_TTL, RecordService};
use porkbun_ddns::infrastructure::porkbun::{PorkbunClient, RetryPolicy};
use porkbun_ddns::routes::api_router;
use porkbun_ddns::state::AppState;

/// Retries twice with a 1ms backoff so failure paths stay fast.
pub fn fast_retry() -> RetryPolicy {
    RetryPolicy::new(2, Duration::from_millis(1))
}

pub fn create_test_client(server: &MockServer, retry: RetryPolicy) -> PorkbunClient {
    let base_url = Url::parse(&format!("{}/api/json/v3", server.uri())).unwrap();
    PorkbunClient::new(base_url, Duration::from_secs(2), retry).unwrap()
}

pub fn create_test_state(server: &MockServer) -> AppState {
    let client = create_test_client(server, fast_retry());
    let service = RecordService::new(Arc::new(client), DEFAULT_RECORD_TTL);
    AppState::new(Arc::new(service))
}

pub fn create_test_server(provider: &MockServer) -> TestServer {
    TestServer::new(api_router(create_test_state(provider))).unwrap()
}

pub fn success() -> Value {
    json!({ "status": "SUCCESS" })
}

pub fn records_body(records: Value) -> Value {
    json!({ "status": "SUCCESS", "records": records })
}

pub fn record(id: &str, record_type: &str, name: &str, content: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": record_type,
        "content": content,
        "ttl": "600",
        "prio": "0",
        "notes": ""
    })
}

/// Mounts a retrieve endpoint for `domain` returning `records`.
pub async fn mount_retrieve(server: &MockServer, domain: &str, records: Value) {
    Mock::given(method("POST"))
        .and(path(format!("/api/json/v3/dns/retrieve/{domain}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(records_body(records)))
        .mount(server)
        .await;
}
