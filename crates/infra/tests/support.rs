#![allow(dead_code)]

use std::time::Duration;

use serde_json::{json, Value};
use vlxgate_domain::GatewayConfig;
use vlxgate_infra::{HttpClient, Interface};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const PASSWORD: &str = "velux123";
pub const AUTH_PATH: &str = "/api/v1/auth";
pub const PRODUCTS_PATH: &str = "/api/v1/products";

/// Per-attempt timeout used against the mock gateway.
pub const TEST_TIMEOUT: Duration = Duration::from_millis(250);

/// Interface pointed at `server` with a short timeout.
pub fn interface_for(server: &MockServer) -> Interface {
    let config =
        GatewayConfig::new(server.address().to_string(), PASSWORD).expect("config should be valid");
    let http = HttpClient::builder().timeout(TEST_TIMEOUT).build().expect("http client");
    Interface::with_http_client(config, http).expect("interface should be created")
}

/// Answer every login with `token`.
pub async fn mount_login(server: &MockServer, token: &str) {
    login_mock(json!({"result": true, "token": token})).mount(server).await;
}

/// Answer the next login only with `token`; later logins fall through to
/// mocks mounted afterwards.
pub async fn mount_login_once(server: &MockServer, token: &str) {
    login_mock(json!({"result": true, "token": token})).up_to_n_times(1).mount(server).await;
}

pub fn login_mock(body: Value) -> Mock {
    Mock::given(method("POST"))
        .and(path(AUTH_PATH))
        .and(body_partial_json(json!({"action": "login"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
}

/// Mock for `products/get` sent with `token`.
pub fn products_with_token(token: &str, body: Value) -> Mock {
    Mock::given(method("POST"))
        .and(path(PRODUCTS_PATH))
        .and(header("authorization", format!("Bearer {token}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
}

/// Requests recorded for `path` carrying `action` in their JSON body.
pub async fn requests_for(server: &MockServer, path: &str, action: &str) -> Vec<Request> {
    server
        .received_requests()
        .await
        .expect("request recording should be enabled")
        .into_iter()
        .filter(|request| request.url.path() == path)
        .filter(|request| {
            serde_json::from_slice::<Value>(&request.body)
                .map(|body| body["action"] == action)
                .unwrap_or(false)
        })
        .collect()
}

pub async fn login_count(server: &MockServer) -> usize {
    requests_for(server, AUTH_PATH, "login").await.len()
}

pub async fn products_count(server: &MockServer) -> usize {
    requests_for(server, PRODUCTS_PATH, "get").await.len()
}
