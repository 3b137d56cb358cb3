//! Integration tests for the gateway facade
//!
//! Exercise `GatewayService` against the scripted `MockGatewayApi` port.

mod support;

use std::sync::Arc;

use serde_json::json;
use support::gateway::MockGatewayApi;
use vlxgate_core::GatewayService;
use vlxgate_domain::{GatewayError, GatewayErrorKind};

fn service(api: &Arc<MockGatewayApi>) -> GatewayService {
    GatewayService::new(api.clone())
}

#[tokio::test]
async fn connect_refreshes_token() {
    let api = Arc::new(MockGatewayApi::new());

    service(&api).connect().await.expect("connect should succeed");

    assert_eq!(api.refresh_count(), 1);
    assert!(api.calls().is_empty(), "connect must not issue catalog calls");
}

#[tokio::test]
async fn connect_propagates_login_failure() {
    let api = Arc::new(
        MockGatewayApi::new().fail_refresh_with(GatewayError::Protocol("no token".into())),
    );

    let err = service(&api).connect().await.unwrap_err();

    assert_eq!(err.kind(), GatewayErrorKind::Protocol);
}

#[tokio::test]
async fn disconnect_delegates_to_api() {
    let api = Arc::new(MockGatewayApi::new());

    service(&api).disconnect().await;

    assert_eq!(api.disconnect_count(), 1);
}

#[tokio::test]
async fn load_products_returns_raw_data() {
    let products = json!([{"id": 0, "name": "Window", "category": "Window opener"}]);
    let api = Arc::new(MockGatewayApi::new().respond_with(json!({
        "result": true,
        "data": products.clone()
    })));

    let data = service(&api).load_products().await.expect("products should load");

    assert_eq!(data, products);
    let calls = api.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].endpoint, "products");
    assert_eq!(calls[0].action, "get");
    assert_eq!(calls[0].params, None);
    assert!(calls[0].require_auth);
}

#[tokio::test]
async fn load_scenes_without_data_yields_null() {
    let api = Arc::new(MockGatewayApi::new().respond_with(json!({"result": true})));

    let data = service(&api).load_scenes().await.expect("scenes should load");

    assert!(data.is_null());
    assert_eq!(api.calls()[0].endpoint, "scenes");
}

#[tokio::test]
async fn load_scenes_evaluates_gateway_errors() {
    let api = Arc::new(MockGatewayApi::new().respond_with(json!({"errors": [999]})));

    let err = service(&api).load_scenes().await.unwrap_err();

    assert_eq!(err, GatewayError::UnknownErrorCode(999));
}

#[tokio::test]
async fn load_products_rejects_falsy_result() {
    let api = Arc::new(MockGatewayApi::new().respond_with(json!({"result": false})));

    let err = service(&api).load_products().await.unwrap_err();

    assert!(matches!(err, GatewayError::RequestFailed { .. }));
}

#[tokio::test]
async fn run_scene_sends_id() {
    let api = Arc::new(MockGatewayApi::new().respond_with(json!({"result": true})));

    service(&api).run_scene(7).await.expect("scene should run");

    let calls = api.calls();
    assert_eq!(calls[0].endpoint, "scenes");
    assert_eq!(calls[0].action, "run");
    let params = calls[0].params.clone().expect("run carries params");
    assert_eq!(params.get("id"), Some(&json!(7)));
}

#[tokio::test]
async fn run_scene_propagates_transport_errors() {
    let api = Arc::new(
        MockGatewayApi::new().fail_with(GatewayError::Transport("connection refused".into())),
    );

    let err = service(&api).run_scene(1).await.unwrap_err();

    assert_eq!(err.kind(), GatewayErrorKind::Transport);
}
