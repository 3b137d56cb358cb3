//! Scripted mock for the `GatewayApi` port

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use vlxgate_core::GatewayApi;
use vlxgate_domain::{Envelope, GatewayError, Params, Result as DomainResult};

/// One recorded `api_call` invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub endpoint: String,
    pub action: String,
    pub params: Option<Params>,
    pub require_auth: bool,
}

/// In-memory `GatewayApi` that replays queued responses in order.
#[derive(Default)]
pub struct MockGatewayApi {
    responses: Mutex<VecDeque<DomainResult<Envelope>>>,
    calls: Mutex<Vec<RecordedCall>>,
    refreshes: Mutex<usize>,
    refresh_error: Mutex<Option<GatewayError>>,
    disconnects: Mutex<usize>,
}

impl MockGatewayApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON object to be returned by the next `api_call`.
    pub fn respond_with(self, body: Value) -> Self {
        let envelope = match body {
            Value::Object(map) => Envelope::from(map),
            other => panic!("mock response must be a JSON object, got {other}"),
        };
        self.responses.lock().unwrap().push_back(Ok(envelope));
        self
    }

    /// Queue an error to be returned by the next `api_call`.
    pub fn fail_with(self, error: GatewayError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Make `refresh_token` fail with `error`.
    pub fn fail_refresh_with(self, error: GatewayError) -> Self {
        *self.refresh_error.lock().unwrap() = Some(error);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn refresh_count(&self) -> usize {
        *self.refreshes.lock().unwrap()
    }

    pub fn disconnect_count(&self) -> usize {
        *self.disconnects.lock().unwrap()
    }
}

#[async_trait]
impl GatewayApi for MockGatewayApi {
    async fn api_call(
        &self,
        endpoint: &str,
        action: &str,
        params: Option<Params>,
        require_auth: bool,
    ) -> DomainResult<Envelope> {
        self.calls.lock().unwrap().push(RecordedCall {
            endpoint: endpoint.to_string(),
            action: action.to_string(),
            params,
            require_auth,
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Transport("no scripted response".into())))
    }

    async fn refresh_token(&self) -> DomainResult<()> {
        *self.refreshes.lock().unwrap() += 1;
        match self.refresh_error.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    async fn disconnect(&self) {
        *self.disconnects.lock().unwrap() += 1;
    }
}
