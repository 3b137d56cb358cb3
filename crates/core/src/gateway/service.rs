//! Gateway facade - session lifecycle and raw catalog calls

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::{debug, info};
use vlxgate_domain::constants::{GET_ACTION, PRODUCTS_ENDPOINT, RUN_ACTION, SCENES_ENDPOINT};
use vlxgate_domain::{evaluate_response, Params, Result};

use super::ports::GatewayApi;

/// Entry point for applications using the gateway
///
/// Holds no state of its own; the session token lives in the
/// [`GatewayApi`] implementation. Catalog calls hand back the raw `data`
/// payload without interpreting it.
pub struct GatewayService {
    api: Arc<dyn GatewayApi>,
}

impl GatewayService {
    /// Create a new gateway service
    pub fn new(api: Arc<dyn GatewayApi>) -> Self {
        Self { api }
    }

    /// Underlying API handle, for calls the facade does not wrap.
    pub fn api(&self) -> &Arc<dyn GatewayApi> {
        &self.api
    }

    /// Log in to the gateway
    ///
    /// # Errors
    /// Propagates transport, protocol and gateway errors of the login call.
    pub async fn connect(&self) -> Result<()> {
        self.api.refresh_token().await?;
        info!("Connected to gateway");
        Ok(())
    }

    /// Log out. Never fails; the local session is dropped either way.
    pub async fn disconnect(&self) {
        self.api.disconnect().await;
        info!("Disconnected from gateway");
    }

    /// Fetch the raw product (device) list
    ///
    /// # Returns
    /// The envelope's `data` member, or `Value::Null` when the gateway sent none.
    ///
    /// # Errors
    /// Returns the typed failure of the call or of the envelope evaluation.
    pub async fn load_products(&self) -> Result<Value> {
        self.fetch_data(PRODUCTS_ENDPOINT, GET_ACTION).await
    }

    /// Fetch the raw scene list
    ///
    /// # Errors
    /// Returns the typed failure of the call or of the envelope evaluation.
    pub async fn load_scenes(&self) -> Result<Value> {
        self.fetch_data(SCENES_ENDPOINT, GET_ACTION).await
    }

    /// Run a scene by its gateway id
    ///
    /// # Errors
    /// Returns the typed failure of the call or of the envelope evaluation.
    pub async fn run_scene(&self, id: i64) -> Result<()> {
        let mut params = Params::new();
        params.insert("id".to_string(), json!(id));

        let envelope = self.api.api_call(SCENES_ENDPOINT, RUN_ACTION, Some(params), true).await?;
        evaluate_response(&envelope)?;

        info!(scene_id = id, "Scene started");
        Ok(())
    }

    async fn fetch_data(&self, endpoint: &str, action: &str) -> Result<Value> {
        let envelope = self.api.api_call(endpoint, action, None, true).await?;
        evaluate_response(&envelope)?;

        let data = envelope.data().cloned().unwrap_or(Value::Null);
        debug!(endpoint, action, "Catalog call succeeded");
        Ok(data)
    }
}
