//! Authenticated request interface to the gateway
//!
//! Turns an `(endpoint, action, params)` intent into a POST against
//! `http://<host>/api/v1/<endpoint>`, attaches the session token, repairs and
//! parses the response, and recovers once from a rejected token by logging
//! in again.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use vlxgate_core::GatewayApi;
use vlxgate_domain::constants::{API_PATH_PREFIX, AUTH_ENDPOINT, LOGIN_ACTION, LOGOUT_ACTION};
use vlxgate_domain::{Envelope, GatewayConfig, GatewayError, Params, Result};

use super::auth::TokenStore;
use crate::http::HttpClient;

/// JSON body of every gateway request.
#[derive(Debug, Serialize)]
struct RequestBody<'a> {
    action: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<&'a Params>,
}

/// Request interface for one gateway
///
/// Owns the configuration and the session token. Safe to share between
/// tasks behind an `Arc`; concurrent recoveries from a rejected token share
/// a single login.
pub struct Interface {
    config: GatewayConfig,
    http: HttpClient,
    tokens: TokenStore,
}

impl Interface {
    /// Create an interface with the default HTTP client (10 second timeout)
    ///
    /// # Errors
    /// Returns `GatewayError::Config` if the configuration is incomplete or
    /// the HTTP client cannot be created.
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let http = HttpClient::new()?;
        Self::with_http_client(config, http)
    }

    /// Create an interface on top of a preconfigured HTTP client
    ///
    /// # Errors
    /// Returns `GatewayError::Config` if the configuration is incomplete.
    pub fn with_http_client(config: GatewayConfig, http: HttpClient) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, http, tokens: TokenStore::new() })
    }

    /// Connection settings this interface was created with.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Session token currently held, if any.
    pub async fn token(&self) -> Option<String> {
        self.tokens.get().await
    }

    /// Whether a session token is currently held.
    pub async fn is_authenticated(&self) -> bool {
        self.tokens.is_authenticated().await
    }

    /// Perform one logical call
    ///
    /// With `require_auth`, a login is performed first when no token is held,
    /// and a call rejected with an invalid-token code is repeated exactly
    /// once after a fresh login. The returned envelope is not evaluated; use
    /// [`vlxgate_domain::evaluate_response`] for the generic check.
    ///
    /// # Errors
    /// - `Transport` on timeout or connection failure
    /// - `Protocol` when the response is not a JSON object
    /// - `InvalidToken` when the token is rejected and no retry is left
    #[instrument(skip(self, params))]
    pub async fn api_call(
        &self,
        endpoint: &str,
        action: &str,
        params: Option<Params>,
        require_auth: bool,
    ) -> Result<Envelope> {
        let mut retried = false;

        loop {
            let token = if require_auth { Some(self.ensure_token().await?) } else { None };

            match self.send(endpoint, action, params.as_ref(), token.as_deref()).await {
                Err(GatewayError::InvalidToken(code)) if require_auth && !retried => {
                    warn!(code, "Gateway rejected session token, logging in again");
                    self.tokens.refresh_if_current(token.as_deref(), || self.login()).await?;
                    retried = true;
                }
                outcome => return outcome,
            }
        }
    }

    /// Log in and replace the held token
    ///
    /// # Errors
    /// Returns `Protocol` when the login response has no `token`; the
    /// previously held token is kept in that case.
    pub async fn refresh_token(&self) -> Result<()> {
        self.tokens.refresh(|| self.login()).await?;
        Ok(())
    }

    /// Log out and drop the session token
    ///
    /// The token is cleared even when the logout call fails; such failures
    /// are only logged.
    pub async fn disconnect(&self) {
        match self.api_call(AUTH_ENDPOINT, LOGOUT_ACTION, Some(Params::new()), true).await {
            Ok(_) => debug!("Logged out from gateway"),
            Err(err) => warn!(error = %err, kind = err.label(), "Logout failed"),
        }
        self.tokens.clear().await;
    }

    async fn ensure_token(&self) -> Result<String> {
        if let Some(token) = self.tokens.get().await {
            return Ok(token);
        }
        self.tokens.refresh_if_current(None, || self.login()).await
    }

    /// Login exchange. Never carries a token and is never retried.
    ///
    /// Error codes in the reply are not classified: any reply without a
    /// `token` is a protocol failure, whatever its `errors` say.
    async fn login(&self) -> Result<String> {
        let mut params = Params::new();
        params.insert("password".to_string(), Value::String(self.config.password.clone()));

        let envelope = self.exchange(AUTH_ENDPOINT, LOGIN_ACTION, Some(&params), None).await?;

        if let Some(token) = envelope.token() {
            info!(host = %self.config.host, "Logged in to gateway");
            return Ok(token.to_string());
        }

        Err(GatewayError::Protocol(format!(
            "no element token found in response: {}",
            envelope.into_value()
        )))
    }

    /// Single exchange that reports a rejected token as `InvalidToken`.
    async fn send(
        &self,
        endpoint: &str,
        action: &str,
        params: Option<&Params>,
        token: Option<&str>,
    ) -> Result<Envelope> {
        let envelope = self.exchange(endpoint, action, params, token).await?;

        match envelope.invalid_token_code() {
            Some(code) => Err(GatewayError::InvalidToken(code)),
            None => Ok(envelope),
        }
    }

    /// Single HTTP exchange returning the repaired, parsed envelope.
    async fn exchange(
        &self,
        endpoint: &str,
        action: &str,
        params: Option<&Params>,
        token: Option<&str>,
    ) -> Result<Envelope> {
        let url = create_api_url(&self.config.host, endpoint);
        let body = RequestBody { action, params };

        let mut request = self
            .http
            .request(Method::POST, &url)
            .header(CONTENT_TYPE, "application/json")
            .json(&body);
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        debug!(url = %url, authenticated = token.is_some(), "Gateway request");

        let text = self.http.send_for_text(request).await?;
        Envelope::parse(&text)
    }
}

#[async_trait]
impl GatewayApi for Interface {
    async fn api_call(
        &self,
        endpoint: &str,
        action: &str,
        params: Option<Params>,
        require_auth: bool,
    ) -> Result<Envelope> {
        Interface::api_call(self, endpoint, action, params, require_auth).await
    }

    async fn refresh_token(&self) -> Result<()> {
        Interface::refresh_token(self).await
    }

    async fn disconnect(&self) {
        Interface::disconnect(self).await;
    }
}

/// Full URL of an endpoint on `host`.
pub fn create_api_url(host: &str, endpoint: &str) -> String {
    format!("http://{host}/{API_PATH_PREFIX}/{endpoint}")
}
