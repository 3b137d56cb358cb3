use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::debug;
use vlxgate_domain::constants::REQUEST_TIMEOUT;
use vlxgate_domain::GatewayError;

use crate::errors::InfraError;

/// HTTP client with a fixed per-attempt timeout.
///
/// Sends every request exactly once. Recovery is the caller's job; transport
/// failures come back as `GatewayError::Transport`.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    timeout: Duration,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, GatewayError> {
        Self::builder().build()
    }

    /// Timeout applied to each request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder once.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, GatewayError> {
        let request = builder.build().map_err(|err| GatewayError::from(InfraError::from(err)))?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                debug!(%method, %url, status = %response.status(), "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(InfraError::from(err).into())
            }
        }
    }

    /// Execute the request and read the whole body as text.
    ///
    /// The body is read regardless of the status code; the gateway reports
    /// failures inside the JSON envelope.
    pub async fn send_for_text(&self, builder: RequestBuilder) -> Result<String, GatewayError> {
        let response = self.send(builder).await?;
        response.text().await.map_err(|err| InfraError::from(err).into())
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self { timeout: REQUEST_TIMEOUT }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<HttpClient, GatewayError> {
        // The gateway lives on the local network; never route through a proxy.
        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .no_proxy()
            .build()
            .map_err(|err| GatewayError::from(InfraError::from(err)))?;

        Ok(HttpClient { client, timeout: self.timeout })
    }
}
