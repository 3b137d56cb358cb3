//! Port interface for talking to the gateway
//!
//! The facade only ever needs these three operations; the HTTP interface in
//! `vlxgate-infra` implements them.

use async_trait::async_trait;
use vlxgate_domain::{Envelope, Params, Result};

/// Authenticated remote-procedure access to the gateway
#[async_trait]
pub trait GatewayApi: Send + Sync {
    /// Perform one logical call and return the parsed, unevaluated envelope
    ///
    /// When `require_auth` is set the call carries the session token, logging
    /// in first if none is held, and is retried once with a fresh token if
    /// the gateway rejects the token.
    async fn api_call(
        &self,
        endpoint: &str,
        action: &str,
        params: Option<Params>,
        require_auth: bool,
    ) -> Result<Envelope>;

    /// Log in and replace the held session token.
    async fn refresh_token(&self) -> Result<()>;

    /// Log out and forget the session token, ignoring logout failures.
    async fn disconnect(&self);
}
