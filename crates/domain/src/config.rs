//! Gateway configuration

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{GatewayError, Result};

/// Connection settings for one gateway
///
/// Immutable once handed to the interface. The password is never written
/// back out when the config is serialized and is redacted from `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Network address or hostname of the gateway, optionally with a port.
    pub host: String,
    /// Shared secret used for the login exchange.
    #[serde(skip_serializing)]
    pub password: String,
}

impl GatewayConfig {
    /// Build a configuration from direct arguments
    ///
    /// # Errors
    /// Returns `GatewayError::Config` when `host` or `password` is empty.
    pub fn new(host: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let config = Self { host: host.into(), password: password.into() };
        config.validate()?;
        Ok(config)
    }

    /// Check that both fields are usable
    ///
    /// # Errors
    /// Returns `GatewayError::Config` naming the first empty field.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(GatewayError::Config("host must not be empty".to_string()));
        }
        if self.password.is_empty() {
            return Err(GatewayError::Config("password must not be empty".to_string()));
        }
        Ok(())
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("host", &self.host)
            .field("password", &"<redacted>")
            .finish()
    }
}
