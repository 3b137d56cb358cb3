//! Error types used throughout the gateway client

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Main error type for vlxgate
///
/// Every failure of a gateway call surfaces as exactly one of these variants.
/// Callers branch on the variant (or on [`GatewayError::kind`]), never on the
/// rendered message.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail")]
pub enum GatewayError {
    /// Timeout, connection failure or socket error during the HTTP exchange.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The gateway answered with something that does not follow the protocol.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// The session token was rejected by the gateway.
    #[error("Invalid token (gateway error code {0})")]
    InvalidToken(i64),

    /// The gateway reported an error code outside the authentication set.
    #[error("Unknown error code {0}")]
    UnknownErrorCode(i64),

    /// The envelope carried a falsy `result`.
    #[error("Request failed: {envelope}")]
    RequestFailed {
        /// The complete envelope as returned by the gateway.
        envelope: Value,
    },

    /// Configuration could not be loaded or is incomplete.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse categories of [`GatewayError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatewayErrorKind {
    /// Network-level failure, never retried automatically
    Transport,
    /// Malformed or unexpected response shape, always fatal
    Protocol,
    /// Session token rejected, eligible for one refresh-and-retry
    InvalidToken,
    /// Gateway refused the request (falsy result or unknown error code)
    RequestFailed,
    /// Local configuration problem
    Config,
}

impl GatewayError {
    /// Get the category of this error
    pub fn kind(&self) -> GatewayErrorKind {
        match self {
            Self::Transport(_) => GatewayErrorKind::Transport,
            Self::Protocol(_) => GatewayErrorKind::Protocol,
            Self::InvalidToken(_) => GatewayErrorKind::InvalidToken,
            Self::UnknownErrorCode(_) | Self::RequestFailed { .. } => {
                GatewayErrorKind::RequestFailed
            }
            Self::Config(_) => GatewayErrorKind::Config,
        }
    }

    /// Stable label suitable for structured logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Protocol(_) => "protocol",
            Self::InvalidToken(_) => "invalid_token",
            Self::UnknownErrorCode(_) => "unknown_error_code",
            Self::RequestFailed { .. } => "request_failed",
            Self::Config(_) => "config",
        }
    }

    /// Whether a fresh login may make the same call succeed.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::InvalidToken(_))
    }

    /// Gateway error code carried by this error, if any.
    pub fn error_code(&self) -> Option<i64> {
        match self {
            Self::InvalidToken(code) | Self::UnknownErrorCode(code) => Some(*code),
            _ => None,
        }
    }
}

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;
