//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use vlxgate_domain::GatewayError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub GatewayError);

impl From<InfraError> for GatewayError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<GatewayError> for InfraError {
    fn from(value: GatewayError) -> Self {
        InfraError(value)
    }
}

/// Maps a foreign error onto the matching `GatewayError` variant.
trait IntoGatewayError {
    fn into_gateway(self) -> GatewayError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → GatewayError */
/* -------------------------------------------------------------------------- */

impl IntoGatewayError for HttpError {
    fn into_gateway(self) -> GatewayError {
        // Bad host or URL: nothing ever went on the wire.
        if self.is_builder() {
            return GatewayError::Config(format!("invalid gateway request: {self}"));
        }

        if self.is_timeout() {
            return GatewayError::Transport(
                "request timeout when talking to the gateway".into(),
            );
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return GatewayError::Transport(
                "connection failure when talking to the gateway".into(),
            );
        }

        if let Some(status) = self.status() {
            return GatewayError::Transport(format!(
                "HTTP {} {} from the gateway",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status")
            ));
        }

        GatewayError::Transport(format!("HTTP error when talking to the gateway: {self}"))
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_gateway())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
