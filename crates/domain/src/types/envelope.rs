//! Gateway response envelope
//!
//! Every API call answers with a single JSON object. Success is signalled by
//! a truthy `result` field, failure by a non-empty `errors` list of integer
//! codes. Some firmware versions send both fields, and some prefix the JSON
//! with garbage, so decoding goes through [`Envelope::parse`] and the
//! classification through [`evaluate_response`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::is_invalid_token_code;
use crate::errors::{GatewayError, Result};

/// Parameters of a request intent, sent as the `params` member of the body.
pub type Params = Map<String, Value>;

/// Decoded top-level JSON object returned by the gateway
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Envelope(Map<String, Value>);

impl Envelope {
    /// Repair and decode a raw response body
    ///
    /// # Errors
    /// Returns `GatewayError::Protocol` when the repaired text is not valid
    /// JSON or its top level is not an object.
    pub fn parse(text: &str) -> Result<Self> {
        let repaired = fix_response(text);
        let value: Value = serde_json::from_str(repaired).map_err(|e| {
            GatewayError::Protocol(format!("response is not valid JSON ({e}): {repaired}"))
        })?;

        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(GatewayError::Protocol(format!(
                "response is not a JSON object: {other}"
            ))),
        }
    }

    /// Look up a top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn result(&self) -> Option<&Value> {
        self.get("result")
    }

    pub fn errors(&self) -> Option<&Value> {
        self.get("errors")
    }

    /// Payload of catalog calls.
    pub fn data(&self) -> Option<&Value> {
        self.get("data")
    }

    /// Session token issued by a login call, if it is a string.
    pub fn token(&self) -> Option<&str> {
        self.get("token").and_then(Value::as_str)
    }

    /// First entry of `errors` when it is an integer.
    ///
    /// Only the first code is ever inspected; the gateway protocol does not
    /// say whether several independent errors can be reported at once.
    /// Codes beyond `i64::MAX` saturate to `i64::MAX`.
    pub fn first_error_code(&self) -> Option<i64> {
        let code = self.errors().and_then(Value::as_array).and_then(|codes| codes.first())?;
        code.as_i64()
            .or_else(|| code.as_u64().map(|wide| i64::try_from(wide).unwrap_or(i64::MAX)))
    }

    /// First error code when it signals a rejected session token.
    pub fn invalid_token_code(&self) -> Option<i64> {
        self.first_error_code().filter(|code| is_invalid_token_code(*code))
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Envelope {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Strip garbage the gateway sometimes puts in front of the JSON body
///
/// Returns the text starting at the first `{`, or the input unchanged when
/// it contains no `{` (it will then fail to parse).
pub fn fix_response(text: &str) -> &str {
    match text.find('{') {
        Some(index) => &text[index..],
        None => text,
    }
}

/// Classify an envelope as success or typed failure
///
/// # Errors
/// - `errors` present and truthy: see [`evaluate_errors`]
/// - `result` missing: `GatewayError::Protocol`
/// - `result` falsy: `GatewayError::RequestFailed` carrying the envelope
pub fn evaluate_response(envelope: &Envelope) -> Result<()> {
    if envelope.errors().is_some_and(is_truthy) {
        return Err(evaluate_errors(envelope));
    }

    match envelope.result() {
        None => Err(GatewayError::Protocol(format!(
            "no element result found in response: {}",
            Value::Object(envelope.as_map().clone())
        ))),
        Some(result) if !is_truthy(result) => {
            Err(GatewayError::RequestFailed { envelope: envelope.clone().into_value() })
        }
        Some(_) => Ok(()),
    }
}

/// Turn the `errors` field of an envelope into the matching error
///
/// Returns `Protocol` when `errors` is not a non-empty array starting with an
/// integer, `InvalidToken` for the authentication codes, and
/// `UnknownErrorCode` otherwise.
pub fn evaluate_errors(envelope: &Envelope) -> GatewayError {
    let Some(code) = envelope.first_error_code() else {
        return GatewayError::Protocol(format!(
            "could not evaluate errors in response: {}",
            Value::Object(envelope.as_map().clone())
        ));
    };

    if is_invalid_token_code(code) {
        GatewayError::InvalidToken(code)
    } else {
        GatewayError::UnknownErrorCode(code)
    }
}

/// JSON truthiness: `null`, `false`, zero, and empty strings, arrays and
/// objects are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
