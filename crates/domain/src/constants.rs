//! Protocol constants
//!
//! Fixed values of the gateway wire protocol. These must not change without
//! a matching gateway firmware change.

use std::time::Duration;

/// Path prefix of every API endpoint, joined as `http://<host>/api/v1/<endpoint>`.
pub const API_PATH_PREFIX: &str = "api/v1";

/// Timeout applied to each individual HTTP attempt.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Gateway error codes that mean the session token is no longer accepted.
pub const INVALID_TOKEN_CODES: [i64; 4] = [402, 403, 405, 406];

// Authentication endpoint
pub const AUTH_ENDPOINT: &str = "auth";
pub const LOGIN_ACTION: &str = "login";
pub const LOGOUT_ACTION: &str = "logout";

// Catalog endpoints
pub const PRODUCTS_ENDPOINT: &str = "products";
pub const SCENES_ENDPOINT: &str = "scenes";
pub const GET_ACTION: &str = "get";
pub const RUN_ACTION: &str = "run";

/// Returns `true` when `code` belongs to [`INVALID_TOKEN_CODES`].
pub fn is_invalid_token_code(code: i64) -> bool {
    INVALID_TOKEN_CODES.contains(&code)
}
