//! Gateway request interface
//!
//! This module provides the authenticated JSON-over-HTTP client for the
//! gateway control API. It handles login, bearer token attachment, a single
//! retry after a rejected token, and repair of malformed response bodies.
//!
//! # Architecture
//!
//! - Uses the crate's `HttpClient` (no direct reqwest client construction)
//! - One held session token, refreshed on demand behind a lock
//! - Envelope classification lives in `vlxgate-domain`

pub mod auth;
pub mod interface;

pub use auth::TokenStore;
pub use interface::{create_api_url, Interface};
pub use vlxgate_domain::{evaluate_errors, evaluate_response, fix_response};
