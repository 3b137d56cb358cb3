//! # vlxgate infrastructure
//!
//! Infrastructure implementations of the `vlxgate-core` ports.
//!
//! This crate contains:
//! - The authenticated gateway request interface (`api`)
//! - The reqwest-backed HTTP client (`http`)
//! - Configuration loading from environment and files (`config`)
//! - Tracing subscriber setup (`logging`)
//!
//! ## Architecture
//! - Implements `GatewayApi` defined in `vlxgate-core`
//! - Maps reqwest failures into `vlxgate-domain` errors
//! - Contains all "impure" code (network and filesystem I/O)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod logging;

pub use api::{create_api_url, Interface, TokenStore};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use logging::init_tracing;
