//! Shared test helpers for `vlxgate-core` integration tests.
//!
//! Provides a scripted in-memory `GatewayApi` so facade tests can focus on
//! behaviour instead of HTTP plumbing.

pub mod gateway;
