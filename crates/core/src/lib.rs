//! # vlxgate Core
//!
//! Gateway-facing logic with no infrastructure dependencies.
//!
//! This crate contains:
//! - The `GatewayApi` port (trait) implemented by the HTTP interface
//! - The `GatewayService` facade built on top of it
//!
//! ## Architecture Principles
//! - Only depends on `vlxgate-domain`
//! - No HTTP or filesystem code
//! - All external dependencies via traits

pub mod gateway;

pub use gateway::{GatewayApi, GatewayService};
