//! # vlxgate Domain
//!
//! Protocol types and models for the gateway client.
//!
//! This crate contains:
//! - The response envelope and its classification rules
//! - The error taxonomy and Result alias
//! - Gateway configuration
//! - Wire protocol constants
//!
//! ## Architecture
//! - No dependencies on other vlxgate crates
//! - No I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
