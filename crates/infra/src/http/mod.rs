//! HTTP transport for gateway calls

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
