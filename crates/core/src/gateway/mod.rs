//! Gateway session and catalog access

pub mod ports;
pub mod service;

pub use ports::*;
pub use service::*;
