//! Domain types exchanged with the gateway

pub mod envelope;

pub use envelope::{
    evaluate_errors, evaluate_response, fix_response, is_truthy, Envelope, Params,
};
