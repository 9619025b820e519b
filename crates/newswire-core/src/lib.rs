//! Framework glue shared across Newswire services: configuration loading,
//! tracing setup, health handlers, request-id middleware, and response
//! serialization helpers.

pub mod config;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
