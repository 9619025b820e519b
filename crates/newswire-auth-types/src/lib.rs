//! Identity types shared across Newswire services.
//!
//! The news service never issues or validates credentials itself; the gateway
//! authenticates the request and injects identity headers. This crate provides
//! the extractor that consumes them.

pub mod identity;
