//! Caller identity supplied by the upstream gateway.
//!
//! Authentication happens before requests reach this service; the gateway
//! forwards the verified identity in a trusted header which
//! `core::middleware::identity_middleware` turns into a [`CallerIdentity`].

pub mod model;

pub use model::CallerIdentity;
