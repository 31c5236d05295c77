//! Networking modules for the remote REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds endpoint calls, `transport` performs them (`gloo-net` in the
//! browser), `credentials` supplies the bearer token per request, and `types`
//! defines the wire schema.

pub mod api;
pub mod credentials;
pub mod transport;
pub mod types;
