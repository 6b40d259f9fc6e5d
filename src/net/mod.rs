//! Networking modules for the admin API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` sends raw requests, `http` wraps it with auth headers and 401
//! handling, `api` exposes the auth endpoints, and `types` defines the wire
//! schema.

pub mod api;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;
