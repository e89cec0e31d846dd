//! HTTP API layer for Parking Core.
//!
//! Exposes the entry and exit ticket operations plus a health endpoint.

pub mod handlers;
mod routes;
mod types;

pub use routes::{build_router, Endpoint};
