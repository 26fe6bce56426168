//! # journal-api
//!
//! HTTP API layer for the law journal platform built on Axum.
//!
//! Provides the public content routes, the submission intake endpoint, the
//! auth-gated admin surface, middleware, extractors, DTOs, and error
//! mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
