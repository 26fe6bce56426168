//! # journal-core
//!
//! Core crate for the law journal platform. Contains configuration schemas,
//! the unified error system, slug utilities, and the boundary traits for
//! remote collaborators.
//!
//! This crate has **no** internal dependencies on other journal crates.

pub mod config;
pub mod error;
pub mod result;
pub mod slug;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
