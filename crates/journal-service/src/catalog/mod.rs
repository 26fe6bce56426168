//! Public catalog of approved articles.

pub mod service;

pub use service::{CatalogService, CatalogStats};
