//! # journal-entity
//!
//! Domain entities for the law journal platform. Depends only on
//! `journal-core`.

pub mod member;
pub mod submission;
