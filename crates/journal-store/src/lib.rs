//! # journal-store
//!
//! Data-access façade for the hosted database/storage service. Implements
//! the boundary traits from `journal-core` and `journal-entity` against the
//! service's REST data API and bucket API.
//!
//! Every operation here is a remote call with no local fallback; any
//! network or server-side rejection propagates as a typed [`AppError`]
//! carrying the remote message.
//!
//! [`AppError`]: journal_core::AppError

pub mod client;
pub mod query;
pub mod storage;
pub mod submissions;

pub use storage::BucketObjectStore;
pub use submissions::RestSubmissionStore;
