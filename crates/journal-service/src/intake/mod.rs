//! Submission intake flow: validation, record creation, sequential
//! artifact uploads, and the URL patch-back.

pub mod flow;
pub mod validate;

pub use flow::{IntakeError, IntakeProgress, IntakeService, IntakeStage};
pub use validate::{IntakeForm, UploadedFile, ValidationIssue};
