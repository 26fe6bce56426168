//! Document text extraction.

pub mod docx;

pub use docx::{DocumentExtractor, Extracted};
