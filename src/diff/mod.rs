//! Markdown diff reports between capture documents.

pub mod capture_diff;

pub use capture_diff::{compare_capture_documents, CaptureDiffReport};
