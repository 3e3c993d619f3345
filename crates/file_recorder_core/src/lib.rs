//! Shared file-recorder domain primitives.
//!
//! This crate owns timestamp-derived naming, the metadata record shape, and
//! the invocation response contract. It excludes AWS SDK and Lambda runtime
//! concerns, which live in `file_recorder_lambda`.

pub mod contract;
pub mod error;
pub mod naming;
