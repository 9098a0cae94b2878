//! Domain error types.
//!
//! Rejected moves are not errors; they are reported as game outcomes. The
//! variants here cover startup failures, missing lookups and broken
//! infrastructure.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The vocabulary contained no usable words.
    #[error("word corpus is empty")]
    EmptyCorpus,

    /// No session (active or retained) exists for the key.
    #[error("session not found: {0}")]
    SessionNotFound(String),

    /// A lock was poisoned or another internal resource failed.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
