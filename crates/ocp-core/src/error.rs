//! # Core Error Types
//!
//! Errors raised while constructing the validated primitives of
//! `ocp-core`. All errors use `thiserror` for derive-based `Display`
//! and `Error` implementations.
//!
//! Lifecycle-level failures (ownership checks, stage guards, reference
//! integrity) live in `ocp-lifecycle`; this crate only reports malformed
//! inputs to its own constructors.

use thiserror::Error;

/// Errors produced by the validated constructors in `ocp-core`.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A country code that is not two ASCII uppercase letters.
    #[error("invalid country code {0:?}: expected ISO 3166-1 alpha-2 (two uppercase letters)")]
    InvalidCountryCode(String),

    /// An identifier that is empty or otherwise malformed.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A timestamp string that could not be parsed or is not UTC.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// A stage tag outside the known notice vocabulary.
    #[error("unknown stage tag {0:?}")]
    UnknownStage(String),
}
