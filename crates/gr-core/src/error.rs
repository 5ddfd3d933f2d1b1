//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `GrError` as one variant
//! where a configuration problem can surface through them.

use thiserror::Error;

/// The base error type for `gr-core`.
#[derive(Debug, Error)]
pub enum GrError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `gr-core`.
pub type GrResult<T> = Result<T, GrError>;
