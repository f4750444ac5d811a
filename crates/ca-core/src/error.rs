//! Framework error type.
//!
//! Sub-crates define their own error enums (`SimError`, `OutputError`) and
//! wrap `CaError` where configuration problems surface through them.

use thiserror::Error;

/// The top-level error type for `ca-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CaError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `ca-*` crates.
pub type CaResult<T> = Result<T, CaError>;
