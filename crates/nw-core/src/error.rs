//! Core error type.
//!
//! Sub-crates define their own error enums and either wrap `NwError` as one
//! variant or convert it via `From`.  Both patterns are acceptable; prefer
//! whichever keeps error sites clean.

use thiserror::Error;

/// The base error type for `nw-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum NwError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `nw-core`.
pub type NwResult<T> = Result<T, NwError>;
