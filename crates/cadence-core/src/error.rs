//! # Core Error Types
//!
//! Errors for the foundational types. Domain crates define their own
//! error hierarchies; this covers only failures that can arise while
//! constructing core primitives.

use thiserror::Error;

/// Errors from core type construction and parsing.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Timestamp string was malformed or not UTC.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Role string did not match any known role.
    #[error("unknown role: {0:?}")]
    UnknownRole(String),

    /// Review kind string did not match any known kind.
    #[error("unknown review kind: {0:?}")]
    UnknownReviewKind(String),
}
