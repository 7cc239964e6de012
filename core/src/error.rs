//! Error types for todo validation and storage.
//!
//! # Design
//! Not-found is deliberately absent: completing or deleting an id that
//! matches nothing is a successful no-op, so stores report match counts
//! instead of failing.

use thiserror::Error;

/// Client input that was rejected before any store call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Body is required")]
    EmptyBody,

    /// The identifier is not a well-formed ObjectId.
    #[error("Invalid ID")]
    InvalidId(String),
}

/// Failures reported by a `TodoStore`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Any error raised by the MongoDB driver, passed through unchanged.
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    /// The store handed back an `_id` that is not an ObjectId.
    #[error("store returned a non-ObjectId identifier: {0}")]
    UnexpectedId(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        StoreError::Unavailable(msg.into())
    }
}
