//! Cart error type.
//!
//! There are deliberately few error paths: malformed persisted state, unknown
//! product ids, and bad quantity input all degrade silently per the cart's
//! recovery rules. Only the storage write can genuinely fail.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced by the cart subsystem.
#[derive(Debug, Error)]
pub enum CartError {
    /// Writing the durable entry failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for [`CartError`].
pub type Result<T> = std::result::Result<T, CartError>;
