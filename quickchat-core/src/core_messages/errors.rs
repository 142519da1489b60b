/*
    errors.rs - Error types for the message layer

    Expected-bad user input (an oversized body, a malformed cell number)
    is reported through the validators as false/zero, not through these
    errors. StoreError is for calls that are wrong at the API level.
*/

use thiserror::Error;

/// Errors that can occur in the message layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Action code outside the defined range (1 = send, 2 = disregard, 3 = store)
    #[error("Unknown action code {0}: expected 1 (send), 2 (disregard) or 3 (store)")]
    UnknownActionCode(u8),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
