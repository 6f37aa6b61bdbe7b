//! Shared error type for storagoor-common

/// Errors produced by the common primitives and the storage reader
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The caller supplied malformed input. Raised before any network activity.
    #[error("Validation error: {0}")]
    Validation(String),
    /// The underlying JSON-RPC read failed
    #[error("RPC error: {0}")]
    RpcError(String),
    /// Generic error with a message
    #[error("Error: {0}")]
    Generic(String),
    /// Internal error
    #[error("Internal error: {0}")]
    Eyre(#[from] eyre::Report),
}
