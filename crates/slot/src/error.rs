/// Error type for the Slot module
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The slot specification violates a precondition. Raised before any hashing.
    #[error("Validation error: {0}")]
    Validation(String),
    /// Generic internal error
    #[error("Internal error: {0}")]
    Eyre(#[from] eyre::Report),
}

impl From<storagoor_common::error::Error> for Error {
    fn from(err: storagoor_common::error::Error) -> Self {
        match err {
            storagoor_common::error::Error::Validation(msg) => Error::Validation(msg),
            other => Error::Eyre(eyre::eyre!(other)),
        }
    }
}
