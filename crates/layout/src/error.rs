/// Error type for the Layout module
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The contract address or slot range is malformed
    #[error("Validation error: {0}")]
    Validation(String),
    /// One of the storage reads failed
    #[error("RPC error: {0}")]
    Rpc(String),
    /// Generic internal error
    #[error("Internal error: {0}")]
    Eyre(#[from] eyre::Report),
}

impl From<storagoor_slot::Error> for Error {
    fn from(err: storagoor_slot::Error) -> Self {
        match err {
            storagoor_slot::Error::Validation(msg) => Error::Validation(msg),
            storagoor_slot::Error::Eyre(report) => Error::Eyre(report),
        }
    }
}

impl From<storagoor_common::error::Error> for Error {
    fn from(err: storagoor_common::error::Error) -> Self {
        use storagoor_common::error::Error as CommonError;

        match err {
            CommonError::Validation(msg) => Error::Validation(msg),
            CommonError::RpcError(msg) => Error::Rpc(msg),
            CommonError::Generic(msg) => Error::Eyre(eyre::eyre!(msg)),
            CommonError::Eyre(report) => Error::Eyre(report),
        }
    }
}
