/// Error type for the Read module
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The contract address, slot index or mapping keys are malformed. Raised before any RPC call.
    #[error("Validation error: {0}")]
    Validation(String),
    /// The storage read failed
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
