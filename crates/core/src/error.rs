/// Error type for the Core module, covering every tool crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from the slot resolver
    #[error("{0}")]
    Slot(#[from] storagoor_slot::Error),
    /// Error from the read path
    #[error("{0}")]
    Read(#[from] storagoor_read::Error),
    /// Error from the layout reader
    #[error("{0}")]
    Layout(#[from] storagoor_layout::Error),
    /// Error from the shared primitives
    #[error("{0}")]
    Common(#[from] storagoor_common::error::Error),
}

impl Error {
    /// Whether the error was raised by input validation, before any RPC call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::Slot(storagoor_slot::Error::Validation(_)) |
                Error::Read(storagoor_read::Error::Validation(_)) |
                Error::Layout(storagoor_layout::Error::Validation(_)) |
                Error::Common(storagoor_common::error::Error::Validation(_))
        )
    }
}
