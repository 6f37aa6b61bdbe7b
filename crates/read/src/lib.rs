//! The Read module fetches a single storage slot of a contract and renders it in every
//! representation the value could plausibly have.

/// Error types for the read module
pub mod error;

mod core;
mod interfaces;

// re-export the public interface
pub use core::{read, read_slot, ReadResult};
pub use error::Error;
pub use interfaces::{ReadArgs, ReadArgsBuilder};
