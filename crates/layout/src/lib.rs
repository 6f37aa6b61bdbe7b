//! The Layout module reads a contiguous range of storage slots of a contract, giving an overview
//! of its simple state variables.

/// Error types for the layout module
pub mod error;

mod core;
mod interfaces;

// re-export the public interface
pub use core::{layout, read_layout, LayoutEntry, LayoutResult};
pub use error::Error;
pub use interfaces::{LayoutArgs, LayoutArgsBuilder};
