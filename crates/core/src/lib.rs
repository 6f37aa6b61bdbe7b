//! The Core module is the integration point for storagoor's functionality.
//!
//! It re-exports the tool crates so they can be used together from one dependency, and hosts the
//! integration tests and benchmarks that span them.

/// Error types for the core module
pub mod error;

// Re-export all tool-specific modules
pub use storagoor_common;
pub use storagoor_layout;
pub use storagoor_read;
pub use storagoor_slot;
