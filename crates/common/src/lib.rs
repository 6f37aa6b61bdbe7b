//! Common utilities, constants, and resources used across the storagoor codebase.
//!
//! This crate provides the shared primitives of the toolkit: the 32-byte [`ether::word::Word`],
//! address validation, the chain registry, the value formatter and the [`ether::reader`]
//! abstraction over `eth_getStorageAt`.

/// Error types shared by the storagoor crates.
pub mod error;

/// Constants used throughout the storagoor codebase.
pub mod constants;

/// Utilities for interacting with EVM chains, including storage words, chains and RPC.
pub mod ether;

/// General utility functions and types for common tasks.
pub mod utils;
