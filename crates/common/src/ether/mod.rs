/// EVM address validation and parsing.
pub mod address;

/// The registry of selectable chains and the [`chains::ChainId`] newtype.
pub mod chains;

/// Multi-format rendering of raw storage words.
pub mod format;

/// A thin wrapper around the alloy provider.
pub mod provider;

/// The [`reader::StorageReader`] abstraction and its JSON-RPC implementation.
pub mod reader;

/// Free-standing JSON-RPC helpers.
pub mod rpc;

/// The 32-byte storage word and padding helpers.
pub mod word;
