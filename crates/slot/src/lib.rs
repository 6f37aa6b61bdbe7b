//! The Slot module computes which storage slot holds a given variable.
//! It supports plain variables, `mapping(K => V)` entries and `mapping(K1 => mapping(K2 => V))`
//! entries, following the Solidity storage layout rules.

/// Error types for the slot module
pub mod error;

mod core;
mod interfaces;

// re-export the public interface
pub use core::{
    key::{classify_key, parse_slot_index, KeyEncoding},
    mapping_slot, resolve, resolve_detailed, slot, ResolvedSlot, SlotResolution,
};
pub use error::Error;
pub use interfaces::{SlotArgs, SlotArgsBuilder, SlotSpec};
