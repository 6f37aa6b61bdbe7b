use clap::Parser;
use derive_builder::Builder;

use crate::interfaces::SlotSpec;

#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Compute the storage slot of a variable, mapping entry or nested mapping entry",
    override_usage = "storagoor slot <SLOT> [OPTIONS]"
)]
/// Arguments for the slot operation
pub struct SlotArgs {
    /// The declared base slot of the variable, in decimal or 0x-prefixed hex.
    #[clap(required = true)]
    pub slot: String,

    /// Derive the slot of the mapping entry at `--key`.
    #[clap(long, short)]
    pub mapping: bool,

    /// Derive the slot of the nested mapping entry at `--key`, `--second-key`.
    #[clap(long, short = 'd')]
    pub double_mapping: bool,

    /// The mapping key. An address, an integer, or raw hex bytes.
    #[clap(long, short, default_value = "", hide_default_value = true)]
    pub key: String,

    /// The inner mapping key of a nested mapping.
    #[clap(long, short, default_value = "", hide_default_value = true)]
    pub second_key: String,
}

impl SlotArgs {
    /// The slot specification described by these arguments
    pub fn spec(&self) -> SlotSpec {
        SlotSpec {
            base_slot: self.slot.clone(),
            is_mapping: self.mapping,
            is_double_mapping: self.double_mapping,
            mapping_key: self.key.clone(),
            second_mapping_key: self.second_key.clone(),
        }
    }
}

impl SlotArgsBuilder {
    /// Creates a new SlotArgsBuilder with default values
    pub fn new() -> Self {
        Self {
            slot: Some(String::from("0")),
            mapping: Some(false),
            double_mapping: Some(false),
            key: Some(String::new()),
            second_key: Some(String::new()),
        }
    }
}
