use clap::Parser;
use derive_builder::Builder;
use storagoor_config::parse_url_arg;
use storagoor_slot::SlotSpec;

#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Read a storage slot of a contract and show its possible interpretations",
    override_usage = "storagoor read <TARGET> <SLOT> [OPTIONS]"
)]
/// Arguments for the read operation
///
/// Describes the contract to read from, the slot to read, and where the result goes.
pub struct ReadArgs {
    /// The address of the contract to read storage from.
    #[clap(required = true)]
    pub target: String,

    /// The declared base slot of the variable, in decimal or 0x-prefixed hex.
    #[clap(required = true)]
    pub slot: String,

    /// Read the mapping entry at `--key`.
    #[clap(long, short)]
    pub mapping: bool,

    /// Read the nested mapping entry at `--key`, `--second-key`.
    #[clap(long, short = 'd')]
    pub double_mapping: bool,

    /// The mapping key. An address, an integer, or raw hex bytes.
    #[clap(long, short, default_value = "", hide_default_value = true)]
    pub key: String,

    /// The inner mapping key of a nested mapping.
    #[clap(long, short, default_value = "", hide_default_value = true)]
    pub second_key: String,

    /// The chain to read from, by id or name. Defaults to the configured chain.
    #[clap(long, short, default_value = "", hide_default_value = true)]
    pub chain: String,

    /// The RPC URL to use for fetching data.
    /// This can be an explicit URL or a reference to a MESC endpoint.
    #[clap(long, short, value_parser = parse_url_arg, default_value = "", hide_default_value = true)]
    pub rpc_url: String,

    /// The output directory to write the output to or 'print' to print to the console
    #[clap(long = "output", short, default_value = "print", hide_default_value = true)]
    pub output: String,

    /// The name for the output file
    #[clap(long, short, default_value = "", hide_default_value = true)]
    pub name: String,
}

impl ReadArgs {
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

impl ReadArgsBuilder {
    /// Creates a new ReadArgsBuilder with default values
    pub fn new() -> Self {
        Self {
            target: Some(String::new()),
            slot: Some(String::from("0")),
            mapping: Some(false),
            double_mapping: Some(false),
            key: Some(String::new()),
            second_key: Some(String::new()),
            chain: Some(String::new()),
            rpc_url: Some(String::new()),
            output: Some(String::from("print")),
            name: Some(String::new()),
        }
    }
}
