use clap::Parser;
use derive_builder::Builder;
use storagoor_config::parse_url_arg;

#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Read a contiguous range of storage slots of a contract",
    override_usage = "storagoor layout <TARGET> [OPTIONS]"
)]
/// Arguments for the layout operation
pub struct LayoutArgs {
    /// The address of the contract to read storage from.
    #[clap(required = true)]
    pub target: String,

    /// The chain to read from, by id or name. Defaults to the configured chain.
    #[clap(long, short, default_value = "", hide_default_value = true)]
    pub chain: String,

    /// The RPC URL to use for fetching data.
    /// This can be an explicit URL or a reference to a MESC endpoint.
    #[clap(long, short, value_parser = parse_url_arg, default_value = "", hide_default_value = true)]
    pub rpc_url: String,

    /// The first slot to read, in decimal or 0x-prefixed hex.
    #[clap(long, short, default_value = "0")]
    pub from: String,

    /// The number of consecutive slots to read.
    #[clap(long = "count", short = 'N', default_value = "20")]
    pub count: u64,

    /// The number of slots to read concurrently.
    #[clap(long, short, default_value = "4", hide_default_value = true)]
    pub threads: usize,

    /// The output directory to write the output to or 'print' to print to the console
    #[clap(long = "output", short, default_value = "print", hide_default_value = true)]
    pub output: String,

    /// The name for the output file
    #[clap(long, short, default_value = "", hide_default_value = true)]
    pub name: String,
}

impl LayoutArgsBuilder {
    /// Creates a new LayoutArgsBuilder with default values
    pub fn new() -> Self {
        Self {
            target: Some(String::new()),
            chain: Some(String::new()),
            rpc_url: Some(String::new()),
            from: Some(String::from("0")),
            count: Some(storagoor_common::constants::DEFAULT_LAYOUT_SLOTS),
            threads: Some(4),
            output: Some(String::from("print")),
            name: Some(String::new()),
        }
    }
}
