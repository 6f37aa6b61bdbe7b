pub(crate) mod error;
pub(crate) mod log_args;
pub(crate) mod output;

use colored::Colorize;
use error::Error;
use log_args::LogArgs;
use output::{build_output_path, output_filename};
use tracing::{debug, info};

use clap::{Parser, Subcommand};

use storagoor_common::{
    ether::chains::{available_chains, ChainId},
    utils::io::file::{write_file, write_lines_to_file},
};
use storagoor_config::{config, ConfigArgs, Configuration};
use storagoor_core::{
    storagoor_layout::{layout, LayoutArgs},
    storagoor_read::{read, ReadArgs},
    storagoor_slot::{slot, SlotArgs},
};

#[derive(Debug, Parser)]
#[clap(name = "storagoor", version)]
pub(crate) struct Arguments {
    #[clap(subcommand)]
    pub(crate) sub: Subcommands,

    #[clap(flatten)]
    logs: LogArgs,
}

#[derive(Debug, Subcommand)]
#[clap(about = "storagoor locates and interprets the storage slots of EVM smart contracts.")]
pub(crate) enum Subcommands {
    #[clap(name = "slot", about = "Compute the storage slot of a variable or mapping entry")]
    Slot(SlotArgs),

    #[clap(name = "read", about = "Read a storage slot and show its possible interpretations")]
    Read(ReadArgs),

    #[clap(name = "layout", about = "Read a contiguous range of storage slots")]
    Layout(LayoutArgs),

    #[clap(name = "chains", about = "List the built-in chains and their default endpoints")]
    Chains,

    #[clap(name = "config", about = "Display and edit the current configuration")]
    Config(ConfigArgs),
}

/// Fill an empty `--chain` from the configuration and parse it.
fn select_chain(chain: &mut String, configuration: &Configuration) -> Result<ChainId, Error> {
    if chain.trim().is_empty() {
        *chain = configuration.default_chain().to_string();
    }

    chain.parse::<ChainId>().map_err(|e| Error::Generic(format!("invalid chain: {}", e)))
}

/// Fill an empty `--rpc-url` with the endpoint configured for `chain`.
fn select_rpc_url(rpc_url: &mut String, chain: ChainId, configuration: &Configuration) {
    if rpc_url.as_str() == "" {
        *rpc_url = configuration.endpoint(chain).unwrap_or_default();
    }
    debug!("using rpc endpoint '{}' for chain {}", rpc_url, chain);
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = Arguments::parse();

    // setup logging
    let _guard = args
        .logs
        .init_tracing()
        .map_err(|e| Error::Generic(format!("failed to initialize logging: {}", e)))?;
    args.logs.color.apply();

    let configuration = Configuration::load()
        .map_err(|e| Error::Generic(format!("failed to load configuration: {}", e)))?;
    match args.sub {
        Subcommands::Slot(cmd) => {
            let resolution = slot(cmd)
                .await
                .map_err(|e| Error::Generic(format!("failed to resolve slot: {}", e)))?;

            resolution.display();
        }

        Subcommands::Read(mut cmd) => {
            let chain = select_chain(&mut cmd.chain, &configuration)?;
            select_rpc_url(&mut cmd.rpc_url, chain, &configuration);

            let result = read(cmd.clone())
                .await
                .map_err(|e| Error::Generic(format!("failed to read storage: {}", e)))?;

            if cmd.output == "print" {
                result.display();
            } else {
                let filename = output_filename(&cmd.name, "read.json");
                let output_path = build_output_path(&cmd.output, &cmd.target, chain, &filename)
                    .map_err(|e| Error::Generic(format!("failed to build output path: {}", e)))?;

                write_file(&output_path, &serde_json::to_string_pretty(&result)?)
                    .map_err(|e| Error::Generic(format!("failed to write result: {}", e)))?;
                info!("wrote read result to '{}'", output_path);
            }
        }

        Subcommands::Layout(mut cmd) => {
            let chain = select_chain(&mut cmd.chain, &configuration)?;
            select_rpc_url(&mut cmd.rpc_url, chain, &configuration);

            let result = layout(cmd.clone())
                .await
                .map_err(|e| Error::Generic(format!("failed to read layout: {}", e)))?;

            if cmd.output == "print" {
                result.display();
            } else {
                let filename = output_filename(&cmd.name, "layout.csv");
                let output_path = build_output_path(&cmd.output, &cmd.target, chain, &filename)
                    .map_err(|e| Error::Generic(format!("failed to build output path: {}", e)))?;

                write_lines_to_file(&output_path, result.to_csv())
                    .map_err(|e| Error::Generic(format!("failed to write layout: {}", e)))?;
                info!("wrote layout to '{}'", output_path);
            }
        }

        Subcommands::Chains => {
            println!("{:<10} {:<26} {}", "ID".bold(), "NAME".bold(), "DEFAULT RPC".bold());
            for chain in available_chains() {
                let name = if chain.id == configuration.default_chain() {
                    format!("{} (default)", chain.name)
                } else {
                    chain.name.to_string()
                };
                println!("{:<10} {:<26} {}", chain.id.to_string(), name, chain.rpc_url);
            }
        }

        Subcommands::Config(cmd) => {
            config(cmd).map_err(|e| Error::Generic(format!("failed to configure: {}", e)))?;
        }
    }

    Ok(())
}
