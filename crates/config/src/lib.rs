//! Configuration management for storagoor
//!
//! Loads, saves, updates and deletes the persisted configuration, and resolves which RPC endpoint
//! serves a given chain.

/// Error types for the configuration module
pub mod error;

use std::{collections::BTreeMap, path::PathBuf};

use crate::error::Error;
use clap::Parser;
use serde::{Deserialize, Serialize};
#[allow(deprecated)]
use std::env::home_dir;
use storagoor_common::{
    ether::chains::{find_chain, ChainId},
    utils::io::file::{delete_path, read_file, write_file},
};
use tracing::{debug, error, info};

/// The MESC profile storagoor queries endpoints under
const MESC_PROFILE: &str = "storagoor";

/// Command line arguments for the configuration command
#[derive(Debug, Clone, Parser)]
#[clap(
    about = "Display and edit the current configuration",
    override_usage = "storagoor config [OPTIONS]"
)]
pub struct ConfigArgs {
    /// The target key to update. One of `rpc_url`, `local_rpc_url`, `default_chain` or
    /// `rpc_urls.<chain>`.
    #[clap(required = false, default_value = "")]
    key: String,

    /// The value to set the key to.
    #[clap(required = false, default_value = "")]
    value: String,
}

/// The [`Configuration`] struct represents the configuration of the CLI. Every command that talks
/// to a node resolves its endpoint through this configuration unless `--rpc-url` is given.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Configuration {
    /// The RPC endpoint used for `default_chain`
    pub rpc_url: String,

    /// The RPC endpoint of a local development node
    pub local_rpc_url: String,

    /// The chain id selected when `--chain` is not given
    pub default_chain: u64,

    /// Per-chain endpoint overrides, keyed by chain id
    pub rpc_urls: BTreeMap<String, String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            rpc_url: "".to_string(),
            local_rpc_url: "http://localhost:8545".to_string(),
            default_chain: ChainId::MAINNET.id(),
            rpc_urls: BTreeMap::new(),
        }
    }
}

#[allow(deprecated)]
fn config_path() -> Result<String, Error> {
    let mut home: PathBuf = home_dir().ok_or_else(|| {
        Error::Generic(
            "failed to get home directory. does your os support `std::env::home_dir()`?"
                .to_string(),
        )
    })?;
    home.push(".storagoor");
    home.push("config.toml");

    home.to_str()
        .map(str::to_string)
        .ok_or_else(|| Error::Generic("failed to convert path to string".to_string()))
}

impl Configuration {
    /// Returns the current configuration, creating the default file on first use.
    pub fn load() -> Result<Self, Error> {
        let path = config_path()?;

        // if the config file doesn't exist, create it
        if !std::path::Path::new(&path).exists() {
            let config = Configuration::default();
            config.save()?;
        }

        let contents = read_file(&path)
            .map_err(|e| Error::Generic(format!("failed to read config file: {e}")))?;
        let mut config: Configuration = toml::from_str(&contents)
            .map_err(|e| Error::ParseError(format!("failed to parse config file: {e}")))?;

        // load mesc config if enabled
        if !mesc::is_mesc_enabled() {
            return Ok(config);
        }

        if let Some(endpoint) = mesc::get_default_endpoint(Some(MESC_PROFILE))? {
            debug!("overriding rpc_url with mesc endpoint");
            config.rpc_url = endpoint.url;
        }

        Ok(config)
    }

    /// Saves the current configuration to disk.
    pub fn save(&self) -> Result<(), Error> {
        write_file(
            &config_path()?,
            &toml::to_string(&self)
                .map_err(|e| Error::ParseError(format!("failed to serialize config: {e}")))?,
        )
        .map_err(|e| Error::Generic(format!("failed to write config file: {e}")))?;

        Ok(())
    }

    /// Deletes the configuration file at `$HOME/.storagoor/config.toml`.
    pub fn delete() -> Result<(), Error> {
        if !delete_path(&config_path()?) {
            return Err(Error::Generic("failed to delete config file".to_string()));
        }

        Ok(())
    }

    /// Update a single key/value pair in the configuration and write it to disk.
    pub fn update(&mut self, key: &str, value: &str) -> Result<(), Error> {
        match key {
            "rpc_url" => {
                self.rpc_url = value.to_string();
            }
            "local_rpc_url" => {
                self.local_rpc_url = value.to_string();
            }
            "default_chain" => {
                let chain = value
                    .parse::<ChainId>()
                    .map_err(|e| Error::ParseError(format!("invalid default_chain: {e}")))?;
                self.default_chain = chain.id();
            }
            _ => match key.strip_prefix("rpc_urls.") {
                Some(chain) => {
                    let chain = chain
                        .parse::<ChainId>()
                        .map_err(|e| Error::ParseError(format!("invalid rpc_urls key: {e}")))?;
                    self.rpc_urls.insert(chain.to_string(), value.to_string());
                }
                None => {
                    return Err(Error::Generic(format!(
                        "invalid key: \'{key}\' is not a valid configuration key."
                    )))
                }
            },
        }

        self.save()?;

        Ok(())
    }

    /// The chain selected when none is given on the command line.
    pub fn default_chain(&self) -> ChainId {
        ChainId(self.default_chain)
    }

    /// Resolves the RPC endpoint for `chain`.
    ///
    /// Tried in order: the `rpc_urls` override, `rpc_url` for the default chain,
    /// `local_rpc_url` for the local chain, a MESC endpoint for the chain id, and finally the
    /// public endpoint from the chain registry.
    pub fn endpoint(&self, chain: ChainId) -> Option<String> {
        if let Some(url) = self.rpc_urls.get(&chain.to_string()).filter(|url| !url.is_empty()) {
            return Some(url.clone());
        }
        if chain == self.default_chain() && !self.rpc_url.is_empty() {
            return Some(self.rpc_url.clone());
        }
        if chain == ChainId::LOCAL && !self.local_rpc_url.is_empty() {
            return Some(self.local_rpc_url.clone());
        }
        if mesc::is_mesc_enabled() {
            if let Ok(Some(endpoint)) =
                mesc::get_endpoint_by_query(&chain.to_string(), Some(MESC_PROFILE))
            {
                debug!("using mesc endpoint for chain {}", chain);
                return Some(endpoint.url);
            }
        }

        find_chain(chain).map(|chain| chain.rpc_url.to_string())
    }
}

/// The `config` command is used to display and edit the current configuration.
pub fn config(args: ConfigArgs) -> Result<(), Error> {
    if !args.key.is_empty() {
        if !args.value.is_empty() {
            let mut config = Configuration::load()?;
            config.update(&args.key, &args.value)?;
            info!("updated configuration! Set \'{}\' = \'{}\' .", &args.key, &args.value);
        } else {
            error!("found key but no value to set. Please specify a value to set, use `storagoor config --help` for more information.");
        }
    } else {
        println!("{:#?}", Configuration::load()?);
        info!("use `storagoor config <KEY> <VALUE>` to set a key/value pair.");
    }

    Ok(())
}

/// Parse user input --rpc-url into a full url
pub fn parse_url_arg(url: &str) -> Result<String, String> {
    if mesc::is_mesc_enabled() {
        if let Ok(Some(endpoint)) = mesc::get_endpoint_by_query(url, Some(MESC_PROFILE)) {
            return Ok(endpoint.url);
        }
    }
    Ok(url.to_string())
}
