use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{constants::*, error::Error};

/// An EVM chain identifier, as returned by `eth_chainId`.
///
/// The chain is threaded explicitly through every read instead of living in a global "current
/// network" store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl ChainId {
    /// Ethereum mainnet
    pub const MAINNET: ChainId = ChainId(CHAIN_ID_ETHEREUM);
    /// Local development node
    pub const LOCAL: ChainId = ChainId(CHAIN_ID_LOCAL);

    /// The numeric id of this chain
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl Default for ChainId {
    fn default() -> Self {
        Self::MAINNET
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        ChainId(id)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChainId {
    type Err = Error;

    /// Parses either a numeric chain id or the name / alias of a known chain.
    ///
    /// ```
    /// use storagoor_common::ether::chains::ChainId;
    ///
    /// assert_eq!("1".parse::<ChainId>().expect("valid"), ChainId(1));
    /// assert_eq!("Base Sepolia".parse::<ChainId>().expect("valid"), ChainId(84532));
    /// assert_eq!("arbitrum".parse::<ChainId>().expect("valid"), ChainId(42161));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<u64>() {
            return Ok(ChainId(id));
        }

        let needle = normalize_chain_name(s);
        CHAINS
            .iter()
            .find(|chain| {
                normalize_chain_name(chain.name) == needle ||
                    chain.aliases.iter().any(|alias| *alias == needle)
            })
            .map(|chain| chain.id)
            .ok_or_else(|| Error::Validation(format!("unknown chain '{s}'")))
    }
}

/// A selectable chain and its default public RPC endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chain {
    /// The chain id
    pub id: ChainId,
    /// Human readable chain name
    pub name: &'static str,
    /// Lowercase, dash-separated names the chain can also be selected by
    pub aliases: &'static [&'static str],
    /// The default public RPC endpoint
    pub rpc_url: &'static str,
}

/// The built-in chain registry. Entries sharing a chain id are collapsed by [`available_chains`],
/// keeping the first.
const CHAINS: &[Chain] = &[
    Chain {
        id: ChainId(CHAIN_ID_ETHEREUM),
        name: "Ethereum",
        aliases: &["mainnet", "eth"],
        rpc_url: "https://eth.llamarpc.com",
    },
    Chain {
        id: ChainId(CHAIN_ID_SEPOLIA),
        name: "Sepolia",
        aliases: &[],
        rpc_url: "https://ethereum-sepolia-rpc.publicnode.com",
    },
    Chain {
        id: ChainId(CHAIN_ID_HOLESKY),
        name: "Holesky",
        aliases: &[],
        rpc_url: "https://ethereum-holesky-rpc.publicnode.com",
    },
    Chain {
        id: ChainId(CHAIN_ID_POLYGON),
        name: "Polygon",
        aliases: &["matic"],
        rpc_url: "https://polygon-rpc.com",
    },
    Chain {
        id: ChainId(CHAIN_ID_POLYGON_AMOY),
        name: "Polygon Amoy",
        aliases: &["amoy"],
        rpc_url: "https://rpc-amoy.polygon.technology",
    },
    Chain {
        id: ChainId(CHAIN_ID_BSC),
        name: "BNB Smart Chain",
        aliases: &["bsc", "bnb"],
        rpc_url: "https://bsc-dataseed.bnbchain.org",
    },
    Chain {
        id: ChainId(CHAIN_ID_BSC_TESTNET),
        name: "BNB Smart Chain Testnet",
        aliases: &["bsc-testnet"],
        rpc_url: "https://data-seed-prebsc-1-s1.bnbchain.org:8545",
    },
    Chain {
        id: ChainId(CHAIN_ID_ARBITRUM),
        name: "Arbitrum One",
        aliases: &["arbitrum", "arb"],
        rpc_url: "https://arb1.arbitrum.io/rpc",
    },
    Chain {
        id: ChainId(CHAIN_ID_ARBITRUM_SEPOLIA),
        name: "Arbitrum Sepolia",
        aliases: &[],
        rpc_url: "https://sepolia-rollup.arbitrum.io/rpc",
    },
    Chain {
        id: ChainId(CHAIN_ID_OPTIMISM),
        name: "OP Mainnet",
        aliases: &["optimism", "op"],
        rpc_url: "https://mainnet.optimism.io",
    },
    Chain {
        id: ChainId(CHAIN_ID_OPTIMISM_SEPOLIA),
        name: "OP Sepolia",
        aliases: &["optimism-sepolia"],
        rpc_url: "https://sepolia.optimism.io",
    },
    Chain {
        id: ChainId(CHAIN_ID_AVALANCHE),
        name: "Avalanche",
        aliases: &["avax"],
        rpc_url: "https://api.avax.network/ext/bc/C/rpc",
    },
    Chain {
        id: ChainId(CHAIN_ID_AVALANCHE_FUJI),
        name: "Avalanche Fuji",
        aliases: &["fuji"],
        rpc_url: "https://api.avax-test.network/ext/bc/C/rpc",
    },
    Chain {
        id: ChainId(CHAIN_ID_FANTOM),
        name: "Fantom",
        aliases: &["ftm"],
        rpc_url: "https://rpc.ftm.tools",
    },
    Chain {
        id: ChainId(CHAIN_ID_BASE),
        name: "Base",
        aliases: &[],
        rpc_url: "https://mainnet.base.org",
    },
    Chain {
        id: ChainId(CHAIN_ID_BASE_SEPOLIA),
        name: "Base Sepolia",
        aliases: &[],
        rpc_url: "https://sepolia.base.org",
    },
    Chain {
        id: ChainId(CHAIN_ID_LINEA),
        name: "Linea",
        aliases: &[],
        rpc_url: "https://rpc.linea.build",
    },
    Chain {
        id: ChainId(CHAIN_ID_SCROLL),
        name: "Scroll",
        aliases: &[],
        rpc_url: "https://rpc.scroll.io",
    },
    Chain {
        id: ChainId(CHAIN_ID_ZKSYNC),
        name: "zkSync Era",
        aliases: &["zksync"],
        rpc_url: "https://mainnet.era.zksync.io",
    },
    Chain {
        id: ChainId(CHAIN_ID_POLYGON_ZKEVM),
        name: "Polygon zkEVM",
        aliases: &[],
        rpc_url: "https://zkevm-rpc.com",
    },
    Chain {
        id: ChainId(CHAIN_ID_LOCAL),
        name: "Anvil",
        aliases: &["local", "localhost"],
        rpc_url: "http://127.0.0.1:8545",
    },
    Chain {
        id: ChainId(CHAIN_ID_LOCAL),
        name: "Hardhat",
        aliases: &[],
        rpc_url: "http://127.0.0.1:8545",
    },
];

fn normalize_chain_name(name: &str) -> String {
    name.trim().to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

/// Returns the selectable chains, de-duplicated by chain id and sorted by name.
///
/// ```
/// use storagoor_common::ether::chains::available_chains;
///
/// let chains = available_chains();
/// assert!(chains.windows(2).all(|w| w[0].name <= w[1].name));
/// ```
pub fn available_chains() -> Vec<Chain> {
    let mut unique: Vec<Chain> = Vec::new();
    for chain in CHAINS {
        if !unique.iter().any(|c| c.id == chain.id) {
            unique.push(*chain);
        }
    }

    unique.sort_by(|a, b| a.name.cmp(b.name));
    unique
}

/// Find a chain in the registry by id.
pub fn find_chain(id: ChainId) -> Option<Chain> {
    CHAINS.iter().find(|chain| chain.id == id).copied()
}
