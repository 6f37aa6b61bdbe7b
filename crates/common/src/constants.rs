use fancy_regex::Regex;
use lazy_static::lazy_static;

/// Ethereum Mainnet chain ID
pub const CHAIN_ID_ETHEREUM: u64 = 1;
/// Sepolia testnet chain ID
pub const CHAIN_ID_SEPOLIA: u64 = 11155111;
/// Holesky testnet chain ID
pub const CHAIN_ID_HOLESKY: u64 = 17000;
/// Polygon Mainnet chain ID
pub const CHAIN_ID_POLYGON: u64 = 137;
/// Polygon Amoy testnet chain ID
pub const CHAIN_ID_POLYGON_AMOY: u64 = 80002;
/// BSC Mainnet chain ID
pub const CHAIN_ID_BSC: u64 = 56;
/// BSC Testnet chain ID
pub const CHAIN_ID_BSC_TESTNET: u64 = 97;
/// Arbitrum One chain ID
pub const CHAIN_ID_ARBITRUM: u64 = 42161;
/// Arbitrum Sepolia testnet chain ID
pub const CHAIN_ID_ARBITRUM_SEPOLIA: u64 = 421614;
/// Optimism chain ID
pub const CHAIN_ID_OPTIMISM: u64 = 10;
/// Optimism Sepolia testnet chain ID
pub const CHAIN_ID_OPTIMISM_SEPOLIA: u64 = 11155420;
/// Avalanche C-Chain chain ID
pub const CHAIN_ID_AVALANCHE: u64 = 43114;
/// Avalanche Fuji testnet chain ID
pub const CHAIN_ID_AVALANCHE_FUJI: u64 = 43113;
/// Fantom Opera chain ID
pub const CHAIN_ID_FANTOM: u64 = 250;
/// Base chain ID
pub const CHAIN_ID_BASE: u64 = 8453;
/// Base Sepolia testnet chain ID
pub const CHAIN_ID_BASE_SEPOLIA: u64 = 84532;
/// Linea chain ID
pub const CHAIN_ID_LINEA: u64 = 59144;
/// Scroll chain ID
pub const CHAIN_ID_SCROLL: u64 = 534352;
/// zkSync Era chain ID
pub const CHAIN_ID_ZKSYNC: u64 = 324;
/// Polygon zkEVM chain ID
pub const CHAIN_ID_POLYGON_ZKEVM: u64 = 1101;
/// Local development chain ID (anvil, hardhat)
pub const CHAIN_ID_LOCAL: u64 = 31337;

/// Size of an EVM storage word, in bytes
pub const WORD_SIZE: usize = 32;

/// Size of an EVM address, in bytes
pub const ADDRESS_SIZE: usize = 20;

/// Number of direct slots read by the layout command when no count is given
pub const DEFAULT_LAYOUT_SLOTS: u64 = 20;

/// Upper bound on the number of slots a single layout may read
pub const MAX_LAYOUT_SLOTS: u64 = 10_000;

lazy_static! {
    /// The following regex is used to validate Ethereum addresses.
    pub static ref ADDRESS_REGEX: Regex = Regex::new("^0x[0-9a-fA-F]{40}$").expect("failed to compile regex");

    /// The following regex is used to validate raw hex strings, with or without a `0x` prefix.
    pub static ref HEX_REGEX: Regex = Regex::new("^(0x)?[0-9a-fA-F]*$").expect("failed to compile regex");
}
