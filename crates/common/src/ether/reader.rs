use std::{collections::BTreeMap, sync::Arc};

use alloy::primitives::Address;
use async_trait::async_trait;
use tracing::debug;

use crate::{
    error::Error,
    ether::{
        chains::{find_chain, ChainId},
        rpc,
        word::Word,
    },
};

/// Reads raw 32-byte words out of contract storage.
///
/// Implementations perform exactly one read per call, and neither retry nor cache. `Ok(None)`
/// means the read succeeded but returned no value.
#[async_trait]
pub trait StorageReader: Send + Sync {
    /// Read the word at `slot` of `contract` on `chain`.
    async fn get_storage_at(
        &self,
        contract: Address,
        slot: Word,
        chain: ChainId,
    ) -> Result<Option<Word>, Error>;
}

#[async_trait]
impl<T: StorageReader + ?Sized> StorageReader for Arc<T> {
    async fn get_storage_at(
        &self,
        contract: Address,
        slot: Word,
        chain: ChainId,
    ) -> Result<Option<Word>, Error> {
        (**self).get_storage_at(contract, slot, chain).await
    }
}

/// A [`StorageReader`] backed by `eth_getStorageAt`, with one RPC endpoint per chain.
#[derive(Debug, Clone, Default)]
pub struct RpcStorageReader {
    endpoints: BTreeMap<ChainId, String>,
}

impl RpcStorageReader {
    /// Creates a reader with no endpoints configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the RPC endpoint used for `chain`, replacing any previous one.
    pub fn with_endpoint(mut self, chain: ChainId, rpc_url: impl Into<String>) -> Self {
        self.endpoints.insert(chain, rpc_url.into());
        self
    }

    /// Creates a reader for a single chain, using `rpc_url` when given and the chain's public
    /// registry endpoint otherwise.
    pub fn for_chain(chain: ChainId, rpc_url: &str) -> Self {
        let rpc_url = match rpc_url.trim() {
            "" => find_chain(chain).map(|c| c.rpc_url.to_string()).unwrap_or_default(),
            url => url.to_string(),
        };
        Self::new().with_endpoint(chain, rpc_url)
    }

    /// Returns the endpoint configured for `chain`.
    pub fn endpoint(&self, chain: ChainId) -> Option<&str> {
        self.endpoints.get(&chain).map(String::as_str)
    }
}

#[async_trait]
impl StorageReader for RpcStorageReader {
    async fn get_storage_at(
        &self,
        contract: Address,
        slot: Word,
        chain: ChainId,
    ) -> Result<Option<Word>, Error> {
        let rpc_url = self
            .endpoint(chain)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| Error::RpcError(format!("no rpc endpoint configured for chain {chain}")))?;

        debug!("reading slot '{}' of '{}' on chain {}", slot, contract, chain);
        rpc::get_storage_at(contract, slot, rpc_url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::B256;

    #[test]
    fn test_with_endpoint_replaces() {
        let reader = RpcStorageReader::new()
            .with_endpoint(ChainId::MAINNET, "http://a")
            .with_endpoint(ChainId::MAINNET, "http://b");

        assert_eq!(reader.endpoint(ChainId::MAINNET), Some("http://b"));
        assert_eq!(reader.endpoint(ChainId::LOCAL), None);
    }

    #[test]
    fn test_for_chain() {
        let reader = RpcStorageReader::for_chain(ChainId(8453), "");
        assert_eq!(reader.endpoint(ChainId(8453)), Some("https://mainnet.base.org"));

        let reader = RpcStorageReader::for_chain(ChainId(8453), " http://127.0.0.1:8545 ");
        assert_eq!(reader.endpoint(ChainId(8453)), Some("http://127.0.0.1:8545"));

        let reader = RpcStorageReader::for_chain(ChainId(424242), "");
        assert_eq!(reader.endpoint(ChainId(424242)), Some(""));
    }

    #[tokio::test]
    async fn test_unconfigured_chain_is_rpc_error() {
        let reader = RpcStorageReader::new().with_endpoint(ChainId::MAINNET, "http://a");
        let result = reader.get_storage_at(Address::ZERO, B256::ZERO, ChainId::LOCAL).await;

        assert!(matches!(result, Err(Error::RpcError(_))));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_rpc_error() {
        let reader = RpcStorageReader::new().with_endpoint(ChainId::LOCAL, "http://127.0.0.1:1");
        let result = reader.get_storage_at(Address::ZERO, B256::ZERO, ChainId::LOCAL).await;

        assert!(matches!(result, Err(Error::RpcError(_))));
    }

    #[tokio::test]
    async fn test_arc_reader_delegates() {
        let reader: Arc<dyn StorageReader> = Arc::new(RpcStorageReader::new());
        let result = reader.get_storage_at(Address::ZERO, B256::ZERO, ChainId::MAINNET).await;

        assert!(matches!(result, Err(Error::RpcError(_))));
    }
}
