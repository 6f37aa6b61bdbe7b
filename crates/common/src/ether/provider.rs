//! Create a provider for the transport implied by an RPC URL.
use alloy::{
    eips::BlockNumberOrTag,
    network::Ethereum,
    primitives::{Address, B256, U256},
    providers::{Provider, ProviderBuilder, RootProvider},
};
use eyre::{eyre, Result};

use crate::ether::word::word_from_u256;

/// The raw `eth_getStorageAt` answer. Nodes may send either a full 32-byte word or a shortened
/// quantity such as `0x0`, and both deserialize as an integer.
type StorageResponse = Option<U256>;

/// [`MultiTransportProvider`] is a convenience wrapper around the different transport types
/// supported by the [`Provider`].
#[derive(Clone, Debug)]
pub struct MultiTransportProvider {
    provider: RootProvider<Ethereum>,
}

// The transport is picked from the URL scheme: http(s), ws(s), or an IPC path.
impl MultiTransportProvider {
    /// Connect to a provider using the given rpc_url.
    pub async fn connect(rpc_url: &str) -> Result<Self> {
        if rpc_url.is_empty() {
            return Err(eyre!("No RPC URL provided"));
        }

        let provider = ProviderBuilder::new().connect(rpc_url).await?.root().clone();
        Ok(Self { provider })
    }

    /// Read a single storage word at the latest block. A `null` result is returned as `None`.
    pub async fn get_storage_at(&self, address: Address, slot: B256) -> Result<Option<B256>> {
        let value = self
            .provider
            .raw_request::<_, StorageResponse>(
                "eth_getStorageAt".into(),
                (address, slot, BlockNumberOrTag::Latest),
            )
            .await?;

        Ok(value.map(word_from_u256))
    }
}
