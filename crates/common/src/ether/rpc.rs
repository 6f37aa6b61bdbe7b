use alloy::primitives::Address;
use tracing::trace;

use crate::{
    error::Error,
    ether::{provider::MultiTransportProvider, word::Word},
};

/// Read the 32-byte word at `slot` of `contract` from the provided RPC URL.
///
/// One request is issued. Failures are not retried.
///
/// ```no_run
/// # async fn example() -> Result<(), storagoor_common::error::Error> {
/// use alloy::primitives::{address, B256};
/// use storagoor_common::ether::rpc::get_storage_at;
///
/// let weth = address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
/// let name = get_storage_at(weth, B256::ZERO, "https://eth.llamarpc.com").await?;
/// # Ok(())
/// # }
/// ```
pub async fn get_storage_at(
    contract: Address,
    slot: Word,
    rpc_url: &str,
) -> Result<Option<Word>, Error> {
    let provider = MultiTransportProvider::connect(rpc_url)
        .await
        .map_err(|_| Error::RpcError(format!("failed to connect to provider '{}'", &rpc_url)))?;

    trace!("fetching storage slot '{}' of '{}' .", slot, contract);
    provider
        .get_storage_at(contract, slot)
        .await
        .map_err(|e| Error::RpcError(format!("failed to get storage at slot '{slot}': {e}")))
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use alloy::primitives::B256;

    #[tokio::test]
    async fn test_get_storage_at() {
        let Ok(rpc_url) = std::env::var("RPC_URL") else {
            println!("RPC_URL not set, skipping test");
            return;
        };

        // WETH9 stores `name` ("Wrapped Ether") as a short string in slot 0
        let contract = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"
            .parse::<Address>()
            .expect("invalid address");
        let value = get_storage_at(contract, B256::ZERO, &rpc_url)
            .await
            .expect("get_storage_at() returned an error!")
            .expect("slot 0 should hold a value");

        assert_eq!(&value[..13], b"Wrapped Ether");
    }

    #[tokio::test]
    async fn test_get_storage_at_empty_rpc_url() {
        let result = get_storage_at(Address::ZERO, B256::ZERO, "").await;
        assert!(matches!(result, Err(Error::RpcError(_))));
    }
}
