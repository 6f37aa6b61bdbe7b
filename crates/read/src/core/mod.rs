use alloy::primitives::Address;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use storagoor_common::{
    ether::{
        address::parse_address,
        chains::ChainId,
        format::{format_word, FormattedView},
        reader::{RpcStorageReader, StorageReader},
        word::Word,
    },
    utils::hex::ToLowerHex,
};
use storagoor_slot::{resolve, SlotSpec};
use tracing::{debug, info};

use crate::{error::Error, interfaces::ReadArgs};

/// The outcome of reading one storage slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadResult {
    /// The contract that was read
    pub contract: Address,
    /// The chain the contract was read on
    pub chain: ChainId,
    /// The resolved storage key
    pub slot: Word,
    /// The raw value, or `None` if the node returned no value
    pub value: Option<Word>,
    /// The interpretations of `value`
    pub formatted: Option<FormattedView>,
}

impl ReadResult {
    /// Print the result to stdout.
    pub fn display(&self) {
        println!("{} {}", "Contract:".dimmed(), self.contract.to_lower_hex());
        println!("{} {}", "Chain:".dimmed(), self.chain);
        println!("{} {}", "Slot:".dimmed(), self.slot.to_lower_hex());
        println!();

        match &self.formatted {
            Some(view) => view.display(),
            None => println!("{}", "No value returned for this slot.".yellow()),
        }
    }
}

/// Reads one slot of `contract` through `reader`.
///
/// The contract address and slot specification are validated before the reader is touched, and
/// exactly one read is issued. A read that returns no value is not an error: the result carries
/// `value: None` and no interpretations.
pub async fn read_slot<R: StorageReader + ?Sized>(
    reader: &R,
    contract: &str,
    spec: &SlotSpec,
    chain: ChainId,
) -> Result<ReadResult, Error> {
    let contract = parse_address(contract)?;
    let slot = resolve(spec)?;
    debug!("resolved slot {} for {:?}", slot, spec);

    let value = reader.get_storage_at(contract, slot, chain).await?;
    if value.is_none() {
        info!("no value returned for slot {} of {}", slot, contract);
    }

    Ok(ReadResult { contract, chain, slot, formatted: value.as_ref().map(format_word), value })
}

/// Reads the slot described by `args` over JSON-RPC.
pub async fn read(args: ReadArgs) -> Result<ReadResult, Error> {
    let chain = match args.chain.trim() {
        "" => ChainId::default(),
        chain => chain.parse::<ChainId>()?,
    };

    let reader = RpcStorageReader::for_chain(chain, &args.rpc_url);
    read_slot(&reader, &args.target, &args.spec(), chain).await
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::interfaces::ReadArgsBuilder;
    use alloy::primitives::{b256, B256};
    use async_trait::async_trait;
    use storagoor_common::{error::Error as CommonError, ether::format::INVALID_STRING};

    const WETH: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";

    /// Returns a fixed response and counts how often it was asked.
    struct FixedReader {
        response: Result<Option<Word>, String>,
        calls: AtomicUsize,
    }

    impl FixedReader {
        fn new(response: Result<Option<Word>, String>) -> Self {
            Self { response, calls: AtomicUsize::new(0) }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl StorageReader for FixedReader {
        async fn get_storage_at(
            &self,
            _contract: Address,
            _slot: Word,
            _chain: ChainId,
        ) -> Result<Option<Word>, CommonError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone().map_err(CommonError::RpcError)
        }
    }

    #[tokio::test]
    async fn test_read_direct_slot() {
        let reader = FixedReader::new(Ok(Some(B256::with_last_byte(1))));
        let result = read_slot(&reader, WETH, &SlotSpec::direct("0"), ChainId::MAINNET)
            .await
            .expect("read failed");

        assert_eq!(reader.calls(), 1);
        assert_eq!(result.slot, B256::ZERO);
        assert_eq!(result.value, Some(B256::with_last_byte(1)));

        let view = result.formatted.expect("value should be formatted");
        assert_eq!(view.decimal, "1");
        assert_eq!(view.string, INVALID_STRING);
    }

    #[tokio::test]
    async fn test_read_mapping_slot() {
        let reader = FixedReader::new(Ok(Some(B256::ZERO)));
        let result = read_slot(&reader, WETH, &SlotSpec::mapping("0", "1"), ChainId::MAINNET)
            .await
            .expect("read failed");

        assert_eq!(
            result.slot,
            b256!("ada5013122d395ba3c54772283fb069b10426056ef8ca54750cb9bb552a59e7d")
        );
    }

    #[tokio::test]
    async fn test_empty_result_is_not_an_error() {
        let reader = FixedReader::new(Ok(None));
        let result = read_slot(&reader, WETH, &SlotSpec::direct("3"), ChainId::MAINNET)
            .await
            .expect("read failed");

        assert_eq!(result.value, None);
        assert_eq!(result.formatted, None);
    }

    #[tokio::test]
    async fn test_invalid_contract_skips_rpc() {
        let reader = FixedReader::new(Ok(None));
        for contract in ["", "0x1234", "weth", "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc"] {
            let result =
                read_slot(&reader, contract, &SlotSpec::direct("0"), ChainId::MAINNET).await;
            assert!(matches!(result, Err(Error::Validation(_))), "'{contract}' accepted");
        }

        assert_eq!(reader.calls(), 0);
    }

    #[tokio::test]
    async fn test_invalid_spec_skips_rpc() {
        let reader = FixedReader::new(Ok(None));
        let specs = [
            SlotSpec::direct("-1"),
            SlotSpec::mapping("0", ""),
            SlotSpec::mapping("0", "hello"),
            SlotSpec::double_mapping("0", "1", ""),
        ];

        for spec in &specs {
            let result = read_slot(&reader, WETH, spec, ChainId::MAINNET).await;
            assert!(matches!(result, Err(Error::Validation(_))), "{spec:?} accepted");
        }

        assert_eq!(reader.calls(), 0);
    }

    #[tokio::test]
    async fn test_rpc_failure_is_rpc_error() {
        let reader = FixedReader::new(Err("connection refused".to_string()));
        let result = read_slot(&reader, WETH, &SlotSpec::direct("0"), ChainId::MAINNET).await;

        assert!(matches!(result, Err(Error::Rpc(_))));
        assert_eq!(reader.calls(), 1);
    }

    #[tokio::test]
    async fn test_read_result_serializes() {
        let reader = FixedReader::new(Ok(Some(B256::with_last_byte(1))));
        let result = read_slot(&reader, WETH, &SlotSpec::direct("0"), ChainId(8453))
            .await
            .expect("read failed");

        let json = serde_json::to_value(&result).expect("failed to serialize");
        assert_eq!(json["chain"], 8453);
        assert_eq!(json["formatted"]["decimal"], "1");
    }

    #[tokio::test]
    async fn test_read_unknown_chain_is_validation_error() {
        let args = ReadArgsBuilder::new()
            .target(WETH.to_string())
            .chain("nowhere".to_string())
            .build()
            .expect("failed to build args");

        assert!(matches!(read(args).await, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_read_weth_name() {
        let Ok(rpc_url) = std::env::var("RPC_URL") else {
            println!("RPC_URL not set, skipping test");
            return;
        };

        let args = ReadArgsBuilder::new()
            .target(WETH.to_string())
            .rpc_url(rpc_url)
            .build()
            .expect("failed to build args");

        let result = read(args).await.expect("failed to read slot");
        assert_eq!(result.formatted.expect("value").string, "Wrapped Ether");
    }
}
