//! Integration tests for slot resolution.

#[cfg(test)]
mod integration_tests {
    use alloy::primitives::{b256, B256};
    use storagoor_core::error::Error;
    use storagoor_slot::{mapping_slot, resolve, slot, SlotArgsBuilder, SlotSpec};

    const VITALIK: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";
    const DEAD: &str = "0x000000000000000000000000000000000000dEaD";

    #[test]
    fn test_erc20_balance_slot() {
        // balanceOf[owner] with `balanceOf` declared at slot 3
        let slot = resolve(&SlotSpec::mapping("3", VITALIK)).expect("failed to resolve");
        assert_eq!(slot, b256!("3a988d762a24303c37d08f1543db6143453b579691d5c20fed39629ff1334cca"));
    }

    #[test]
    fn test_erc20_allowance_slot() {
        let inner = resolve(&SlotSpec::mapping("1", VITALIK)).expect("failed to resolve");
        assert_eq!(inner, b256!("b931be0b3d1fb06daf0d92e2b8dfe49ead9172e102b3af1e07a10cc29003beb2"));

        let slot = resolve(&SlotSpec::double_mapping("1", VITALIK, DEAD)).expect("failed to resolve");
        assert_eq!(slot, b256!("000a3e70105308c36141f9521f64809b51e4c00676b4adc55afa579ff852637d"));
    }

    #[test]
    fn test_key_forms_resolve_identically() {
        // the same value typed as decimal, hex, or a lowercase address pads to the same word
        let decimal = resolve(&SlotSpec::mapping("0", "57005")).expect("failed to resolve");
        let hex = resolve(&SlotSpec::mapping("0", "0xdead")).expect("failed to resolve");
        let address = resolve(&SlotSpec::mapping("0", DEAD.to_lowercase())).expect("failed to resolve");

        assert_eq!(decimal, hex);
        assert_eq!(decimal, address);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let spec = SlotSpec::double_mapping("0x7", VITALIK, "0xff");
        assert_eq!(
            resolve(&spec).expect("failed to resolve"),
            resolve(&spec).expect("failed to resolve")
        );
    }

    #[test]
    fn test_mapping_slot_of_zero() {
        assert_eq!(
            mapping_slot(B256::ZERO, B256::ZERO),
            b256!("ad3228b676f7d3cd4284a5443f17f1962b36e491b30a40b2405849e597ba5fb5")
        );
    }

    #[test]
    fn test_validation_errors_convert() {
        let result: Result<B256, Error> =
            resolve(&SlotSpec::mapping("0", "not a key")).map_err(Error::from);

        let err = result.expect_err("garbage key should be rejected");
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_slot_command() {
        let args = SlotArgsBuilder::new()
            .slot("5".to_string())
            .mapping(true)
            .double_mapping(true)
            .key("1".to_string())
            .second_key("2".to_string())
            .build()
            .expect("failed to build args");

        let resolution = slot(args).await.expect("failed to resolve");
        assert_eq!(
            resolution.slot,
            b256!("f5420ca259a62a5d01b98236cad4b6c63e18c1c4aeae10e9ea108330f776d479")
        );
        assert_eq!(resolution.keys.len(), 2);
    }
}
