pub(crate) mod key;

use alloy::primitives::keccak256;
use colored::Colorize;
use storagoor_common::{
    constants::WORD_SIZE,
    ether::word::{word_from_u256, Word},
    utils::hex::ToLowerHex,
};
use tracing::{debug, trace};

use crate::{
    core::key::{classify_key, parse_slot_index, KeyEncoding},
    error::Error,
    interfaces::{SlotArgs, SlotSpec},
};

/// The 32 byte storage key a [`SlotSpec`] resolves to.
pub type ResolvedSlot = Word;

/// A resolved slot together with the classification of each mapping key that went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotResolution {
    /// The storage key to read
    pub slot: ResolvedSlot,
    /// The mapping keys, outermost first. Empty for plain variables.
    pub keys: Vec<KeyEncoding>,
}

impl SlotResolution {
    /// Print the resolution to stdout.
    pub fn display(&self) {
        for (i, key) in self.keys.iter().enumerate() {
            let word = key.to_word().map(|w| w.to_lower_hex()).unwrap_or_default();
            println!("  {} {} ({})", format!("Key {}:", i + 1).dimmed(), word, key.kind());
        }
        println!("{} {}", "Storage Slot:".bold().bright_white(), self.slot.to_lower_hex());
    }
}

/// The storage key of entry `key` in a mapping located at `slot`,
/// `keccak256(key ‖ slot)`.
pub fn mapping_slot(key: Word, slot: Word) -> Word {
    let mut preimage = [0u8; WORD_SIZE * 2];
    preimage[..WORD_SIZE].copy_from_slice(key.as_slice());
    preimage[WORD_SIZE..].copy_from_slice(slot.as_slice());
    keccak256(preimage)
}

/// Resolves a [`SlotSpec`] and keeps the key classifications.
///
/// Every precondition is checked, and every key classified, before any hashing happens.
pub fn resolve_detailed(spec: &SlotSpec) -> Result<SlotResolution, Error> {
    let base = parse_slot_index(&spec.base_slot)?;

    if spec.is_double_mapping && !spec.is_mapping {
        return Err(Error::Validation("double mapping requires mapping mode".to_string()));
    }
    if spec.is_mapping && spec.mapping_key.trim().is_empty() {
        return Err(Error::Validation(
            "a mapping key is required when mapping mode is enabled".to_string(),
        ));
    }
    if spec.is_double_mapping && spec.second_mapping_key.trim().is_empty() {
        return Err(Error::Validation(
            "a second mapping key is required when double mapping mode is enabled".to_string(),
        ));
    }

    let base_word = word_from_u256(base);
    if !spec.is_mapping {
        trace!("resolved direct slot {}", base_word);
        return Ok(SlotResolution { slot: base_word, keys: Vec::new() });
    }

    let mut keys = vec![classify_key(&spec.mapping_key)?];
    if spec.is_double_mapping {
        keys.push(classify_key(&spec.second_mapping_key)?);
    }
    let words = keys.iter().map(KeyEncoding::to_word).collect::<Result<Vec<_>, _>>()?;

    let slot = words.iter().fold(base_word, |slot, key| mapping_slot(*key, slot));
    trace!("resolved mapping slot {} from {} key(s)", slot, keys.len());

    Ok(SlotResolution { slot, keys })
}

/// Resolves a [`SlotSpec`] to the storage key it names.
///
/// ```
/// use storagoor_slot::{resolve, SlotSpec};
///
/// let slot = resolve(&SlotSpec::direct("1")).expect("valid");
/// assert_eq!(slot.0[31], 1);
/// ```
pub fn resolve(spec: &SlotSpec) -> Result<ResolvedSlot, Error> {
    resolve_detailed(spec).map(|resolution| resolution.slot)
}

/// Computes the storage slot described by `args`.
pub async fn slot(args: SlotArgs) -> Result<SlotResolution, Error> {
    let spec = args.spec();
    debug!("resolving slot for {:?}", spec);

    let resolution = resolve_detailed(&spec)?;
    for key in &resolution.keys {
        debug!("mapping key classified as {}", key.kind());
    }

    Ok(resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::SlotArgsBuilder;
    use alloy::primitives::{b256, B256};

    #[test]
    fn test_direct_slot_is_padded_index() {
        assert_eq!(resolve(&SlotSpec::direct("0")).expect("valid"), B256::ZERO);
        assert_eq!(resolve(&SlotSpec::direct("5")).expect("valid"), B256::with_last_byte(5));
        assert_eq!(resolve(&SlotSpec::direct("0x0a")).expect("valid"), B256::with_last_byte(10));
    }

    #[test]
    fn test_mapping_slot_zero() {
        assert_eq!(
            mapping_slot(B256::ZERO, B256::ZERO),
            b256!("ad3228b676f7d3cd4284a5443f17f1962b36e491b30a40b2405849e597ba5fb5")
        );
    }

    #[test]
    fn test_mapping_integer_key() {
        let slot = resolve(&SlotSpec::mapping("0", "1")).expect("valid");
        assert_eq!(slot, b256!("ada5013122d395ba3c54772283fb069b10426056ef8ca54750cb9bb552a59e7d"));
    }

    #[test]
    fn test_mapping_address_key() {
        let slot =
            resolve(&SlotSpec::mapping("3", "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"))
                .expect("valid");
        assert_eq!(slot, b256!("3a988d762a24303c37d08f1543db6143453b579691d5c20fed39629ff1334cca"));
    }

    #[test]
    fn test_mapping_hex_integer_key() {
        let slot = resolve(&SlotSpec::mapping("2", "0xff")).expect("valid");
        assert_eq!(slot, b256!("16ed800b3553d170d9b9afe6d01a73447a37318a016996524f15d95a2ceafbc3"));
    }

    #[test]
    fn test_mapping_raw_hex_key() {
        let slot = resolve(&SlotSpec::mapping("1", "deadbeef")).expect("valid");
        assert_eq!(slot, b256!("8003b79ccb3357ef955735bf2d79c8eec95faebc6572403c109c4d6635d6ed76"));
    }

    #[test]
    fn test_double_mapping_integer_keys() {
        let slot = resolve(&SlotSpec::double_mapping("5", "1", "2")).expect("valid");
        assert_eq!(slot, b256!("f5420ca259a62a5d01b98236cad4b6c63e18c1c4aeae10e9ea108330f776d479"));
    }

    #[test]
    fn test_double_mapping_nests_single_mapping() {
        let inner = resolve(&SlotSpec::mapping("5", "1")).expect("valid");
        assert_eq!(inner, b256!("1471eb6eb2c5e789fc3de43f8ce62938c7d1836ec861730447e2ada8fd81017b"));

        let outer = resolve(&SlotSpec::double_mapping("5", "1", "2")).expect("valid");
        assert_eq!(outer, mapping_slot(B256::with_last_byte(2), inner));
    }

    #[test]
    fn test_double_mapping_allowance() {
        // allowance[owner][spender] on a token with `allowance` at slot 1
        let slot = resolve(&SlotSpec::double_mapping(
            "1",
            "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045",
            "0x000000000000000000000000000000000000dEaD",
        ))
        .expect("valid");
        assert_eq!(slot, b256!("000a3e70105308c36141f9521f64809b51e4c00676b4adc55afa579ff852637d"));
    }

    #[test]
    fn test_missing_keys_are_rejected() {
        assert!(matches!(resolve(&SlotSpec::mapping("0", "")), Err(Error::Validation(_))));
        assert!(matches!(resolve(&SlotSpec::mapping("0", "   ")), Err(Error::Validation(_))));
        assert!(matches!(
            resolve(&SlotSpec::double_mapping("0", "1", "")),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_double_mapping_requires_mapping() {
        let spec = SlotSpec {
            base_slot: "0".to_string(),
            is_double_mapping: true,
            mapping_key: "1".to_string(),
            second_mapping_key: "2".to_string(),
            ..Default::default()
        };
        assert!(matches!(resolve(&spec), Err(Error::Validation(_))));
    }

    #[test]
    fn test_keys_ignored_without_mapping() {
        let spec = SlotSpec {
            base_slot: "4".to_string(),
            mapping_key: "hello".to_string(),
            ..Default::default()
        };
        assert_eq!(resolve(&spec).expect("valid"), B256::with_last_byte(4));
    }

    #[test]
    fn test_invalid_second_key_is_rejected() {
        assert!(matches!(
            resolve(&SlotSpec::double_mapping("0", "1", "hello")),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_resolution_keeps_key_order() {
        let resolution = resolve_detailed(&SlotSpec::double_mapping(
            "1",
            "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045",
            "7",
        ))
        .expect("valid");

        assert_eq!(
            resolution.keys.iter().map(KeyEncoding::kind).collect::<Vec<_>>(),
            vec!["address", "integer"]
        );
    }

    #[tokio::test]
    async fn test_slot_from_args() {
        let args = SlotArgsBuilder::new()
            .slot("0".to_string())
            .mapping(true)
            .key("1".to_string())
            .build()
            .expect("failed to build args");

        let resolution = slot(args).await.expect("valid");
        assert_eq!(
            resolution.slot,
            b256!("ada5013122d395ba3c54772283fb069b10426056ef8ca54750cb9bb552a59e7d")
        );
        assert_eq!(resolution.keys.len(), 1);
    }
}
