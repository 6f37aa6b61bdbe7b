use alloy::primitives::{Address, U256};
use storagoor_common::{
    constants::{HEX_REGEX, WORD_SIZE},
    ether::{
        address::{is_address, parse_address},
        word::{left_pad, word_from_u256, Word},
    },
    utils::strings::decode_hex,
};

use crate::error::Error;

/// How a mapping key is encoded into its 32 byte word before hashing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEncoding {
    /// A 20 byte address, left-padded with zeros
    Address(Address),
    /// An unsigned integer, big-endian and left-padded with zeros
    Integer(U256),
    /// Raw bytes of at most 32 bytes, left-padded with zeros
    RawHex(Vec<u8>),
}

impl KeyEncoding {
    /// The padded 32 byte word this key contributes to the slot preimage.
    pub fn to_word(&self) -> Result<Word, Error> {
        match self {
            KeyEncoding::Address(address) => Ok(left_pad(address.as_slice())?),
            KeyEncoding::Integer(value) => Ok(word_from_u256(*value)),
            KeyEncoding::RawHex(bytes) => Ok(left_pad(bytes)?),
        }
    }

    /// A short name for the encoding, for logs and display
    pub fn kind(&self) -> &'static str {
        match self {
            KeyEncoding::Address(_) => "address",
            KeyEncoding::Integer(_) => "integer",
            KeyEncoding::RawHex(_) => "raw hex",
        }
    }
}

/// Parses an unsigned integer in decimal, or in hex when prefixed with `0x`.
/// Returns `None` on empty input, invalid digits, or values over 256 bits.
fn parse_uint(s: &str) -> Option<U256> {
    let s = s.trim();
    let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => (hex, 16u32),
        None => (s, 10u32),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    U256::from_str_radix(digits, u64::from(radix)).ok()
}

/// Parses the declared slot index of a variable.
///
/// ```
/// use alloy::primitives::U256;
/// use storagoor_slot::parse_slot_index;
///
/// assert_eq!(parse_slot_index("3").expect("valid"), U256::from(3));
/// assert_eq!(parse_slot_index("0x10").expect("valid"), U256::from(16));
/// assert!(parse_slot_index("-1").is_err());
/// ```
pub fn parse_slot_index(raw: &str) -> Result<U256, Error> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation("slot index is empty".to_string()));
    }

    parse_uint(trimmed).ok_or_else(|| {
        Error::Validation(format!(
            "invalid slot index '{trimmed}': expected a decimal or 0x-prefixed hex integer below 2^256"
        ))
    })
}

/// Classifies a user supplied mapping key. Addresses are tried first, then integers, then raw
/// hex bytes; anything else is rejected.
///
/// ```
/// use storagoor_slot::{classify_key, KeyEncoding};
///
/// assert!(matches!(classify_key("42"), Ok(KeyEncoding::Integer(_))));
/// assert!(matches!(classify_key("deadbeef"), Ok(KeyEncoding::RawHex(_))));
/// assert!(classify_key("hello").is_err());
/// ```
pub fn classify_key(raw: &str) -> Result<KeyEncoding, Error> {
    let key = raw.trim();
    if key.is_empty() {
        return Err(Error::Validation("mapping key is empty".to_string()));
    }

    if is_address(key) {
        return Ok(KeyEncoding::Address(parse_address(key)?));
    }

    if let Some(value) = parse_uint(key) {
        return Ok(KeyEncoding::Integer(value));
    }

    let lowered = key.replacen("0X", "0x", 1);
    if !HEX_REGEX.is_match(&lowered).unwrap_or(false) {
        return Err(Error::Validation(format!(
            "mapping key '{key}' is not an address, an integer or a hex string"
        )));
    }

    let bytes = decode_hex(&lowered)
        .map_err(|e| Error::Validation(format!("mapping key '{key}' is not valid hex: {e}")))?;
    if bytes.is_empty() {
        return Err(Error::Validation(format!("mapping key '{key}' has no hex digits")));
    }
    if bytes.len() > WORD_SIZE {
        return Err(Error::Validation(format!(
            "mapping key '{key}' is {} bytes long, keys are at most {WORD_SIZE} bytes",
            bytes.len()
        )));
    }

    Ok(KeyEncoding::RawHex(bytes))
}
