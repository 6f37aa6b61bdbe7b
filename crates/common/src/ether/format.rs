//! Renders a raw storage [`Word`] in the four fixed representations shown to the user.
//!
//! The string view is a best-effort heuristic, not a UTF-8 decoder guarantee: the word is decoded
//! lossily and everything outside printable ASCII is silently dropped.

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{ADDRESS_SIZE, WORD_SIZE},
    ether::{
        address::is_address,
        word::{word_to_u256, Word},
    },
    utils::{
        hex::ToLowerHex,
        strings::{encode_hex, printable_ascii},
    },
};

/// Rendered in place of the string view when no printable characters survive decoding.
pub const INVALID_STRING: &str = "Not a valid UTF-8 string";

/// Rendered in place of the address view when the low-order bytes are not a valid address.
pub const INVALID_ADDRESS: &str = "Not a valid address";

/// The four interpretations of a storage value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedView {
    /// `0x`-prefixed, 64 digit lowercase hex
    pub hex: String,
    /// The word as a big-endian unsigned integer, in decimal
    pub decimal: String,
    /// The printable ASCII content of the word
    pub string: String,
    /// The low-order 20 bytes as an address
    pub address: String,
}

impl FormattedView {
    /// Print the view to stdout.
    pub fn display(&self) {
        println!("{}", "Storage Value Interpretations".bold().bright_white());
        println!("  {:<9} {}", "Hex:".dimmed(), self.hex);
        println!("  {:<9} {}", "Decimal:".dimmed(), self.decimal);
        println!("  {:<9} {}", "String:".dimmed(), self.string);
        println!("  {:<9} {}", "Address:".dimmed(), self.address);
    }
}

/// Format a raw storage word. Total: every byte pattern has a rendering.
///
/// ```
/// use alloy::primitives::B256;
/// use storagoor_common::ether::format::{format_word, INVALID_STRING};
///
/// let view = format_word(&B256::with_last_byte(1));
/// assert_eq!(view.decimal, "1");
/// assert_eq!(view.address, "0x0000000000000000000000000000000000000001");
/// assert_eq!(view.string, INVALID_STRING);
/// ```
pub fn format_word(value: &Word) -> FormattedView {
    FormattedView {
        hex: value.to_lower_hex(),
        decimal: word_to_u256(value).to_string(),
        string: format_string(value),
        address: format_address(value),
    }
}

fn format_string(value: &Word) -> String {
    let decoded = String::from_utf8_lossy(value.as_slice());
    let printable = printable_ascii(&decoded);

    if printable.is_empty() {
        return INVALID_STRING.to_string();
    }
    printable
}

fn format_address(value: &Word) -> String {
    let address = format!("0x{}", encode_hex(&value[WORD_SIZE - ADDRESS_SIZE..]));

    if is_address(&address) {
        address
    } else {
        INVALID_ADDRESS.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::B256;

    use crate::utils::strings::decode_hex;

    fn left_padded_ascii(s: &str) -> Word {
        let mut word = [0u8; 32];
        word[32 - s.len()..].copy_from_slice(s.as_bytes());
        B256::from(word)
    }

    #[test]
    fn test_format_one() {
        let view = format_word(&B256::with_last_byte(1));

        assert_eq!(
            view.hex,
            "0x0000000000000000000000000000000000000000000000000000000000000001"
        );
        assert_eq!(view.decimal, "1");
        assert_eq!(view.string, INVALID_STRING);
        assert_eq!(view.address, "0x0000000000000000000000000000000000000001");
    }

    #[test]
    fn test_format_zero() {
        let view = format_word(&B256::ZERO);

        assert_eq!(view.hex, format!("0x{}", "0".repeat(64)));
        assert_eq!(view.decimal, "0");
        assert_eq!(view.string, INVALID_STRING);
        assert_eq!(view.address, "0x0000000000000000000000000000000000000000");
    }

    #[test]
    fn test_format_all_ff() {
        let view = format_word(&B256::repeat_byte(0xff));

        assert_eq!(view.hex, format!("0x{}", "f".repeat(64)));
        assert_eq!(
            view.decimal,
            "115792089237316195423570985008687907853269984665640564039457584007913129639935"
        );
        assert_eq!(view.string, INVALID_STRING);
        assert_eq!(view.address, format!("0x{}", "f".repeat(40)));
    }

    #[test]
    fn test_format_left_padded_string() {
        let view = format_word(&left_padded_ascii("hello"));
        assert_eq!(view.string, "hello");
    }

    #[test]
    fn test_format_solidity_short_string() {
        // short strings are stored left-aligned, with `length * 2` in the lowest byte
        let mut word = [0u8; 32];
        word[..11].copy_from_slice(b"hello world");
        word[31] = 22;

        let view = format_word(&B256::from(word));
        assert_eq!(view.string, "hello world");
    }

    #[test]
    fn test_format_strips_invalid_utf8() {
        let mut word = [0xffu8; 32];
        word[29..].copy_from_slice(b"abc");

        let view = format_word(&B256::from(word));
        assert_eq!(view.string, "abc");
    }

    #[test]
    fn test_format_hex_round_trip() {
        let word = B256::from([0x5au8; 32]);
        let view = format_word(&word);

        let bytes = decode_hex(&view.hex).expect("hex view should decode");
        assert_eq!(B256::from_slice(&bytes), word);
    }

    #[test]
    fn test_format_address_uses_low_order_bytes() {
        let mut word = [0u8; 32];
        word[..12].copy_from_slice(&[0xaa; 12]);
        word[12..].copy_from_slice(&[0x11; 20]);

        let view = format_word(&B256::from(word));
        assert_eq!(view.address, format!("0x{}", "11".repeat(20)));
    }

    #[test]
    fn test_format_is_idempotent() {
        let word = left_padded_ascii("storagoor");
        assert_eq!(format_word(&word), format_word(&word));
    }
}
