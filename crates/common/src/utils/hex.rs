use super::strings::encode_hex;
use alloy::primitives::{Address, FixedBytes, U256};

/// A convenience function which encodes a given EVM type into a sized, lowercase hex string.
pub trait ToLowerHex {
    /// Encode `self` as `0x`-prefixed lowercase hex.
    fn to_lower_hex(&self) -> String;
}

impl ToLowerHex for FixedBytes<32> {
    fn to_lower_hex(&self) -> String {
        format!("0x{}", encode_hex(self.as_slice()))
    }
}

impl ToLowerHex for Address {
    fn to_lower_hex(&self) -> String {
        format!("0x{}", encode_hex(self.as_slice()))
    }
}

impl ToLowerHex for U256 {
    fn to_lower_hex(&self) -> String {
        format!("{self:#x}")
    }
}

impl ToLowerHex for Vec<u8> {
    fn to_lower_hex(&self) -> String {
        format!("0x{}", encode_hex(self))
    }
}
