use alloy::primitives::Address;

use crate::{constants::ADDRESS_REGEX, error::Error};

/// Returns true if `s` is a syntactically valid, `0x`-prefixed, 20-byte address.
///
/// All-lowercase addresses are accepted as-is. Any other casing must carry a valid EIP-55
/// checksum.
///
/// ```
/// use storagoor_common::ether::address::is_address;
///
/// assert!(is_address("0xd8da6bf26964af9d7eed9e03e53415d37aa96045"));
/// assert!(is_address("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"));
/// assert!(!is_address("0xd8DA6BF26964aF9D7eEd9e03E53415D37aA96045"));
/// assert!(!is_address("0x1234"));
/// ```
pub fn is_address(s: &str) -> bool {
    if !ADDRESS_REGEX.is_match(s).unwrap_or(false) {
        return false;
    }

    if s.to_lowercase() == s {
        return true;
    }

    Address::parse_checksummed(s, None).is_ok()
}

/// Parse a user supplied address, rejecting anything [`is_address`] would not accept.
///
/// ```
/// use storagoor_common::ether::address::parse_address;
///
/// let address = parse_address(" 0x000000000000000000000000000000000000dEaD ").expect("valid");
/// assert_eq!(address[19], 0xad);
/// ```
pub fn parse_address(s: &str) -> Result<Address, Error> {
    let s = s.trim();
    if !is_address(s) {
        return Err(Error::Validation(format!("invalid address '{s}'")));
    }

    s.parse::<Address>().map_err(|e| Error::Validation(format!("invalid address '{s}': {e}")))
}
