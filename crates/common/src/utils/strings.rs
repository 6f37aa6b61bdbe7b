use eyre::{bail, Result};
use std::fmt::Write;

/// Decodes a hex string into a vector of bytes. The `0x` prefix is optional, and an odd number of
/// digits is treated as if it were left-padded with a single `0`.
///
/// ```
/// use storagoor_common::utils::strings::decode_hex;
///
/// let hex = "48656c6c6f20576f726c64"; // "Hello World" in hex
/// let result = decode_hex(hex).expect("should decode hex");
/// assert_eq!(result, vec![72, 101, 108, 108, 111, 32, 87, 111, 114, 108, 100]);
///
/// assert_eq!(decode_hex("0xabc").expect("should decode hex"), vec![0x0a, 0xbc]);
/// ```
pub fn decode_hex(s: &str) -> Result<Vec<u8>> {
    let s = s.trim();
    let s = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);

    if !s.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!("invalid hex string: {}", s);
    }

    let normalized = if s.len() % 2 == 1 { format!("0{s}") } else { s.to_string() };
    (0..normalized.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&normalized[i..i + 2], 16))
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|_| eyre::eyre!("invalid hex string: {}", s))
}

/// Encodes a vector of bytes into a hex string
///
/// ```
/// use storagoor_common::utils::strings::encode_hex;
///
/// let bytes = vec![72, 101, 108, 108, 111, 32, 87, 111, 114, 108, 100];
/// let result = encode_hex(&bytes);
/// assert_eq!(result, "48656c6c6f20576f726c64");
/// ```
pub fn encode_hex(s: &[u8]) -> String {
    s.iter().fold(String::new(), |mut acc, b| {
        write!(acc, "{b:02x}").expect("unable to write");
        acc
    })
}

/// Keeps only printable ASCII characters (0x20 through 0x7e).
///
/// ```
/// use storagoor_common::utils::strings::printable_ascii;
///
/// assert_eq!(printable_ascii("\0\0hello\u{fffd}\n"), "hello");
/// ```
pub fn printable_ascii(s: &str) -> String {
    s.chars().filter(|c| (' '..='~').contains(c)).collect()
}
