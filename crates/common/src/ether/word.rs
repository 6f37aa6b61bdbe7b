use alloy::primitives::{B256, U256};

use crate::{constants::WORD_SIZE, error::Error};

/// A 32-byte value, the atomic unit of EVM storage. Slot identifiers and stored values are both
/// words, interpreted big-endian when read as integers.
pub type Word = B256;

/// Left-pad a big-endian byte string into a [`Word`]. Inputs longer than 32 bytes are rejected.
///
/// ```
/// use storagoor_common::ether::word::left_pad;
///
/// let word = left_pad(&[0xde, 0xad]).expect("should pad");
/// assert_eq!(word[30..], [0xde, 0xad]);
/// assert!(word[..30].iter().all(|b| *b == 0));
/// ```
pub fn left_pad(bytes: &[u8]) -> Result<Word, Error> {
    if bytes.len() > WORD_SIZE {
        return Err(Error::Validation(format!(
            "value is {} bytes long, which does not fit in a {WORD_SIZE} byte word",
            bytes.len()
        )));
    }

    let mut word = [0u8; WORD_SIZE];
    word[WORD_SIZE - bytes.len()..].copy_from_slice(bytes);
    Ok(B256::from(word))
}

/// Encode an unsigned integer as a big-endian [`Word`].
///
/// ```
/// use alloy::primitives::U256;
/// use storagoor_common::ether::word::word_from_u256;
///
/// let word = word_from_u256(U256::from(3));
/// assert_eq!(word[31], 3);
/// ```
pub fn word_from_u256(value: U256) -> Word {
    B256::from(value.to_be_bytes::<WORD_SIZE>())
}

/// Interpret a [`Word`] as a big-endian unsigned 256-bit integer.
pub fn word_to_u256(word: &Word) -> U256 {
    U256::from_be_bytes(word.0)
}
