//! Base58 encoding and decoding.
//!
//! Uses the Bitcoin alphabet, which drops 0, O, I and l to reduce visual
//! ambiguity. Integrity checking is left to the caller; public keys carry
//! their own checksum inside the encoded bytes.

use crate::KeyError;

/// Encode a byte slice to a Base58 string.
///
/// Leading zero bytes are encoded as leading '1' characters.
///
/// # Arguments
/// * `data` - The bytes to encode.
///
/// # Returns
/// A Base58-encoded string.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data).with_alphabet(bs58::Alphabet::BITCOIN).into_string()
}

/// Decode a Base58 string to a byte vector.
///
/// # Arguments
/// * `s` - The Base58 string to decode.
///
/// # Returns
/// `Ok(Vec<u8>)` on success, or `KeyError::InvalidBase58` for characters
/// outside the alphabet.
pub fn decode(s: &str) -> Result<Vec<u8>, KeyError> {
    bs58::decode(s)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|e| KeyError::InvalidBase58(e.to_string()))
}
