//! Hash primitives and the public key checksum.
//!
//! The checksum is the first four bytes of SHA-256 over the canonical public
//! key body, read as a little-endian `u32`.

use sha2::{Digest, Sha256};

/// Length in bytes of the checksum appended to an encoded public key.
pub const CHECKSUM_LEN: usize = 4;

/// Compute SHA-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SHA-256 digest.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the 4-byte integrity code of a serialized public key body.
///
/// # Arguments
/// * `body` - The canonical public key body.
///
/// # Returns
/// The first four bytes of `sha256(body)` as a little-endian `u32`.
/// Writing it back with `to_le_bytes` reproduces those four digest bytes.
pub fn checksum(body: &[u8]) -> u32 {
    let digest = sha256(body);
    let value = u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]]);
    log::trace!("checksum over {} bytes: {:08x}", body.len(), value);
    value
}
