//! Key pair generation and derivation.
//!
//! A `KeyPair` owns its private scalar bytes exclusively and zeroizes them
//! on drop. The public half is built once, through [`PublicKey::new`].

use std::fmt;

use zeroize::Zeroizing;

use crate::ec::public_key::PublicKey;
use crate::key_type::KeyType;
use crate::KeyError;

/// A private scalar and its public key.
#[derive(Clone)]
pub struct KeyPair {
    private_key: Zeroizing<Vec<u8>>,
    public_key: PublicKey,
}

impl KeyPair {
    /// Generate a random key pair on the curve of `key_type`.
    ///
    /// The scalar is drawn uniformly from `[1, n)` using the operating
    /// system's CSPRNG; no state is shared between calls.
    ///
    /// # Arguments
    /// * `key_type` - The key type to generate for.
    ///
    /// # Returns
    /// `Ok(KeyPair)` whose private key is the full-width big-endian scalar,
    /// or the curve resolution error unchanged.
    pub fn generate(key_type: KeyType) -> Result<Self, KeyError> {
        let curve = key_type.curve()?;
        let (private_key, point) = curve.generate()?;
        let public_key = PublicKey::new(key_type, point)?;
        log::debug!("generated {} key pair", key_type);
        Ok(KeyPair {
            private_key,
            public_key,
        })
    }

    /// Derive the key pair for a given private scalar.
    ///
    /// The bytes are the big-endian scalar itself: no hashing, no reduction.
    /// They are stored verbatim.
    ///
    /// # Arguments
    /// * `private_key` - Big-endian scalar bytes of any length whose value
    ///   fits the curve's field width.
    /// * `key_type` - The key type to derive for.
    ///
    /// # Returns
    /// `Ok(KeyPair)`, the curve resolution error unchanged, or
    /// `KeyError::InvalidPrivateKey` for a zero or out-of-range scalar.
    pub fn derive(private_key: &[u8], key_type: KeyType) -> Result<Self, KeyError> {
        let curve = key_type.curve()?;
        let point = curve.mul_base(private_key)?;
        let public_key = PublicKey::new(key_type, point)?;
        log::debug!("derived {} key pair", key_type);
        Ok(KeyPair {
            private_key: Zeroizing::new(private_key.to_vec()),
            public_key,
        })
    }

    /// Derive the key pair for a hex-encoded private scalar.
    pub fn from_private_hex(hex_str: &str, key_type: KeyType) -> Result<Self, KeyError> {
        if hex_str.is_empty() {
            return Err(KeyError::InvalidPrivateKey(
                "private key hex is empty".to_string(),
            ));
        }
        let bytes = Zeroizing::new(hex::decode(hex_str)?);
        Self::derive(&bytes, key_type)
    }

    /// The key type of this pair.
    pub fn key_type(&self) -> KeyType {
        self.public_key.key_type()
    }

    /// The private scalar bytes, exactly as generated or supplied.
    pub fn private_key(&self) -> &[u8] {
        &self.private_key
    }

    /// The private scalar as lower-case hex.
    pub fn private_key_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(&*self.private_key))
    }

    /// The public half.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
}

impl PartialEq for KeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.private_key == other.private_key && self.public_key == other.public_key
    }
}

impl Eq for KeyPair {}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("private_key", &"<redacted>")
            .field("public_key", &self.public_key)
            .finish()
    }
}

/// Generate a random key pair. See [`KeyPair::generate`].
pub fn generate_key_pair(key_type: KeyType) -> Result<KeyPair, KeyError> {
    KeyPair::generate(key_type)
}

/// Derive a key pair from raw private key bytes. See [`KeyPair::derive`].
pub fn derive_key_pair(private_key: &[u8], key_type: KeyType) -> Result<KeyPair, KeyError> {
    KeyPair::derive(private_key, key_type)
}
