//! JSON model of the node's "Public Key object".
//!
//! This is the shape public keys take as RPC parameters and results. The
//! coordinates travel as hex; the key type travels as its numeric code.

use serde::{Deserialize, Serialize};

use crate::curve::CurvePoint;
use crate::ec::PublicKey;
use crate::key_type::KeyType;
use crate::KeyError;

/// A public key as exchanged with the node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyInfo {
    /// Wallet label for the key.
    #[serde(default)]
    pub name: String,
    /// Hex encoding of the key.
    pub enc_pubkey: String,
    /// Whether the wallet holding this key can sign with it.
    #[serde(default)]
    pub can_use: bool,
    /// Base-58 encoding of the key.
    pub b58_pubkey: String,
    /// Key type code.
    pub ec_nid: i32,
    /// X coordinate, hex.
    pub x: String,
    /// Y coordinate, hex.
    pub y: String,
}

impl PublicKeyInfo {
    /// Describe a public key under the given wallet label.
    pub fn from_public_key(key: &PublicKey, name: impl Into<String>, can_use: bool) -> Self {
        PublicKeyInfo {
            name: name.into(),
            enc_pubkey: key.hex().to_string(),
            can_use,
            b58_pubkey: key.b58().to_string(),
            ec_nid: i32::from(key.key_type()),
            x: hex::encode_upper(key.x()),
            y: hex::encode_upper(key.y()),
        }
    }

    /// Rebuild the public key from `ec_nid`, `x` and `y`.
    ///
    /// The string encodings are recomputed, not trusted; use
    /// [`PublicKeyInfo::verify`] to check the transmitted ones.
    ///
    /// # Returns
    /// `Ok(PublicKey)`, or the registry, hex or point validation error.
    pub fn to_public_key(&self) -> Result<PublicKey, KeyError> {
        let key_type = KeyType::from_code(self.ec_nid)?;
        let point = CurvePoint {
            x: hex::decode(&self.x)?,
            y: hex::decode(&self.y)?,
        };
        PublicKey::new(key_type, point)
    }

    /// Check that the transmitted encodings match the coordinates.
    ///
    /// # Returns
    /// `Ok(PublicKey)` if `b58_pubkey` and `enc_pubkey` both decode to the
    /// key rebuilt from `ec_nid`, `x` and `y`.
    pub fn verify(&self) -> Result<PublicKey, KeyError> {
        let key = self.to_public_key()?;
        let from_b58 = PublicKey::from_b58(&self.b58_pubkey)?;
        let from_hex = PublicKey::from_hex(&self.enc_pubkey)?;
        if from_b58 != key {
            log::debug!("b58_pubkey disagrees with coordinates for {}", key.key_type());
            return Err(KeyError::EncodingMismatch("b58_pubkey"));
        }
        if from_hex != key {
            log::debug!("enc_pubkey disagrees with coordinates for {}", key.key_type());
            return Err(KeyError::EncodingMismatch("enc_pubkey"));
        }
        Ok(key)
    }
}

impl From<&PublicKey> for PublicKeyInfo {
    fn from(key: &PublicKey) -> Self {
        PublicKeyInfo::from_public_key(key, String::new(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ec::KeyPair;

    fn sample_key() -> PublicKey {
        let bytes: Vec<u8> = (1u8..=32).collect();
        KeyPair::derive(&bytes, KeyType::Secp256k1)
            .unwrap()
            .public_key()
            .clone()
    }

    /// Field names follow the node's JSON.
    #[test]
    fn test_json_field_names() {
        let key = sample_key();
        let info = PublicKeyInfo::from_public_key(&key, "savings", true);
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["name"], "savings");
        assert_eq!(value["can_use"], true);
        assert_eq!(value["ec_nid"], 714);
        assert_eq!(value["b58_pubkey"], key.b58());
        assert_eq!(value["enc_pubkey"], key.hex());
        assert_eq!(value["x"].as_str().unwrap().len(), 64);
    }

    #[test]
    fn test_round_trip_through_json() {
        let key = sample_key();
        let json = serde_json::to_string(&PublicKeyInfo::from(&key)).unwrap();
        let info: PublicKeyInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(info.to_public_key().unwrap(), key);
        assert_eq!(info.verify().unwrap(), key);
    }

    /// Optional fields default when the node omits them.
    #[test]
    fn test_missing_optional_fields() {
        let key = sample_key();
        let json = format!(
            r#"{{"enc_pubkey":"{}","b58_pubkey":"{}","ec_nid":714,"x":"{}","y":"{}"}}"#,
            key.hex(),
            key.b58(),
            hex::encode(key.x()),
            hex::encode(key.y())
        );
        let info: PublicKeyInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(info.name, "");
        assert!(!info.can_use);
        assert_eq!(info.verify().unwrap(), key);
    }

    #[test]
    fn test_unregistered_nid() {
        let mut info = PublicKeyInfo::from(&sample_key());
        info.ec_nid = 415;
        assert_eq!(info.to_public_key(), Err(KeyError::InvalidKeyType(415)));
    }

    /// A base-58 string for a different key fails verification.
    #[test]
    fn test_verify_detects_mismatched_encoding() {
        let mut info = PublicKeyInfo::from(&sample_key());
        let other_bytes: Vec<u8> = (2u8..=33).collect();
        let other = KeyPair::derive(&other_bytes, KeyType::Secp256k1).unwrap();
        info.b58_pubkey = other.public_key().b58().to_string();
        assert_eq!(info.verify(), Err(KeyError::EncodingMismatch("b58_pubkey")));
    }
}
