//! Public key with its canonical, checksummed encoding.
//!
//! Body layout, fixed for interoperability:
//!
//! ```text
//! offset  size  field
//! 0       2     key type code, u16 little-endian
//! 2       2     len(X), u16 little-endian
//! 4       w     X, big-endian, w = curve coordinate width
//! 4+w     2     len(Y), u16 little-endian
//! 6+w     w     Y, big-endian
//! ```
//!
//! The encoded key is `body || checksum(body).to_le_bytes()`. Its base-58
//! and hex renderings are computed once, when the key is built.

use std::fmt;

use crate::curve::CurvePoint;
use crate::hash::{checksum, CHECKSUM_LEN};
use crate::key_type::KeyType;
use crate::util::{KeyReader, KeyWriter};
use crate::{base58, KeyError};

/// A public key for one of the registered curves.
///
/// The coordinates are validated against the curve before the cached
/// encodings are derived, and no field is mutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey {
    key_type: KeyType,
    x: Vec<u8>,
    y: Vec<u8>,
    b58: String,
    hex: String,
}

impl PublicKey {
    /// Build a public key from a key type and a curve point.
    ///
    /// # Arguments
    /// * `key_type` - The registered key type; its curve must be implemented.
    /// * `point` - Affine coordinates, each exactly the curve's width.
    ///
    /// # Returns
    /// `Ok(PublicKey)` with both encodings cached, or
    /// `KeyError::UnsupportedCurve`, `KeyError::MalformedPoint` or
    /// `KeyError::PointNotOnCurve`.
    pub fn new(key_type: KeyType, point: CurvePoint) -> Result<Self, KeyError> {
        let curve = key_type.curve()?;
        curve.check_point(&point)?;

        let encoded = encode(key_type, &point.x, &point.y);
        let b58 = base58::encode(&encoded);
        let hex = hex::encode_upper(&encoded);

        Ok(PublicKey {
            key_type,
            x: point.x,
            y: point.y,
            b58,
            hex,
        })
    }

    /// Decode a public key from its base-58 form.
    ///
    /// # Returns
    /// `Ok(PublicKey)` when the text, checksum and body are all valid.
    pub fn from_b58(s: &str) -> Result<Self, KeyError> {
        let bytes = base58::decode(s)?;
        Self::from_encoded(&bytes)
    }

    /// Decode a public key from its hex form (either case).
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(s)?;
        Self::from_encoded(&bytes)
    }

    /// Decode a public key from encoded bytes (`body || checksum`).
    ///
    /// The trailing checksum is verified before the body is parsed.
    ///
    /// # Arguments
    /// * `bytes` - The encoded public key.
    ///
    /// # Returns
    /// `Ok(PublicKey)` on success; `KeyError::ChecksumMismatch` if the
    /// trailing four bytes do not match the body; a body parsing error
    /// otherwise.
    pub fn from_encoded(bytes: &[u8]) -> Result<Self, KeyError> {
        let (body, trailer) = split_checksum(bytes)?;
        let expected = checksum(body);
        let found = u32::from_le_bytes([trailer[0], trailer[1], trailer[2], trailer[3]]);
        if expected != found {
            log::debug!("rejecting encoded public key: checksum mismatch");
            return Err(KeyError::ChecksumMismatch { expected, found });
        }
        Self::from_body(body)
    }

    /// Parse a canonical body (no checksum).
    ///
    /// # Returns
    /// `Ok(PublicKey)`, or `KeyError::InvalidKeyType`, `KeyError::UnsupportedCurve`,
    /// `KeyError::MalformedPoint`, `KeyError::UnexpectedEof`,
    /// `KeyError::TrailingBytes` or `KeyError::PointNotOnCurve`.
    pub fn from_body(body: &[u8]) -> Result<Self, KeyError> {
        let mut reader = KeyReader::new(body);
        let key_type = KeyType::from_code(i32::from(reader.read_u16_le()?))?;
        let x = reader.read_prefixed()?.to_vec();
        let y = reader.read_prefixed()?.to_vec();
        if reader.remaining() != 0 {
            return Err(KeyError::TrailingBytes(reader.remaining()));
        }
        Self::new(key_type, CurvePoint { x, y })
    }

    /// The key type this key belongs to.
    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    /// X coordinate, big-endian.
    pub fn x(&self) -> &[u8] {
        &self.x
    }

    /// Y coordinate, big-endian.
    pub fn y(&self) -> &[u8] {
        &self.y
    }

    /// The point as an owned `CurvePoint`.
    pub fn point(&self) -> CurvePoint {
        CurvePoint {
            x: self.x.clone(),
            y: self.y.clone(),
        }
    }

    /// Cached base-58 encoding of `body || checksum`.
    pub fn b58(&self) -> &str {
        &self.b58
    }

    /// Cached upper-case hex encoding of `body || checksum`.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// The canonical body bytes.
    pub fn body(&self) -> Vec<u8> {
        encode_body(self.key_type, &self.x, &self.y)
    }

    /// The encoded bytes, `body || checksum`.
    pub fn encoded(&self) -> Vec<u8> {
        encode(self.key_type, &self.x, &self.y)
    }

    /// Checksum of the canonical body.
    pub fn checksum(&self) -> u32 {
        checksum(&self.body())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.b58)
    }
}

/// Serialize the canonical body for (key type, X, Y).
///
/// Coordinates are written as given; width checks belong to
/// [`PublicKey::new`].
pub fn encode_body(key_type: KeyType, x: &[u8], y: &[u8]) -> Vec<u8> {
    let mut writer = KeyWriter::with_capacity(6 + x.len() + y.len() + CHECKSUM_LEN);
    writer.write_u16_le(key_type.code());
    writer.write_prefixed(x);
    writer.write_prefixed(y);
    writer.into_bytes()
}

/// Split encoded bytes into body and 4-byte checksum trailer.
pub fn split_checksum(bytes: &[u8]) -> Result<(&[u8], &[u8]), KeyError> {
    if bytes.len() < CHECKSUM_LEN {
        return Err(KeyError::UnexpectedEof);
    }
    Ok(bytes.split_at(bytes.len() - CHECKSUM_LEN))
}

fn encode(key_type: KeyType, x: &[u8], y: &[u8]) -> Vec<u8> {
    let mut bytes = encode_body(key_type, x, y);
    let sum = checksum(&bytes);
    bytes.extend_from_slice(&sum.to_le_bytes());
    bytes
}
