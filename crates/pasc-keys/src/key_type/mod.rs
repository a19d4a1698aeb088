//! Registry of the elliptic curves PascalCoin accounts can be keyed on.
//!
//! Each curve is identified on the wire by its OpenSSL NID, carried as a
//! 16-bit code. Only the four codes below are registered; anything else is
//! rejected at construction rather than mapped to a default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::KeyError;

/// Code for secp256k1 keys.
pub const SECP256K1_CODE: u16 = 714;

/// Code for NIST P-384 (secp384r1) keys.
pub const SECP384R1_CODE: u16 = 715;

/// Code for NIST P-521 (secp521r1) keys.
pub const SECP521R1_CODE: u16 = 716;

/// Code for sect283k1 keys.
pub const SECT283K1_CODE: u16 = 729;

/// A registered key type.
///
/// Serializes as its numeric code so it can sit directly in the node's
/// `ec_nid` JSON field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum KeyType {
    /// secp256k1 (code 714).
    Secp256k1,
    /// NIST P-384 (code 715).
    Secp384r1,
    /// NIST P-521 (code 716).
    Secp521r1,
    /// sect283k1 (code 729). Registered, but has no curve arithmetic here.
    Sect283k1,
}

impl KeyType {
    /// Every registered key type, in code order.
    pub const ALL: [KeyType; 4] = [
        KeyType::Secp256k1,
        KeyType::Secp384r1,
        KeyType::Secp521r1,
        KeyType::Sect283k1,
    ];

    /// Check whether a raw code names a registered key type.
    ///
    /// # Arguments
    /// * `code` - The numeric key type code.
    ///
    /// # Returns
    /// `true` iff `code` is one of 714, 715, 716 or 729.
    pub fn is_valid(code: i32) -> bool {
        Self::ALL.iter().any(|kt| i32::from(kt.code()) == code)
    }

    /// Build a key type from its raw code.
    ///
    /// # Arguments
    /// * `code` - The numeric key type code.
    ///
    /// # Returns
    /// The matching `KeyType`, or `KeyError::InvalidKeyType` carrying the code.
    pub fn from_code(code: i32) -> Result<Self, KeyError> {
        Self::ALL
            .into_iter()
            .find(|kt| i32::from(kt.code()) == code)
            .ok_or(KeyError::InvalidKeyType(code))
    }

    /// The wire code of this key type.
    pub fn code(self) -> u16 {
        match self {
            KeyType::Secp256k1 => SECP256K1_CODE,
            KeyType::Secp384r1 => SECP384R1_CODE,
            KeyType::Secp521r1 => SECP521R1_CODE,
            KeyType::Sect283k1 => SECT283K1_CODE,
        }
    }

    /// The standard name of the curve this key type selects.
    pub fn name(self) -> &'static str {
        match self {
            KeyType::Secp256k1 => "secp256k1",
            KeyType::Secp384r1 => "secp384r1",
            KeyType::Secp521r1 => "secp521r1",
            KeyType::Sect283k1 => "sect283k1",
        }
    }

    /// Resolve the curve parameters for this key type.
    ///
    /// # Returns
    /// The `Curve`, or `KeyError::UnsupportedCurve` for sect283k1.
    pub fn curve(self) -> Result<Curve, KeyError> {
        match self {
            KeyType::Secp256k1 => Ok(Curve::Secp256k1),
            KeyType::Secp384r1 => Ok(Curve::Secp384r1),
            KeyType::Secp521r1 => Ok(Curve::Secp521r1),
            KeyType::Sect283k1 => Err(KeyError::UnsupportedCurve(self.name())),
        }
    }
}

impl TryFrom<i32> for KeyType {
    type Error = KeyError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        KeyType::from_code(code)
    }
}

impl From<KeyType> for i32 {
    fn from(kt: KeyType) -> Self {
        i32::from(kt.code())
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for KeyType {
    type Err = KeyError;

    /// Parse a curve name (case-insensitive) or a decimal code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(kt) = Self::ALL
            .into_iter()
            .find(|kt| kt.name().eq_ignore_ascii_case(s))
        {
            return Ok(kt);
        }
        match s.parse::<i32>() {
            Ok(code) => KeyType::from_code(code),
            Err(_) => Err(KeyError::InvalidKeyTypeName(s.to_string())),
        }
    }
}
