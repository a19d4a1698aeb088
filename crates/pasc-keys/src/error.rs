/// Unified error type for key type, curve, key pair and encoding operations.
///
/// Every fallible function in this crate returns `KeyError`; nothing is
/// logged and dropped, and none of these conditions panic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("invalid key type: {0}")]
    InvalidKeyType(i32),

    #[error("invalid key type name: {0}")]
    InvalidKeyTypeName(String),

    #[error("unsupported curve: {0}")]
    UnsupportedCurve(&'static str),

    #[error("unknown key type {0}")]
    UnknownKeyType(i32),

    #[error("malformed point: expected {expected}-byte coordinates, got {got}")]
    MalformedPoint { expected: usize, got: usize },

    #[error("point not on curve")]
    PointNotOnCurve,

    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("checksum mismatch: expected {expected:08x}, found {found:08x}")]
    ChecksumMismatch { expected: u32, found: u32 },

    #[error("{0} does not match the key coordinates")]
    EncodingMismatch(&'static str),

    #[error("invalid base58: {0}")]
    InvalidBase58(String),

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("unexpected end of data")]
    UnexpectedEof,

    #[error("{0} trailing bytes after public key body")]
    TrailingBytes(usize),
}

impl From<hex::FromHexError> for KeyError {
    fn from(e: hex::FromHexError) -> Self {
        KeyError::InvalidHex(e.to_string())
    }
}
