//! PascalCoin key primitives.
//!
//! This crate provides the key material a PascalCoin RPC client hands to the
//! node:
//! - Key type registry (secp256k1, secp384r1, secp521r1, sect283k1)
//! - Curve resolution and scalar base-point multiplication
//! - Random key pair generation and deterministic derivation
//! - Canonical public key body with SHA-256 checksum
//! - Base-58 and hex public key encodings
//! - The node's public key JSON object

pub mod key_type;
pub mod curve;
pub mod hash;
pub mod util;
pub mod base58;
pub mod ec;
pub mod models;

mod error;
pub use error::KeyError;

pub use curve::{resolve_curve, Curve, CurvePoint};
pub use ec::{derive_key_pair, generate_key_pair, KeyPair, PublicKey};
pub use hash::checksum;
pub use key_type::KeyType;
