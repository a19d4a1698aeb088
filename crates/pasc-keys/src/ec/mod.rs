//! Key pairs and public keys over the registered curves.
//!
//! Provides random generation, deterministic derivation from raw scalars,
//! and the checksummed base-58 / hex public key encoding.

pub mod key_pair;
pub mod public_key;

pub use key_pair::{derive_key_pair, generate_key_pair, KeyPair};
pub use public_key::PublicKey;
