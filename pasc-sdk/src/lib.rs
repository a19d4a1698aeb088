#![deny(missing_docs)]

//! PascalCoin SDK.
//!
//! Re-exports the SDK components for convenient single-crate usage.

pub use pasc_keys as keys;
