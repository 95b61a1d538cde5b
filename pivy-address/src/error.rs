//! Error types for address operations.

use thiserror::Error;

/// Errors that can occur during address operations.
#[derive(Debug, Error)]
pub enum AddressError {
    /// The input is not valid hex.
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(String),

    /// The input is not valid Base58.
    #[error("Invalid Base58 encoding: {0}")]
    InvalidBase58(String),

    /// A key or address has an invalid length.
    #[error("Invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The public key bytes do not decode to a point on secp256k1.
    #[error("Invalid public key: not on curve")]
    InvalidPublicKey,

    /// The input shape is not recognized as a key or address.
    #[error("Unrecognized format: {0}")]
    UnrecognizedFormat(String),
}
