//! Error types for key operations.

use thiserror::Error;

/// Errors that can occur during key operations.
#[derive(Debug, Error)]
pub enum KeyError {
    /// The key material is malformed (bad encoding, wrong length).
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// The bytes do not decode to a point on secp256k1.
    #[error("Invalid point: not on curve")]
    InvalidPoint,

    /// The scalar is zero or not below the curve order.
    #[error("Invalid scalar: {0}")]
    InvalidScalar(String),

    /// A stealth derivation produced a degenerate result.
    ///
    /// This has negligible probability for honest inputs; callers should
    /// regenerate the ephemeral key and retry.
    #[error("Derivation failed: {0}")]
    DerivationFailed(String),

    /// Address encoding failed.
    #[error("Address error: {0}")]
    Address(#[from] pivy_address::AddressError),
}
