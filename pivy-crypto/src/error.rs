//! Error types for encryption operations.

use thiserror::Error;

/// Errors that can occur during encryption and decryption.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The decrypted blob failed its integrity check.
    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    /// The ciphertext is shorter than the nonce prefix.
    #[error("Ciphertext too short: need at least {min} bytes, got {actual}")]
    CiphertextTooShort { min: usize, actual: usize },

    /// A blob exceeds an on-chain field cap.
    ///
    /// Advisory: the caps are enforced by the announcement module, not here.
    #[error("Payload too large: {actual} bytes exceeds the {limit}-byte on-chain cap")]
    PayloadTooLarge { limit: usize, actual: usize },

    /// The blob is not valid Base58.
    #[error("Invalid Base58 encoding: {0}")]
    InvalidBase58(String),

    /// Key derivation failed.
    #[error("Key error: {0}")]
    Key(#[from] pivy_keys::KeyError),
}
