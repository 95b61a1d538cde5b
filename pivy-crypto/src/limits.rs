//! On-chain announcement field caps.
//!
//! The announcement module enforces these sizes when a payment is published;
//! this library only advises, so a payer can learn a note is oversized
//! before paying gas to find out.

use crate::CryptoError;

/// Exact length of the label field.
pub const LABEL_LEN: usize = pivy_keys::LABEL_LEN;

/// Exact length of the published ephemeral public key.
pub const EPH_PUBKEY_LEN: usize = 33;

/// Maximum length of the public message field, in UTF-8 bytes.
pub const PAYLOAD_MAX_LEN: usize = 121;

/// Maximum length of the encrypted note blob.
pub const NOTE_MAX_LEN: usize = 256;

/// Check that an encrypted note blob fits the on-chain field.
pub fn check_note_len(blob: &[u8]) -> Result<(), CryptoError> {
    if blob.len() > NOTE_MAX_LEN {
        return Err(CryptoError::PayloadTooLarge {
            limit: NOTE_MAX_LEN,
            actual: blob.len(),
        });
    }
    Ok(())
}

/// Check that a public message fits the on-chain field.
pub fn check_payload_len(payload: &str) -> Result<(), CryptoError> {
    if payload.len() > PAYLOAD_MAX_LEN {
        return Err(CryptoError::PayloadTooLarge {
            limit: PAYLOAD_MAX_LEN,
            actual: payload.len(),
        });
    }
    Ok(())
}
