//! Keystream cipher for announcement payloads.
//!
//! Blobs are a 24-byte random nonce followed by the plaintext XORed with the
//! 32-byte key, repeating. The keystream does not consume the nonce; it gives
//! each ciphertext a distinct prefix and reserves layout room for a future
//! AEAD in the same slot. The construction is therefore confidentiality-only:
//! it has no authentication tag, and callers needing integrity must layer it
//! themselves (the ephemeral-key blob does, by redundancy).

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::CryptoError;

/// Length of the random nonce prefix.
pub const NONCE_LEN: usize = 24;

/// Encrypt a plaintext under a 32-byte symmetric key.
///
/// Returns `nonce || ciphertext`.
pub fn encrypt(key: &[u8; 32], plaintext: &[u8]) -> Vec<u8> {
    encrypt_with_rng(key, plaintext, &mut OsRng)
}

/// Encrypt with a caller-supplied RNG for the nonce.
pub fn encrypt_with_rng(
    key: &[u8; 32],
    plaintext: &[u8],
    rng: &mut (impl RngCore + CryptoRng),
) -> Vec<u8> {
    let mut nonce = [0u8; NONCE_LEN];
    rng.fill_bytes(&mut nonce);

    let mut blob = Vec::with_capacity(NONCE_LEN + plaintext.len());
    blob.extend_from_slice(&nonce);
    blob.extend(keystream_xor(key, plaintext));
    blob
}

/// Decrypt a `nonce || ciphertext` blob.
///
/// The nonce is stripped and otherwise ignored. Blobs shorter than the nonce
/// are rejected; beyond that, any key yields *some* output, so integrity is
/// the caller's concern.
pub fn decrypt(key: &[u8; 32], blob: &[u8]) -> Result<Vec<u8>, CryptoError> {
    if blob.len() < NONCE_LEN {
        return Err(CryptoError::CiphertextTooShort {
            min: NONCE_LEN,
            actual: blob.len(),
        });
    }

    Ok(keystream_xor(key, &blob[NONCE_LEN..]))
}

/// XOR data with the key repeated every 32 bytes. Its own inverse.
fn keystream_xor(key: &[u8; 32], data: &[u8]) -> Vec<u8> {
    data.iter()
        .enumerate()
        .map(|(i, byte)| byte ^ key[i % key.len()])
        .collect()
}
