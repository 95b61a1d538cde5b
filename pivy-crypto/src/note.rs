//! Encrypted payment notes.
//!
//! A payer can attach a short message to a payment, encrypted so that only
//! the holder of the meta-view private key can read it. The symmetric key is
//! the ECDH shared key between the payment's ephemeral key and the
//! receiver's meta-view key, so no extra key material crosses the wire.

use rand::{CryptoRng, RngCore};

use pivy_keys::{shared_key, StealthPrivate, StealthPublic};

use crate::{cipher, CryptoError};

/// Encrypt a note for the receiver of a payment (payer side).
///
/// # Arguments
/// * `note` - The message text
/// * `eph_private` - The payment's ephemeral private key
/// * `view_public` - The receiver's public meta-view key
///
/// # Returns
/// The raw `nonce || ciphertext` blob published alongside the payment.
pub fn encrypt_note(
    note: &str,
    eph_private: &StealthPrivate,
    view_public: &StealthPublic,
) -> Result<Vec<u8>, CryptoError> {
    let key = shared_key(eph_private, view_public)?;
    Ok(cipher::encrypt(&key, note.as_bytes()))
}

/// Encrypt a note with a caller-supplied RNG for the nonce.
pub fn encrypt_note_with_rng(
    note: &str,
    eph_private: &StealthPrivate,
    view_public: &StealthPublic,
    rng: &mut (impl RngCore + CryptoRng),
) -> Result<Vec<u8>, CryptoError> {
    let key = shared_key(eph_private, view_public)?;
    Ok(cipher::encrypt_with_rng(&key, note.as_bytes(), rng))
}

/// Decrypt a note blob (receiver side).
///
/// Returns the raw decrypted bytes. The cipher carries no authentication
/// tag, so a wrong key or tampered blob yields garbage rather than an
/// error; callers validate (e.g. as UTF-8) at a higher layer.
pub fn decrypt_note(
    blob: &[u8],
    view_private: &StealthPrivate,
    eph_public: &StealthPublic,
) -> Result<Vec<u8>, CryptoError> {
    let key = shared_key(view_private, eph_public)?;
    cipher::decrypt(&key, blob)
}
