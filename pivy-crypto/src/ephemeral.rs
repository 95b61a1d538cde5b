//! Encrypted ephemeral key blobs.
//!
//! The payer encrypts the payment's ephemeral private key to the receiver's
//! meta-view key so the receiver can later re-run every derivation for the
//! payment. The plaintext is `eph_priv(32) || eph_pub(33)`; on decryption
//! the public half is recomputed from the recovered private half and any
//! mismatch with the trailing bytes rejects the blob. That redundancy is the
//! integrity check; there is no MAC.

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use pivy_keys::{shared_key, EphemeralKey, StealthPrivate, StealthPublic};

use crate::{cipher, CryptoError};

/// Plaintext length: 32-byte private key plus 33-byte compressed public key.
const BLOB_PLAINTEXT_LEN: usize = 65;

/// Encrypt an ephemeral key for the receiver (payer side).
///
/// Returns the Base58 wire form of `nonce || ciphertext`.
pub fn encrypt_ephemeral_key(
    eph: &EphemeralKey,
    view_public: &StealthPublic,
) -> Result<String, CryptoError> {
    encrypt_ephemeral_key_with_rng(eph, view_public, &mut rand::rngs::OsRng)
}

/// Encrypt an ephemeral key with a caller-supplied RNG for the nonce.
pub fn encrypt_ephemeral_key_with_rng(
    eph: &EphemeralKey,
    view_public: &StealthPublic,
    rng: &mut (impl RngCore + CryptoRng),
) -> Result<String, CryptoError> {
    let key = shared_key(&eph.private_key, view_public)?;

    let mut plaintext = Vec::with_capacity(BLOB_PLAINTEXT_LEN);
    plaintext.extend_from_slice(&eph.private_key.to_bytes());
    plaintext.extend_from_slice(eph.public_key.as_bytes());

    let blob = cipher::encrypt_with_rng(&key, &plaintext, rng);
    plaintext.zeroize();

    Ok(bs58::encode(blob).into_string())
}

/// Decrypt an ephemeral key blob (receiver side).
///
/// # Arguments
/// * `blob_b58` - The Base58 blob from the payment announcement
/// * `view_private` - The receiver's meta-view private key
/// * `eph_public` - The announcement's published ephemeral public key
///
/// # Errors
/// `DecryptionFailed` if the plaintext has the wrong length, the recovered
/// private key is invalid, or its public key does not match the trailing 33
/// bytes. Any single-bit corruption of the ciphertext trips one of these.
pub fn decrypt_ephemeral_key(
    blob_b58: &str,
    view_private: &StealthPrivate,
    eph_public: &StealthPublic,
) -> Result<StealthPrivate, CryptoError> {
    let blob = bs58::decode(blob_b58)
        .into_vec()
        .map_err(|e| CryptoError::InvalidBase58(e.to_string()))?;

    let key = shared_key(view_private, eph_public)?;
    let mut plaintext = cipher::decrypt(&key, &blob)?;

    if plaintext.len() != BLOB_PLAINTEXT_LEN {
        plaintext.zeroize();
        return Err(CryptoError::DecryptionFailed(format!(
            "expected {} plaintext bytes, got {}",
            BLOB_PLAINTEXT_LEN,
            plaintext.len()
        )));
    }

    let recovered = StealthPrivate::from_bytes(&plaintext[..32]).map_err(|_| {
        CryptoError::DecryptionFailed("recovered private key is not a valid scalar".to_string())
    });
    let recovered = match recovered {
        Ok(key) => key,
        Err(e) => {
            plaintext.zeroize();
            return Err(e);
        }
    };

    let matches = recovered.public().as_bytes()[..] == plaintext[32..];
    plaintext.zeroize();

    if !matches {
        return Err(CryptoError::DecryptionFailed(
            "recomputed public key does not match the blob".to_string(),
        ));
    }

    Ok(recovered)
}
