//! Stealth key derivation.

use k256::{ProjectivePoint, SecretKey};
use serde::{Deserialize, Serialize};

use pivy_address::AccountAddress;

use crate::shared_secret::derive_tweak;
use crate::{EphemeralKey, KeyError, MetaKeys, StealthPrivate, StealthPublic};

/// Payer-side result: the one-time key a payment should be sent to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StealthPaymentInfo {
    /// The stealth public key.
    pub stealth_public: StealthPublic,
    /// The Aptos account address controlled by that key.
    pub address: AccountAddress,
}

/// Receiver-side result: the full keypair controlling a stealth address.
pub struct StealthKeyPair {
    /// The stealth private key (spends the payment).
    pub private_key: StealthPrivate,
    /// The stealth public key.
    pub public_key: StealthPublic,
    /// The Aptos account address.
    pub address: AccountAddress,
}

impl std::fmt::Debug for StealthKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StealthKeyPair")
            .field("public_key", &self.public_key)
            .field("address", &self.address)
            .finish()
    }
}

/// Derive the stealth public key and address for a payment (payer side).
///
/// ```text
/// t = H(ECDH(e, V)_x) mod n
/// P = S + t*G
/// ```
/// Where:
/// - `e` = the payer's ephemeral private key
/// - `V` = the receiver's public meta-view key
/// - `S` = the receiver's public meta-spend key
///
/// Only the receiver's view private key can recognize `P`, and only the
/// spend private key can sign for it.
///
/// # Errors
/// `DerivationFailed` if the stealth point degenerates to the identity
/// (negligible probability; regenerate the ephemeral key).
pub fn derive_stealth_public(
    spend_public: &StealthPublic,
    view_public: &StealthPublic,
    eph_private: &StealthPrivate,
) -> Result<StealthPaymentInfo, KeyError> {
    let tweak = derive_tweak(eph_private, view_public)?;

    let stealth_point = spend_public.to_point()? + ProjectivePoint::GENERATOR * tweak;
    let stealth_key = k256::PublicKey::from_affine(stealth_point.to_affine())
        .map_err(|_| KeyError::DerivationFailed("stealth point is the identity".to_string()))?;

    let stealth_public = StealthPublic::from(stealth_key);
    let address = stealth_public.to_address()?;

    Ok(StealthPaymentInfo {
        stealth_public,
        address,
    })
}

/// Recompute a payment's stealth public key from the receiver's view.
///
/// ```text
/// P' = S + H(ECDH(v, E)_x)*G
/// ```
///
/// Needs only the view private key and the public spend key, so a scanner
/// can detect payments without spend authority. If `P'` matches a published
/// payment, the payment is ours.
pub fn derive_stealth_public_as_receiver(
    spend_public: &StealthPublic,
    view_private: &StealthPrivate,
    eph_public: &StealthPublic,
) -> Result<StealthPaymentInfo, KeyError> {
    let tweak = derive_tweak(view_private, eph_public)?;

    let stealth_point = spend_public.to_point()? + ProjectivePoint::GENERATOR * tweak;
    let stealth_key = k256::PublicKey::from_affine(stealth_point.to_affine())
        .map_err(|_| KeyError::DerivationFailed("stealth point is the identity".to_string()))?;

    let stealth_public = StealthPublic::from(stealth_key);
    let address = stealth_public.to_address()?;

    Ok(StealthPaymentInfo {
        stealth_public,
        address,
    })
}

/// Derive the full stealth keypair for a payment (receiver side).
///
/// ```text
/// t = H(ECDH(v, E)_x) mod n
/// k = (s + t) mod n
/// ```
/// Where:
/// - `v` = the receiver's meta-view private key
/// - `E` = the payer's published ephemeral public key
/// - `s` = the receiver's meta-spend private key
///
/// ECDH commutativity makes `t` equal on both sides, so `k*G` equals the
/// payer's stealth public key and both map to the same address.
///
/// # Errors
/// `DerivationFailed` if `s + t` reduces to zero (negligible probability).
pub fn derive_stealth_keypair(
    spend_private: &StealthPrivate,
    view_private: &StealthPrivate,
    eph_public: &StealthPublic,
) -> Result<StealthKeyPair, KeyError> {
    let tweak = derive_tweak(view_private, eph_public)?;

    let stealth_scalar = spend_private.as_scalar() + tweak;
    let secret = SecretKey::from_bytes(&stealth_scalar.to_bytes())
        .map_err(|_| KeyError::DerivationFailed("stealth scalar is zero".to_string()))?;

    let private_key = StealthPrivate::from(secret);
    let public_key = private_key.public();
    let address = public_key.to_address()?;

    Ok(StealthKeyPair {
        private_key,
        public_key,
        address,
    })
}

/// Generate a fresh meta key set for a receiver.
pub fn generate_meta_keys() -> MetaKeys {
    MetaKeys::generate()
}

/// Generate a one-shot ephemeral key pair for a payment.
///
/// A new ephemeral key must be generated for each payment to preserve
/// unlinkability.
pub fn generate_ephemeral_key() -> EphemeralKey {
    EphemeralKey::generate()
}
