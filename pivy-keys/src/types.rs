//! Core key types for PIVY stealth payments.

use k256::elliptic_curve::rand_core::CryptoRngCore;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{ProjectivePoint, Scalar, SecretKey};
use rand::rngs::OsRng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use pivy_address::{derive_account_address, AccountAddress, Secp256k1Public};

use crate::KeyError;

/// A secp256k1 private scalar.
///
/// # Security
/// - Non-zero and below the curve order by construction
/// - The inner `SecretKey` zeroizes its material on drop
/// - Debug output is redacted to prevent key leakage in logs
#[derive(Clone)]
pub struct StealthPrivate(SecretKey);

impl StealthPrivate {
    /// Generate a random private key using the OS CSPRNG.
    pub fn generate() -> Self {
        Self::generate_with_rng(&mut OsRng)
    }

    /// Generate a random private key from the supplied RNG.
    ///
    /// The underlying library rejection-samples uniformly over `[1, n-1]`.
    pub fn generate_with_rng(rng: &mut impl CryptoRngCore) -> Self {
        Self(SecretKey::random(rng))
    }

    /// Create from 32 big-endian bytes.
    ///
    /// Fails on zero and on values not below the curve order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        SecretKey::from_slice(bytes)
            .map(Self)
            .map_err(|_| {
                KeyError::InvalidScalar("zero, above the curve order, or wrong length".to_string())
            })
    }

    /// Get the scalar value.
    pub fn as_scalar(&self) -> Scalar {
        *self.0.to_nonzero_scalar()
    }

    /// Convert to big-endian bytes.
    ///
    /// # Security Warning
    /// The returned bytes contain the private key. Callers must not retain
    /// them longer than necessary.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.0.to_bytes());
        out
    }

    /// Compute the corresponding public key.
    pub fn public(&self) -> StealthPublic {
        StealthPublic::from(self.0.public_key())
    }
}

impl From<SecretKey> for StealthPrivate {
    fn from(secret: SecretKey) -> Self {
        Self(secret)
    }
}

impl std::fmt::Debug for StealthPrivate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StealthPrivate([REDACTED])")
    }
}

/// A compressed secp256k1 public key (33 bytes).
///
/// Serialized as a Base58 string at API boundaries; the public halves of
/// meta keys are shared in this form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StealthPublic([u8; 33]);

impl StealthPublic {
    /// Create from compressed SEC1 bytes, validating the point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() != 33 {
            return Err(KeyError::InvalidKey(format!(
                "expected 33 bytes, got {}",
                bytes.len()
            )));
        }

        let mut arr = [0u8; 33];
        arr.copy_from_slice(bytes);
        let key = Self(arr);
        if !key.is_valid() {
            return Err(KeyError::InvalidPoint);
        }
        Ok(key)
    }

    /// Parse from 66 hex digits, with or without `0x`.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let digits = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        let bytes = hex::decode(digits).map_err(|e| KeyError::InvalidKey(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Parse from a Base58 string.
    pub fn from_base58(b58: &str) -> Result<Self, KeyError> {
        let bytes = bs58::decode(b58)
            .into_vec()
            .map_err(|e| KeyError::InvalidKey(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Get the compressed bytes.
    pub fn as_bytes(&self) -> &[u8; 33] {
        &self.0
    }

    /// Render as a Base58 string.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }

    /// Render as lowercase hex without prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Decompress to a `k256` public key.
    pub fn decompress(&self) -> Option<k256::PublicKey> {
        k256::PublicKey::from_sec1_bytes(&self.0).ok()
    }

    /// Decompress to a curve point for arithmetic.
    pub fn to_point(&self) -> Result<ProjectivePoint, KeyError> {
        self.decompress()
            .map(|key| key.to_projective())
            .ok_or(KeyError::InvalidPoint)
    }

    /// Check whether the bytes decode to a valid curve point.
    pub fn is_valid(&self) -> bool {
        self.decompress().is_some()
    }

    /// Derive the Aptos account address controlled by this key.
    pub fn to_address(&self) -> Result<AccountAddress, KeyError> {
        Ok(derive_account_address(&Secp256k1Public::from_bytes(&self.0)?)?)
    }
}

impl From<k256::PublicKey> for StealthPublic {
    fn from(key: k256::PublicKey) -> Self {
        let encoded = key.to_encoded_point(true);
        let mut arr = [0u8; 33];
        arr.copy_from_slice(encoded.as_bytes());
        Self(arr)
    }
}

impl From<Secp256k1Public> for StealthPublic {
    fn from(key: Secp256k1Public) -> Self {
        Self(*key.as_bytes())
    }
}

impl Serialize for StealthPublic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base58())
    }
}

impl<'de> Deserialize<'de> for StealthPublic {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_base58(&s).map_err(serde::de::Error::custom)
    }
}

/// A view key pair for detecting payments and decrypting notes.
pub struct ViewKeyPair {
    /// Private view key.
    pub private_key: StealthPrivate,
    /// Public view key.
    pub public_key: StealthPublic,
}

impl ViewKeyPair {
    /// Generate a new random view key pair.
    pub fn generate() -> Self {
        Self::from_private(StealthPrivate::generate())
    }

    /// Generate from the supplied RNG.
    pub fn generate_with_rng(rng: &mut impl CryptoRngCore) -> Self {
        Self::from_private(StealthPrivate::generate_with_rng(rng))
    }

    /// Create from a private key.
    pub fn from_private(private_key: StealthPrivate) -> Self {
        let public_key = private_key.public();
        Self {
            private_key,
            public_key,
        }
    }
}

impl std::fmt::Debug for ViewKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewKeyPair")
            .field("public_key", &self.public_key)
            .finish()
    }
}

/// A spend key pair controlling funds at derived stealth addresses.
pub struct SpendKeyPair {
    /// Private spend key.
    pub private_key: StealthPrivate,
    /// Public spend key.
    pub public_key: StealthPublic,
}

impl SpendKeyPair {
    /// Generate a new random spend key pair.
    pub fn generate() -> Self {
        Self::from_private(StealthPrivate::generate())
    }

    /// Generate from the supplied RNG.
    pub fn generate_with_rng(rng: &mut impl CryptoRngCore) -> Self {
        Self::from_private(StealthPrivate::generate_with_rng(rng))
    }

    /// Create from a private key.
    pub fn from_private(private_key: StealthPrivate) -> Self {
        let public_key = private_key.public();
        Self {
            private_key,
            public_key,
        }
    }
}

impl std::fmt::Debug for SpendKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpendKeyPair")
            .field("public_key", &self.public_key)
            .finish()
    }
}

/// A receiver's long-lived meta key set.
///
/// The public halves are shared with payers; the private halves never leave
/// the receiver.
pub struct MetaKeys {
    /// Spend key pair (authorizes spending).
    pub spend: SpendKeyPair,
    /// View key pair (detection and decryption only).
    pub view: ViewKeyPair,
}

impl MetaKeys {
    /// Generate a fresh meta key set.
    pub fn generate() -> Self {
        Self {
            spend: SpendKeyPair::generate(),
            view: ViewKeyPair::generate(),
        }
    }

    /// Generate from the supplied RNG.
    pub fn generate_with_rng(rng: &mut impl CryptoRngCore) -> Self {
        Self {
            spend: SpendKeyPair::generate_with_rng(rng),
            view: ViewKeyPair::generate_with_rng(rng),
        }
    }

    /// Create from existing key pairs.
    pub fn new(spend: SpendKeyPair, view: ViewKeyPair) -> Self {
        Self { spend, view }
    }

    /// Get the public spend key.
    pub fn spend_public(&self) -> &StealthPublic {
        &self.spend.public_key
    }

    /// Get the public view key.
    pub fn view_public(&self) -> &StealthPublic {
        &self.view.public_key
    }
}

impl std::fmt::Debug for MetaKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetaKeys")
            .field("spend", &self.spend)
            .field("view", &self.view)
            .finish()
    }
}

/// A payer's one-shot ephemeral key pair.
///
/// Generated per payment and never reused; the public half is published so
/// the receiver can reconstruct derivations.
pub struct EphemeralKey {
    /// Private ephemeral key.
    pub private_key: StealthPrivate,
    /// Public ephemeral key.
    pub public_key: StealthPublic,
}

impl EphemeralKey {
    /// Generate a new random ephemeral key pair.
    pub fn generate() -> Self {
        Self::from_private(StealthPrivate::generate())
    }

    /// Generate from the supplied RNG.
    pub fn generate_with_rng(rng: &mut impl CryptoRngCore) -> Self {
        Self::from_private(StealthPrivate::generate_with_rng(rng))
    }

    /// Create from a private key.
    pub fn from_private(private_key: StealthPrivate) -> Self {
        let public_key = private_key.public();
        Self {
            private_key,
            public_key,
        }
    }
}

impl std::fmt::Debug for EphemeralKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EphemeralKey")
            .field("public_key", &self.public_key)
            .finish()
    }
}
