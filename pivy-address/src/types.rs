//! Core types for Aptos account addressing.

use k256::elliptic_curve::sec1::ToEncodedPoint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::AddressError;

/// Length of a compressed SEC1 secp256k1 public key.
pub const COMPRESSED_KEY_LEN: usize = 33;

/// Length of an Aptos account address.
pub const ADDRESS_LEN: usize = 32;

/// A 32-byte Aptos account address.
///
/// Rendered as `0x` followed by exactly 64 lowercase hex digits when
/// serialized as text, matching the Aptos SDK convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountAddress([u8; ADDRESS_LEN]);

impl AccountAddress {
    /// Create from raw bytes.
    pub fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Render as `0x`-prefixed lowercase hex.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parse from hex, with or without the `0x` prefix.
    ///
    /// The digits must decode to exactly 32 bytes; short forms are not
    /// zero-extended.
    pub fn from_hex(hex_str: &str) -> Result<Self, AddressError> {
        let digits = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        let bytes = hex::decode(digits).map_err(|e| AddressError::InvalidHex(e.to_string()))?;

        if bytes.len() != ADDRESS_LEN {
            return Err(AddressError::InvalidLength {
                expected: ADDRESS_LEN,
                actual: bytes.len(),
            });
        }

        let mut arr = [0u8; ADDRESS_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl std::fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for AccountAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for AccountAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// A compressed SEC1 secp256k1 public key (33 bytes, leading 0x02 or 0x03).
///
/// Constructors validate that the bytes decode to a point on the curve.
/// Serialized as a Base58 string at API boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Secp256k1Public([u8; COMPRESSED_KEY_LEN]);

impl Secp256k1Public {
    /// Create from compressed SEC1 bytes, validating the point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        if bytes.len() != COMPRESSED_KEY_LEN {
            return Err(AddressError::InvalidLength {
                expected: COMPRESSED_KEY_LEN,
                actual: bytes.len(),
            });
        }

        let mut arr = [0u8; COMPRESSED_KEY_LEN];
        arr.copy_from_slice(bytes);
        let key = Self(arr);
        if !key.is_valid() {
            return Err(AddressError::InvalidPublicKey);
        }
        Ok(key)
    }

    /// Parse from a 66-character hex string, with or without `0x`.
    pub fn from_hex(hex_str: &str) -> Result<Self, AddressError> {
        let digits = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        let bytes = hex::decode(digits).map_err(|e| AddressError::InvalidHex(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Parse from a Base58 string.
    pub fn from_base58(b58: &str) -> Result<Self, AddressError> {
        let bytes = bs58::decode(b58)
            .into_vec()
            .map_err(|e| AddressError::InvalidBase58(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Get the compressed bytes.
    pub fn as_bytes(&self) -> &[u8; COMPRESSED_KEY_LEN] {
        &self.0
    }

    /// Render as a Base58 string (the shareable wire form).
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

    /// Decompress to the 65-byte uncompressed SEC1 form (leading 0x04).
    pub fn to_uncompressed(&self) -> Result<[u8; 65], AddressError> {
        let key = self.decompress().ok_or(AddressError::InvalidPublicKey)?;
        let encoded = key.to_encoded_point(false);
        let mut out = [0u8; 65];
        out.copy_from_slice(encoded.as_bytes());
        Ok(out)
    }

    /// Check whether the bytes decode to a valid curve point.
    pub fn is_valid(&self) -> bool {
        self.decompress().is_some()
    }
}

impl From<k256::PublicKey> for Secp256k1Public {
    fn from(key: k256::PublicKey) -> Self {
        let encoded = key.to_encoded_point(true);
        let mut arr = [0u8; COMPRESSED_KEY_LEN];
        arr.copy_from_slice(encoded.as_bytes());
        Self(arr)
    }
}

impl Serialize for Secp256k1Public {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base58())
    }
}

impl<'de> Deserialize<'de> for Secp256k1Public {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_base58(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_key() -> Secp256k1Public {
        let secret = k256::SecretKey::from_slice(&[7u8; 32]).unwrap();
        Secp256k1Public::from(secret.public_key())
    }

    #[test]
    fn test_address_hex_roundtrip() {
        let address = AccountAddress::new([0xab; 32]);
        let hex = address.to_hex();

        assert!(hex.starts_with("0x"));
        assert_eq!(hex.len(), 66);

        let recovered = AccountAddress::from_hex(&hex).unwrap();
        assert_eq!(address, recovered);

        // Also accepted without the prefix
        let recovered = AccountAddress::from_hex(hex.trim_start_matches("0x")).unwrap();
        assert_eq!(address, recovered);
    }

    #[test]
    fn test_address_rejects_wrong_length() {
        assert!(AccountAddress::from_hex("0xabcd").is_err());
        assert!(AccountAddress::from_hex("").is_err());
    }

    #[test]
    fn test_public_key_base58_roundtrip() {
        let key = sample_key();
        let b58 = key.to_base58();
        let recovered = Secp256k1Public::from_base58(&b58).unwrap();

        assert_eq!(key, recovered);
    }

    #[test]
    fn test_public_key_hex_roundtrip() {
        let key = sample_key();
        let recovered = Secp256k1Public::from_hex(&key.to_hex()).unwrap();

        assert_eq!(key, recovered);
    }

    #[test]
    fn test_public_key_rejects_bad_bytes() {
        // Wrong length
        assert!(Secp256k1Public::from_bytes(&[2u8; 32]).is_err());
        // X-coordinate not below the field modulus
        let mut oversized = [0xffu8; 33];
        oversized[0] = 0x02;
        assert!(Secp256k1Public::from_bytes(&oversized).is_err());
        // Bad SEC1 tag
        let mut bytes = *sample_key().as_bytes();
        bytes[0] = 0x05;
        assert!(Secp256k1Public::from_bytes(&bytes).is_err());
    }

    #[test]
    fn test_uncompressed_form() {
        let key = sample_key();
        let uncompressed = key.to_uncompressed().unwrap();

        assert_eq!(uncompressed[0], 0x04);
        // X coordinate matches the compressed encoding
        assert_eq!(&uncompressed[1..33], &key.as_bytes()[1..33]);
    }

    #[test]
    fn test_serde_boundary_forms() {
        let key = sample_key();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, format!("\"{}\"", key.to_base58()));

        let address = AccountAddress::new([1u8; 32]);
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"{}\"", address.to_hex()));
    }
}
