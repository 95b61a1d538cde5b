//! Authentication key derivation for single-key secp256k1 accounts.
//!
//! Aptos derives an account's authentication key by hashing a canonical
//! encoding of its public key together with an auth scheme byte. For
//! single-key secp256k1 accounts the preimage is the BCS encoding of
//! `AnyPublicKey::Secp256k1Ecdsa` followed by the single-key scheme byte:
//!
//! ```text
//! SHA3-256( 0x01 || 0x41 || uncompressed_pubkey(65) || 0x02 )
//! ```
//!
//! This layout must bit-match the Aptos SDK so a key imported there produces
//! the same address.

use sha3::{Digest, Sha3_256};

use crate::{AccountAddress, AddressError, Secp256k1Public};

/// BCS variant index for a secp256k1 ECDSA public key inside `AnyPublicKey`.
pub const SECP256K1_KEY_VARIANT: u8 = 0x01;

/// BCS length prefix of the 65-byte uncompressed public key.
pub const UNCOMPRESSED_KEY_LEN: u8 = 0x41;

/// Authentication scheme byte for unified single-key accounts.
pub const SINGLE_KEY_SCHEME: u8 = 0x02;

/// Derive the 32-byte authentication key for a compressed secp256k1 public key.
///
/// # Arguments
/// * `compressed` - 33-byte compressed SEC1 public key bytes
///
/// # Returns
/// The SHA3-256 authentication key, or an error if the bytes are not a valid
/// curve point.
pub fn derive_authentication_key(compressed: &[u8]) -> Result<[u8; 32], AddressError> {
    let key = Secp256k1Public::from_bytes(compressed)?;
    let uncompressed = key.to_uncompressed()?;

    let mut hasher = Sha3_256::new();
    hasher.update([SECP256K1_KEY_VARIANT, UNCOMPRESSED_KEY_LEN]);
    hasher.update(uncompressed);
    hasher.update([SINGLE_KEY_SCHEME]);
    let digest = hasher.finalize();

    let mut auth_key = [0u8; 32];
    auth_key.copy_from_slice(&digest);
    Ok(auth_key)
}

/// Derive the account address for a compressed secp256k1 public key.
///
/// For single-key accounts the address equals the authentication key.
pub fn derive_account_address(public_key: &Secp256k1Public) -> Result<AccountAddress, AddressError> {
    let auth_key = derive_authentication_key(public_key.as_bytes())?;
    Ok(AccountAddress::new(auth_key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_key() -> Secp256k1Public {
        let secret = k256::SecretKey::from_slice(&[9u8; 32]).unwrap();
        Secp256k1Public::from(secret.public_key())
    }

    #[test]
    fn test_address_deterministic() {
        let key = sample_key();

        let addr1 = derive_account_address(&key).unwrap();
        let addr2 = derive_account_address(&key).unwrap();

        assert_eq!(addr1, addr2);
    }

    #[test]
    fn test_address_matches_manual_preimage() {
        let key = sample_key();
        let uncompressed = key.to_uncompressed().unwrap();

        let mut preimage = Vec::with_capacity(68);
        preimage.push(0x01);
        preimage.push(0x41);
        preimage.extend_from_slice(&uncompressed);
        preimage.push(0x02);
        assert_eq!(preimage.len(), 68);

        let digest = Sha3_256::digest(&preimage);
        let expected = AccountAddress::from_hex(&hex::encode(digest)).unwrap();

        assert_eq!(derive_account_address(&key).unwrap(), expected);
    }

    #[test]
    fn test_different_keys_different_addresses() {
        let key1 = sample_key();
        let secret = k256::SecretKey::from_slice(&[10u8; 32]).unwrap();
        let key2 = Secp256k1Public::from(secret.public_key());

        assert_ne!(
            derive_account_address(&key1).unwrap(),
            derive_account_address(&key2).unwrap()
        );
    }

    #[test]
    fn test_rejects_invalid_key_bytes() {
        assert!(derive_authentication_key(&[0u8; 33]).is_err());
        assert!(derive_authentication_key(&[2u8; 21]).is_err());
    }
}
