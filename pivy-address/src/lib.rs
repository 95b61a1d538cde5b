//! Aptos Account Addressing for PIVY
//!
//! This crate maps secp256k1 public keys to Aptos account addresses using
//! the unified single-key authentication scheme, and provides parsing and
//! validation for the key and address encodings PIVY uses on the wire.
//!
//! # Overview
//!
//! Every stealth payment lands at a fresh Aptos account whose address is
//! derived from a secp256k1 public key:
//!
//! ```text
//! address = SHA3-256( 0x01 || 0x41 || uncompressed_pubkey || 0x02 )
//! ```
//!
//! The preimage is the BCS encoding of the unified `AnyPublicKey` wrapper
//! followed by the single-key scheme byte, so addresses derived here
//! bit-match the Aptos SDK.
//!
//! # Example
//!
//! ```rust
//! use pivy_address::{derive_account_address, Secp256k1Public};
//!
//! let secret = k256::SecretKey::from_slice(&[7u8; 32]).unwrap();
//! let public = Secp256k1Public::from(secret.public_key());
//!
//! let address = derive_account_address(&public).unwrap();
//! assert!(address.to_hex().starts_with("0x"));
//! ```

mod auth_key;
mod error;
mod parsing;
mod types;
mod validation;

pub use auth_key::{
    derive_account_address, derive_authentication_key, SECP256K1_KEY_VARIANT, SINGLE_KEY_SCHEME,
    UNCOMPRESSED_KEY_LEN,
};
pub use error::AddressError;
pub use parsing::{parse_account_address, parse_public_key};
pub use types::{AccountAddress, Secp256k1Public, ADDRESS_LEN, COMPRESSED_KEY_LEN};
pub use validation::{validate_address, validate_public_key, ValidationResult};
