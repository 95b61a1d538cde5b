//! Payment Encryption for PIVY
//!
//! This crate encrypts the data that travels alongside a PIVY stealth
//! payment: the payer's ephemeral private key (so the receiver can re-run
//! derivations) and an optional short note.
//!
//! # Overview
//!
//! Both blobs use the same symmetric construction. The key is the ECDH
//! shared key between the payment's ephemeral key and the receiver's
//! meta-view key; blobs are a 24-byte random nonce followed by a keystream
//! XOR of the plaintext. See [`cipher`] for the construction's security
//! properties (confidentiality only, no authentication).
//!
//! # Example
//!
//! ```rust
//! use pivy_crypto::{decrypt_note, encrypt_note};
//! use pivy_keys::{EphemeralKey, MetaKeys};
//!
//! let meta = MetaKeys::generate();
//! let eph = EphemeralKey::generate();
//!
//! let blob = encrypt_note("thanks for lunch", &eph.private_key, meta.view_public()).unwrap();
//! let bytes = decrypt_note(&blob, &meta.view.private_key, &eph.public_key).unwrap();
//!
//! assert_eq!(String::from_utf8(bytes).unwrap(), "thanks for lunch");
//! ```

pub mod cipher;
mod ephemeral;
mod error;
pub mod limits;
mod note;

pub use cipher::NONCE_LEN;
pub use ephemeral::{
    decrypt_ephemeral_key, encrypt_ephemeral_key, encrypt_ephemeral_key_with_rng,
};
pub use error::CryptoError;
pub use limits::{
    check_note_len, check_payload_len, EPH_PUBKEY_LEN, LABEL_LEN, NOTE_MAX_LEN, PAYLOAD_MAX_LEN,
};
pub use note::{decrypt_note, encrypt_note, encrypt_note_with_rng};
