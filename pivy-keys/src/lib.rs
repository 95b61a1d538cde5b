//! Stealth Key Derivation for PIVY
//!
//! This crate implements the stealth-address key system used by PIVY for
//! privacy-preserving payments on Aptos.
//!
//! # Overview
//!
//! A receiver publishes two long-lived secp256k1 "meta" public keys:
//! - **Meta-spend key**: its private half authorizes spending from every
//!   stealth address derived for this receiver
//! - **Meta-view key**: its private half detects incoming payments and
//!   decrypts attached notes, without spend authority
//!
//! For each payment the payer generates a one-shot ephemeral key and derives
//! a fresh unlinkable address:
//!
//! ```text
//! P = S + H(ECDH(e, V)_x)*G
//! ```
//! Where:
//! - `e` = the payer's ephemeral private key
//! - `V` = the receiver's public meta-view key
//! - `S` = the receiver's public meta-spend key
//! - `G` = the secp256k1 generator
//! - `H` = SHA-256, reduced mod the curve order
//!
//! The receiver recovers the matching private key as
//! `k = (s + H(ECDH(v, E)_x)) mod n` and both sides map the key through the
//! Aptos single-key secp256k1 scheme to the same account address.
//!
//! # Example
//!
//! ```rust
//! use pivy_keys::{derive_stealth_keypair, derive_stealth_public, EphemeralKey, MetaKeys};
//!
//! // Receiver's long-lived keys
//! let meta = MetaKeys::generate();
//!
//! // Payer derives a fresh address for one payment
//! let eph = EphemeralKey::generate();
//! let payment =
//!     derive_stealth_public(meta.spend_public(), meta.view_public(), &eph.private_key).unwrap();
//!
//! // Receiver reconstructs the keypair controlling it
//! let keys = derive_stealth_keypair(
//!     &meta.spend.private_key,
//!     &meta.view.private_key,
//!     &eph.public_key,
//! )
//! .unwrap();
//!
//! assert_eq!(payment.address, keys.address);
//! ```

mod codec;
mod derivation;
mod detection;
mod error;
mod shared_secret;
mod types;

pub use codec::{
    encode_label, normalize_32, normalize_32_bytes, normalize_point, normalize_point_bytes,
    LABEL_LEN,
};
pub use derivation::{
    derive_stealth_keypair, derive_stealth_public, derive_stealth_public_as_receiver,
    generate_ephemeral_key, generate_meta_keys, StealthKeyPair, StealthPaymentInfo,
};
pub use detection::{
    check_payment_ownership, scan_announcements, DetectedPayment, PaymentAnnouncement,
};
pub use error::KeyError;
pub use shared_secret::{derive_tweak, shared_key, shared_point};
pub use types::{EphemeralKey, MetaKeys, SpendKeyPair, StealthPrivate, StealthPublic, ViewKeyPair};
