//! Payment detection for receivers.
//!
//! Scanning the chain is a client concern; these primitives answer the one
//! question a scanner needs per announcement: is this payment mine, and if
//! so, which keypair spends it.

use serde::{Deserialize, Serialize};

use pivy_address::AccountAddress;

use crate::derivation::{derive_stealth_keypair, derive_stealth_public_as_receiver, StealthKeyPair};
use crate::{StealthPrivate, StealthPublic};

/// The public fields of an on-chain payment announcement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentAnnouncement {
    /// The payer's published ephemeral public key.
    pub eph_public: StealthPublic,
    /// The stealth address the payment was sent to.
    pub address: AccountAddress,
}

/// A detected payment together with the keypair that spends it.
#[derive(Debug)]
pub struct DetectedPayment {
    /// Index of the announcement in the scanned batch.
    pub index: usize,
    /// The full stealth keypair for this payment.
    pub keys: StealthKeyPair,
}

/// Check whether a single announcement belongs to a receiver.
///
/// Recomputes the stealth address from the receiver's view private key and
/// public spend key; spend authority is not required. Malformed announcement
/// keys simply fail to match.
pub fn check_payment_ownership(
    eph_public: &StealthPublic,
    view_private: &StealthPrivate,
    spend_public: &StealthPublic,
    expected_address: &AccountAddress,
) -> bool {
    match derive_stealth_public_as_receiver(spend_public, view_private, eph_public) {
        Ok(info) => info.address == *expected_address,
        Err(_) => false,
    }
}

/// Scan a batch of announcements, deriving the spending keypair for each hit.
///
/// # Arguments
/// * `announcements` - Announcements in chain order
/// * `view_private` - The receiver's meta-view private key
/// * `spend_public` - The receiver's public meta-spend key
/// * `spend_private` - The receiver's meta-spend private key
pub fn scan_announcements(
    announcements: &[PaymentAnnouncement],
    view_private: &StealthPrivate,
    spend_public: &StealthPublic,
    spend_private: &StealthPrivate,
) -> Vec<DetectedPayment> {
    let mut detected = Vec::new();

    for (index, announcement) in announcements.iter().enumerate() {
        if !check_payment_ownership(
            &announcement.eph_public,
            view_private,
            spend_public,
            &announcement.address,
        ) {
            continue;
        }

        if let Ok(keys) =
            derive_stealth_keypair(spend_private, view_private, &announcement.eph_public)
        {
            detected.push(DetectedPayment { index, keys });
        }
    }

    detected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derivation::derive_stealth_public;
    use crate::{EphemeralKey, MetaKeys};

    fn announce_to(meta: &MetaKeys) -> (PaymentAnnouncement, EphemeralKey) {
        let eph = EphemeralKey::generate();
        let info =
            derive_stealth_public(meta.spend_public(), meta.view_public(), &eph.private_key)
                .unwrap();
        (
            PaymentAnnouncement {
                eph_public: eph.public_key,
                address: info.address,
            },
            eph,
        )
    }

    #[test]
    fn test_detects_own_payment() {
        let meta = MetaKeys::generate();
        let (announcement, _) = announce_to(&meta);

        assert!(check_payment_ownership(
            &announcement.eph_public,
            &meta.view.private_key,
            meta.spend_public(),
            &announcement.address,
        ));
    }

    #[test]
    fn test_ignores_other_receivers_payment() {
        let meta = MetaKeys::generate();
        let other = MetaKeys::generate();
        let (announcement, _) = announce_to(&other);

        assert!(!check_payment_ownership(
            &announcement.eph_public,
            &meta.view.private_key,
            meta.spend_public(),
            &announcement.address,
        ));
    }

    #[test]
    fn test_scan_finds_only_own_payments() {
        let meta = MetaKeys::generate();
        let other = MetaKeys::generate();

        let (mine1, _) = announce_to(&meta);
        let (theirs, _) = announce_to(&other);
        let (mine2, _) = announce_to(&meta);

        let announcements = vec![mine1.clone(), theirs, mine2.clone()];

        let detected = scan_announcements(
            &announcements,
            &meta.view.private_key,
            meta.spend_public(),
            &meta.spend.private_key,
        );

        assert_eq!(detected.len(), 2);
        assert_eq!(detected[0].index, 0);
        assert_eq!(detected[1].index, 2);

        // Each detected keypair actually controls its announced address
        assert_eq!(detected[0].keys.address, mine1.address);
        assert_eq!(detected[1].keys.address, mine2.address);
        assert_eq!(
            detected[0].keys.private_key.public(),
            detected[0].keys.public_key
        );
    }

    #[test]
    fn test_scan_empty_batch() {
        let meta = MetaKeys::generate();

        let detected = scan_announcements(
            &[],
            &meta.view.private_key,
            meta.spend_public(),
            &meta.spend.private_key,
        );

        assert!(detected.is_empty());
    }
}
