//! ECDH shared secrets and tweak scalars.

use k256::elliptic_curve::ops::Reduce;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::elliptic_curve::Field;
use k256::{FieldBytes, Scalar, U256};
use sha2::{Digest, Sha256};

use crate::{KeyError, StealthPrivate, StealthPublic};

/// Compute the compressed ECDH shared point for one side of an exchange.
///
/// ```text
/// S = priv * Pub
/// ```
///
/// Commutative in its two sides: `ECDH(e, V) == ECDH(v, E)`.
pub fn shared_point(
    private: &StealthPrivate,
    public: &StealthPublic,
) -> Result<[u8; 33], KeyError> {
    let point = public.to_point()?;
    let shared = (point * private.as_scalar()).to_affine();

    // A non-zero scalar times a prime-order point is never the identity;
    // from_affine re-checks the invariant.
    let shared = k256::PublicKey::from_affine(shared).map_err(|_| KeyError::InvalidPoint)?;

    let encoded = shared.to_encoded_point(true);
    let mut out = [0u8; 33];
    out.copy_from_slice(encoded.as_bytes());
    Ok(out)
}

/// Derive the 32-byte symmetric key for a key triple.
///
/// The key is `SHA-256(X)` where `X` is the shared point's X-coordinate
/// (the SEC1 compression byte is dropped before hashing). The same bytes,
/// reduced mod n, serve as the stealth tweak.
pub fn shared_key(private: &StealthPrivate, public: &StealthPublic) -> Result<[u8; 32], KeyError> {
    let point = shared_point(private, public)?;

    let digest = Sha256::digest(&point[1..33]);
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    Ok(out)
}

/// Derive the stealth tweak scalar for a key triple.
///
/// ```text
/// t = int(SHA-256(ECDH_x)) mod n
/// ```
///
/// A zero reduction (negligible probability) is rejected so the caller can
/// regenerate the ephemeral key.
pub fn derive_tweak(
    private: &StealthPrivate,
    public: &StealthPublic,
) -> Result<Scalar, KeyError> {
    let key = shared_key(private, public)?;
    let tweak = <Scalar as Reduce<U256>>::reduce_bytes(&FieldBytes::from(key));

    if bool::from(tweak.is_zero()) {
        return Err(KeyError::DerivationFailed("tweak reduced to zero".to_string()));
    }
    Ok(tweak)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_point_symmetry() {
        let alice = StealthPrivate::generate();
        let bob = StealthPrivate::generate();

        let alice_side = shared_point(&alice, &bob.public()).unwrap();
        let bob_side = shared_point(&bob, &alice.public()).unwrap();

        assert_eq!(alice_side, bob_side);
    }

    #[test]
    fn test_shared_key_symmetry() {
        let alice = StealthPrivate::generate();
        let bob = StealthPrivate::generate();

        assert_eq!(
            shared_key(&alice, &bob.public()).unwrap(),
            shared_key(&bob, &alice.public()).unwrap()
        );
    }

    #[test]
    fn test_shared_key_is_hash_of_x() {
        let alice = StealthPrivate::generate();
        let bob = StealthPrivate::generate();

        let point = shared_point(&alice, &bob.public()).unwrap();
        let key = shared_key(&alice, &bob.public()).unwrap();

        let expected = Sha256::digest(&point[1..33]);
        assert_eq!(key, expected.as_slice());
    }

    #[test]
    fn test_tweak_symmetry() {
        let eph = StealthPrivate::generate();
        let view = StealthPrivate::generate();

        let payer_tweak = derive_tweak(&eph, &view.public()).unwrap();
        let receiver_tweak = derive_tweak(&view, &eph.public()).unwrap();

        assert_eq!(payer_tweak, receiver_tweak);
    }

    #[test]
    fn test_different_pairs_different_secrets() {
        let alice = StealthPrivate::generate();
        let bob = StealthPrivate::generate();
        let carol = StealthPrivate::generate();

        assert_ne!(
            shared_key(&alice, &bob.public()).unwrap(),
            shared_key(&alice, &carol.public()).unwrap()
        );
    }

    #[test]
    fn test_deterministic() {
        let alice = StealthPrivate::from_bytes(&[1u8; 32]).unwrap();
        let bob = StealthPrivate::from_bytes(&[2u8; 32]).unwrap();

        let key1 = shared_key(&alice, &bob.public()).unwrap();
        let key2 = shared_key(&alice, &bob.public()).unwrap();

        assert_eq!(key1, key2);
    }
}
