//! Key material normalization at untyped boundaries.
//!
//! Host applications hand this library key material as raw bytes, hex, or
//! Base58. The typed constructors on [`StealthPrivate`](crate::StealthPrivate)
//! and [`StealthPublic`](crate::StealthPublic) are preferred; these helpers
//! exist for the outermost API layer where the shape is not known up front.

use crate::KeyError;

/// Fixed width of on-chain label fields.
pub const LABEL_LEN: usize = 32;

/// Normalize a key string to canonical 32 bytes.
///
/// A 64-character hex string (either case) is hex-decoded; anything else is
/// treated as Base58. The decoded result must be exactly 32 bytes. A 33-byte
/// decode is a compressed point and belongs to [`normalize_point`]; it is
/// rejected here rather than truncated.
pub fn normalize_32(input: &str) -> Result<[u8; 32], KeyError> {
    let bytes = decode_flexible(input)?;

    match bytes.len() {
        32 => {
            let mut out = [0u8; 32];
            out.copy_from_slice(&bytes);
            Ok(out)
        }
        33 => Err(KeyError::InvalidKey(
            "got a 33-byte compressed point where a 32-byte scalar was expected".to_string(),
        )),
        other => Err(KeyError::InvalidKey(format!(
            "expected 32 bytes, got {}",
            other
        ))),
    }
}

/// Normalize raw bytes to canonical 32 bytes.
///
/// Only exactly 32 bytes pass through; there is no truncation or padding.
pub fn normalize_32_bytes(bytes: &[u8]) -> Result<[u8; 32], KeyError> {
    if bytes.len() != 32 {
        return Err(KeyError::InvalidKey(format!(
            "expected 32 bytes, got {}",
            bytes.len()
        )));
    }
    let mut out = [0u8; 32];
    out.copy_from_slice(bytes);
    Ok(out)
}

/// Normalize a compressed-point string to canonical 33 bytes.
///
/// Accepts 66 hex digits or Base58; the result must decode to a point on the
/// curve.
pub fn normalize_point(input: &str) -> Result<[u8; 33], KeyError> {
    let bytes = decode_flexible(input)?;
    normalize_point_bytes(&bytes)
}

/// Normalize raw bytes to a canonical 33-byte compressed point.
pub fn normalize_point_bytes(bytes: &[u8]) -> Result<[u8; 33], KeyError> {
    let key = crate::StealthPublic::from_bytes(bytes)?;
    Ok(*key.as_bytes())
}

/// Encode a label to the fixed 32-byte on-chain field.
///
/// UTF-8 bytes, right-zero-padded; anything past 32 bytes is silently
/// truncated to match the on-chain event schema.
pub fn encode_label(label: &str) -> [u8; LABEL_LEN] {
    let mut out = [0u8; LABEL_LEN];
    let bytes = label.as_bytes();
    let take = bytes.len().min(LABEL_LEN);
    out[..take].copy_from_slice(&bytes[..take]);
    out
}

/// Decode hex when the shape says hex, otherwise Base58.
fn decode_flexible(input: &str) -> Result<Vec<u8>, KeyError> {
    if input.is_empty() {
        return Err(KeyError::InvalidKey("empty input".to_string()));
    }

    let digits = input.strip_prefix("0x").unwrap_or(input);
    let hex_shaped = matches!(digits.len(), 64 | 66) && digits.chars().all(|c| c.is_ascii_hexdigit());
    if hex_shaped {
        return hex::decode(digits).map_err(|e| KeyError::InvalidKey(e.to_string()));
    }

    bs58::decode(input)
        .into_vec()
        .map_err(|e| KeyError::InvalidKey(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StealthPrivate;

    #[test]
    fn test_normalize_hex() {
        let bytes = [0x42u8; 32];

        assert_eq!(normalize_32(&hex::encode(bytes)).unwrap(), bytes);
        assert_eq!(
            normalize_32(&hex::encode(bytes).to_uppercase()).unwrap(),
            bytes
        );
    }

    #[test]
    fn test_normalize_base58() {
        let bytes = [0x42u8; 32];
        let b58 = bs58::encode(bytes).into_string();

        assert_eq!(normalize_32(&b58).unwrap(), bytes);
    }

    #[test]
    fn test_normalize_rejects_bad_shapes() {
        // Empty
        assert!(normalize_32("").is_err());
        // 63-char hex is not hex-shaped and fails Base58 length
        assert!(normalize_32(&"a".repeat(63)).is_err());
        // 64 chars of valid Base58 alphabet decode to the wrong length
        assert!(normalize_32(&"z".repeat(64)).is_err());
        // Base58 of 31 bytes
        assert!(normalize_32(&bs58::encode([1u8; 31]).into_string()).is_err());
    }

    #[test]
    fn test_normalize_rejects_point_where_scalar_expected() {
        let public = StealthPrivate::generate().public();

        let err = normalize_32(&public.to_base58()).unwrap_err();
        assert!(err.to_string().contains("compressed point"));
    }

    #[test]
    fn test_normalize_bytes() {
        assert_eq!(normalize_32_bytes(&[7u8; 32]).unwrap(), [7u8; 32]);
        assert!(normalize_32_bytes(&[7u8; 31]).is_err());
        assert!(normalize_32_bytes(&[7u8; 33]).is_err());
        assert!(normalize_32_bytes(&[]).is_err());
    }

    #[test]
    fn test_normalize_point_roundtrip() {
        let public = StealthPrivate::generate().public();

        assert_eq!(&normalize_point(&public.to_base58()).unwrap(), public.as_bytes());
        assert_eq!(&normalize_point(&public.to_hex()).unwrap(), public.as_bytes());
        assert_eq!(
            &normalize_point_bytes(public.as_bytes()).unwrap(),
            public.as_bytes()
        );
    }

    #[test]
    fn test_normalize_point_rejects_off_curve() {
        let mut oversized = [0xffu8; 33];
        oversized[0] = 0x02;

        assert!(normalize_point_bytes(&oversized).is_err());
        assert!(normalize_point(&bs58::encode(oversized).into_string()).is_err());
    }

    #[test]
    fn test_encode_label_pads_and_truncates() {
        let short = encode_label("pivy");
        assert_eq!(&short[..4], b"pivy");
        assert_eq!(&short[4..], &[0u8; 28]);

        let long = encode_label(&"x".repeat(40));
        assert_eq!(long, [b'x'; 32]);

        assert_eq!(encode_label(""), [0u8; 32]);
    }
}
