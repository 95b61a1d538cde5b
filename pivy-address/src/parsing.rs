//! Key and address parsing from strings.

use crate::{AccountAddress, AddressError, Secp256k1Public, COMPRESSED_KEY_LEN};

/// Hex length of a compressed public key without prefix.
const COMPRESSED_HEX_LEN: usize = COMPRESSED_KEY_LEN * 2; // 66 chars

/// Parse a compressed secp256k1 public key from a string.
///
/// Accepts either 66 hex digits (with or without `0x`) or a Base58 string.
/// Anything else is rejected; there is no silent truncation or padding.
///
/// # Example
/// ```rust
/// use pivy_address::parse_public_key;
///
/// let key = parse_public_key("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");
/// assert!(key.is_ok());
/// ```
pub fn parse_public_key(input: &str) -> Result<Secp256k1Public, AddressError> {
    let digits = input.strip_prefix("0x").unwrap_or(input);

    if digits.len() == COMPRESSED_HEX_LEN && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Secp256k1Public::from_hex(digits);
    }

    Secp256k1Public::from_base58(input)
}

/// Parse an Aptos account address from its hex form.
///
/// The address must be exactly 64 hex digits, with or without the `0x`
/// prefix.
pub fn parse_account_address(input: &str) -> Result<AccountAddress, AddressError> {
    AccountAddress::from_hex(input)
}
