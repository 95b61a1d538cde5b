//! Non-panicking validators for untyped boundaries.

use crate::parsing::{parse_account_address, parse_public_key};

/// Result of validating an untyped key or address string.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the input is valid.
    pub is_valid: bool,
    /// Validation messages (warnings or errors).
    pub messages: Vec<String>,
}

impl ValidationResult {
    /// Create a valid result.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            messages: vec![],
        }
    }

    /// Create an invalid result with an error message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            messages: vec![message.into()],
        }
    }
}

/// Validate that a string parses as a compressed secp256k1 public key.
///
/// Never returns an error; failures are reported through the result so
/// callers at UI boundaries can surface them directly.
pub fn validate_public_key(input: &str) -> ValidationResult {
    match parse_public_key(input) {
        Ok(_) => ValidationResult::valid(),
        Err(e) => ValidationResult::invalid(e.to_string()),
    }
}

/// Validate that a string parses as an Aptos account address.
pub fn validate_address(input: &str) -> ValidationResult {
    match parse_account_address(input) {
        Ok(_) => ValidationResult::valid(),
        Err(e) => ValidationResult::invalid(e.to_string()),
    }
}
